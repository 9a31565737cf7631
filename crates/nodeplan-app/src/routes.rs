//! Product-area page routes

use std::fmt;

/// Dashboard pages reachable in the product area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Products,
    ProductDashboard,
    ReleasePlanDashboard,
    NodeDashboard,
}

impl Page {
    pub fn name(&self) -> &'static str {
        match self {
            Page::Products => "Products",
            Page::ProductDashboard => "ProductDashboard",
            Page::ReleasePlanDashboard => "ReleasePlanDashboard",
            Page::NodeDashboard => "NodeDashboard",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

const ROUTES: &[(&str, Page)] = &[
    ("", Page::Products),
    ("products", Page::Products),
    ("productdashboard", Page::ProductDashboard),
    ("releaseplandashboard", Page::ReleasePlanDashboard),
    ("nodedashboard", Page::NodeDashboard),
];

/// The routing table, in declaration order
pub fn routes() -> &'static [(&'static str, Page)] {
    ROUTES
}

/// Resolve a path (surrounding slashes ignored) to its page
pub fn resolve(path: &str) -> Option<Page> {
    let path = path.trim_matches('/');
    ROUTES
        .iter()
        .find(|(route, _)| *route == path)
        .map(|(_, page)| *page)
}
