//! Collaborator contracts consumed by the edit dialog
//!
//! - [`NodeDirectory`] - node list, name availability, predecessor and id lookups
//! - [`ActionTypeCatalog`] - allowed action types
//! - [`Notifier`] - transient user messages
//! - [`DiagnosticSink`] - failure and phase reporting, no-op by default

pub mod catalog;
pub mod diagnostics;
pub mod directory;
pub mod notifier;

use std::sync::Arc;

pub use catalog::{ActionTypeCatalog, LocalActionTypeCatalog, StaticCatalog};
pub use diagnostics::{Diagnostic, DiagnosticSink, NoopDiagnostics, TracingDiagnostics};
pub use directory::{InMemoryDirectory, LocalNodeDirectory, NodeDirectory};
pub use notifier::{Notifier, TracingNotifier};

/// The collaborators one dialog talks to
pub struct Services<D, C> {
    pub directory: Arc<D>,
    pub catalog: Arc<C>,
    pub notifier: Arc<dyn Notifier>,
    pub diagnostics: Arc<dyn DiagnosticSink>,
}

impl<D, C> Services<D, C> {
    pub fn new(directory: D, catalog: C, notifier: impl Notifier + 'static) -> Self {
        Self {
            directory: Arc::new(directory),
            catalog: Arc::new(catalog),
            notifier: Arc::new(notifier),
            diagnostics: Arc::new(NoopDiagnostics),
        }
    }

    pub fn with_diagnostics(mut self, diagnostics: impl DiagnosticSink + 'static) -> Self {
        self.diagnostics = Arc::new(diagnostics);
        self
    }
}

impl<D, C> Clone for Services<D, C> {
    fn clone(&self) -> Self {
        Self {
            directory: Arc::clone(&self.directory),
            catalog: Arc::clone(&self.catalog),
            notifier: Arc::clone(&self.notifier),
            diagnostics: Arc::clone(&self.diagnostics),
        }
    }
}
