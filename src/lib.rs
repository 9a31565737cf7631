//! nodeplan library
//!
//! Hosts the headless runner behind the `nodeplan` binary. The dialog itself
//! lives in `nodeplan-app`; shared types live in `nodeplan-core`.

pub mod headless;

// Re-export main entry points
pub use headless::{run_edit, EditOptions};
