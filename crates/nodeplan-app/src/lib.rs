//! nodeplan-app - Node edit dialog state and orchestration
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the plan
//! node create/edit dialog: form state, per-type sub-editors, the debounced
//! name availability check, submit assembly, the collaborator service traits,
//! configuration loading, and the product-area routing table.

pub mod actions;
pub mod config;
pub mod dialog;
pub mod editors;
pub mod form;
pub mod handler;
pub mod message;
pub mod name_check;
pub mod routes;
pub mod services;
pub mod state;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

// Re-export primary types
pub use dialog::NodeEditDialog;
pub use form::{NodeForm, ValidationError};
pub use handler::{UpdateAction, UpdateResult, REQUIRED_FIELDS_MESSAGE};
pub use message::{DialogInput, Lookups, Message};
pub use name_check::{NameCheck, NameStatus};
pub use routes::Page;
pub use services::Services;
pub use state::{DialogOutcome, EditMode, EditSession, SessionPhase};
