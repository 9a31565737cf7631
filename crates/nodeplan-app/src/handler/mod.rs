//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `fields`: Common and variant-specific field edits
//! - `name`: Debounced name normalization and availability checks
//! - `submit`: Validation and output record assembly

pub(crate) mod fields;
pub(crate) mod name;
pub(crate) mod submit;
pub(crate) mod update;

#[cfg(test)]
mod tests;

use std::time::Duration;

use nodeplan_core::Node;

use crate::message::Message;
use crate::state::EditSession;

// Re-export main entry point
pub use submit::{assemble, validate};
pub use update::update;

/// Message shown when a submit is rejected
pub const REQUIRED_FIELDS_MESSAGE: &str = "Please fill in required fields";

/// Actions that the dialog loop should perform after update
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateAction {
    /// Fetch the node list, then the action-type catalog (plus the edited
    /// node's predecessors and timer trigger in edit mode)
    LoadLookups { editing: Option<Box<Node>> },

    /// Wake the session with `NameSettled` once the debounce window passes
    ScheduleNameSettle { generation: u64, delay: Duration },

    /// Ask the directory whether `name` is taken
    CheckName { generation: u64, name: String },

    /// Show a transient notification
    Notify { message: String, duration_ms: u64 },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the dialog loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}

/// The action that starts a freshly opened session
pub fn initialize(session: &EditSession) -> UpdateAction {
    UpdateAction::LoadLookups {
        editing: session.original().cloned().map(Box::new),
    }
}

/// Notification for a rejected submit
pub(crate) fn notify_required(session: &EditSession) -> UpdateResult {
    UpdateResult::action(UpdateAction::Notify {
        message: REQUIRED_FIELDS_MESSAGE.to_string(),
        duration_ms: session.settings.notification_duration_ms,
    })
}
