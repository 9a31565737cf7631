//! Main update function - handles state transitions (TEA pattern)

use tracing::{debug, trace};

use crate::message::{DialogInput, Message};
use crate::state::{DialogOutcome, EditSession, SessionPhase};

use super::{fields, name, submit, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(session: &mut EditSession, message: Message) -> UpdateResult {
    if session.is_closed() {
        trace!("Session closed, dropping {:?}", message);
        return UpdateResult::none();
    }

    match message {
        Message::Input(input) => handle_input(session, input),

        // ─────────────────────────────────────────────────────────
        // Background Task Results
        // ─────────────────────────────────────────────────────────
        Message::LookupsLoaded(lookups) => {
            if session.phase != SessionPhase::Initializing {
                debug!("Lookups arrived in {:?}, ignoring", session.phase);
                return UpdateResult::none();
            }
            debug!(
                "Lookups loaded: {} nodes, {} action types",
                lookups.nodes.len(),
                lookups.action_types.len()
            );
            session.apply_lookups(*lookups);
            session.phase = SessionPhase::Ready;
            UpdateResult::none()
        }

        Message::NameSettled { generation } => name::handle_name_settled(session, generation),

        Message::NameCheckCompleted {
            generation,
            name,
            result,
        } => name::handle_name_check_completed(session, generation, name, result),
    }
}

fn handle_input(session: &mut EditSession, input: DialogInput) -> UpdateResult {
    match input {
        DialogInput::Name(value) => name::handle_name_input(session, value),
        DialogInput::Submit => submit::handle_submit(session),
        DialogInput::Cancel => {
            debug!("Edit session cancelled");
            session.close(DialogOutcome::Cancelled);
            UpdateResult::none()
        }
        other => fields::handle_field_edit(session, other),
    }
}
