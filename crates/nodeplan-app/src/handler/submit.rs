//! Submit handling: validation and output record assembly

use tracing::{debug, info};

use nodeplan_core::{assemble_node_id, Node, NodeKind, NodeType};

use crate::form::ValidationError;
use crate::state::{DialogOutcome, EditMode, EditSession, SessionPhase};

use super::{notify_required, UpdateResult};

pub(crate) fn handle_submit(session: &mut EditSession) -> UpdateResult {
    if session.phase != SessionPhase::Ready {
        debug!("Submit while {:?}, rejecting", session.phase);
        return notify_required(session);
    }

    let errors = validate(session);
    if !errors.is_empty() {
        debug!("Submit rejected: {:?}", errors);
        return notify_required(session);
    }

    session.phase = SessionPhase::Submitting;
    match assemble(session) {
        Ok(node) => {
            info!("Submitting {} node {}", node.node_type(), node.id);
            session.close(DialogOutcome::Submitted(node));
            UpdateResult::none()
        }
        Err(e) => {
            debug!("Submit rejected during assembly: {}", e);
            session.phase = SessionPhase::Ready;
            notify_required(session)
        }
    }
}

/// Everything that currently blocks a submit
pub fn validate(session: &EditSession) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if !session.form.name_disabled {
        if session.form.name.is_empty() {
            errors.push(ValidationError::Required { field: "name" });
        } else if session.name_check.is_pending() {
            errors.push(ValidationError::NameCheckPending);
        } else if session.name_check.is_taken() {
            errors.push(ValidationError::NameTaken);
        }
    }

    if let Some(error) = session
        .form
        .validate_description(session.settings.description_min_len)
    {
        errors.push(error);
    }

    if session.editor.value().is_none() {
        errors.push(ValidationError::MissingLinkTarget);
    }

    errors
}

/// Build the output record from the form and the active sub-editor
///
/// Edit mode keeps the original id, name and self link. Create mode derives
/// the id from parent, type tag and upper-cased name. LinkPoints never carry
/// predecessors.
pub fn assemble(session: &EditSession) -> Result<Node, ValidationError> {
    let kind = session
        .editor
        .value()
        .ok_or(ValidationError::MissingLinkTarget)?;
    let node_type = kind.node_type();

    let (id, name, self_link) = match &session.mode {
        EditMode::Edit(original) => (
            original.id.clone(),
            original.name.clone(),
            original.self_link.clone(),
        ),
        EditMode::Create => {
            let name = session.form.name.to_uppercase();
            (
                assemble_node_id(&session.parent_id, node_type, &name),
                name,
                String::new(),
            )
        }
    };

    let predecessors = match node_type {
        NodeType::LinkPoint => Vec::new(),
        NodeType::Milestone | NodeType::Action => session.form.predecessors.clone(),
    };

    let kind = match (kind, session.original().and_then(Node::as_milestone)) {
        // Spanning predecessors belong to the graph services; carry them over.
        (NodeKind::Milestone(mut details), Some(original)) => {
            details.spanning_predecessors = original.spanning_predecessors.clone();
            NodeKind::Milestone(details)
        }
        (kind, _) => kind,
    };

    Ok(Node {
        id,
        parent_id: session.parent_id.clone(),
        name,
        description: session.form.description.clone(),
        self_link,
        predecessors,
        timer_duration_minutes: session.form.timer_duration_minutes,
        timer_trigger: session.form.timer_trigger.clone(),
        kind,
    })
}
