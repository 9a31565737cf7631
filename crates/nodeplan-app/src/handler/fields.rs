//! Field edit handlers

use tracing::debug;

use crate::editors::VariantEditor;
use crate::message::DialogInput;
use crate::state::EditSession;

use super::UpdateResult;

/// Apply a non-name field edit to the form or the active sub-editor
pub(crate) fn handle_field_edit(session: &mut EditSession, input: DialogInput) -> UpdateResult {
    match input {
        DialogInput::Description(value) => {
            session.form.description = value;
        }

        DialogInput::NodeType(node_type) => {
            if session.form.node_type_disabled {
                debug!("Node type is locked in edit mode, ignoring change to {}", node_type);
            } else if node_type != session.form.node_type {
                session.form.node_type = node_type;
                session.editor = VariantEditor::for_type(node_type, &session.candidates);
            }
        }

        DialogInput::TimerDurationMinutes(minutes) => {
            session.form.timer_duration_minutes = minutes;
        }

        DialogInput::TimerTrigger(None) => {
            session.form.timer_trigger = None;
        }

        DialogInput::TimerTrigger(Some(id)) => {
            if session.is_candidate(&id) {
                session.form.timer_trigger = Some(id);
            } else {
                debug!("Timer trigger {} is not a selectable node", id);
            }
        }

        DialogInput::TogglePredecessor(id) => {
            if session.is_candidate(&id) {
                session.form.toggle_predecessor(&id);
            } else {
                debug!("Predecessor {} is not a selectable node", id);
            }
        }

        DialogInput::SetPredecessors(ids) => {
            let mut selected: Vec<String> = Vec::with_capacity(ids.len());
            for id in ids {
                if !session.is_candidate(&id) {
                    debug!("Predecessor {} is not a selectable node", id);
                } else if !selected.contains(&id) {
                    selected.push(id);
                }
            }
            session.form.predecessors = selected;
        }

        DialogInput::MilestoneType(milestone_type) => match &mut session.editor {
            VariantEditor::Milestone(editor) => editor.milestone_type = milestone_type,
            other => ignore_for(other, "milestone type"),
        },

        DialogInput::Label(label) => match &mut session.editor {
            VariantEditor::Milestone(editor) => editor.label = label,
            other => ignore_for(other, "label"),
        },

        DialogInput::StateAnnounced(announced) => match &mut session.editor {
            VariantEditor::Milestone(editor) => editor.state_announced = announced,
            other => ignore_for(other, "state announced"),
        },

        DialogInput::ActionType(id) => match &mut session.editor {
            VariantEditor::Action(editor) => {
                if !editor.select_action_type(&id, &session.action_types) {
                    debug!("Unknown action type {}", id);
                }
            }
            other => ignore_for(other, "action type"),
        },

        DialogInput::ActionData(data) => match &mut session.editor {
            VariantEditor::Action(editor) => editor.action_data = data,
            other => ignore_for(other, "action data"),
        },

        DialogInput::ExpectedDurationMinutes(minutes) => match &mut session.editor {
            VariantEditor::Action(editor) => editor.expected_duration_minutes = minutes,
            other => ignore_for(other, "expected duration"),
        },

        DialogInput::LinkTarget(id) => match &mut session.editor {
            VariantEditor::LinkPoint(editor) => {
                if !editor.select_target(&id) {
                    debug!("{} is not a milestone that can be linked", id);
                }
            }
            other => ignore_for(other, "link target"),
        },

        other @ (DialogInput::Name(_) | DialogInput::Submit | DialogInput::Cancel) => {
            debug!("Non-field input routed to field handler: {:?}", other);
        }
    }

    UpdateResult::none()
}

fn ignore_for(editor: &VariantEditor, field: &str) {
    debug!("Ignoring {} edit on a {} node", field, editor.node_type());
}
