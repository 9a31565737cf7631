//! Edit session state

use nodeplan_core::{same_selection, ActionType, Node, NodeType};

use crate::config::DialogSettings;
use crate::editors::VariantEditor;
use crate::form::NodeForm;
use crate::message::Lookups;
use crate::name_check::NameCheck;

/// Session lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPhase {
    /// Waiting for the node list and action-type catalog
    #[default]
    Initializing,
    /// Accepting edits
    Ready,
    /// Assembling the output record
    Submitting,
    /// Terminal; see [`EditSession::outcome`]
    Closed,
}

/// How a session ended
#[derive(Debug, Clone, PartialEq)]
pub enum DialogOutcome {
    Submitted(Node),
    Cancelled,
}

/// Creating a new node, or editing an existing one
#[derive(Debug, Clone, PartialEq)]
pub enum EditMode {
    Create,
    Edit(Box<Node>),
}

/// State owned by one open dialog
#[derive(Debug, Clone)]
pub struct EditSession {
    pub phase: SessionPhase,
    pub mode: EditMode,
    pub parent_id: String,
    pub form: NodeForm,
    pub editor: VariantEditor,
    pub name_check: NameCheck,
    /// Known nodes minus the one being edited
    pub candidates: Vec<Node>,
    pub action_types: Vec<ActionType>,
    pub settings: DialogSettings,
    outcome: Option<DialogOutcome>,
}

impl EditSession {
    /// Open a session: edit mode when `existing` is given, create mode otherwise
    pub fn open(existing: Option<Node>, parent_id: impl Into<String>, settings: DialogSettings) -> Self {
        let (mode, form, editor) = match existing {
            Some(node) => {
                let form = NodeForm::from_node(&node);
                let editor = VariantEditor::for_node(&node);
                (EditMode::Edit(Box::new(node)), form, editor)
            }
            None => {
                let form = NodeForm::blank();
                let editor = VariantEditor::for_type(form.node_type, &[]);
                (EditMode::Create, form, editor)
            }
        };

        Self {
            phase: SessionPhase::Initializing,
            mode,
            parent_id: parent_id.into(),
            form,
            editor,
            name_check: NameCheck::new(),
            candidates: Vec::new(),
            action_types: Vec::new(),
            settings,
            outcome: None,
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        matches!(self.mode, EditMode::Edit(_))
    }

    /// The node being edited, if any
    pub fn original(&self) -> Option<&Node> {
        match &self.mode {
            EditMode::Edit(node) => Some(node),
            EditMode::Create => None,
        }
    }

    pub fn node_type(&self) -> NodeType {
        self.form.node_type
    }

    pub fn title(&self) -> String {
        match &self.mode {
            EditMode::Edit(node) => format!("Editing {}", node.name),
            EditMode::Create => "Add New Milestone or Task".to_string(),
        }
    }

    pub fn is_closed(&self) -> bool {
        self.phase == SessionPhase::Closed
    }

    pub fn outcome(&self) -> Option<&DialogOutcome> {
        self.outcome.as_ref()
    }

    /// Consume the session, yielding the submitted node if there is one
    pub fn into_result(self) -> Option<Node> {
        match self.outcome {
            Some(DialogOutcome::Submitted(node)) => Some(node),
            _ => None,
        }
    }

    pub(crate) fn close(&mut self, outcome: DialogOutcome) {
        self.phase = SessionPhase::Closed;
        self.outcome = Some(outcome);
    }

    pub fn is_candidate(&self, id: &str) -> bool {
        self.candidates.iter().any(|n| n.id == id)
    }

    /// Install fetched lookups and pre-fill edit-mode selections
    pub(crate) fn apply_lookups(&mut self, lookups: Lookups) {
        let own_id = self.original().map(|n| n.id.clone());
        self.candidates = lookups
            .nodes
            .into_iter()
            .filter(|n| Some(&n.id) != own_id.as_ref())
            .collect();
        self.action_types = lookups.action_types;
        self.editor.set_candidates(&self.candidates);

        if self.is_edit_mode() {
            self.form.predecessors = lookups
                .predecessors
                .iter()
                .filter(|p| self.selectable(p))
                .map(|p| p.id.clone())
                .collect();
            self.form.timer_trigger = lookups
                .timer_trigger
                .filter(|t| self.selectable(t))
                .map(|t| t.id);
        } else {
            let candidates = &self.candidates;
            self.form
                .predecessors
                .retain(|id| candidates.iter().any(|c| &c.id == id));
        }
    }

    fn selectable(&self, node: &Node) -> bool {
        self.candidates
            .iter()
            .any(|c| same_selection(Some(c), Some(node)))
    }
}
