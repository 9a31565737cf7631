//! Common form fields shared by every node variant

use nodeplan_core::{Node, NodeId, NodeType};
use thiserror::Error;

/// Why a form cannot be submitted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} is required")]
    Required { field: &'static str },

    #[error("{field} must be at least {min} characters (got {actual})")]
    MinLength {
        field: &'static str,
        min: usize,
        actual: usize,
    },

    #[error("name is already taken")]
    NameTaken,

    #[error("name availability check has not finished")]
    NameCheckPending,

    #[error("no milestone selected to link to")]
    MissingLinkTarget,
}

/// Values of the fields every node carries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeForm {
    pub name: String,
    pub name_disabled: bool,
    pub description: String,
    pub node_type: NodeType,
    pub node_type_disabled: bool,
    pub timer_duration_minutes: u32,
    pub timer_trigger: Option<NodeId>,
    pub predecessors: Vec<NodeId>,
}

impl NodeForm {
    /// Blank form for a new node (defaults to a Milestone)
    pub fn blank() -> Self {
        Self::default()
    }

    /// Form pre-filled from an existing node, with name and type locked
    ///
    /// Predecessors and the timer trigger are resolved through the directory
    /// and filled in once lookups arrive.
    pub fn from_node(node: &Node) -> Self {
        Self {
            name: node.name.clone(),
            name_disabled: true,
            description: node.description.clone(),
            node_type: node.node_type(),
            node_type_disabled: true,
            timer_duration_minutes: node.timer_duration_minutes,
            timer_trigger: None,
            predecessors: Vec::new(),
        }
    }

    /// Select or deselect a predecessor
    pub fn toggle_predecessor(&mut self, id: &str) {
        if let Some(pos) = self.predecessors.iter().position(|p| p == id) {
            self.predecessors.remove(pos);
        } else {
            self.predecessors.push(id.to_string());
        }
    }

    /// Check description length against `min_len`
    pub fn validate_description(&self, min_len: usize) -> Option<ValidationError> {
        let actual = self.description.chars().count();
        if actual == 0 {
            Some(ValidationError::Required {
                field: "description",
            })
        } else if actual < min_len {
            Some(ValidationError::MinLength {
                field: "description",
                min: min_len,
                actual,
            })
        } else {
            None
        }
    }
}
