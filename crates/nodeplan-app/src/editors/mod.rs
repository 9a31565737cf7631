//! Variant-specific sub-editors
//!
//! Each editor is built with its initial data (an existing node's payload in
//! edit mode, nothing in create mode) and hands back a finished payload via
//! `value()`.

pub mod action;
pub mod link_point;
pub mod milestone;

pub use action::ActionEditor;
pub use link_point::LinkPointEditor;
pub use milestone::MilestoneEditor;

use nodeplan_core::{Node, NodeKind, NodeType};

/// The active sub-editor, one per node variant
#[derive(Debug, Clone, PartialEq)]
pub enum VariantEditor {
    Milestone(MilestoneEditor),
    Action(ActionEditor),
    LinkPoint(LinkPointEditor),
}

impl VariantEditor {
    /// Fresh editor for a node being created
    pub fn for_type(node_type: NodeType, candidates: &[Node]) -> Self {
        match node_type {
            NodeType::Milestone => VariantEditor::Milestone(MilestoneEditor::init(None)),
            NodeType::Action => VariantEditor::Action(ActionEditor::init(None)),
            NodeType::LinkPoint => {
                let mut editor = LinkPointEditor::init(None);
                editor.set_targets(candidates);
                VariantEditor::LinkPoint(editor)
            }
        }
    }

    /// Editor initialised from an existing node's payload
    pub fn for_node(node: &Node) -> Self {
        match &node.kind {
            NodeKind::Milestone(details) => {
                VariantEditor::Milestone(MilestoneEditor::init(Some(details)))
            }
            NodeKind::Action(details) => VariantEditor::Action(ActionEditor::init(Some(details))),
            NodeKind::LinkPoint(view) => VariantEditor::LinkPoint(LinkPointEditor::init(Some(view))),
        }
    }

    pub fn node_type(&self) -> NodeType {
        match self {
            VariantEditor::Milestone(_) => NodeType::Milestone,
            VariantEditor::Action(_) => NodeType::Action,
            VariantEditor::LinkPoint(_) => NodeType::LinkPoint,
        }
    }

    /// Refresh anything derived from the candidate list
    pub fn set_candidates(&mut self, candidates: &[Node]) {
        if let VariantEditor::LinkPoint(editor) = self {
            editor.set_targets(candidates);
        }
    }

    /// The finished variant payload, or `None` when a LinkPoint has no target
    pub fn value(&self) -> Option<NodeKind> {
        match self {
            VariantEditor::Milestone(editor) => Some(NodeKind::Milestone(editor.value())),
            VariantEditor::Action(editor) => Some(NodeKind::Action(editor.value())),
            VariantEditor::LinkPoint(editor) => editor.value().map(NodeKind::LinkPoint),
        }
    }
}
