//! LinkPoint sub-editor
//!
//! A LinkPoint mirrors the public state of one Milestone. The editor offers
//! the milestone candidates as targets and copies the chosen one's
//! [`LinkPointView`] at submit time.

use nodeplan_core::{LinkPointView, Node};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkPointEditor {
    targets: Vec<LinkPointView>,
    selected: Option<LinkPointView>,
}

impl LinkPointEditor {
    pub fn init(existing: Option<&LinkPointView>) -> Self {
        Self {
            targets: Vec::new(),
            selected: existing.cloned(),
        }
    }

    /// Offer the milestones among `candidates` as link targets
    pub fn set_targets(&mut self, candidates: &[Node]) {
        self.targets = candidates
            .iter()
            .filter(|n| n.is_milestone())
            .filter_map(Node::linkpoint_view)
            .collect();
    }

    pub fn targets(&self) -> &[LinkPointView] {
        &self.targets
    }

    pub fn select_target(&mut self, milestone_id: &str) -> bool {
        match self.targets.iter().find(|t| t.linked_id == milestone_id) {
            Some(view) => {
                self.selected = Some(view.clone());
                true
            }
            None => false,
        }
    }

    pub fn value(&self) -> Option<LinkPointView> {
        self.selected.clone()
    }
}
