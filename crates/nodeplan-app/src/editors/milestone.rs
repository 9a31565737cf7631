//! Milestone sub-editor

use nodeplan_core::{MilestoneDetails, MilestoneType, NodeId};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MilestoneEditor {
    pub milestone_type: MilestoneType,
    pub label: String,
    pub state_announced: bool,
    spanning_predecessors: Vec<NodeId>,
}

impl MilestoneEditor {
    /// Start from an existing milestone, or from defaults when creating
    pub fn init(existing: Option<&MilestoneDetails>) -> Self {
        match existing {
            Some(details) => Self {
                milestone_type: details.milestone_type,
                label: details.label.clone(),
                state_announced: details.state_announced,
                spanning_predecessors: details.spanning_predecessors.clone(),
            },
            None => Self::default(),
        }
    }

    pub fn value(&self) -> MilestoneDetails {
        MilestoneDetails {
            milestone_type: self.milestone_type,
            label: self.label.clone(),
            state_announced: self.state_announced,
            spanning_predecessors: self.spanning_predecessors.clone(),
        }
    }
}
