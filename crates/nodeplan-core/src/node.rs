//! Plan-graph node model
//!
//! A [`Node`] is the common record shared by every node in a plan, with the
//! variant-specific payload carried in [`NodeKind`]. The JSON shape matches
//! what the persistence services exchange: camelCase keys with the variant
//! flattened in next to a `nodeType` tag.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Node identifier, e.g. `P1!m.LAUNCH`
pub type NodeId = String;

/// The three node variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum NodeType {
    #[default]
    Milestone,
    Action,
    LinkPoint,
}

impl NodeType {
    pub const ALL: [NodeType; 3] = [NodeType::Milestone, NodeType::Action, NodeType::LinkPoint];

    /// Single-letter tag used in generated ids
    pub fn tag(&self) -> char {
        match self {
            NodeType::Milestone => 'm',
            NodeType::Action => 'a',
            NodeType::LinkPoint => 'l',
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NodeType::Milestone => "Milestone",
            NodeType::Action => "Action",
            NodeType::LinkPoint => "LinkPoint",
        }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Milestone classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MilestoneType {
    #[default]
    Start,
    Infrastructure,
    #[serde(rename = "API")]
    Api,
    Feature,
    Service,
    Product,
    Internal,
    External,
}

impl MilestoneType {
    pub const ALL: [MilestoneType; 8] = [
        MilestoneType::Start,
        MilestoneType::Infrastructure,
        MilestoneType::Api,
        MilestoneType::Feature,
        MilestoneType::Service,
        MilestoneType::Product,
        MilestoneType::Internal,
        MilestoneType::External,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MilestoneType::Start => "Start",
            MilestoneType::Infrastructure => "Infrastructure",
            MilestoneType::Api => "API",
            MilestoneType::Feature => "Feature",
            MilestoneType::Service => "Service",
            MilestoneType::Product => "Product",
            MilestoneType::Internal => "Internal",
            MilestoneType::External => "External",
        }
    }
}

/// Milestone-specific fields
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MilestoneDetails {
    #[serde(default)]
    pub milestone_type: MilestoneType,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub state_announced: bool,
    /// Maintained by the graph services; edits never change it
    #[serde(default)]
    pub spanning_predecessors: Vec<NodeId>,
}

/// Action-specific fields
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionDetails {
    #[serde(default)]
    pub action_type_id: String,
    #[serde(default)]
    pub action_data: serde_json::Value,
    #[serde(default)]
    pub expected_duration_minutes: u32,
}

/// The public state of a Milestone as mirrored by a LinkPoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkPointView {
    pub linked_id: NodeId,
    pub linked_milestone_type: MilestoneType,
    #[serde(default)]
    pub linked_label: String,
    #[serde(default)]
    pub linked_state_announced: bool,
}

/// Variant payload of a node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "nodeType")]
pub enum NodeKind {
    Milestone(MilestoneDetails),
    Action(ActionDetails),
    LinkPoint(LinkPointView),
}

impl NodeKind {
    pub fn node_type(&self) -> NodeType {
        match self {
            NodeKind::Milestone(_) => NodeType::Milestone,
            NodeKind::Action(_) => NodeType::Action,
            NodeKind::LinkPoint(_) => NodeType::LinkPoint,
        }
    }
}

/// A unit in the plan graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub id: NodeId,
    pub parent_id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub self_link: String,
    #[serde(default)]
    pub predecessors: Vec<NodeId>,
    #[serde(default)]
    pub timer_duration_minutes: u32,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub timer_trigger: Option<NodeId>,
    #[serde(flatten)]
    pub kind: NodeKind,
}

impl Node {
    pub fn node_type(&self) -> NodeType {
        self.kind.node_type()
    }

    pub fn as_milestone(&self) -> Option<&MilestoneDetails> {
        match &self.kind {
            NodeKind::Milestone(details) => Some(details),
            _ => None,
        }
    }

    pub fn as_action(&self) -> Option<&ActionDetails> {
        match &self.kind {
            NodeKind::Action(details) => Some(details),
            _ => None,
        }
    }

    pub fn is_milestone(&self) -> bool {
        matches!(self.kind, NodeKind::Milestone(_))
    }

    /// The state a LinkPoint targeting this node would mirror
    ///
    /// Milestones expose their own public state. LinkPoints re-expose the
    /// state they already mirror. Actions cannot be link targets.
    pub fn linkpoint_view(&self) -> Option<LinkPointView> {
        match &self.kind {
            NodeKind::Milestone(m) => Some(LinkPointView {
                linked_id: self.id.clone(),
                linked_milestone_type: m.milestone_type,
                linked_label: m.label.clone(),
                linked_state_announced: m.state_announced,
            }),
            NodeKind::LinkPoint(view) => Some(view.clone()),
            NodeKind::Action(_) => None,
        }
    }
}

/// Build the id of a newly created node: `parent!tag.NAME`
pub fn assemble_node_id(parent_id: &str, node_type: NodeType, name: &str) -> NodeId {
    format!("{}!{}.{}", parent_id, node_type.tag(), name.to_uppercase())
}

/// Selection equality for optional node references
///
/// Two references select the same node when both are absent or both are
/// present with equal ids.
pub fn same_selection(a: Option<&Node>, b: Option<&Node>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a.id == b.id,
        (None, None) => true,
        _ => false,
    }
}

// Older records store an unset trigger as "".
fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<NodeId>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}
