//! Message types for the edit session (TEA pattern)

use nodeplan_core::{ActionType, MilestoneType, Node, NodeId, NodeType};
use serde::{Deserialize, Serialize};

/// A user edit or command, as delivered by the hosting UI
///
/// Serialized form (one JSON value per input):
/// `{"name":"deploy"}`, `{"node_type":"Action"}`, `"submit"`, `"cancel"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DialogInput {
    Name(String),
    Description(String),
    NodeType(NodeType),
    TimerDurationMinutes(u32),
    TimerTrigger(Option<NodeId>),
    TogglePredecessor(NodeId),
    SetPredecessors(Vec<NodeId>),

    // Milestone
    MilestoneType(MilestoneType),
    Label(String),
    StateAnnounced(bool),

    // Action
    ActionType(String),
    ActionData(serde_json::Value),
    ExpectedDurationMinutes(u32),

    // LinkPoint
    LinkTarget(NodeId),

    Submit,
    Cancel,
}

/// Everything fetched while the session initializes
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Lookups {
    pub nodes: Vec<Node>,
    pub action_types: Vec<ActionType>,
    /// Current predecessors of the edited node (edit mode only)
    pub predecessors: Vec<Node>,
    /// Current timer trigger of the edited node (edit mode only)
    pub timer_trigger: Option<Node>,
}

/// All possible messages in an edit session
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// User edit or command
    Input(DialogInput),

    // ─────────────────────────────────────────────────────────
    // Background Task Results
    // ─────────────────────────────────────────────────────────
    /// Node list and catalog fetched (failed fetches arrive as empty lists)
    LookupsLoaded(Box<Lookups>),

    /// The debounce window for a name edit closed
    NameSettled { generation: u64 },

    /// The directory answered a name availability check
    NameCheckCompleted {
        generation: u64,
        name: String,
        result: Result<bool, String>,
    },
}

impl From<DialogInput> for Message {
    fn from(input: DialogInput) -> Self {
        Message::Input(input)
    }
}
