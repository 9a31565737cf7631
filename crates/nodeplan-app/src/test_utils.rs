//! Test utilities: node builders and recording collaborators

use std::sync::{Arc, Mutex};

use nodeplan_core::prelude::*;
use nodeplan_core::{
    ActionDetails, ActionType, LinkPointView, MilestoneDetails, MilestoneType, Node, NodeKind,
};

use crate::services::{
    ActionTypeCatalog, Diagnostic, DiagnosticSink, InMemoryDirectory, NodeDirectory, Notifier,
};

fn base_node(id: &str, name: &str, kind: NodeKind) -> Node {
    let parent_id = id.split('!').next().unwrap_or("P1").to_string();
    Node {
        id: id.to_string(),
        parent_id,
        name: name.to_string(),
        description: format!("{} description", name.to_lowercase()),
        self_link: format!("/nodes/{}", id),
        predecessors: Vec::new(),
        timer_duration_minutes: 0,
        timer_trigger: None,
        kind,
    }
}

/// A Milestone node with default details
pub fn test_milestone(id: &str, name: &str) -> Node {
    base_node(id, name, NodeKind::Milestone(MilestoneDetails::default()))
}

/// A Milestone with a label, announced state and spanning predecessors
pub fn test_milestone_full(
    id: &str,
    name: &str,
    milestone_type: MilestoneType,
    spanning_predecessors: &[&str],
) -> Node {
    base_node(
        id,
        name,
        NodeKind::Milestone(MilestoneDetails {
            milestone_type,
            label: format!("{} label", name),
            state_announced: true,
            spanning_predecessors: spanning_predecessors.iter().map(|s| s.to_string()).collect(),
        }),
    )
}

/// An Action node of the given action type
pub fn test_action(id: &str, name: &str, action_type_id: &str) -> Node {
    base_node(
        id,
        name,
        NodeKind::Action(ActionDetails {
            action_type_id: action_type_id.to_string(),
            ..Default::default()
        }),
    )
}

/// A LinkPoint mirroring `target`
pub fn test_link_point(id: &str, name: &str, target: &Node) -> Node {
    let view = target.linkpoint_view().unwrap_or(LinkPointView {
        linked_id: target.id.clone(),
        linked_milestone_type: MilestoneType::Start,
        linked_label: String::new(),
        linked_state_announced: false,
    });
    base_node(id, name, NodeKind::LinkPoint(view))
}

pub fn test_action_types() -> Vec<ActionType> {
    vec![
        ActionType::new("shell", "Shell command"),
        ActionType::new("http", "HTTP request"),
    ]
}

/// Directory that records name checks and can be told to fail
#[derive(Debug, Clone, Default)]
pub struct RecordingDirectory {
    inner: InMemoryDirectory,
    name_checks: Arc<Mutex<Vec<String>>>,
    fail_list: bool,
    fail_name_check: bool,
}

impl RecordingDirectory {
    pub fn new(nodes: Vec<Node>) -> Self {
        Self {
            inner: InMemoryDirectory::new(nodes),
            ..Default::default()
        }
    }

    pub fn failing_list(mut self) -> Self {
        self.fail_list = true;
        self
    }

    pub fn failing_name_check(mut self) -> Self {
        self.fail_name_check = true;
        self
    }

    /// Names the directory was asked about, in order
    pub fn name_checks(&self) -> Vec<String> {
        self.name_checks.lock().map(|v| v.clone()).unwrap_or_default()
    }

    /// Shared handle on the recorded checks, for use after the directory moves
    pub fn name_checks_handle(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.name_checks)
    }
}

impl NodeDirectory for RecordingDirectory {
    async fn list(&self) -> Result<Vec<Node>> {
        if self.fail_list {
            return Err(Error::directory("node list unavailable"));
        }
        self.inner.list().await
    }

    async fn is_name_taken(&self, name: &str) -> Result<bool> {
        if let Ok(mut checks) = self.name_checks.lock() {
            checks.push(name.to_string());
        }
        if self.fail_name_check {
            return Err(Error::directory("name check unavailable"));
        }
        self.inner.is_name_taken(name).await
    }

    async fn predecessors_of(&self, node: &Node) -> Result<Vec<Node>> {
        self.inner.predecessors_of(node).await
    }

    async fn by_id(&self, id: &str) -> Result<Option<Node>> {
        self.inner.by_id(id).await
    }
}

/// Catalog that always fails
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingCatalog;

impl ActionTypeCatalog for FailingCatalog {
    async fn list(&self) -> Result<Vec<ActionType>> {
        Err(Error::catalog("catalog unavailable"))
    }
}

/// Notifier that keeps every message it was asked to show
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    shown: Arc<Mutex<Vec<(String, u64)>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shown(&self) -> Vec<(String, u64)> {
        self.shown.lock().map(|v| v.clone()).unwrap_or_default()
    }
}

impl Notifier for RecordingNotifier {
    fn show(&self, message: &str, duration_ms: u64) {
        if let Ok(mut shown) = self.shown.lock() {
            shown.push((message.to_string(), duration_ms));
        }
    }
}

/// Diagnostic sink that keeps every report
#[derive(Debug, Clone, Default)]
pub struct RecordingDiagnostics {
    reports: Arc<Mutex<Vec<Diagnostic>>>,
}

impl RecordingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reports(&self) -> Vec<Diagnostic> {
        self.reports.lock().map(|v| v.clone()).unwrap_or_default()
    }
}

impl DiagnosticSink for RecordingDiagnostics {
    fn report(&self, diagnostic: Diagnostic) {
        if let Ok(mut reports) = self.reports.lock() {
            reports.push(diagnostic);
        }
    }
}
