//! Tests to verify JSON fixtures parse into the wire types

use nodeplan_app::routes::{self, Page};
use nodeplan_core::{ActionType, MilestoneType, Node, NodeType};

#[test]
fn test_nodes_fixture_parses() {
    let json = include_str!("fixtures/nodes.json");
    let nodes: Vec<Node> = serde_json::from_str(json).unwrap();

    assert_eq!(nodes.len(), 4);
    assert_eq!(
        nodes.iter().map(Node::node_type).collect::<Vec<_>>(),
        vec![
            NodeType::Milestone,
            NodeType::Action,
            NodeType::Milestone,
            NodeType::LinkPoint
        ]
    );
}

#[test]
fn test_empty_timer_trigger_reads_as_unset() {
    let json = include_str!("fixtures/nodes.json");
    let nodes: Vec<Node> = serde_json::from_str(json).unwrap();

    assert_eq!(nodes[0].timer_trigger, None);
    assert_eq!(nodes[1].timer_trigger.as_deref(), Some("P1!m.START"));
}

#[test]
fn test_api_milestone_type_uses_wire_spelling() {
    let json = include_str!("fixtures/nodes.json");
    let nodes: Vec<Node> = serde_json::from_str(json).unwrap();

    let launch = nodes[2].as_milestone().unwrap();
    assert_eq!(launch.milestone_type, MilestoneType::Api);
}

#[test]
fn test_action_types_fixture_parses() {
    let json = include_str!("fixtures/action_types.json");
    let types: Vec<ActionType> = serde_json::from_str(json).unwrap();

    assert_eq!(types.len(), 2);
    assert_eq!(types[0], ActionType::new("shell", "Shell command"));
}

#[test]
fn test_script_fixtures_parse() {
    for script in [
        include_str!("fixtures/scripts/create_action.ndjson"),
        include_str!("fixtures/scripts/edit_launch.ndjson"),
    ] {
        for line in script.lines() {
            if let Some(step) = nodeplan::headless::runner::parse_script_line(line) {
                assert!(step.is_ok(), "bad script line: {}", line);
            }
        }
    }
}

#[test]
fn test_route_table_resolves_dashboards() {
    assert_eq!(routes::resolve("/"), Some(Page::Products));
    assert_eq!(routes::resolve("/nodedashboard/"), Some(Page::NodeDashboard));
    assert_eq!(routes::resolve("/unknown"), None);
}
