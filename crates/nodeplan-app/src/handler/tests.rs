//! Tests for handler module

use std::time::Duration;

use super::*;
use crate::config::DialogSettings;
use crate::editors::VariantEditor;
use crate::form::ValidationError;
use crate::message::{DialogInput, Lookups, Message};
use crate::name_check::NameStatus;
use crate::state::{DialogOutcome, EditSession, SessionPhase};
use crate::test_utils::{
    test_action, test_action_types, test_link_point, test_milestone, test_milestone_full,
};
use nodeplan_core::{MilestoneType, Node, NodeKind, NodeType};

fn loaded(session: &mut EditSession, nodes: Vec<Node>) {
    update(
        session,
        Message::LookupsLoaded(Box::new(Lookups {
            nodes,
            action_types: test_action_types(),
            ..Default::default()
        })),
    );
    assert_eq!(session.phase, SessionPhase::Ready);
}

fn create_session(nodes: Vec<Node>) -> EditSession {
    let mut session = EditSession::open(None, "P1", DialogSettings::default());
    loaded(&mut session, nodes);
    session
}

fn input(session: &mut EditSession, input: DialogInput) -> UpdateResult {
    update(session, Message::Input(input))
}

/// Type a name and run it through debounce and a directory answer
fn enter_name(session: &mut EditSession, name: &str, taken: bool) {
    input(session, DialogInput::Name(name.to_string()));
    let generation = session.name_check.generation();
    let result = update(session, Message::NameSettled { generation });
    let Some(UpdateAction::CheckName { name, .. }) = result.action else {
        panic!("expected a name check, got {:?}", result.action);
    };
    update(
        session,
        Message::NameCheckCompleted {
            generation,
            name,
            result: Ok(taken),
        },
    );
}

fn submitted(session: &EditSession) -> &Node {
    match session.outcome() {
        Some(DialogOutcome::Submitted(node)) => node,
        other => panic!("expected a submitted node, got {:?}", other),
    }
}

fn assert_rejected(result: UpdateResult) {
    assert_eq!(
        result.action,
        Some(UpdateAction::Notify {
            message: REQUIRED_FIELDS_MESSAGE.to_string(),
            duration_ms: 2000,
        })
    );
}

#[test]
fn test_initialize_loads_lookups_for_edited_node() {
    let node = test_milestone("P1!m.LAUNCH", "LAUNCH");
    let session = EditSession::open(Some(node.clone()), "P1", DialogSettings::default());

    assert_eq!(
        initialize(&session),
        UpdateAction::LoadLookups {
            editing: Some(Box::new(node))
        }
    );

    let create = EditSession::open(None, "P1", DialogSettings::default());
    assert_eq!(
        initialize(&create),
        UpdateAction::LoadLookups { editing: None }
    );
}

#[test]
fn test_create_action_node() {
    let start = test_milestone("P1!m.START", "START");
    let mut session = create_session(vec![start]);

    input(&mut session, DialogInput::NodeType(NodeType::Action));
    enter_name(&mut session, "deploy", false);
    input(&mut session, DialogInput::Description("ab".to_string()));
    input(&mut session, DialogInput::ActionType("shell".to_string()));
    input(&mut session, DialogInput::ExpectedDurationMinutes(15));
    input(
        &mut session,
        DialogInput::TogglePredecessor("P1!m.START".to_string()),
    );

    let result = input(&mut session, DialogInput::Submit);
    assert!(result.action.is_none());
    assert!(session.is_closed());

    let node = submitted(&session);
    assert_eq!(node.id, "P1!a.DEPLOY");
    assert_eq!(node.name, "DEPLOY");
    assert_eq!(node.parent_id, "P1");
    assert_eq!(node.description, "ab");
    assert_eq!(node.self_link, "");
    assert_eq!(node.predecessors, vec!["P1!m.START"]);

    let details = node.as_action().expect("action details");
    assert_eq!(details.action_type_id, "shell");
    assert_eq!(details.expected_duration_minutes, 15);
}

#[test]
fn test_create_milestone_has_no_spanning_predecessors() {
    let mut session = create_session(vec![]);

    enter_name(&mut session, "gate", false);
    input(&mut session, DialogInput::Description("ready gate".to_string()));
    input(&mut session, DialogInput::MilestoneType(MilestoneType::Api));
    input(&mut session, DialogInput::Label("Gate".to_string()));
    input(&mut session, DialogInput::Submit);

    let node = submitted(&session);
    assert_eq!(node.id, "P1!m.GATE");
    let details = node.as_milestone().expect("milestone details");
    assert_eq!(details.milestone_type, MilestoneType::Api);
    assert_eq!(details.label, "Gate");
    assert!(details.spanning_predecessors.is_empty());
}

#[test]
fn test_edit_milestone_keeps_identity_and_spanning_predecessors() {
    let mut original =
        test_milestone_full("P1!m.LAUNCH", "LAUNCH", MilestoneType::External, &["P1!m.A"]);
    original.self_link = "/nodes/P1!m.LAUNCH".to_string();
    let start = test_milestone("P1!m.START", "START");

    let mut session = EditSession::open(Some(original.clone()), "P1", DialogSettings::default());
    update(
        &mut session,
        Message::LookupsLoaded(Box::new(Lookups {
            nodes: vec![start.clone(), original.clone()],
            action_types: vec![],
            predecessors: vec![start.clone()],
            timer_trigger: None,
        })),
    );
    assert_eq!(session.form.predecessors, vec!["P1!m.START"]);

    let result = input(&mut session, DialogInput::Name("RENAMED".to_string()));
    assert!(result.action.is_none());
    assert_eq!(session.form.name, "LAUNCH");

    input(
        &mut session,
        DialogInput::Description("launch day".to_string()),
    );
    input(&mut session, DialogInput::Submit);

    let node = submitted(&session);
    assert_eq!(node.id, "P1!m.LAUNCH");
    assert_eq!(node.name, "LAUNCH");
    assert_eq!(node.self_link, "/nodes/P1!m.LAUNCH");
    assert_eq!(node.description, "launch day");
    assert_eq!(node.predecessors, vec!["P1!m.START"]);
    assert_eq!(
        node.as_milestone().map(|m| m.spanning_predecessors.clone()),
        Some(vec!["P1!m.A".to_string()])
    );
}

#[test]
fn test_edit_mode_ignores_type_change() {
    let original = test_action("P1!a.BUILD", "BUILD", "shell");
    let mut session = EditSession::open(Some(original), "P1", DialogSettings::default());
    loaded(&mut session, vec![]);

    input(&mut session, DialogInput::NodeType(NodeType::Milestone));

    assert_eq!(session.node_type(), NodeType::Action);
    assert!(matches!(session.editor, VariantEditor::Action(_)));
}

#[test]
fn test_create_mode_type_change_swaps_editor() {
    let mut session = create_session(vec![test_milestone("P1!m.START", "START")]);
    assert!(matches!(session.editor, VariantEditor::Milestone(_)));

    input(&mut session, DialogInput::NodeType(NodeType::LinkPoint));

    assert_eq!(session.node_type(), NodeType::LinkPoint);
    match &session.editor {
        VariantEditor::LinkPoint(editor) => assert_eq!(editor.targets().len(), 1),
        other => panic!("expected link point editor, got {:?}", other),
    }
}

#[test]
fn test_link_point_output_has_no_predecessors() {
    let start = test_milestone_full("P1!m.START", "START", MilestoneType::Start, &[]);
    let mut session = create_session(vec![start]);

    input(&mut session, DialogInput::NodeType(NodeType::LinkPoint));
    enter_name(&mut session, "mirror", false);
    input(&mut session, DialogInput::Description("mirror".to_string()));
    input(
        &mut session,
        DialogInput::TogglePredecessor("P1!m.START".to_string()),
    );
    input(&mut session, DialogInput::LinkTarget("P1!m.START".to_string()));
    input(&mut session, DialogInput::Submit);

    let node = submitted(&session);
    assert_eq!(node.id, "P1!l.MIRROR");
    assert!(node.predecessors.is_empty());
    match &node.kind {
        NodeKind::LinkPoint(view) => {
            assert_eq!(view.linked_id, "P1!m.START");
            assert!(view.linked_state_announced);
        }
        other => panic!("expected link point, got {:?}", other),
    }
}

#[test]
fn test_link_point_without_target_is_rejected() {
    let mut session = create_session(vec![test_milestone("P1!m.START", "START")]);

    input(&mut session, DialogInput::NodeType(NodeType::LinkPoint));
    enter_name(&mut session, "mirror", false);
    input(&mut session, DialogInput::Description("mirror".to_string()));

    assert_rejected(input(&mut session, DialogInput::Submit));
    assert_eq!(session.phase, SessionPhase::Ready);
    assert!(validate(&session).contains(&ValidationError::MissingLinkTarget));
}

#[test]
fn test_edit_link_point_keeps_its_target() {
    let start = test_milestone("P1!m.START", "START");
    let original = test_link_point("P1!l.MIRROR", "MIRROR", &start);
    let mut session = EditSession::open(Some(original), "P1", DialogSettings::default());
    loaded(&mut session, vec![start]);

    input(&mut session, DialogInput::Submit);

    let node = submitted(&session);
    assert_eq!(node.id, "P1!l.MIRROR");
    assert_eq!(
        node.linkpoint_view().map(|v| v.linked_id),
        Some("P1!m.START".to_string())
    );
}

#[test]
fn test_submit_while_initializing_is_rejected() {
    let mut session = EditSession::open(None, "P1", DialogSettings::default());
    input(&mut session, DialogInput::Name("deploy".to_string()));
    input(&mut session, DialogInput::Description("ab".to_string()));

    assert_rejected(input(&mut session, DialogInput::Submit));
    assert_eq!(session.phase, SessionPhase::Initializing);
    assert!(session.outcome().is_none());
}

#[test]
fn test_submit_with_taken_name_is_rejected() {
    let mut session = create_session(vec![]);
    enter_name(&mut session, "deploy", true);
    input(&mut session, DialogInput::Description("ab".to_string()));

    assert_rejected(input(&mut session, DialogInput::Submit));
    assert_eq!(validate(&session), vec![ValidationError::NameTaken]);
    assert!(!session.is_closed());
}

#[test]
fn test_submit_during_debounce_window_is_rejected() {
    let mut session = create_session(vec![]);
    input(&mut session, DialogInput::Name("deploy".to_string()));
    input(&mut session, DialogInput::Description("ab".to_string()));

    assert_rejected(input(&mut session, DialogInput::Submit));
    assert_eq!(validate(&session), vec![ValidationError::NameCheckPending]);
}

#[test]
fn test_submit_with_short_description_is_rejected() {
    let mut session = create_session(vec![]);
    enter_name(&mut session, "deploy", false);
    input(&mut session, DialogInput::Description("a".to_string()));

    assert_rejected(input(&mut session, DialogInput::Submit));
    assert!(matches!(
        validate(&session).as_slice(),
        [ValidationError::MinLength { min: 2, actual: 1, .. }]
    ));
}

#[test]
fn test_submit_with_empty_name_is_rejected() {
    let mut session = create_session(vec![]);
    input(&mut session, DialogInput::Description("ab".to_string()));

    assert_rejected(input(&mut session, DialogInput::Submit));
    assert_eq!(
        validate(&session),
        vec![ValidationError::Required { field: "name" }]
    );
}

#[test]
fn test_name_edit_schedules_debounce() {
    let mut session = create_session(vec![]);

    let result = input(&mut session, DialogInput::Name("deploy".to_string()));

    assert_eq!(
        result.action,
        Some(UpdateAction::ScheduleNameSettle {
            generation: 1,
            delay: Duration::from_millis(300),
        })
    );
    assert_eq!(session.form.name, "deploy");
    assert_eq!(session.name_check.status(), &NameStatus::Settling);
}

#[test]
fn test_superseded_settle_does_not_check() {
    let mut session = create_session(vec![]);

    input(&mut session, DialogInput::Name("Foo".to_string()));
    input(&mut session, DialogInput::Name("Foobar".to_string()));

    let stale = update(&mut session, Message::NameSettled { generation: 1 });
    assert!(stale.action.is_none());
    assert_eq!(session.form.name, "Foobar");

    let current = update(&mut session, Message::NameSettled { generation: 2 });
    assert_eq!(
        current.action,
        Some(UpdateAction::CheckName {
            generation: 2,
            name: "FOOBAR".to_string(),
        })
    );
    assert_eq!(session.form.name, "FOOBAR");
}

#[test]
fn test_superseded_check_answer_is_dropped() {
    let mut session = create_session(vec![]);

    input(&mut session, DialogInput::Name("Foo".to_string()));
    update(&mut session, Message::NameSettled { generation: 1 });
    input(&mut session, DialogInput::Name("Foobar".to_string()));

    update(
        &mut session,
        Message::NameCheckCompleted {
            generation: 1,
            name: "FOO".to_string(),
            result: Ok(true),
        },
    );

    assert_eq!(session.name_check.status(), &NameStatus::Settling);
    assert!(!session.name_check.is_taken());
}

#[test]
fn test_retyping_name_during_check_reuses_query() {
    let mut session = create_session(vec![]);

    input(&mut session, DialogInput::Name("deploy".to_string()));
    let first = update(&mut session, Message::NameSettled { generation: 1 });
    assert!(matches!(first.action, Some(UpdateAction::CheckName { .. })));

    input(&mut session, DialogInput::Name("deplo".to_string()));
    input(&mut session, DialogInput::Name("deploy".to_string()));
    let again = update(&mut session, Message::NameSettled { generation: 3 });
    assert!(again.action.is_none());
    assert_eq!(session.name_check.status(), &NameStatus::Checking);

    update(
        &mut session,
        Message::NameCheckCompleted {
            generation: 1,
            name: "DEPLOY".to_string(),
            result: Ok(true),
        },
    );
    assert!(session.name_check.is_taken());
}

#[test]
fn test_whitespace_values_count_by_length() {
    let mut session = create_session(vec![]);

    input(&mut session, DialogInput::Name("  ".to_string()));
    let settled = update(&mut session, Message::NameSettled { generation: 1 });
    assert!(matches!(settled.action, Some(UpdateAction::CheckName { .. })));
    update(
        &mut session,
        Message::NameCheckCompleted {
            generation: 1,
            name: "  ".to_string(),
            result: Ok(false),
        },
    );
    input(&mut session, DialogInput::Description("  ".to_string()));

    assert!(validate(&session).is_empty());
}

#[test]
fn test_failed_name_check_allows_submit() {
    let mut session = create_session(vec![]);

    input(&mut session, DialogInput::Name("deploy".to_string()));
    update(&mut session, Message::NameSettled { generation: 1 });
    update(
        &mut session,
        Message::NameCheckCompleted {
            generation: 1,
            name: "DEPLOY".to_string(),
            result: Err("directory unavailable".to_string()),
        },
    );
    input(&mut session, DialogInput::Description("ab".to_string()));
    input(&mut session, DialogInput::Submit);

    assert_eq!(submitted(&session).id, "P1!m.DEPLOY");
}

#[test]
fn test_selections_must_be_candidates() {
    let mut session = create_session(vec![test_milestone("P1!m.START", "START")]);

    input(
        &mut session,
        DialogInput::TimerTrigger(Some("P1!m.GHOST".to_string())),
    );
    input(
        &mut session,
        DialogInput::TogglePredecessor("P1!m.GHOST".to_string()),
    );
    assert!(session.form.timer_trigger.is_none());
    assert!(session.form.predecessors.is_empty());

    input(
        &mut session,
        DialogInput::SetPredecessors(vec![
            "P1!m.START".to_string(),
            "P1!m.GHOST".to_string(),
            "P1!m.START".to_string(),
        ]),
    );
    input(
        &mut session,
        DialogInput::TimerTrigger(Some("P1!m.START".to_string())),
    );
    assert_eq!(session.form.predecessors, vec!["P1!m.START"]);
    assert_eq!(session.form.timer_trigger.as_deref(), Some("P1!m.START"));

    input(&mut session, DialogInput::TimerTrigger(None));
    assert!(session.form.timer_trigger.is_none());
}

#[test]
fn test_unknown_action_type_is_refused() {
    let mut session = create_session(vec![]);
    input(&mut session, DialogInput::NodeType(NodeType::Action));

    input(&mut session, DialogInput::ActionType("teleport".to_string()));

    match &session.editor {
        VariantEditor::Action(editor) => assert_eq!(editor.action_type_id(), None),
        other => panic!("expected action editor, got {:?}", other),
    }
}

#[test]
fn test_variant_fields_ignored_on_other_types() {
    let mut session = create_session(vec![]);

    input(&mut session, DialogInput::ExpectedDurationMinutes(30));
    input(&mut session, DialogInput::LinkTarget("P1!m.START".to_string()));

    assert!(matches!(session.editor, VariantEditor::Milestone(_)));
    assert_eq!(session.editor.node_type(), NodeType::Milestone);
}

#[test]
fn test_cancel_closes_and_drops_later_messages() {
    let mut session = EditSession::open(None, "P1", DialogSettings::default());

    input(&mut session, DialogInput::Cancel);
    assert!(session.is_closed());
    assert_eq!(session.outcome(), Some(&DialogOutcome::Cancelled));

    let result = update(
        &mut session,
        Message::LookupsLoaded(Box::new(Lookups::default())),
    );
    assert!(result.action.is_none());
    assert_eq!(session.phase, SessionPhase::Closed);
}

#[test]
fn test_late_lookups_are_ignored() {
    let mut session = create_session(vec![test_milestone("P1!m.START", "START")]);

    update(
        &mut session,
        Message::LookupsLoaded(Box::new(Lookups::default())),
    );

    assert_eq!(session.candidates.len(), 1);
}

#[test]
fn test_assemble_upper_cases_create_name() {
    let mut session = create_session(vec![]);
    session.form.name = "release".to_string();
    session.form.description = "ab".to_string();

    let node = assemble(&session).expect("assembled node");

    assert_eq!(node.id, "P1!m.RELEASE");
    assert_eq!(node.name, "RELEASE");
}
