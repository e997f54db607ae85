// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Roadgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Roadgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! End-to-end laws of the containment engine, exercised through the public
//! API the way an embedding editor would drive it.

use roadgraph::model::{
    Board, Edge, EdgeId, EdgeMarker, Element, ElementId, GroupBody, HandleRole, NodeBody, Point,
    Size, TaskBody, TopicBody,
};
use roadgraph::ops::{apply_op, OpStatus, RoadmapOp};
use roadgraph::query::connect::ConnectionProposal;
use roadgraph::query::position::absolute_position_of;
use roadgraph::query::reparent::reparent_candidates;
use roadgraph::session::{EditorSession, MenuAction, Selection};

fn eid(value: &str) -> ElementId {
    ElementId::new(value).expect("element id")
}

fn group(id: &str, label: &str, position: Point, parent: Option<&str>) -> Element {
    Element::new_with(
        eid(id),
        position,
        parent.map(eid),
        parent.is_some(),
        Some(Size::new(400.0, 300.0)),
        Some(-1),
        NodeBody::Group(GroupBody::new(label)),
    )
}

fn task(id: &str, position: Point, parent: Option<&str>) -> Element {
    Element::new_with(
        eid(id),
        position,
        parent.map(eid),
        parent.is_some(),
        None,
        None,
        NodeBody::Task(TaskBody::new(id.to_owned())),
    )
}

/// No element may be its own transitive container.
fn assert_containment_acyclic(board: &Board) {
    for element in board.elements() {
        let mut seen = vec![element.element_id().clone()];
        let mut current = element.parent_id();
        while let Some(parent_id) = current {
            assert!(
                !seen.contains(parent_id),
                "containment cycle through {parent_id}"
            );
            seen.push(parent_id.clone());
            current = board.find(parent_id).and_then(|parent| parent.parent_id());
        }
    }
}

#[test]
fn containment_stays_acyclic_under_delete_copy_and_transfer() {
    let mut board = Board::new();
    board.add_element(group("group-a", "A", Point::new(0.0, 0.0), None));
    board.add_element(group("group-b", "B", Point::new(20.0, 20.0), Some("group-a")));
    board.add_element(group("group-c", "C", Point::new(40.0, 40.0), Some("group-b")));
    board.add_element(task("task-1", Point::new(5.0, 5.0), Some("group-c")));

    apply_op(
        &mut board,
        &RoadmapOp::CopyNode {
            node_id: eid("group-b"),
        },
    );
    assert_containment_acyclic(&board);

    let outcome = apply_op(
        &mut board,
        &RoadmapOp::TransferNode {
            node_id: eid("group-b"),
            new_parent_id: Some(eid("group-c")),
        },
    );
    assert_eq!(outcome.status, OpStatus::Rejected);
    assert_containment_acyclic(&board);

    apply_op(
        &mut board,
        &RoadmapOp::TransferNode {
            node_id: eid("group-c"),
            new_parent_id: Some(eid("group-a")),
        },
    );
    assert_containment_acyclic(&board);

    apply_op(
        &mut board,
        &RoadmapOp::DeleteNode {
            node_id: eid("group-b"),
        },
    );
    assert_containment_acyclic(&board);
}

#[test]
fn export_import_round_trip_reproduces_the_collection() {
    let mut board = Board::new();
    board.add_element(group("group-1", "Phase One", Point::new(50.0, 50.0), None));
    board.add_element(task("task-1", Point::new(25.0, 20.0), Some("group-1")));

    let mut topic = TopicBody::new("Core");
    topic
        .handles_mut()
        .insert("out".to_owned(), HandleRole::Source);
    board.add_element(Element::new(
        eid("topic-1"),
        Point::new(450.0, 50.0),
        NodeBody::Topic(topic),
    ));
    board.add_edge(Edge::new_with(
        EdgeId::new("edge-1").expect("edge id"),
        eid("topic-1"),
        "out",
        eid("task-1"),
        "in",
        Some(EdgeMarker::ArrowClosed),
    ));

    let session = EditorSession::new(board);
    let exported = session.export_json().expect("export");

    let mut restored = EditorSession::new(Board::new());
    restored.import_json(&exported).expect("import");

    assert_eq!(restored.board().elements(), session.board().elements());
    assert_eq!(restored.board().edges(), session.board().edges());
}

#[test]
fn deleting_a_group_preserves_every_child_absolute_position() {
    let mut board = Board::new();
    board.add_element(group("group-1", "Phase One", Point::new(50.0, 50.0), None));
    board.add_element(task("task-1", Point::new(25.0, 20.0), Some("group-1")));
    board.add_element(task("task-2", Point::new(100.0, 60.0), Some("group-1")));

    let before_1 = absolute_position_of(&board, &eid("task-1")).expect("task-1");
    let before_2 = absolute_position_of(&board, &eid("task-2")).expect("task-2");
    assert_eq!(before_1, Point::new(75.0, 70.0));

    apply_op(
        &mut board,
        &RoadmapOp::DeleteNode {
            node_id: eid("group-1"),
        },
    );

    for (task_id, before) in [("task-1", before_1), ("task-2", before_2)] {
        let element = board.find(&eid(task_id)).expect("promoted child");
        assert_eq!(element.parent_id(), None, "{task_id} must be top-level");
        assert!(!element.confined());
        assert_eq!(element.position(), before);
        assert_eq!(absolute_position_of(&board, &eid(task_id)), Some(before));
    }
}

#[test]
fn transfer_is_its_own_inverse_across_containers() {
    let mut board = Board::new();
    board.add_element(group("group-a", "A", Point::new(33.0, 7.5), None));
    board.add_element(group("group-b", "B", Point::new(210.0, 140.25), None));
    board.add_element(task("task-1", Point::new(12.125, -4.5), Some("group-a")));

    let original = board.find(&eid("task-1")).expect("task").position();

    apply_op(
        &mut board,
        &RoadmapOp::TransferNode {
            node_id: eid("task-1"),
            new_parent_id: Some(eid("group-b")),
        },
    );
    apply_op(
        &mut board,
        &RoadmapOp::TransferNode {
            node_id: eid("task-1"),
            new_parent_id: Some(eid("group-a")),
        },
    );

    let restored = board.find(&eid("task-1")).expect("task");
    assert_eq!(restored.parent_id(), Some(&eid("group-a")));
    assert!((restored.position().x - original.x).abs() < 1e-9);
    assert!((restored.position().y - original.y).abs() < 1e-9);
}

#[test]
fn candidate_tree_never_offers_the_moving_subtree() {
    let mut board = Board::new();
    board.add_element(group("group-1", "G1", Point::new(0.0, 0.0), None));
    board.add_element(group("group-2", "G2", Point::new(10.0, 10.0), Some("group-1")));
    board.add_element(group("group-3", "G3", Point::new(700.0, 0.0), None));

    let forest = reparent_candidates(&board, Some(&eid("group-1")));
    let offered: Vec<&str> = forest
        .iter()
        .map(|node| node.element_id().as_str())
        .collect();

    assert_eq!(offered, vec!["group-3"]);
}

#[test]
fn proposal_with_target_role_on_the_source_side_is_always_rejected() {
    let mut board = Board::new();

    let mut topic = TopicBody::new("Core");
    topic
        .handles_mut()
        .insert("port".to_owned(), HandleRole::Target);
    board.add_element(Element::new(
        eid("topic-1"),
        Point::ZERO,
        NodeBody::Topic(topic),
    ));

    let mut sink = TaskBody::new("Sink");
    sink.handles_mut()
        .insert("in".to_owned(), HandleRole::Target);
    let mut source = TaskBody::new("Source");
    source
        .handles_mut()
        .insert("out".to_owned(), HandleRole::Source);
    board.add_element(Element::new(
        eid("task-sink"),
        Point::ZERO,
        NodeBody::Task(sink),
    ));
    board.add_element(Element::new(
        eid("task-source"),
        Point::ZERO,
        NodeBody::Task(source),
    ));

    // The topic's "port" handle is declared target; using it as the source
    // side must fail no matter what the target side declares.
    for (target_id, target_handle) in [("task-sink", "in"), ("task-source", "out")] {
        let outcome = apply_op(
            &mut board,
            &RoadmapOp::Connect {
                proposal: ConnectionProposal {
                    source_id: eid("topic-1"),
                    source_handle: "port".to_owned(),
                    target_id: eid(target_id),
                    target_handle: target_handle.to_owned(),
                },
            },
        );
        assert_eq!(outcome.status, OpStatus::Rejected);
    }
    assert!(board.edges().is_empty());
}

#[test]
fn truncated_import_reports_and_preserves_the_previous_state() {
    let mut board = Board::new();
    board.add_element(group("group-1", "Phase One", Point::new(50.0, 50.0), None));
    board.add_element(task("task-1", Point::new(25.0, 20.0), Some("group-1")));
    let mut session = EditorSession::new(board);

    let exported = session.export_json().expect("export");
    let truncated = &exported[..exported.len() / 2];

    let error = session.import_json(truncated).expect_err("must fail");
    assert!(error.to_string().starts_with("cannot parse document"));

    let (elements, edges) = roadgraph::doc::parse_document(&exported).expect("original parses");
    assert_eq!(session.board().elements(), &elements[..]);
    assert_eq!(session.board().edges(), &edges[..]);
}

#[test]
fn menu_driven_workflow_keeps_the_board_consistent() {
    let mut board = Board::new();
    board.add_element(group("group-1", "Phase One", Point::new(50.0, 50.0), None));
    board.add_element(task("task-1", Point::new(25.0, 20.0), Some("group-1")));
    let mut session = EditorSession::new(board);

    // Copy the contained task, then move the copy to the top level.
    session.open_node_menu(&eid("task-1"), Point::new(120.0, 90.0));
    let outcome = session.menu_action(MenuAction::Copy).expect("copy outcome");
    let copy_id = match outcome.created {
        Some(roadgraph::ops::ChangeTarget::Node(ref id)) => id.clone(),
        _ => panic!("copy must create a node"),
    };
    let copy_absolute = absolute_position_of(session.board(), &copy_id).expect("copy");

    session.open_node_menu(&copy_id, Point::new(120.0, 90.0));
    session.menu_action(MenuAction::Transfer);
    session.confirm_transfer(None).expect("transfer outcome");

    let copy = session.board().find(&copy_id).expect("copy survives");
    assert_eq!(copy.parent_id(), None);
    assert_eq!(
        absolute_position_of(session.board(), &copy_id),
        Some(copy_absolute)
    );

    // Delete the group; the original task is promoted and still selectable.
    session.click_node(&eid("group-1"));
    session.open_node_menu(&eid("group-1"), Point::new(60.0, 60.0));
    session.menu_action(MenuAction::Delete).expect("delete outcome");

    assert_eq!(session.selection(), &Selection::None);
    let task = session.board().find(&eid("task-1")).expect("task");
    assert_eq!(task.position(), Point::new(75.0, 70.0));
    assert_containment_acyclic(session.board());
}
