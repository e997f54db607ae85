// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Roadgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Roadgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::board::Board;
use super::edge::{Edge, EdgeMarker};
use super::element::{
    Element, GroupBody, HandleRole, NodeBody, TaskBody, TopicBody,
};
use super::geometry::{Point, Size};
use super::ids::{EdgeId, ElementId};

pub(crate) fn eid(value: &str) -> ElementId {
    ElementId::new(value).expect("element id")
}

pub(crate) fn edge_id(value: &str) -> EdgeId {
    EdgeId::new(value).expect("edge id")
}

/// The starter roadmap: one topic, one group with a confined task inside.
pub(crate) fn board_phase_one() -> Board {
    let mut board = Board::new();

    let mut topic = TopicBody::new("My Roadmap Core");
    topic.handles_mut().insert("out".to_owned(), HandleRole::Source);
    board.add_element(Element::new(
        eid("topic-1"),
        Point::new(450.0, 50.0),
        NodeBody::Topic(topic),
    ));

    let mut task = TaskBody::new("Complete Project Deployment");
    task.handles_mut().insert("in".to_owned(), HandleRole::Target);
    board.add_element(Element::new_with(
        eid("task-1"),
        Point::new(25.0, 70.0),
        Some(eid("group-1")),
        true,
        None,
        None,
        NodeBody::Task(task),
    ));

    board.add_element(Element::new_with(
        eid("group-1"),
        Point::new(50.0, 50.0),
        None,
        false,
        Some(Size::new(350.0, 200.0)),
        Some(-1),
        NodeBody::Group(GroupBody::new("Phase One")),
    ));

    board
}

/// Same starter roadmap with one edge from the topic into the task.
pub(crate) fn board_phase_one_connected() -> Board {
    let mut board = board_phase_one();
    board.add_edge(Edge::new_with(
        edge_id("edge-1"),
        eid("topic-1"),
        "out",
        eid("task-1"),
        "in",
        Some(EdgeMarker::ArrowClosed),
    ));
    board
}

/// Two nested groups with a task leaf inside the inner one:
/// outer(10,10) > inner(30,40) > task(5,5).
pub(crate) fn board_nested_groups() -> Board {
    let mut board = Board::new();

    board.add_element(Element::new_with(
        eid("group-outer"),
        Point::new(10.0, 10.0),
        None,
        false,
        Some(Size::new(600.0, 400.0)),
        Some(-1),
        NodeBody::Group(GroupBody::new("Outer")),
    ));
    board.add_element(Element::new_with(
        eid("group-inner"),
        Point::new(30.0, 40.0),
        Some(eid("group-outer")),
        true,
        Some(Size::new(300.0, 200.0)),
        Some(-1),
        NodeBody::Group(GroupBody::new("Inner")),
    ));
    board.add_element(Element::new_with(
        eid("task-leaf"),
        Point::new(5.0, 5.0),
        Some(eid("group-inner")),
        true,
        None,
        None,
        NodeBody::Task(TaskBody::new("Leaf")),
    ));
    board.add_element(Element::new_with(
        eid("group-free"),
        Point::new(500.0, 10.0),
        None,
        false,
        Some(Size::new(300.0, 200.0)),
        Some(-1),
        NodeBody::Group(GroupBody::new("Free")),
    ));

    board
}
