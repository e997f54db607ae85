// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Roadgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Roadgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use roadgraph::model::{
    Board, Element, ElementId, GroupBody, NodeBody, Point, Size, TaskBody,
};

fn eid(value: String) -> ElementId {
    ElementId::new(value).expect("bench element id")
}

fn group_at(id: String, position: Point, parent: Option<ElementId>) -> Element {
    let confined = parent.is_some();
    Element::new_with(
        eid(id.clone()),
        position,
        parent,
        confined,
        Some(Size::new(400.0, 300.0)),
        Some(-1),
        NodeBody::Group(GroupBody::new(id)),
    )
}

fn task_at(id: String, position: Point, parent: Option<ElementId>) -> Element {
    let confined = parent.is_some();
    Element::new_with(
        eid(id.clone()),
        position,
        parent,
        confined,
        None,
        None,
        NodeBody::Task(TaskBody::new(id)),
    )
}

/// `groups` top-level groups in a grid, each containing `tasks_per_group`
/// tasks.
pub fn wide_board(groups: usize, tasks_per_group: usize) -> Board {
    let mut board = Board::new();
    for g in 0..groups {
        let group_id = eid(format!("group_{g:04}"));
        let origin = Point::new((g % 16) as f64 * 450.0, (g / 16) as f64 * 350.0);
        board.add_element(group_at(format!("group_{g:04}"), origin, None));

        for t in 0..tasks_per_group {
            board.add_element(task_at(
                format!("task_{g:04}_{t:04}"),
                Point::new((t % 8) as f64 * 48.0, (t / 8) as f64 * 36.0),
                Some(group_id.clone()),
            ));
        }
    }
    board
}

/// A chain of `depth` nested groups with one task at the bottom.
pub fn deep_board(depth: usize) -> Board {
    let mut board = Board::new();
    let mut parent: Option<ElementId> = None;
    for level in 0..depth {
        let id = format!("group_{level:04}");
        board.add_element(group_at(
            id.clone(),
            Point::new(10.0, 10.0),
            parent.clone(),
        ));
        parent = Some(eid(id));
    }
    board.add_element(task_at("task_bottom".to_owned(), Point::new(5.0, 5.0), parent));
    board
}

pub fn checksum_board(board: &Board) -> u64 {
    let mut acc = 0u64;
    for element in board.elements() {
        acc = acc
            .wrapping_mul(131)
            .wrapping_add(element.element_id().as_str().len() as u64);
        acc = acc
            .wrapping_mul(131)
            .wrapping_add(element.position().x.to_bits());
        acc = acc
            .wrapping_mul(131)
            .wrapping_add(u64::from(element.parent_id().is_some()));
    }
    acc.wrapping_mul(131).wrapping_add(board.edges().len() as u64)
}
