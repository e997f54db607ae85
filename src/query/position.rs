// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Roadgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Roadgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Frame arithmetic between container-relative and canvas-absolute
//! positions. Every structural operation goes through these two functions;
//! no other code adds or subtracts container origins.

use crate::model::{Board, Element, ElementId, Point};

/// Canvas-absolute position of an element: its own position composed with
/// every container origin up the parent chain.
///
/// The walk is bounded by the element count, so a cyclic container chain
/// (possible only through an invalid import) terminates instead of
/// hanging; a dangling container reference ends the walk early.
pub fn absolute_position(board: &Board, element: &Element) -> Point {
    let mut acc = element.position();
    let mut parent_id = element.parent_id();
    let mut hops = board.elements().len();

    while let Some(current) = parent_id {
        if hops == 0 {
            break;
        }
        hops -= 1;

        let Some(parent) = board.find(current) else {
            break;
        };
        acc = acc + parent.position();
        parent_id = parent.parent_id();
    }

    acc
}

pub fn absolute_position_of(board: &Board, element_id: &ElementId) -> Option<Point> {
    board
        .find(element_id)
        .map(|element| absolute_position(board, element))
}

/// Rewrites a canvas-absolute position into the frame of `container`
/// (or returns it unchanged when no container is given). Inverse of
/// [`absolute_position`] for any existing container.
pub fn relative_position(
    board: &Board,
    absolute: Point,
    container: Option<&ElementId>,
) -> Point {
    match container.and_then(|container_id| board.find(container_id)) {
        Some(parent) => absolute - absolute_position(board, parent),
        None => absolute,
    }
}
