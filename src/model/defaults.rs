// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Roadgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Roadgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Node-creation factory: default payloads per kind and generated ids.

use uuid::Uuid;

use super::element::{
    Element, GroupBody, ListBody, ListItem, NodeBody, NodeKind, Status, TaskBody, TextBody,
    TopicBody,
};
use super::geometry::{Point, Size};
use super::ids::{EdgeId, ElementId};

/// Fresh groups get this footprint so they can receive children right away.
pub const GROUP_DEFAULT_SIZE: Size = Size {
    width: 400.0,
    height: 300.0,
};

/// Groups stack below their contained elements.
pub const GROUP_STACKING_ORDER: i32 = -1;

/// Copies land slightly offset from their source.
pub const COPY_OFFSET: f64 = 20.0;

pub fn fresh_element_id(kind: NodeKind) -> ElementId {
    ElementId::new(format!("{kind}-{}", Uuid::new_v4()))
        .expect("kind prefix and uuid form a valid id token")
}

pub fn fresh_edge_id() -> EdgeId {
    EdgeId::new(format!("edge-{}", Uuid::new_v4()))
        .expect("edge prefix and uuid form a valid id token")
}

/// Default payload for a freshly added node of the given kind.
pub fn default_body(kind: NodeKind) -> NodeBody {
    match kind {
        NodeKind::Text => NodeBody::Text(TextBody::new("Text")),
        NodeKind::Topic => {
            let mut body = TopicBody::new("New Topic");
            body.set_description("A core topic...");
            NodeBody::Topic(body)
        }
        NodeKind::Task => NodeBody::Task(TaskBody::new("New Task")),
        NodeKind::List => {
            let mut body = ListBody::new("List");
            body.items_mut().push(ListItem::new(
                Uuid::new_v4().to_string(),
                "Item 1",
                Status::Todo,
            ));
            NodeBody::List(body)
        }
        NodeKind::Group => NodeBody::Group(GroupBody::new("New Group")),
    }
}

/// Builds a complete fresh element at a canvas-absolute position. Groups
/// additionally get their default size and stacking order.
pub fn new_element(kind: NodeKind, position: Point) -> Element {
    let mut element = Element::new(fresh_element_id(kind), position, default_body(kind));
    if kind == NodeKind::Group {
        element.set_size(Some(GROUP_DEFAULT_SIZE));
        element.set_z_index(Some(GROUP_STACKING_ORDER));
    }
    element
}
