// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Roadgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Roadgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! A Board holds the flat, ordered element/edge collections; elements carry
//! kind-tagged payloads and an optional container reference that decides
//! their coordinate frame.

pub mod board;
pub mod defaults;
pub mod edge;
pub mod element;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod geometry;
pub mod ids;

pub use board::Board;
pub use defaults::{
    default_body, fresh_edge_id, fresh_element_id, new_element, COPY_OFFSET, GROUP_DEFAULT_SIZE,
    GROUP_STACKING_ORDER,
};
pub use edge::{Edge, EdgeMarker};
pub use element::{
    ColorTheme, Element, GroupBody, HandleMap, HandleRole, ListBody, ListItem, NodeBody, NodeKind,
    Status, TaskBody, TextBody, TopicBody,
};
pub use geometry::{Point, Size, Viewport};
pub use ids::{EdgeId, ElementId, Id, IdError};
