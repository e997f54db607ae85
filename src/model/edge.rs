// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Roadgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Roadgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};

use super::ids::{EdgeId, ElementId};

/// End marker drawn at the target side of an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeMarker {
    Arrow,
    #[serde(rename = "arrowclosed")]
    ArrowClosed,
}

/// A connection between two named handles.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    edge_id: EdgeId,
    source_id: ElementId,
    source_handle: String,
    target_id: ElementId,
    target_handle: String,
    marker_end: Option<EdgeMarker>,
}

impl Edge {
    pub fn new(
        edge_id: EdgeId,
        source_id: ElementId,
        source_handle: impl Into<String>,
        target_id: ElementId,
        target_handle: impl Into<String>,
    ) -> Self {
        Self {
            edge_id,
            source_id,
            source_handle: source_handle.into(),
            target_id,
            target_handle: target_handle.into(),
            marker_end: None,
        }
    }

    pub fn new_with(
        edge_id: EdgeId,
        source_id: ElementId,
        source_handle: impl Into<String>,
        target_id: ElementId,
        target_handle: impl Into<String>,
        marker_end: Option<EdgeMarker>,
    ) -> Self {
        Self {
            edge_id,
            source_id,
            source_handle: source_handle.into(),
            target_id,
            target_handle: target_handle.into(),
            marker_end,
        }
    }

    pub fn edge_id(&self) -> &EdgeId {
        &self.edge_id
    }

    pub fn source_id(&self) -> &ElementId {
        &self.source_id
    }

    pub fn source_handle(&self) -> &str {
        &self.source_handle
    }

    pub fn target_id(&self) -> &ElementId {
        &self.target_id
    }

    pub fn target_handle(&self) -> &str {
        &self.target_handle
    }

    pub fn marker_end(&self) -> Option<EdgeMarker> {
        self.marker_end
    }

    pub fn set_marker_end(&mut self, marker_end: Option<EdgeMarker>) {
        self.marker_end = marker_end;
    }

    /// True when either endpoint references the given element.
    pub fn touches(&self, element_id: &ElementId) -> bool {
        &self.source_id == element_id || &self.target_id == element_id
    }
}

#[cfg(test)]
mod tests {
    use super::{Edge, EdgeMarker};
    use crate::model::ids::{EdgeId, ElementId};

    #[test]
    fn edge_can_be_constructed_and_updated() {
        let source = ElementId::new("topic-1").expect("source id");
        let target = ElementId::new("task-1").expect("target id");
        let mut edge = Edge::new(
            EdgeId::new("edge-1").expect("edge id"),
            source.clone(),
            "out",
            target.clone(),
            "in",
        );

        assert_eq!(edge.source_id(), &source);
        assert_eq!(edge.source_handle(), "out");
        assert_eq!(edge.target_id(), &target);
        assert_eq!(edge.target_handle(), "in");
        assert_eq!(edge.marker_end(), None);

        edge.set_marker_end(Some(EdgeMarker::ArrowClosed));
        assert_eq!(edge.marker_end(), Some(EdgeMarker::ArrowClosed));

        assert!(edge.touches(&source));
        assert!(edge.touches(&target));
        assert!(!edge.touches(&ElementId::new("group-1").expect("id")));
    }
}
