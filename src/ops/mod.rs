// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Roadgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Roadgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Containment mutations for the roadmap board.
//!
//! Each op applies as one or more explicitly ordered commits and yields a
//! minimal delta the embedding UI uses to refresh derived state. Stale
//! targets and illegal connections are reported in the outcome status, not
//! as errors; nothing here panics or partially applies.

use std::collections::HashSet;

use crate::model::{
    ColorTheme, EdgeId, ElementId, HandleMap, ListItem, NodeKind, Point, Status,
};
use crate::model::{Board, Edge, EdgeMarker, Element};
use crate::query::connect::{connection_allowed, ConnectionProposal};
use crate::query::position::{absolute_position, relative_position};
use crate::query::reparent::contained_subtree;

#[derive(Debug, Clone, PartialEq)]
pub enum RoadmapOp {
    /// Create a fresh node from the kind's factory defaults at a
    /// canvas-absolute position.
    AddNode { kind: NodeKind, position: Point },
    /// Clone a node: new id, offset position, deep-copied payload, same
    /// container reference.
    CopyNode { node_id: ElementId },
    /// Remove a node; a group with children first promotes them to the
    /// canvas in a commit of its own. Incident edges go with the node.
    DeleteNode { node_id: ElementId },
    DeleteEdge { edge_id: EdgeId },
    /// Move a node into another container (or to the top level), keeping
    /// its canvas-absolute position unchanged.
    TransferNode {
        node_id: ElementId,
        new_parent_id: Option<ElementId>,
    },
    /// Create an edge if the proposal passes handle-role validation.
    Connect { proposal: ConnectionProposal },
    /// Patch payload fields; fields the node's kind does not carry are
    /// ignored.
    UpdateNode {
        node_id: ElementId,
        patch: NodePatch,
    },
    /// Reposition within the node's current frame (drag).
    MoveNode {
        node_id: ElementId,
        position: Point,
    },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodePatch {
    pub label: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub color: Option<ColorTheme>,
    pub status: Option<Status>,
    pub text_align: Option<String>,
    pub handles: Option<HandleMap>,
    pub items: Option<Vec<ListItem>>,
}

/// What an op application did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpStatus {
    Applied,
    /// The target id no longer resolves; nothing was mutated.
    SkippedStale,
    /// The op was structurally refused (illegal connection, transfer into
    /// the own subtree or a non-group); nothing was mutated.
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ChangeTarget {
    Node(ElementId),
    Edge(EdgeId),
}

/// Minimal delta describing which items changed as the result of one op.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Delta {
    pub added: Vec<ChangeTarget>,
    pub removed: Vec<ChangeTarget>,
    pub updated: Vec<ChangeTarget>,
}

impl Delta {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.updated.is_empty()
    }
}

#[derive(Debug, Default)]
struct DeltaBuilder {
    added: HashSet<ChangeTarget>,
    removed: HashSet<ChangeTarget>,
    updated: HashSet<ChangeTarget>,
}

impl DeltaBuilder {
    fn record_added(&mut self, target: ChangeTarget) {
        self.removed.remove(&target);
        self.updated.remove(&target);
        self.added.insert(target);
    }

    fn record_removed(&mut self, target: ChangeTarget) {
        self.added.remove(&target);
        self.updated.remove(&target);
        self.removed.insert(target);
    }

    fn record_updated(&mut self, target: ChangeTarget) {
        if self.added.contains(&target) || self.removed.contains(&target) {
            return;
        }
        self.updated.insert(target);
    }

    fn finish(self) -> Delta {
        let mut added = self.added.into_iter().collect::<Vec<_>>();
        let mut removed = self.removed.into_iter().collect::<Vec<_>>();
        let mut updated = self.updated.into_iter().collect::<Vec<_>>();

        added.sort();
        removed.sort();
        updated.sort();

        Delta {
            added,
            removed,
            updated,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyOutcome {
    pub status: OpStatus,
    pub delta: Delta,
    /// The id minted by AddNode/CopyNode/Connect, if any.
    pub created: Option<ChangeTarget>,
}

impl ApplyOutcome {
    pub fn applied(&self) -> bool {
        self.status == OpStatus::Applied
    }
}

pub fn apply_op(board: &mut Board, op: &RoadmapOp) -> ApplyOutcome {
    let mut delta = DeltaBuilder::default();
    let mut created = None;

    let status = match op {
        RoadmapOp::AddNode { kind, position } => {
            apply_add_node(board, *kind, *position, &mut delta, &mut created)
        }
        RoadmapOp::CopyNode { node_id } => {
            apply_copy_node(board, node_id, &mut delta, &mut created)
        }
        RoadmapOp::DeleteNode { node_id } => apply_delete_node(board, node_id, &mut delta),
        RoadmapOp::DeleteEdge { edge_id } => apply_delete_edge(board, edge_id, &mut delta),
        RoadmapOp::TransferNode {
            node_id,
            new_parent_id,
        } => apply_transfer_node(board, node_id, new_parent_id.as_ref(), &mut delta),
        RoadmapOp::Connect { proposal } => {
            apply_connect(board, proposal, &mut delta, &mut created)
        }
        RoadmapOp::UpdateNode { node_id, patch } => {
            apply_update_node(board, node_id, patch, &mut delta)
        }
        RoadmapOp::MoveNode { node_id, position } => {
            apply_move_node(board, node_id, *position, &mut delta)
        }
    };

    ApplyOutcome {
        status,
        delta: delta.finish(),
        created,
    }
}

// Extracted op-application implementation for board mutations.
include!("ops_impl.rs");
