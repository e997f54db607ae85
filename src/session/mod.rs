// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Roadgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Roadgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The editing-session controller.
//!
//! One `EditorSession` exists per editing session. It owns the Board, the
//! exclusive selection, the context-menu state, and the pending-transfer
//! target, and it dispatches UI events into `ops`. Selection is at most
//! one node or one edge; the menu target is independent of the
//! click-selection.

use crate::doc::{self, DocError};
use crate::model::{Board, EdgeId, ElementId, NodeKind, Point, Viewport};
use crate::ops::{apply_op, ApplyOutcome, NodePatch, RoadmapOp};
use crate::query::connect::ConnectionProposal;
use crate::query::reparent::{reparent_candidates, GroupTreeNode};

/// Exclusive click-selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    None,
    Node(ElementId),
    Edge(EdgeId),
}

impl Selection {
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::None)
    }

    pub fn node(&self) -> Option<&ElementId> {
        match self {
            Self::Node(element_id) => Some(element_id),
            _ => None,
        }
    }

    pub fn edge(&self) -> Option<&EdgeId> {
        match self {
            Self::Edge(edge_id) => Some(edge_id),
            _ => None,
        }
    }
}

/// What the open context menu points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuTarget {
    Node(ElementId),
    Edge(EdgeId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Copy,
    Delete,
    Transfer,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContextMenu {
    target: MenuTarget,
    screen_position: Point,
}

impl ContextMenu {
    pub fn target(&self) -> &MenuTarget {
        &self.target
    }

    pub fn screen_position(&self) -> Point {
        self.screen_position
    }
}

#[derive(Debug, Clone, Default)]
pub struct EditorSession {
    board: Board,
    selection: Selection,
    context_menu: Option<ContextMenu>,
    pending_transfer: Option<ElementId>,
}

impl EditorSession {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            selection: Selection::None,
            context_menu: None,
            pending_transfer: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn selection_active(&self) -> bool {
        !self.selection.is_empty()
    }

    pub fn context_menu(&self) -> Option<&ContextMenu> {
        self.context_menu.as_ref()
    }

    pub fn pending_transfer(&self) -> Option<&ElementId> {
        self.pending_transfer.as_ref()
    }

    pub fn transfer_dialog_open(&self) -> bool {
        self.pending_transfer.is_some()
    }

    // --- click surface -----------------------------------------------------

    pub fn click_pane(&mut self) {
        self.selection = Selection::None;
        self.context_menu = None;
    }

    pub fn click_node(&mut self, node_id: &ElementId) {
        self.context_menu = None;
        self.selection = if self.board.contains(node_id) {
            Selection::Node(node_id.clone())
        } else {
            Selection::None
        };
    }

    pub fn click_edge(&mut self, edge_id: &EdgeId) {
        self.context_menu = None;
        self.selection = if self.board.find_edge(edge_id).is_some() {
            Selection::Edge(edge_id.clone())
        } else {
            Selection::None
        };
    }

    pub fn deselect_all(&mut self) {
        self.selection = Selection::None;
    }

    // --- context menu ------------------------------------------------------

    /// Opens the menu over a node. Click-selection is left as it is; the
    /// menu carries its own target.
    pub fn open_node_menu(&mut self, node_id: &ElementId, screen_position: Point) {
        if !self.board.contains(node_id) {
            return;
        }
        self.context_menu = Some(ContextMenu {
            target: MenuTarget::Node(node_id.clone()),
            screen_position,
        });
    }

    pub fn open_edge_menu(&mut self, edge_id: &EdgeId, screen_position: Point) {
        if self.board.find_edge(edge_id).is_none() {
            return;
        }
        self.context_menu = Some(ContextMenu {
            target: MenuTarget::Edge(edge_id.clone()),
            screen_position,
        });
    }

    pub fn right_click_pane(&mut self) {
        self.context_menu = None;
    }

    pub fn close_menu(&mut self) {
        self.context_menu = None;
    }

    /// Dispatches a menu action against the menu's target, then closes the
    /// menu. Returns the op outcome when one was applied. `Transfer` only
    /// stashes the target and opens the reparent dialog; `Copy` and
    /// `Transfer` on an edge target do nothing.
    pub fn menu_action(&mut self, action: MenuAction) -> Option<ApplyOutcome> {
        let menu = self.context_menu.take()?;

        match (action, menu.target) {
            (MenuAction::Copy, MenuTarget::Node(node_id)) => {
                Some(apply_op(&mut self.board, &RoadmapOp::CopyNode { node_id }))
            }
            (MenuAction::Delete, MenuTarget::Node(node_id)) => {
                let outcome = apply_op(&mut self.board, &RoadmapOp::DeleteNode { node_id });
                self.drop_stale_selection();
                Some(outcome)
            }
            (MenuAction::Delete, MenuTarget::Edge(edge_id)) => {
                let outcome = apply_op(&mut self.board, &RoadmapOp::DeleteEdge { edge_id });
                self.drop_stale_selection();
                Some(outcome)
            }
            (MenuAction::Transfer, MenuTarget::Node(node_id)) => {
                self.pending_transfer = Some(node_id);
                None
            }
            (MenuAction::Copy | MenuAction::Transfer, MenuTarget::Edge(_)) => None,
        }
    }

    // --- transfer dialog ---------------------------------------------------

    /// Candidate containers for the pending transfer: every group outside
    /// the moving node's subtree.
    pub fn transfer_candidates(&self) -> Vec<GroupTreeNode> {
        reparent_candidates(&self.board, self.pending_transfer.as_ref())
    }

    /// Confirms the pending transfer into `new_parent_id` (`None` moves the
    /// node to the top level). A confirm without a pending target does
    /// nothing.
    pub fn confirm_transfer(&mut self, new_parent_id: Option<ElementId>) -> Option<ApplyOutcome> {
        let node_id = self.pending_transfer.take()?;
        Some(apply_op(
            &mut self.board,
            &RoadmapOp::TransferNode {
                node_id,
                new_parent_id,
            },
        ))
    }

    /// Closes the reparent dialog without touching the Board.
    pub fn cancel_transfer(&mut self) {
        self.pending_transfer = None;
    }

    // --- direct actions ----------------------------------------------------

    pub fn add_node(&mut self, kind: NodeKind, position: Point) -> ApplyOutcome {
        apply_op(&mut self.board, &RoadmapOp::AddNode { kind, position })
    }

    /// Places a fresh node at a screen position, converting through the
    /// host viewport.
    pub fn add_node_at_screen(
        &mut self,
        kind: NodeKind,
        screen: Point,
        viewport: &Viewport,
    ) -> ApplyOutcome {
        self.add_node(kind, viewport.screen_to_canvas(screen))
    }

    pub fn connect(&mut self, proposal: ConnectionProposal) -> ApplyOutcome {
        apply_op(&mut self.board, &RoadmapOp::Connect { proposal })
    }

    /// Deletes whatever is click-selected, then clears the selection.
    pub fn delete_selection(&mut self) -> Option<ApplyOutcome> {
        match std::mem::take(&mut self.selection) {
            Selection::None => None,
            Selection::Node(node_id) => {
                Some(apply_op(&mut self.board, &RoadmapOp::DeleteNode { node_id }))
            }
            Selection::Edge(edge_id) => {
                Some(apply_op(&mut self.board, &RoadmapOp::DeleteEdge { edge_id }))
            }
        }
    }

    /// Patches the click-selected node's payload.
    pub fn update_selected(&mut self, patch: NodePatch) -> Option<ApplyOutcome> {
        let node_id = self.selection.node()?.clone();
        Some(apply_op(
            &mut self.board,
            &RoadmapOp::UpdateNode { node_id, patch },
        ))
    }

    // --- document ----------------------------------------------------------

    pub fn export_json(&self) -> Result<String, DocError> {
        doc::export_document(&self.board)
    }

    /// Replaces the whole collection from a JSON document. On success the
    /// selection, menu, and pending transfer are cleared (every prior
    /// target id is stale by construction); on failure nothing changes.
    pub fn import_json(&mut self, text: &str) -> Result<(), DocError> {
        doc::import_document(&mut self.board, text)?;
        self.board.bump_rev();
        self.selection = Selection::None;
        self.context_menu = None;
        self.pending_transfer = None;
        log::debug!(
            "imported document with {} elements and {} edges",
            self.board.elements().len(),
            self.board.edges().len()
        );
        Ok(())
    }

    fn drop_stale_selection(&mut self) {
        let stale = match &self.selection {
            Selection::None => false,
            Selection::Node(node_id) => !self.board.contains(node_id),
            Selection::Edge(edge_id) => self.board.find_edge(edge_id).is_none(),
        };
        if stale {
            self.selection = Selection::None;
        }
    }
}
