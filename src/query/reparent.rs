// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Roadgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Roadgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Reparent-candidate tree: which groups may become the new container of a
//! node mid-transfer. The moving node and everything it transitively
//! contains are excluded; re-parenting into the own subtree would create a
//! containment cycle.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use crate::model::{Board, ElementId, NodeKind};

/// One group in the candidate forest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupTreeNode {
    element_id: ElementId,
    label: String,
    children: Vec<GroupTreeNode>,
}

impl GroupTreeNode {
    pub fn element_id(&self) -> &ElementId {
        &self.element_id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn children(&self) -> &[GroupTreeNode] {
        &self.children
    }
}

/// The moving node plus every element transitively contained by it.
///
/// Breadth-first over container references; the visited set makes the walk
/// terminate even on a corrupt (cyclic) import.
pub(crate) fn contained_subtree(board: &Board, root: &ElementId) -> BTreeSet<ElementId> {
    let mut visited: BTreeSet<ElementId> = BTreeSet::new();
    visited.insert(root.clone());

    let mut queue: VecDeque<ElementId> = VecDeque::new();
    queue.push_back(root.clone());

    while let Some(current) = queue.pop_front() {
        for child in board.list_containing(&current) {
            if visited.insert(child.element_id().clone()) {
                queue.push_back(child.element_id().clone());
            }
        }
    }

    visited
}

/// Builds the candidate forest for the node currently being transferred
/// (`moving = None` yields the full group forest). Board order is
/// preserved among siblings and roots. Recomputed on demand; the result
/// depends on which node is mid-transfer, so it is never cached.
pub fn reparent_candidates(board: &Board, moving: Option<&ElementId>) -> Vec<GroupTreeNode> {
    let excluded = match moving {
        Some(moving) => contained_subtree(board, moving),
        None => BTreeSet::new(),
    };

    let kept: Vec<&ElementId> = board
        .elements()
        .iter()
        .filter(|element| element.kind() == NodeKind::Group)
        .map(|element| element.element_id())
        .filter(|&element_id| !excluded.contains(element_id))
        .collect();
    let kept_set: BTreeSet<&ElementId> = kept.iter().copied().collect();

    let mut roots: Vec<&ElementId> = Vec::new();
    let mut children: BTreeMap<&ElementId, Vec<&ElementId>> = BTreeMap::new();
    for &element_id in &kept {
        let parent = board
            .find(element_id)
            .and_then(|element| element.parent_id())
            .filter(|parent_id| kept_set.contains(parent_id));
        match parent {
            Some(parent_id) => children.entry(parent_id).or_default().push(element_id),
            None => roots.push(element_id),
        }
    }

    roots
        .into_iter()
        .map(|root| build_node(board, root, &children))
        .collect()
}

fn build_node(
    board: &Board,
    element_id: &ElementId,
    children: &BTreeMap<&ElementId, Vec<&ElementId>>,
) -> GroupTreeNode {
    let label = board
        .find(element_id)
        .map(|element| element.body().label().to_owned())
        .unwrap_or_default();

    let child_nodes = children
        .get(element_id)
        .into_iter()
        .flatten()
        .map(|&child_id| build_node(board, child_id, children))
        .collect();

    GroupTreeNode {
        element_id: element_id.clone(),
        label,
        children: child_nodes,
    }
}
