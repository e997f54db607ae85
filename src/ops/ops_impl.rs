// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Roadgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Roadgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// Per-op implementation helpers used by `apply_op`.
/// Keeps `ops::mod` focused on public op types and orchestration.
fn apply_add_node(
    board: &mut Board,
    kind: NodeKind,
    position: Point,
    delta: &mut DeltaBuilder,
    created: &mut Option<ChangeTarget>,
) -> OpStatus {
    let element = crate::model::new_element(kind, position);
    let element_id = element.element_id().clone();

    board.add_element(element);
    board.bump_rev();

    delta.record_added(ChangeTarget::Node(element_id.clone()));
    *created = Some(ChangeTarget::Node(element_id));
    OpStatus::Applied
}

fn apply_copy_node(
    board: &mut Board,
    node_id: &ElementId,
    delta: &mut DeltaBuilder,
    created: &mut Option<ChangeTarget>,
) -> OpStatus {
    let Some(node) = board.find(node_id) else {
        log::warn!("copy skipped, node {node_id} is gone");
        return OpStatus::SkippedStale;
    };

    let new_id = crate::model::fresh_element_id(node.kind());
    let position = node
        .position()
        .offset(crate::model::COPY_OFFSET, crate::model::COPY_OFFSET);
    let parent_id = node.parent_id().cloned();
    let copy = Element::new_with(
        new_id.clone(),
        position,
        parent_id.clone(),
        parent_id.is_some(),
        node.size(),
        node.z_index(),
        node.body().clone(),
    );

    board.add_element(copy);
    board.bump_rev();

    delta.record_added(ChangeTarget::Node(new_id.clone()));
    *created = Some(ChangeTarget::Node(new_id));
    OpStatus::Applied
}

fn apply_delete_node(
    board: &mut Board,
    node_id: &ElementId,
    delta: &mut DeltaBuilder,
) -> OpStatus {
    let Some(node) = board.find(node_id) else {
        log::warn!("delete skipped, node {node_id} is gone");
        return OpStatus::SkippedStale;
    };

    let node_position = node.position();
    let child_ids: Vec<ElementId> = if node.kind() == NodeKind::Group {
        board
            .list_containing(node_id)
            .map(|child| child.element_id().clone())
            .collect()
    } else {
        Vec::new()
    };

    if !child_ids.is_empty() {
        // First commit: promote the children out of the doomed container.
        // Container-aware views resolve a child's screen position through
        // its parent, so the reframe must be committed before the parent
        // disappears; the two commits are never merged.
        for child_id in &child_ids {
            let child = board.find_mut(child_id).expect("child listed above");
            let promoted = child.position() + node_position;
            child.assign_frame(promoted, None);
            delta.record_updated(ChangeTarget::Node(child_id.clone()));
        }
        board.bump_rev();
        log::debug!(
            "promoted {} children of group {node_id} before removal",
            child_ids.len()
        );
    }

    // Second commit: drop the node and every incident edge.
    let edge_ids: Vec<EdgeId> = board
        .edges_touching(node_id)
        .map(|edge| edge.edge_id().clone())
        .collect();
    board.remove_edges(&edge_ids);
    board.remove_elements(std::slice::from_ref(node_id));
    board.bump_rev();

    for edge_id in edge_ids {
        delta.record_removed(ChangeTarget::Edge(edge_id));
    }
    delta.record_removed(ChangeTarget::Node(node_id.clone()));
    OpStatus::Applied
}

fn apply_delete_edge(board: &mut Board, edge_id: &EdgeId, delta: &mut DeltaBuilder) -> OpStatus {
    if board.remove_edges(std::slice::from_ref(edge_id)) == 0 {
        log::warn!("delete skipped, edge {edge_id} is gone");
        return OpStatus::SkippedStale;
    }
    board.bump_rev();

    delta.record_removed(ChangeTarget::Edge(edge_id.clone()));
    OpStatus::Applied
}

fn apply_transfer_node(
    board: &mut Board,
    node_id: &ElementId,
    new_parent_id: Option<&ElementId>,
    delta: &mut DeltaBuilder,
) -> OpStatus {
    let Some(node) = board.find(node_id) else {
        log::warn!("transfer skipped, node {node_id} is gone");
        return OpStatus::SkippedStale;
    };

    if let Some(parent_id) = new_parent_id {
        let Some(parent) = board.find(parent_id) else {
            log::warn!("transfer skipped, container {parent_id} is gone");
            return OpStatus::SkippedStale;
        };
        if parent.kind() != NodeKind::Group {
            return OpStatus::Rejected;
        }
        // The candidate tree already excludes the subtree; re-checking here
        // keeps containment acyclic for callers that bypass it.
        if contained_subtree(board, node_id).contains(parent_id) {
            return OpStatus::Rejected;
        }
    }

    let absolute = absolute_position(board, node);
    let relative = relative_position(board, absolute, new_parent_id);

    let node = board
        .find_mut(node_id)
        .expect("node existence checked above");
    node.assign_frame(relative, new_parent_id.cloned());
    board.bump_rev();

    delta.record_updated(ChangeTarget::Node(node_id.clone()));
    OpStatus::Applied
}

fn apply_connect(
    board: &mut Board,
    proposal: &ConnectionProposal,
    delta: &mut DeltaBuilder,
    created: &mut Option<ChangeTarget>,
) -> OpStatus {
    if !connection_allowed(board, proposal) {
        log::debug!(
            "connection rejected ({} -> {})",
            proposal.source_id,
            proposal.target_id
        );
        return OpStatus::Rejected;
    }

    let edge_id = crate::model::fresh_edge_id();
    board.add_edge(Edge::new_with(
        edge_id.clone(),
        proposal.source_id.clone(),
        proposal.source_handle.clone(),
        proposal.target_id.clone(),
        proposal.target_handle.clone(),
        Some(EdgeMarker::ArrowClosed),
    ));
    board.bump_rev();

    delta.record_added(ChangeTarget::Edge(edge_id.clone()));
    *created = Some(ChangeTarget::Edge(edge_id));
    OpStatus::Applied
}

fn apply_update_node(
    board: &mut Board,
    node_id: &ElementId,
    patch: &NodePatch,
    delta: &mut DeltaBuilder,
) -> OpStatus {
    let Some(node) = board.find_mut(node_id) else {
        log::warn!("update skipped, node {node_id} is gone");
        return OpStatus::SkippedStale;
    };

    apply_patch(node.body_mut(), patch);
    board.bump_rev();

    delta.record_updated(ChangeTarget::Node(node_id.clone()));
    OpStatus::Applied
}

fn apply_patch(body: &mut crate::model::NodeBody, patch: &NodePatch) {
    use crate::model::NodeBody;

    if let Some(label) = &patch.label {
        body.set_label(label.clone());
    }
    if let Some(handles) = &patch.handles {
        if let Some(existing) = body.handles_mut() {
            *existing = handles.clone();
        }
    }

    match body {
        NodeBody::Text(text) => {
            if let Some(text_align) = &patch.text_align {
                text.set_text_align(text_align.clone());
            }
        }
        NodeBody::Topic(topic) => {
            if let Some(description) = &patch.description {
                topic.set_description(description.clone());
            }
            if let Some(color) = patch.color {
                topic.set_color(color);
            }
            if let Some(status) = patch.status {
                topic.set_status(status);
            }
            if let Some(text_align) = &patch.text_align {
                topic.set_text_align(text_align.clone());
            }
        }
        NodeBody::Task(task) => {
            if let Some(url) = &patch.url {
                task.set_url(url.clone());
            }
            if let Some(color) = patch.color {
                task.set_color(color);
            }
            if let Some(status) = patch.status {
                task.set_status(status);
            }
        }
        NodeBody::List(list) => {
            if let Some(color) = patch.color {
                list.set_color(color);
            }
            if let Some(items) = &patch.items {
                list.set_items(items.clone());
            }
        }
        NodeBody::Group(group) => {
            if let Some(color) = patch.color {
                group.set_color(color);
            }
        }
    }
}

fn apply_move_node(
    board: &mut Board,
    node_id: &ElementId,
    position: Point,
    delta: &mut DeltaBuilder,
) -> OpStatus {
    let Some(node) = board.find_mut(node_id) else {
        log::warn!("move skipped, node {node_id} is gone");
        return OpStatus::SkippedStale;
    };

    node.set_position(position);
    board.bump_rev();

    delta.record_updated(ChangeTarget::Node(node_id.clone()));
    OpStatus::Applied
}
