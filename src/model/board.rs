// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Roadgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Roadgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeSet;

use super::edge::Edge;
use super::element::Element;
use super::ids::{EdgeId, ElementId};

/// The canonical element/edge collection one editing session works on.
///
/// Elements and edges keep their insertion order; the exported document is
/// order-sensitive. The revision counter is bumped by callers once per
/// committed update, so dependent reads can observe the ordering of
/// multi-commit operations (notably the two-phase group delete).
#[derive(Debug, Clone, Default)]
pub struct Board {
    elements: Vec<Element>,
    edges: Vec<Edge>,
    rev: u64,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn rev(&self) -> u64 {
        self.rev
    }

    /// Marks one committed update. Called by the ops/session layer, never
    /// by the accessors below.
    pub fn bump_rev(&mut self) {
        self.rev = self.rev.saturating_add(1);
    }

    pub fn find(&self, element_id: &ElementId) -> Option<&Element> {
        self.elements
            .iter()
            .find(|element| element.element_id() == element_id)
    }

    pub fn find_mut(&mut self, element_id: &ElementId) -> Option<&mut Element> {
        self.elements
            .iter_mut()
            .find(|element| element.element_id() == element_id)
    }

    pub fn contains(&self, element_id: &ElementId) -> bool {
        self.find(element_id).is_some()
    }

    pub fn find_edge(&self, edge_id: &EdgeId) -> Option<&Edge> {
        self.edges.iter().find(|edge| edge.edge_id() == edge_id)
    }

    pub fn add_element(&mut self, element: Element) {
        self.elements.push(element);
    }

    pub fn add_edge(&mut self, edge: Edge) {
        self.edges.push(edge);
    }

    /// Removes the listed elements. Edges are untouched; the ops layer
    /// decides what happens to incident edges.
    pub fn remove_elements(&mut self, element_ids: &[ElementId]) -> usize {
        let doomed: BTreeSet<&ElementId> = element_ids.iter().collect();
        let before = self.elements.len();
        self.elements
            .retain(|element| !doomed.contains(element.element_id()));
        before - self.elements.len()
    }

    pub fn remove_edges(&mut self, edge_ids: &[EdgeId]) -> usize {
        let doomed: BTreeSet<&EdgeId> = edge_ids.iter().collect();
        let before = self.edges.len();
        self.edges.retain(|edge| !doomed.contains(edge.edge_id()));
        before - self.edges.len()
    }

    /// Swaps in a whole new collection (import). No validation beyond
    /// structural shape; the caller owns the containment invariants.
    pub fn replace_all(&mut self, elements: Vec<Element>, edges: Vec<Edge>) {
        self.elements = elements;
        self.edges = edges;
    }

    /// All elements whose container reference equals `container_id`, in
    /// board order.
    pub fn list_containing<'a>(
        &'a self,
        container_id: &'a ElementId,
    ) -> impl Iterator<Item = &'a Element> {
        self.elements
            .iter()
            .filter(move |element| element.parent_id() == Some(container_id))
    }

    /// All edges with an endpoint on the given element, in board order.
    pub fn edges_touching<'a>(
        &'a self,
        element_id: &'a ElementId,
    ) -> impl Iterator<Item = &'a Edge> {
        self.edges.iter().filter(move |edge| edge.touches(element_id))
    }
}
