//! Mutable weighted graph supporting vertex contraction.
//!
//! One instance per working view (structural adjacency, lifted affinity,
//! dual potential), all keyed by the same fixed vertex index space. The
//! adjacency is symmetric by construction: every update writes both
//! directions. Ordered neighbor maps keep iteration, and therefore the
//! whole run, deterministic.

use std::collections::BTreeMap;

use crate::value::AffinityValue;

/// Adjacency-map-of-maps plus a scalar weight per vertex.
///
/// The index space is fixed at construction; contraction only ever folds
/// vertices away via [`ContractionGraph::remove_vertex`].
#[derive(Clone, Debug)]
pub(crate) struct ContractionGraph<V> {
    adjacency: Vec<BTreeMap<usize, V>>,
    vertex_weights: Vec<V>,
}

impl<V: AffinityValue> ContractionGraph<V> {
    pub(crate) fn new(vertex_count: usize) -> Self {
        Self {
            adjacency: vec![BTreeMap::new(); vertex_count],
            vertex_weights: vec![V::ZERO; vertex_count],
        }
    }

    pub(crate) fn edge_exists(&self, a: usize, b: usize) -> bool {
        self.adjacency[a].contains_key(&b)
    }

    /// Read-only view of `v`'s current incidence, ordered by neighbor index.
    pub(crate) fn neighbors(&self, v: usize) -> &BTreeMap<usize, V> {
        &self.adjacency[v]
    }

    pub(crate) fn degree(&self, v: usize) -> usize {
        self.adjacency[v].len()
    }

    /// Returns the edge weight, or `None` when the edge does not exist.
    pub(crate) fn weight(&self, a: usize, b: usize) -> Option<V> {
        self.adjacency[a].get(&b).copied()
    }

    /// Inserts or overwrites the edge in both directions.
    pub(crate) fn set_weight(&mut self, a: usize, b: usize, w: V) {
        self.adjacency[a].insert(b, w);
        self.adjacency[b].insert(a, w);
    }

    /// Adds `delta` onto the edge weight, creating the edge at zero when
    /// absent. Returns the combined total.
    pub(crate) fn accumulate(&mut self, a: usize, b: usize, delta: V) -> V {
        let total = self.weight(a, b).unwrap_or(V::ZERO) + delta;
        self.set_weight(a, b, total);
        total
    }

    pub(crate) fn vertex_weight(&self, v: usize) -> V {
        self.vertex_weights[v]
    }

    pub(crate) fn set_vertex_weight(&mut self, v: usize, w: V) {
        self.vertex_weights[v] = w;
    }

    /// Erases `v` from every neighbor's incidence, then clears `v`'s own.
    ///
    /// The vertex-weight slot is left untouched; removed vertices are only
    /// ever folded into a survivor and never read again.
    pub(crate) fn remove_vertex(&mut self, v: usize) {
        let incident = std::mem::take(&mut self.adjacency[v]);
        for neighbor in incident.keys() {
            self.adjacency[*neighbor].remove(&v);
        }
    }
}
