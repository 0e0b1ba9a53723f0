//! Read-only input graph abstractions.
//!
//! The contraction drivers only ever enumerate vertices and edges of their
//! inputs; mutation happens on internal working copies. Callers with their
//! own graph containers implement [`Graph`] directly; [`EdgeListGraph`] is
//! a minimal concrete container for everything else.

/// Read-only enumeration of an undirected graph.
///
/// Edge indices are dense in `[0, edge_count())` and endpoints must be
/// distinct vertices in `[0, vertex_count())`; the contraction entry
/// points validate both before touching any working state.
///
/// # Examples
/// ```
/// use kirimi_core::{EdgeListGraph, Graph};
///
/// let graph = EdgeListGraph::new(3, vec![(0, 1), (1, 2)]);
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.edge_count(), 2);
/// assert_eq!(graph.endpoints(1), (1, 2));
/// ```
pub trait Graph {
    /// Returns the number of vertices.
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges.
    fn edge_count(&self) -> usize;

    /// Returns the endpoints of the edge at `edge`.
    ///
    /// # Panics
    /// Implementations may panic when `edge >= edge_count()`.
    fn endpoints(&self, edge: usize) -> (usize, usize);
}

impl<G: Graph + ?Sized> Graph for &G {
    fn vertex_count(&self) -> usize {
        (**self).vertex_count()
    }

    fn edge_count(&self) -> usize {
        (**self).edge_count()
    }

    fn endpoints(&self, edge: usize) -> (usize, usize) {
        (**self).endpoints(edge)
    }
}

/// An undirected graph stored as a plain edge list.
///
/// # Examples
/// ```
/// use kirimi_core::{EdgeListGraph, Graph};
///
/// let mut graph = EdgeListGraph::new(4, vec![(0, 1)]);
/// graph.push_edge(2, 3);
/// assert_eq!(graph.edge_count(), 2);
/// assert_eq!(graph.endpoints(1), (2, 3));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EdgeListGraph {
    vertex_count: usize,
    edges: Vec<(usize, usize)>,
}

impl EdgeListGraph {
    /// Creates a graph over `vertex_count` vertices with the given edges.
    #[must_use]
    pub fn new(vertex_count: usize, edges: Vec<(usize, usize)>) -> Self {
        Self {
            vertex_count,
            edges,
        }
    }

    /// Appends an edge between `u` and `v`.
    pub fn push_edge(&mut self, u: usize, v: usize) {
        self.edges.push((u, v));
    }

    /// Returns the edge list in insertion order.
    #[must_use]
    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }
}

impl Graph for EdgeListGraph {
    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn endpoints(&self, edge: usize) -> (usize, usize) {
        self.edges[edge]
    }
}
