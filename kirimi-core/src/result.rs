//! Result types for contraction runs.
//!
//! A run produces one label per lifted edge plus the final partition in
//! contiguous per-vertex form, so callers can check label consistency
//! without re-deriving the union-find state.

use crate::graph::Graph;
use crate::partition::Partition;

/// Final classification of a lifted edge.
///
/// # Examples
/// ```
/// use kirimi_core::EdgeLabel;
///
/// assert_eq!(EdgeLabel::Joined.bit(), 0);
/// assert!(EdgeLabel::Cut.is_cut());
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum EdgeLabel {
    /// Both endpoints ended up in the same cluster.
    Joined,
    /// The endpoints ended up in different clusters.
    Cut,
}

impl EdgeLabel {
    /// Returns `true` when the edge crosses a cluster boundary.
    #[must_use]
    pub const fn is_cut(self) -> bool {
        matches!(self, Self::Cut)
    }

    /// Returns the conventional numeric encoding: `0` joined, `1` cut.
    #[must_use]
    pub const fn bit(self) -> u8 {
        match self {
            Self::Joined => 0,
            Self::Cut => 1,
        }
    }
}

/// Identifier assigned to a cluster.
///
/// Identifiers are contiguous and start at zero within one
/// [`ContractionResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClusterId(usize);

impl ClusterId {
    /// Creates a new cluster identifier.
    #[rustfmt::skip]
    #[must_use]
    pub const fn new(id: usize) -> Self { Self(id) }

    /// Returns the underlying numeric identifier.
    #[rustfmt::skip]
    #[must_use]
    pub const fn get(self) -> usize { self.0 }
}

/// The output of one contraction run.
///
/// # Examples
/// ```
/// use kirimi_core::{EdgeListGraph, contract_balanced};
///
/// let base = EdgeListGraph::new(4, vec![(0, 1), (1, 2), (2, 3)]);
/// let result = contract_balanced(&base, &base, &[5.0f32, -1.0, 5.0])?;
/// assert_eq!(result.label_bits(), [0, 1, 0]);
/// assert_eq!(result.cluster_count(), 2);
/// # Ok::<(), kirimi_core::ContractionError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContractionResult {
    labels: Vec<EdgeLabel>,
    assignments: Vec<ClusterId>,
    cluster_count: usize,
    merge_count: usize,
}

impl ContractionResult {
    /// Reads the final partition back into edge labels and contiguous
    /// per-vertex cluster assignments.
    pub(crate) fn from_partition<G: Graph>(
        lifted: &G,
        partition: &mut Partition,
        merge_count: usize,
    ) -> Self {
        let vertex_count = lifted.vertex_count();
        let mut cluster_of_root = vec![usize::MAX; vertex_count];
        let mut cluster_count = 0;
        let mut assignments = Vec::with_capacity(vertex_count);
        for vertex in 0..vertex_count {
            let root = partition.find(vertex);
            if cluster_of_root[root] == usize::MAX {
                cluster_of_root[root] = cluster_count;
                cluster_count += 1;
            }
            assignments.push(ClusterId::new(cluster_of_root[root]));
        }

        let labels = (0..lifted.edge_count())
            .map(|edge| {
                let (u, v) = lifted.endpoints(edge);
                if assignments[u] == assignments[v] {
                    EdgeLabel::Joined
                } else {
                    EdgeLabel::Cut
                }
            })
            .collect();

        Self {
            labels,
            assignments,
            cluster_count,
            merge_count,
        }
    }

    /// Returns one label per lifted edge, index-aligned with the input.
    #[must_use]
    pub fn labels(&self) -> &[EdgeLabel] {
        &self.labels
    }

    /// Returns the labels in their conventional `0`/`1` encoding.
    #[must_use]
    pub fn label_bits(&self) -> Vec<u8> {
        self.labels.iter().map(|label| label.bit()).collect()
    }

    /// Returns the contiguous cluster assignment for every vertex.
    #[must_use]
    pub fn assignments(&self) -> &[ClusterId] {
        &self.assignments
    }

    /// Returns the number of clusters in the final partition.
    #[must_use]
    pub fn cluster_count(&self) -> usize {
        self.cluster_count
    }

    /// Returns how many merges the driver accepted.
    #[must_use]
    pub fn merge_count(&self) -> usize {
        self.merge_count
    }
}
