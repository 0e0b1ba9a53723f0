//! Greedy agglomerative contraction for the lifted multicut objective.
//!
//! Both drivers share one architecture: three independent working views of
//! the problem (structural adjacency, lifted affinity, and — for the
//! min-max variant — dual potential) over a fixed vertex index space, a
//! max-priority queue of merge candidates invalidated lazily through
//! per-pair edition counters, and a union-find partition recording the
//! emerging clusters. They differ only in how candidates are scored and
//! when the loop stops.
//!
//! Inputs are validated once up front; a silently wrong partition is worse
//! than a loud failure, so malformed inputs are rejected before any
//! working state is built.

mod balanced;
mod dynamic_graph;
mod minmax;
mod queue;

use crate::error::{ContractionError, GraphRole, Result};
use crate::graph::Graph;
use crate::result::ContractionResult;
use crate::value::AffinityValue;

fn validate_edges<G: Graph>(graph: &G, role: GraphRole, vertex_count: usize) -> Result<()> {
    for edge in 0..graph.edge_count() {
        let (u, v) = graph.endpoints(edge);
        for vertex in [u, v] {
            if vertex >= vertex_count {
                return Err(ContractionError::InvalidEndpoint {
                    graph: role,
                    edge,
                    vertex,
                    vertex_count,
                });
            }
        }
        if u == v {
            return Err(ContractionError::SelfLoop {
                graph: role,
                edge,
                vertex: u,
            });
        }
    }
    Ok(())
}

fn validate<B, L, V>(base: &B, lifted: &L, affinities: &[V]) -> Result<()>
where
    B: Graph,
    L: Graph,
    V: AffinityValue,
{
    let vertex_count = base.vertex_count();
    if vertex_count == 0 {
        return Err(ContractionError::EmptyGraph);
    }
    if lifted.vertex_count() != vertex_count {
        return Err(ContractionError::VertexCountMismatch {
            base: vertex_count,
            lifted: lifted.vertex_count(),
        });
    }
    if affinities.len() != lifted.edge_count() {
        return Err(ContractionError::AffinityCountMismatch {
            affinities: affinities.len(),
            lifted_edges: lifted.edge_count(),
        });
    }
    validate_edges(base, GraphRole::Base, vertex_count)?;
    validate_edges(lifted, GraphRole::Lifted, vertex_count)?;
    for (edge, value) in affinities.iter().enumerate() {
        if !value.is_finite() {
            return Err(ContractionError::NonFiniteAffinity { edge });
        }
    }
    Ok(())
}

/// Runs the single-criterion balanced contraction.
///
/// Greedily merges the structurally adjacent pair with the highest
/// (size-balanced) affinity until the queue drains or the best remaining
/// score turns negative. Returns one label per lifted edge.
///
/// # Errors
/// Returns a [`ContractionError`] when the inputs are malformed; see the
/// variant documentation for the individual preconditions.
///
/// # Examples
/// ```
/// use kirimi_core::{EdgeListGraph, contract_balanced};
///
/// let base = EdgeListGraph::new(4, vec![(0, 1), (1, 2), (2, 3)]);
/// let result = contract_balanced(&base, &base, &[5.0f32, -1.0, 5.0])?;
/// assert_eq!(result.label_bits(), [0, 1, 0]);
/// # Ok::<(), kirimi_core::ContractionError>(())
/// ```
pub fn contract_balanced<B, L, V>(
    base: &B,
    lifted: &L,
    affinities: &[V],
) -> Result<ContractionResult>
where
    B: Graph,
    L: Graph,
    V: AffinityValue,
{
    validate(base, lifted, affinities)?;
    let (mut partition, merges) = balanced::run(base, lifted, affinities);
    Ok(ContractionResult::from_partition(
        lifted,
        &mut partition,
        merges,
    ))
}

/// Runs the balanced min-max contraction.
///
/// Ranks candidates by cut potential — the negated affinity of the
/// combined cluster towards the rest of the graph — instead of the raw
/// affinity, and stops as soon as the best remaining potential turns
/// negative. Returns one label per lifted edge.
///
/// # Errors
/// Returns a [`ContractionError`] when the inputs are malformed; see the
/// variant documentation for the individual preconditions.
///
/// # Examples
/// ```
/// use kirimi_core::{EdgeListGraph, contract_balanced_minmax};
///
/// let base = EdgeListGraph::new(4, vec![(0, 1), (1, 2), (2, 3)]);
/// let result = contract_balanced_minmax(&base, &base, &[5.0f32, -1.0, 5.0])?;
/// assert_eq!(result.cluster_count(), 1);
/// # Ok::<(), kirimi_core::ContractionError>(())
/// ```
pub fn contract_balanced_minmax<B, L, V>(
    base: &B,
    lifted: &L,
    affinities: &[V],
) -> Result<ContractionResult>
where
    B: Graph,
    L: Graph,
    V: AffinityValue,
{
    validate(base, lifted, affinities)?;
    let (mut partition, merges) = minmax::run(base, lifted, affinities);
    Ok(ContractionResult::from_partition(
        lifted,
        &mut partition,
        merges,
    ))
}
