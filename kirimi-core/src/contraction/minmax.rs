//! Balanced min-max contraction (variant B).
//!
//! Extends the single-criterion driver with a per-vertex dual potential,
//! the sum of incident lifted affinities. Candidates are ranked by the cut
//! potential `-(dual(a) + dual(b) - 2·affinity(a, b))`: the negated loss
//! expected from keeping `a` and `b` apart relative to their mutual
//! affinity. A pair merges only while the potential stays non-negative,
//! i.e. while the combined cluster is not positively attached to the rest
//! of the graph.

use std::collections::BinaryHeap;

use crate::graph::Graph;
use crate::partition::Partition;
use crate::value::AffinityValue;

use super::dynamic_graph::ContractionGraph;
use super::queue::{Candidate, EditionTable};

pub(super) fn run<B, L, V>(base: &B, lifted: &L, affinities: &[V]) -> (Partition, usize)
where
    B: Graph,
    L: Graph,
    V: AffinityValue,
{
    let vertex_count = base.vertex_count();
    let mut structural = ContractionGraph::<V>::new(vertex_count);
    let mut affinity = ContractionGraph::<V>::new(vertex_count);
    let mut dual = ContractionGraph::<V>::new(vertex_count);
    let mut editions = EditionTable::new(vertex_count);
    let mut queue = BinaryHeap::new();

    for edge in 0..base.edge_count() {
        let (a, b) = base.endpoints(edge);
        structural.set_weight(a, b, V::ONE);
    }

    for edge in 0..lifted.edge_count() {
        let (a, b) = lifted.endpoints(edge);
        let value = affinities[edge];
        affinity.set_weight(a, b, value);
        dual.set_vertex_weight(a, dual.vertex_weight(a) + value);
        dual.set_vertex_weight(b, dual.vertex_weight(b) + value);
    }

    for vertex in 0..vertex_count {
        affinity.set_vertex_weight(vertex, V::ONE);
    }

    for edge in 0..lifted.edge_count() {
        let (a, b) = lifted.endpoints(edge);
        let value = affinities[edge];
        if structural.edge_exists(a, b) {
            let potential =
                -(dual.vertex_weight(a) + dual.vertex_weight(b) - (value + value));
            let edition = editions.bump(a, b);
            queue.push(Candidate::new(a, b, potential, value, edition));
        }
    }

    let mut partition = Partition::new(vertex_count);
    let mut merges = 0usize;
    let total = V::from_count(vertex_count);

    while let Some(candidate) = queue.pop() {
        if !editions.is_current(&candidate) {
            continue;
        }
        if !structural.edge_exists(candidate.a, candidate.b) {
            continue;
        }

        // Two explicit stop branches; the second subsumes the first today,
        // but they are tracked as separate thresholds.
        if candidate.primary < V::ZERO && candidate.secondary < V::ZERO {
            break;
        }
        if candidate.primary < V::ZERO {
            break;
        }

        merges += 1;

        let (stable, merged) = if affinity.degree(candidate.a) < affinity.degree(candidate.b) {
            (candidate.b, candidate.a)
        } else {
            (candidate.a, candidate.b)
        };

        partition.merge(stable, merged);

        let adopted: Vec<usize> = structural
            .neighbors(merged)
            .keys()
            .copied()
            .filter(|&p| p != stable)
            .collect();
        for p in adopted {
            structural.set_weight(stable, p, V::ONE);
        }
        structural.remove_vertex(merged);

        // Fold the merged vertex's potential into the survivor, removing
        // the doubly counted contribution of the contracted edge. Must
        // precede every rescore below.
        let contracted = affinity.weight(stable, merged).unwrap_or(V::ZERO);
        let dual_stable = dual.vertex_weight(stable) + dual.vertex_weight(merged)
            - (contracted + contracted);
        dual.set_vertex_weight(stable, dual_stable);

        let size_stable = affinity.vertex_weight(stable);
        let size_merged = affinity.vertex_weight(merged);
        affinity.set_vertex_weight(stable, size_stable + size_merged);

        let progress = total / V::from_count(merges);

        for (&p, &weight) in affinity.neighbors(stable) {
            if p == merged || affinity.edge_exists(merged, p) {
                continue;
            }
            if !structural.edge_exists(stable, p) {
                continue;
            }
            let wn = (size_stable + size_merged + affinity.vertex_weight(p)) / progress;
            let potential =
                -(dual_stable + dual.vertex_weight(p) - (weight + weight)) / wn;
            let edition = editions.bump(stable, p);
            queue.push(Candidate::new(stable, p, potential, weight / wn, edition));
        }

        let folded: Vec<(usize, V)> = affinity
            .neighbors(merged)
            .iter()
            .filter(|&(&p, _)| p != stable)
            .map(|(&p, &weight)| (p, weight))
            .collect();
        for (p, weight) in folded {
            let combined = affinity.accumulate(stable, p, weight);
            if structural.edge_exists(stable, p) {
                let wn = (size_stable + size_merged + affinity.vertex_weight(p)) / progress;
                let potential =
                    -(dual_stable + dual.vertex_weight(p) - (combined + combined)) / wn;
                let edition = editions.bump(stable, p);
                queue.push(Candidate::new(stable, p, potential, combined / wn, edition));
            }
        }

        dual.remove_vertex(merged);
        affinity.remove_vertex(merged);
    }

    (partition, merges)
}
