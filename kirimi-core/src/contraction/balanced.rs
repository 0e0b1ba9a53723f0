//! Single-criterion balanced contraction (variant A).
//!
//! Greedy maximise-affinity-first agglomeration. Each accepted merge
//! rescores the surviving vertex's lifted neighborhood against a balancing
//! divisor `wn = (size(stable) + size(merge) + size(p)) / (n / nmerges)`;
//! dividing candidate scores by `wn` progressively favours larger clusters
//! as the run proceeds, which keeps the decomposition size-balanced
//! instead of degenerating into single linkage.

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
    let mut editions = EditionTable::new(vertex_count);
    let mut queue = BinaryHeap::new();

    for edge in 0..base.edge_count() {
        let (a, b) = base.endpoints(edge);
        // Existence-only: the weight value is never read.
        structural.set_weight(a, b, V::ONE);
    }

    for vertex in 0..vertex_count {
        // Initial cluster size.
        affinity.set_vertex_weight(vertex, V::ONE);
    }

    for edge in 0..lifted.edge_count() {
        let (a, b) = lifted.endpoints(edge);
        let value = affinities[edge];
        affinity.set_weight(a, b, value);
        if structural.edge_exists(a, b) {
            let edition = editions.bump(a, b);
            queue.push(Candidate::new(a, b, value, value, edition));
        }
    }

    let mut partition = Partition::new(vertex_count);
    let mut merges = 0usize;
    let total = V::from_count(vertex_count);

    while let Some(candidate) = queue.pop() {
        if !structural.edge_exists(candidate.a, candidate.b) || !editions.is_current(&candidate) {
            continue;
        }

        if candidate.primary < V::ZERO {
            break;
        }

        merges += 1;

        // The endpoint with the larger lifted incidence survives, so the
        // smaller incidence list is the one that gets rewired.
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

        let size_stable = affinity.vertex_weight(stable);
        let size_merged = affinity.vertex_weight(merged);
        affinity.set_vertex_weight(stable, size_stable + size_merged);

        let progress = total / V::from_count(merges);

        // Stable-side rescore. Pairs that are also lifted neighbors of the
        // merged vertex are deferred to the fold below so they are pushed
        // once, with the combined weight.
        for (&p, &weight) in affinity.neighbors(stable) {
            if p == merged || affinity.edge_exists(merged, p) {
                continue;
            }
            if !structural.edge_exists(stable, p) {
                continue;
            }
            let wn = (size_stable + size_merged + affinity.vertex_weight(p)) / progress;
            let edition = editions.bump(stable, p);
            queue.push(Candidate::new(stable, p, weight / wn, weight, edition));
        }

        // Fold the merged vertex's lifted incidence into the survivor.
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
                let edition = editions.bump(stable, p);
                queue.push(Candidate::new(stable, p, combined / wn, combined, edition));
            }
        }

        affinity.remove_vertex(merged);
    }

    (partition, merges)
}
