//! Randomized structural properties of the contraction drivers.

use proptest::prelude::*;

use kirimi_core::{
    ContractionResult, EdgeListGraph, Graph, contract_balanced, contract_balanced_minmax,
};

#[derive(Clone, Debug)]
struct Instance {
    vertex_count: usize,
    base: EdgeListGraph,
    lifted: EdgeListGraph,
    affinities: Vec<f32>,
}

fn all_pairs(vertex_count: usize) -> Vec<(usize, usize)> {
    (0..vertex_count)
        .flat_map(|i| ((i + 1)..vertex_count).map(move |j| (i, j)))
        .collect()
}

/// Random instances where the lifted graph is a superset of the base graph.
fn instances() -> impl Strategy<Value = Instance> {
    (2usize..12).prop_flat_map(|vertex_count| {
        let pairs = all_pairs(vertex_count);
        let pair_count = pairs.len();
        (
            Just(pairs),
            prop::collection::vec(any::<bool>(), pair_count),
            prop::collection::vec(any::<bool>(), pair_count),
            prop::collection::vec(-8i8..=8, pair_count),
        )
            .prop_map(move |(pairs, in_base, lifted_only, raw)| {
                let mut base_edges = Vec::new();
                let mut lifted_edges = Vec::new();
                let mut affinities = Vec::new();
                for (idx, pair) in pairs.iter().enumerate() {
                    if in_base[idx] {
                        base_edges.push(*pair);
                    }
                    if in_base[idx] || lifted_only[idx] {
                        lifted_edges.push(*pair);
                        affinities.push(f32::from(raw[idx]) / 2.0);
                    }
                }
                Instance {
                    vertex_count,
                    base: EdgeListGraph::new(vertex_count, base_edges),
                    lifted: EdgeListGraph::new(vertex_count, lifted_edges),
                    affinities,
                }
            })
    })
}

/// Random instances where no lifted edge is structurally adjacent.
fn disjoint_instances() -> impl Strategy<Value = Instance> {
    instances().prop_map(|instance| {
        let in_base: std::collections::HashSet<(usize, usize)> =
            instance.base.edges().iter().copied().collect();
        let mut lifted_edges = Vec::new();
        let mut affinities = Vec::new();
        for (idx, pair) in instance.lifted.edges().iter().enumerate() {
            if !in_base.contains(pair) {
                lifted_edges.push(*pair);
                affinities.push(instance.affinities[idx]);
            }
        }
        Instance {
            vertex_count: instance.vertex_count,
            base: instance.base,
            lifted: EdgeListGraph::new(instance.vertex_count, lifted_edges),
            affinities,
        }
    })
}

fn run(instance: &Instance, minmax: bool) -> ContractionResult {
    let outcome = if minmax {
        contract_balanced_minmax(&instance.base, &instance.lifted, &instance.affinities)
    } else {
        contract_balanced(&instance.base, &instance.lifted, &instance.affinities)
    };
    outcome.expect("generated instances are always well-formed")
}

fn check_labels_against_assignments(instance: &Instance, result: &ContractionResult) {
    assert_eq!(result.labels().len(), instance.lifted.edge_count());
    for edge in 0..instance.lifted.edge_count() {
        let (u, v) = instance.lifted.endpoints(edge);
        let joined = result.assignments()[u] == result.assignments()[v];
        assert_eq!(!result.labels()[edge].is_cut(), joined);
    }
}

proptest! {
    #[test]
    fn labels_are_consistent_with_the_final_partition(
        instance in instances(),
        minmax in any::<bool>(),
    ) {
        let result = run(&instance, minmax);
        check_labels_against_assignments(&instance, &result);
    }

    #[test]
    fn repeated_runs_are_identical(instance in instances(), minmax in any::<bool>()) {
        let first = run(&instance, minmax);
        let second = run(&instance, minmax);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn merges_are_bounded_and_account_for_every_cluster(
        instance in instances(),
        minmax in any::<bool>(),
    ) {
        let result = run(&instance, minmax);
        prop_assert!(result.merge_count() <= instance.vertex_count - 1);
        prop_assert_eq!(
            result.cluster_count(),
            instance.vertex_count - result.merge_count(),
        );
    }

    #[test]
    fn assignments_are_contiguous_cluster_ids(
        instance in instances(),
        minmax in any::<bool>(),
    ) {
        let result = run(&instance, minmax);
        let mut seen = vec![false; result.cluster_count()];
        for id in result.assignments() {
            prop_assert!(id.get() < result.cluster_count());
            seen[id.get()] = true;
        }
        prop_assert!(seen.into_iter().all(|present| present));
    }

    #[test]
    fn disjoint_inputs_leave_every_vertex_a_singleton(
        instance in disjoint_instances(),
        minmax in any::<bool>(),
    ) {
        let result = run(&instance, minmax);
        prop_assert_eq!(result.merge_count(), 0);
        prop_assert_eq!(result.cluster_count(), instance.vertex_count);
        prop_assert!(result.labels().iter().all(|label| label.is_cut()));
    }
}
