//! End-to-end contraction scenarios through the public API.

use kirimi_core::{
    ContractionResult, ContractionStrategy, EdgeListGraph, Graph, KirimiBuilder,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .try_init();
}

fn assert_labels_agree_with_assignments(lifted: &EdgeListGraph, result: &ContractionResult) {
    for edge in 0..lifted.edge_count() {
        let (u, v) = lifted.endpoints(edge);
        let joined = result.assignments()[u] == result.assignments()[v];
        assert_eq!(
            !result.labels()[edge].is_cut(),
            joined,
            "label of lifted edge {edge} disagrees with the final partition",
        );
    }
}

#[test]
fn balanced_path_scenario_through_the_orchestrator() {
    init_tracing();
    let base = EdgeListGraph::new(4, vec![(0, 1), (1, 2), (2, 3)]);
    let result = KirimiBuilder::new()
        .with_strategy(ContractionStrategy::Balanced)
        .build()
        .run(&base, &base, &[5.0f32, -1.0, 5.0])
        .expect("run must succeed");

    assert_eq!(result.label_bits(), [0, 1, 0]);
    assert_labels_agree_with_assignments(&base, &result);

    // Clusters must be {0, 1} and {2, 3}.
    let ids: Vec<usize> = result.assignments().iter().map(|id| id.get()).collect();
    assert_eq!(ids[0], ids[1]);
    assert_eq!(ids[2], ids[3]);
    assert_ne!(ids[1], ids[2]);
}

#[test]
fn balanced_triangle_scenario_through_the_orchestrator() {
    init_tracing();
    let base = EdgeListGraph::new(3, vec![(0, 1), (1, 2), (0, 2)]);
    let result = KirimiBuilder::new()
        .build()
        .run(&base, &base, &[1.0f32, 1.0, 1.0])
        .expect("run must succeed");

    assert_eq!(result.label_bits(), [0, 0, 0]);
    assert_eq!(result.cluster_count(), 1);
    assert_labels_agree_with_assignments(&base, &result);
}

#[test]
fn minmax_path_scenario_through_the_orchestrator() {
    init_tracing();
    let base = EdgeListGraph::new(4, vec![(0, 1), (1, 2), (2, 3)]);
    let result = KirimiBuilder::new()
        .with_strategy(ContractionStrategy::BalancedMinMax)
        .build()
        .run(&base, &base, &[5.0f32, -1.0, 5.0])
        .expect("run must succeed");

    assert_eq!(result.label_bits(), [0, 0, 0]);
    assert_labels_agree_with_assignments(&base, &result);
}

#[test]
fn lifted_edges_beyond_the_base_graph_are_labelled_too() {
    init_tracing();
    // Base path plus two long-range lifted edges: one rewarding the left
    // pair it spans, one hostile across the cut.
    let base = EdgeListGraph::new(4, vec![(0, 1), (1, 2), (2, 3)]);
    let lifted = EdgeListGraph::new(4, vec![(0, 1), (1, 2), (2, 3), (0, 2), (1, 3)]);
    let result = KirimiBuilder::new()
        .build()
        .run(&base, &lifted, &[5.0f32, -3.0, 5.0, -1.0, -1.0])
        .expect("run must succeed");

    assert_eq!(result.labels().len(), 5);
    assert_labels_agree_with_assignments(&lifted, &result);
    assert_eq!(result.label_bits(), [0, 1, 0, 1, 1]);
}

#[test]
fn a_larger_ring_stays_internally_consistent() {
    init_tracing();
    let n = 24;
    let base_edges: Vec<(usize, usize)> = (0..n).map(|i| (i, (i + 1) % n)).collect();
    let mut lifted_edges = base_edges.clone();
    lifted_edges.extend((0..n).map(|i| (i, (i + 5) % n)));
    let affinities: Vec<f32> = (0..lifted_edges.len())
        .map(|i| if i % 3 == 0 { -2.0 } else { 1.5 })
        .collect();

    let base = EdgeListGraph::new(n, base_edges);
    let lifted = EdgeListGraph::new(n, lifted_edges);

    for strategy in [ContractionStrategy::Balanced, ContractionStrategy::BalancedMinMax] {
        let result = KirimiBuilder::new()
            .with_strategy(strategy)
            .build()
            .run(&base, &lifted, &affinities)
            .expect("run must succeed");

        assert_labels_agree_with_assignments(&lifted, &result);
        assert!(result.merge_count() <= n - 1);
        assert_eq!(result.cluster_count(), n - result.merge_count());
    }
}
