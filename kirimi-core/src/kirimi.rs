//! Orchestration entry point for the kirimi library.
//!
//! Wraps the pure contraction functions with strategy dispatch and
//! tracing instrumentation.

use tracing::{info, instrument};

use crate::builder::ContractionStrategy;
use crate::contraction::{contract_balanced, contract_balanced_minmax};
use crate::error::Result;
use crate::graph::Graph;
use crate::result::ContractionResult;
use crate::value::AffinityValue;

/// Entry point for running a configured contraction.
///
/// # Examples
/// ```
/// use kirimi_core::{ContractionStrategy, EdgeListGraph, KirimiBuilder};
///
/// let base = EdgeListGraph::new(4, vec![(0, 1), (1, 2), (2, 3)]);
/// let kirimi = KirimiBuilder::new()
///     .with_strategy(ContractionStrategy::Balanced)
///     .build();
/// let result = kirimi.run(&base, &base, &[5.0f32, -1.0, 5.0])?;
/// assert_eq!(result.label_bits(), [0, 1, 0]);
/// # Ok::<(), kirimi_core::ContractionError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Kirimi {
    strategy: ContractionStrategy,
}

impl Kirimi {
    pub(crate) fn new(strategy: ContractionStrategy) -> Self {
        Self { strategy }
    }

    /// Returns the strategy that will be used when running.
    #[must_use]
    pub fn strategy(&self) -> ContractionStrategy {
        self.strategy
    }

    /// Executes the configured contraction driver.
    ///
    /// # Errors
    /// Returns a [`crate::ContractionError`] when the inputs are
    /// malformed; the working state is never built in that case.
    #[instrument(
        name = "kirimi.run",
        err,
        skip(self, base, lifted, affinities),
        fields(
            vertices = base.vertex_count(),
            base_edges = base.edge_count(),
            lifted_edges = lifted.edge_count(),
            strategy = ?self.strategy,
        ),
    )]
    pub fn run<B, L, V>(&self, base: &B, lifted: &L, affinities: &[V]) -> Result<ContractionResult>
    where
        B: Graph,
        L: Graph,
        V: AffinityValue,
    {
        let result = match self.strategy {
            ContractionStrategy::Balanced => contract_balanced(base, lifted, affinities),
            ContractionStrategy::BalancedMinMax => {
                contract_balanced_minmax(base, lifted, affinities)
            }
        }?;
        info!(
            merges = result.merge_count(),
            clusters = result.cluster_count(),
            "contraction completed"
        );
        Ok(result)
    }
}
