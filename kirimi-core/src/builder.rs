//! Builder utilities for configuring contraction runs.

use crate::kirimi::Kirimi;

/// Selects which contraction driver [`Kirimi::run`] dispatches to.
///
/// # Examples
/// ```
/// use kirimi_core::ContractionStrategy;
///
/// let strategy = ContractionStrategy::Balanced;
/// assert!(matches!(strategy, ContractionStrategy::Balanced));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContractionStrategy {
    /// Single-criterion balanced contraction: highest affinity first.
    Balanced,
    /// Balanced min-max contraction: highest cut potential first.
    BalancedMinMax,
}

/// Configures and constructs [`Kirimi`] instances.
///
/// # Examples
/// ```
/// use kirimi_core::{ContractionStrategy, KirimiBuilder};
///
/// let kirimi = KirimiBuilder::new()
///     .with_strategy(ContractionStrategy::BalancedMinMax)
///     .build();
/// assert_eq!(kirimi.strategy(), ContractionStrategy::BalancedMinMax);
/// ```
#[derive(Debug, Clone)]
pub struct KirimiBuilder {
    strategy: ContractionStrategy,
}

impl Default for KirimiBuilder {
    fn default() -> Self {
        Self {
            strategy: ContractionStrategy::Balanced,
        }
    }
}

impl KirimiBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use kirimi_core::{ContractionStrategy, KirimiBuilder};
    ///
    /// let builder = KirimiBuilder::new();
    /// assert_eq!(builder.strategy(), ContractionStrategy::Balanced);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the contraction strategy to use when running.
    #[must_use]
    pub fn with_strategy(mut self, strategy: ContractionStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Returns the configured contraction strategy.
    #[must_use]
    pub fn strategy(&self) -> ContractionStrategy {
        self.strategy
    }

    /// Constructs the configured [`Kirimi`] instance.
    #[must_use]
    pub fn build(self) -> Kirimi {
        Kirimi::new(self.strategy)
    }
}
