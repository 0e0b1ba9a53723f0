//! Merge candidates and lazy queue invalidation.
//!
//! Candidates are never removed from the priority queue when a pair is
//! rescored; a fresh entry is pushed and the pair's edition counter is
//! bumped, so a stale entry can be recognised and discarded in O(1) when
//! it surfaces. This replaces a decrease-key operation the binary heap
//! does not offer.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::value::AffinityValue;

/// A scored merge candidate for an unordered vertex pair.
///
/// The pair is normalised to `a < b` at construction. Only the primary
/// score participates in queue ordering; the secondary score is carried
/// for the stop rule of the min-max driver. Endpoint indices break
/// primary-score ties so repeated runs pop in the same order.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Candidate<V> {
    pub(crate) a: usize,
    pub(crate) b: usize,
    pub(crate) primary: V,
    pub(crate) secondary: V,
    pub(crate) edition: u64,
}

impl<V: AffinityValue> Candidate<V> {
    pub(crate) fn new(a: usize, b: usize, primary: V, secondary: V, edition: u64) -> Self {
        let (a, b) = if a < b { (a, b) } else { (b, a) };
        Self {
            a,
            b,
            primary,
            secondary,
            edition,
        }
    }
}

impl<V: AffinityValue> PartialEq for Candidate<V> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<V: AffinityValue> Eq for Candidate<V> {}

impl<V: AffinityValue> Ord for Candidate<V> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.primary
            .total_cmp(&other.primary)
            .then_with(|| self.a.cmp(&other.a))
            .then_with(|| self.b.cmp(&other.b))
    }
}

impl<V: AffinityValue> PartialOrd for Candidate<V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Per-pair version counters for lazy queue invalidation.
///
/// The counter for a pair increments exactly once per push, so a popped
/// candidate is current iff its recorded edition equals the table entry.
#[derive(Clone, Debug)]
pub(crate) struct EditionTable {
    editions: Vec<HashMap<usize, u64>>,
}

impl EditionTable {
    pub(crate) fn new(vertex_count: usize) -> Self {
        Self {
            editions: vec![HashMap::new(); vertex_count],
        }
    }

    /// Bumps the counter for `(a, b)` and returns the new edition.
    pub(crate) fn bump(&mut self, a: usize, b: usize) -> u64 {
        let (a, b) = if a < b { (a, b) } else { (b, a) };
        let entry = self.editions[a].entry(b).or_insert(0);
        *entry += 1;
        *entry
    }

    /// Returns the current edition for `(a, b)`, zero when never pushed.
    pub(crate) fn current(&self, a: usize, b: usize) -> u64 {
        let (a, b) = if a < b { (a, b) } else { (b, a) };
        self.editions[a].get(&b).copied().unwrap_or(0)
    }

    pub(crate) fn is_current<V: AffinityValue>(&self, candidate: &Candidate<V>) -> bool {
        candidate.edition == self.current(candidate.a, candidate.b)
    }
}
