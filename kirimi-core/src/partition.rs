//! Union-find over the shared vertex index space.
//!
//! Each accepted merge unions the classes of the two contracted vertices;
//! result extraction queries the final representative of every lifted
//! endpoint. Union by rank with full path compression keeps both
//! operations effectively constant time.

/// Disjoint-set union over vertex indices `0..n`.
///
/// # Examples
/// ```
/// use kirimi_core::Partition;
///
/// let mut partition = Partition::new(4);
/// partition.merge(0, 1);
/// partition.merge(1, 2);
/// assert_eq!(partition.find(0), partition.find(2));
/// assert_ne!(partition.find(0), partition.find(3));
/// assert_eq!(partition.set_count(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct Partition {
    parent: Vec<usize>,
    rank: Vec<u8>,
    set_count: usize,
}

impl Partition {
    /// Creates `n` singleton classes.
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
            set_count: n,
        }
    }

    /// Returns the canonical representative of the class containing `node`.
    pub fn find(&mut self, mut node: usize) -> usize {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[node] != node {
            let parent = self.parent[node];
            self.parent[node] = root;
            node = parent;
        }

        root
    }

    /// Unions the classes containing `left` and `right`.
    ///
    /// Idempotent when both are already in the same class. Returns the
    /// representative of the combined class.
    pub fn merge(&mut self, left: usize, right: usize) -> usize {
        let mut left = self.find(left);
        let mut right = self.find(right);
        if left == right {
            return left;
        }
        let left_rank = self.rank[left];
        let right_rank = self.rank[right];
        if left_rank < right_rank {
            std::mem::swap(&mut left, &mut right);
        }
        self.parent[right] = left;
        if left_rank == right_rank {
            self.rank[left] = left_rank.saturating_add(1);
        }
        self.set_count -= 1;
        left
    }

    /// Returns the current number of disjoint classes.
    #[must_use]
    pub fn set_count(&self) -> usize {
        self.set_count
    }
}

#[cfg(test)]
mod tests {
    use super::Partition;

    #[test]
    fn starts_as_singletons() {
        let mut partition = Partition::new(3);
        assert_eq!(partition.set_count(), 3);
        assert_ne!(partition.find(0), partition.find(1));
    }

    #[test]
    fn merge_is_idempotent() {
        let mut partition = Partition::new(3);
        partition.merge(0, 1);
        partition.merge(0, 1);
        partition.merge(1, 0);
        assert_eq!(partition.set_count(), 2);
    }

    #[test]
    fn find_is_transitively_consistent() {
        let mut partition = Partition::new(6);
        partition.merge(0, 1);
        partition.merge(2, 3);
        partition.merge(1, 2);
        let root = partition.find(0);
        for node in 1..4 {
            assert_eq!(partition.find(node), root);
        }
        assert_ne!(partition.find(4), root);
        assert_ne!(partition.find(5), root);
    }

    #[test]
    fn representatives_are_stable_across_unrelated_merges() {
        let mut partition = Partition::new(5);
        partition.merge(0, 1);
        let before = partition.find(0);
        partition.merge(3, 4);
        assert_eq!(partition.find(0), before);
        assert_eq!(partition.find(1), before);
    }
}
