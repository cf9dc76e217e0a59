//! Disjoint Set (Union-Find) over a fixed range of indices.
//!
//! # Performance
//!
//! - Uses `Cell<usize>` for parent pointers so `find` can compress paths
//!   through a shared reference.
//! - Path compression and union-by-rank give nearly constant amortized time.
//! - `find` is iterative: one pass locates the root, a second re-points every
//!   node on the path at it. Pathological chains cannot grow the call stack.

use crate::GraphError;
use std::cell::Cell;

/// A Disjoint Set (Union-Find) data structure over `0..len`.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    /// Parent pointers. A root is its own parent.
    parent: Vec<Cell<usize>>,
    /// Rank (depth upper bound) for union-by-rank.
    rank: Vec<u8>,
}

impl DisjointSet {
    /// Creates `len` singleton sets.
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).map(Cell::new).collect(),
            rank: vec![0; len],
        }
    }

    /// Like [`DisjointSet::new`], but reports allocation failure instead of aborting.
    ///
    /// # Errors
    /// Returns [`GraphError::Allocation`] if either backing array cannot be reserved.
    pub fn try_new(len: usize) -> Result<Self, GraphError> {
        let mut parent = Vec::new();
        parent.try_reserve_exact(len)?;
        let mut rank = Vec::new();
        rank.try_reserve_exact(len)?;

        parent.extend((0..len).map(Cell::new));
        rank.resize(len, 0);
        Ok(Self { parent, rank })
    }

    /// Finds the representative of the set containing `id`, with path compression.
    ///
    /// # Panics
    /// Panics if `id >= self.len()`.
    pub fn find(&self, id: usize) -> usize {
        assert!(id < self.len(), "element {id} out of bounds");

        let mut root = id;
        loop {
            let parent = self.parent[root].get();
            if parent == root {
                break;
            }
            root = parent;
        }

        let mut curr = id;
        while curr != root {
            let next = self.parent[curr].replace(root);
            curr = next;
        }

        root
    }

    /// Returns `true` if `a` and `b` are in the same set.
    pub fn same_set(&self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }

    /// Unites the sets containing `id1` and `id2`.
    /// Returns `true` if they were in different sets, `false` otherwise.
    pub fn union(&mut self, id1: usize, id2: usize) -> bool {
        let root1 = self.find(id1);
        let root2 = self.find(id2);

        if root1 == root2 {
            return false;
        }

        let rank1 = self.rank[root1];
        let rank2 = self.rank[root2];

        if rank1 < rank2 {
            self.parent[root1].set(root2);
        } else if rank1 > rank2 {
            self.parent[root2].set(root1);
        } else {
            // Same rank, attach 2 to 1 and grow 1.
            self.parent[root2].set(root1);
            self.rank[root1] += 1;
        }

        true
    }

    /// Number of distinct sets.
    pub fn set_count(&self) -> usize {
        (0..self.len()).filter(|&i| self.find(i) == i).count()
    }

    /// Rank of `id`'s entry. Only meaningful for roots.
    pub fn rank(&self, id: usize) -> u8 {
        self.rank[id]
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns true if empty.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disjoint_set() {
        let mut ds = DisjointSet::new(3);
        let (a, b, c) = (0, 1, 2);

        assert_eq!(ds.find(a), a);
        assert_eq!(ds.find(b), b);
        assert_eq!(ds.set_count(), 3);

        assert!(ds.union(a, b));
        assert_eq!(ds.find(a), ds.find(b));
        assert_ne!(ds.find(a), ds.find(c));

        assert!(ds.union(b, c));
        assert_eq!(ds.find(a), ds.find(c));
        assert_eq!(ds.set_count(), 1);

        // Already united
        assert!(!ds.union(a, c));
    }

    #[test]
    fn union_by_rank() {
        let mut ds = DisjointSet::new(4);
        // Tie: first root survives and its rank grows.
        assert!(ds.union(0, 1));
        assert_eq!(ds.find(1), 0);
        assert_eq!(ds.rank(0), 1);

        // Lower rank root goes under the higher one regardless of argument order.
        assert!(ds.union(2, 0));
        assert_eq!(ds.find(2), 0);
        assert_eq!(ds.rank(0), 1);
        assert_eq!(ds.rank(2), 0);
    }

    #[test]
    fn path_compression_points_at_root() {
        let mut ds = DisjointSet::new(5);
        ds.union(0, 1);
        ds.union(2, 3);
        ds.union(0, 2);
        ds.union(4, 0);
        let root = ds.find(3);
        for i in 0..5 {
            assert_eq!(ds.find(i), root);
        }
        // Every node now points directly at the root.
        for i in 0..5 {
            assert_eq!(ds.parent[i].get(), root);
        }
    }

    #[test]
    fn long_chain_does_not_overflow() {
        let n = 200_000;
        let mut ds = DisjointSet::new(n);
        // Build a chain by hand so no rank balancing applies.
        for i in 1..n {
            ds.parent[i].set(i - 1);
        }
        assert_eq!(ds.find(n - 1), 0);
        assert_eq!(ds.parent[n - 1].get(), 0);
    }

    #[test]
    fn try_new_matches_new() {
        let ds = DisjointSet::try_new(4).unwrap();
        assert_eq!(ds.len(), 4);
        assert_eq!(ds.set_count(), 4);
        assert!(DisjointSet::try_new(0).unwrap().is_empty());
        assert_eq!(
            DisjointSet::try_new(usize::MAX).unwrap_err(),
            GraphError::Allocation
        );
    }
}
