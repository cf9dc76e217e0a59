//! # `wgraph` - Weighted Undirected Graphs
//!
//! A small graph toolkit: build an undirected, weighted graph from edge
//! triples, print it as an adjacency list or matrix, traverse it
//! breadth-first, and compute a minimum spanning forest with Kruskal's
//! algorithm backed by a union-find structure.
//!
//! ## Guarantees
//!
//! - **Symmetric storage**: every edge `u -- v` is held as the pair of entries
//!   `u -> v` and `v -> u`, created together and never separated.
//! - **No partial state**: a rejected operation (out-of-range vertex, self
//!   loop, destroyed graph, allocation failure) leaves its inputs untouched and
//!   returns a [`GraphError`]. Every rejection is also emitted as a `tracing`
//!   event, so diagnostics stay off the normal output stream.
//! - **Deterministic spanning forests**: equal weights are ordered by their
//!   endpoints before Kruskal runs.
//!
//! ## Architecture
//!
//! 1. **Graph store** ([`Graph`]): fixed vertex set, owned per-vertex lists.
//! 2. **Traversal queue** ([`TraversalQueue`]): FIFO of copied
//!    [`PendingVisit`](graph::PendingVisit) records.
//! 3. **BFS** ([`Bfs`]): lazy-deduplicating breadth-first iterator.
//! 4. **Disjoint set** ([`DisjointSet`]): path compression + union by rank.
//! 5. **Kruskal** ([`kruskal`]): sorted edges grown into a forest.
//!
//! ## Example
//!
//! ```rust
//! use wgraph::Graph;
//!
//! let graph: Graph = Graph::from_edges(4, [(0, 1, 4.0), (1, 2, 1.0), (2, 0, 2.0), (2, 3, 7.0)])?;
//!
//! assert_eq!(graph.bfs_order(0)?, vec![0, 2, 1, 3]);
//!
//! let mst = graph.kruskal()?;
//! assert_eq!(mst.edge_count(), 3);
//! assert_eq!(mst.total_weight(), 10.0);
//! # Ok::<(), wgraph::GraphError>(())
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod collections;
pub mod error;
pub mod graph;
pub mod weight;

pub use collections::{DisjointSet, TraversalQueue};
pub use error::GraphError;
pub use graph::{kruskal, AdjacencyEntry, Bfs, BfsReport, Edge, Graph, SpanningSummary};
pub use weight::Weight;

// Compile-time layout checks for the hot records.
const _: () = {
    use core::mem;

    // An adjacency entry is an index plus a weight, nothing more.
    assert!(mem::size_of::<AdjacencyEntry<f32>>() <= mem::size_of::<usize>() * 2);
    assert!(mem::size_of::<graph::PendingVisit<f32>>() == mem::size_of::<AdjacencyEntry<f32>>());
    assert!(mem::size_of::<Edge<f64>>() <= mem::size_of::<usize>() * 2 + mem::size_of::<f64>());
};
