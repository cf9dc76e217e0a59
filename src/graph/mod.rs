//! Undirected weighted graphs and the algorithms that run on them.
//!
//! - `store`: the adjacency-list graph itself
//! - `traversal`: breadth-first search
//! - `mst`: minimum spanning forests (Kruskal)
//! - `text`: adjacency list and matrix renderings

pub mod mst;
pub mod store;
pub mod text;
pub mod traversal;

pub use mst::{kruskal, SpanningSummary};
pub use store::{AdjacencyEntry, Edge, Graph};
pub use text::{AdjacencyListView, AdjacencyMatrixView};
pub use traversal::{Bfs, BfsReport, PendingVisit};
