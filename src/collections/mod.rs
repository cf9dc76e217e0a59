//! Supporting collections for the graph algorithms.
//!
//! - `TraversalQueue`: FIFO frontier for breadth-first search
//! - `DisjointSet`: union-find for spanning forest construction

pub mod disjoint_set;
pub mod queue;

pub use disjoint_set::DisjointSet;
pub use queue::TraversalQueue;
