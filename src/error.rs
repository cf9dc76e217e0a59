//! Error type shared by every graph operation.
//!
//! Failures are reported twice: once on the diagnostic channel (a `tracing`
//! event) at the point where they are detected, and once to the caller as a
//! [`GraphError`] value. The operation that failed never leaves partial state
//! behind.

use std::collections::TryReserveError;

/// The error type for graph construction, traversal and spanning-tree builds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A dynamic storage request could not be satisfied.
    Allocation,
    /// The operation was invoked on a graph that has already been destroyed.
    NullGraph,
    /// An edge endpoint or start vertex lies outside `[0, vertex_count)`.
    VertexOutOfRange {
        /// The offending vertex index.
        vertex: usize,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
    /// An edge from a vertex to itself was rejected.
    SelfLoop {
        /// The vertex on both ends of the rejected edge.
        vertex: usize,
    },
    /// Adjacency data (text or serialized) did not describe a valid graph.
    Parse {
        /// One-based line number, or `0` when the input is not line oriented.
        line: usize,
        /// Human readable cause.
        reason: String,
    },
}

impl GraphError {
    pub(crate) fn out_of_range(vertex: usize, vertex_count: usize) -> Self {
        Self::VertexOutOfRange { vertex, vertex_count }
    }

    pub(crate) fn parse(line: usize, reason: impl Into<String>) -> Self {
        Self::Parse { line, reason: reason.into() }
    }

    /// Emits this error on the diagnostic channel and hands it back.
    pub(crate) fn reported(self) -> Self {
        match &self {
            Self::Allocation => tracing::error!("memory allocation failed"),
            Self::NullGraph => tracing::warn!("operation on a destroyed graph ignored"),
            Self::VertexOutOfRange { vertex, vertex_count } => {
                tracing::warn!(vertex, vertex_count, "vertex exceeds the valid index range");
            }
            Self::SelfLoop { vertex } => tracing::warn!(vertex, "self-loop rejected"),
            Self::Parse { line, reason } => tracing::warn!(line, %reason, "malformed adjacency data"),
        }
        self
    }
}

impl core::fmt::Display for GraphError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Allocation => f.write_str("memory allocation failed"),
            Self::NullGraph => f.write_str("graph has been destroyed"),
            Self::VertexOutOfRange { vertex, vertex_count } => write!(
                f,
                "vertex {vertex} exceeds the valid range of vertex indices (0..{vertex_count})"
            ),
            Self::SelfLoop { vertex } => write!(f, "self-loop on vertex {vertex} is not allowed"),
            Self::Parse { line: 0, reason } => write!(f, "invalid adjacency data: {reason}"),
            Self::Parse { line, reason } => write!(f, "line {line}: {reason}"),
        }
    }
}

impl std::error::Error for GraphError {}

impl From<TryReserveError> for GraphError {
    fn from(_: TryReserveError) -> Self {
        Self::Allocation.reported()
    }
}
