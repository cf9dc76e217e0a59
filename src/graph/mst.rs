//! Minimum spanning forest via Kruskal's algorithm.
//!
//! Edges are extracted once each, sorted ascending by weight, and accepted
//! greedily whenever their endpoints lie in different [`DisjointSet`] trees.
//! For a connected input the result is a minimum spanning tree; otherwise it
//! spans each connected component separately.
//!
//! Equal weights are ordered by `(u, v)`, so the chosen edges are
//! deterministic even when several minimum forests exist.

use crate::collections::DisjointSet;
use crate::graph::store::{Edge, Graph};
use crate::{weight, GraphError, Weight};
use serde::{Deserialize, Serialize};

/// Computes a minimum spanning forest of `graph` as a new graph on the same
/// vertex set.
///
/// # Errors
/// - [`GraphError::NullGraph`] if `graph` has been destroyed.
/// - [`GraphError::Allocation`] if the edge list, the disjoint set, or the
///   result cannot be allocated. Everything allocated so far is released.
pub fn kruskal<W: Weight>(graph: &Graph<W>) -> Result<Graph<W>, GraphError> {
    if graph.is_released() {
        return Err(GraphError::NullGraph.reported());
    }

    let mut edges = extract_edges(graph)?;
    sort_edges(&mut edges);

    let vertex_count = graph.vertex_count();
    let mut sets = DisjointSet::try_new(vertex_count)?;
    let mut forest = Graph::try_new(vertex_count)?;
    let target = vertex_count.saturating_sub(1);

    for edge in edges {
        if forest.edge_count() >= target {
            break;
        }
        if sets.union(edge.u, edge.v) {
            forest.add_edge(edge.u, edge.v, edge.weight)?;
            tracing::debug!(u = edge.u, v = edge.v, weight = %edge.weight, "edge accepted");
        } else {
            tracing::debug!(u = edge.u, v = edge.v, weight = %edge.weight, "edge skipped, would close a cycle");
        }
    }

    tracing::debug!(
        vertices = vertex_count,
        edges = forest.edge_count(),
        spanning = forest.edge_count() == target,
        "spanning forest complete"
    );
    Ok(forest)
}

/// Copies every undirected edge of `graph` once into a flat list.
///
/// # Errors
/// [`GraphError::Allocation`] if the list cannot be reserved.
pub fn extract_edges<W: Weight>(graph: &Graph<W>) -> Result<Vec<Edge<W>>, GraphError> {
    let mut edges = Vec::new();
    edges.try_reserve_exact(graph.edge_count())?;
    edges.extend(graph.edges());
    debug_assert_eq!(edges.len(), graph.edge_count());
    Ok(edges)
}

/// Sorts edges ascending by weight, then by `(u, v)`.
pub fn sort_edges<W: Weight>(edges: &mut [Edge<W>]) {
    edges.sort_by(|a, b| {
        weight::compare(a.weight, b.weight).then_with(|| (a.u, a.v).cmp(&(b.u, b.v)))
    });
}

/// Summary of a spanning forest.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpanningSummary<W = f32> {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Number of edges in the forest.
    pub edge_count: usize,
    /// Number of trees, isolated vertices included.
    pub component_count: usize,
    /// Sum of the forest's edge weights.
    pub total_weight: W,
    /// `true` if the forest is a single tree over every vertex. The empty
    /// forest on zero vertices counts as spanning.
    pub is_spanning_tree: bool,
}

impl<W: Weight> SpanningSummary<W> {
    /// Summarizes `forest`, which must be acyclic (as returned by [`kruskal`]).
    pub fn of(forest: &Graph<W>) -> Self {
        let vertex_count = forest.vertex_count();
        let edge_count = forest.edge_count();
        let component_count = vertex_count.saturating_sub(edge_count);
        Self {
            vertex_count,
            edge_count,
            component_count,
            total_weight: forest.total_weight(),
            is_spanning_tree: component_count <= 1,
        }
    }
}

impl<W: Weight> Graph<W> {
    /// Computes a minimum spanning forest. See [`kruskal`].
    ///
    /// # Errors
    /// See [`kruskal`].
    pub fn kruskal(&self) -> Result<Graph<W>, GraphError> {
        kruskal(self)
    }
}
