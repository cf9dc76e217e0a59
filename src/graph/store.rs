//! An undirected, weighted adjacency-list graph with a fixed vertex set.
//!
//! Each undirected edge is stored as two [`AdjacencyEntry`] values, one in the
//! list of each endpoint, created together in [`Graph::add_edge`]. Lists are
//! owned `Vec`s appended in insertion order and presented newest first, so
//! iteration matches a list that had each new entry prepended.

use crate::{GraphError, Weight};
use serde::{Deserialize, Serialize};

/// One directed half of an undirected edge: the neighbour and the edge weight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdjacencyEntry<W = f32> {
    /// The vertex at the other end of the edge.
    pub vertex: usize,
    /// The edge weight.
    pub weight: W,
}

/// An undirected edge reported once, with `u < v`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge<W = f32> {
    /// Lower endpoint.
    pub u: usize,
    /// Higher endpoint.
    pub v: usize,
    /// The edge weight.
    pub weight: W,
}

/// An undirected, weighted graph on vertices `0..vertex_count`.
///
/// The vertex set is fixed at construction. Edges can only be added.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `add_edge` | \(O(1)\) amortized | Two appends, no duplicate check |
/// | `neighbors` | \(O(1)\) | Iterator over one list |
/// | `degree` | \(O(1)\) | returns `Vec::len` |
/// | `has_edge` | \(O(\text{degree})\) | Linear scan |
/// | `edges` | \(O(n + m)\) | Each undirected edge once |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "GraphRepr<W>",
    into = "GraphRepr<W>",
    bound(
        serialize = "W: Weight + Serialize",
        deserialize = "W: Weight + Deserialize<'de>"
    )
)]
pub struct Graph<W: Weight = f32> {
    adjacency: Vec<Vec<AdjacencyEntry<W>>>,
    edge_count: usize,
    released: bool,
}

impl<W: Weight> Graph<W> {
    /// Creates a graph with `vertex_count` vertices and zero edges.
    ///
    /// # Panics
    /// Aborts like any `Vec` allocation if storage cannot be obtained; use
    /// [`Graph::try_new`] to observe the failure instead.
    pub fn new(vertex_count: usize) -> Self {
        let mut adjacency = Vec::with_capacity(vertex_count);
        adjacency.resize_with(vertex_count, Vec::new);
        Self {
            adjacency,
            edge_count: 0,
            released: false,
        }
    }

    /// Creates a graph with `vertex_count` vertices, reporting allocation failure.
    ///
    /// # Errors
    /// Returns [`GraphError::Allocation`] if the vertex table cannot be reserved.
    pub fn try_new(vertex_count: usize) -> Result<Self, GraphError> {
        let mut adjacency = Vec::new();
        adjacency.try_reserve_exact(vertex_count)?;
        adjacency.resize_with(vertex_count, Vec::new);
        Ok(Self {
            adjacency,
            edge_count: 0,
            released: false,
        })
    }

    /// Builds a graph by applying `(u, v, weight)` triples in order.
    ///
    /// # Errors
    /// Stops at the first rejected triple and returns its error.
    pub fn from_edges<I>(vertex_count: usize, edges: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (usize, usize, W)>,
    {
        let mut graph = Self::try_new(vertex_count)?;
        for (u, v, weight) in edges {
            graph.add_edge(u, v, weight)?;
        }
        Ok(graph)
    }

    /// Builds a graph from per-vertex adjacency lists given newest entry first,
    /// the order [`Graph::neighbors`] yields.
    ///
    /// The lists must describe an undirected graph: every entry `u -> v` needs a
    /// matching `v -> u` with the same weight, and no entry may point at its own
    /// vertex.
    ///
    /// # Errors
    /// [`GraphError::VertexOutOfRange`], [`GraphError::SelfLoop`], or
    /// [`GraphError::Parse`] for asymmetric lists.
    pub fn try_from_adjacency(lists: Vec<Vec<AdjacencyEntry<W>>>) -> Result<Self, GraphError> {
        let vertex_count = lists.len();
        let mut forward = Vec::new();
        let mut backward = Vec::new();

        for (u, list) in lists.iter().enumerate() {
            for entry in list {
                let v = entry.vertex;
                if v >= vertex_count {
                    return Err(GraphError::out_of_range(v, vertex_count).reported());
                }
                match u.cmp(&v) {
                    core::cmp::Ordering::Less => forward.push((u, v, entry.weight)),
                    core::cmp::Ordering::Greater => backward.push((v, u, entry.weight)),
                    core::cmp::Ordering::Equal => {
                        return Err(GraphError::SelfLoop { vertex: u }.reported());
                    }
                }
            }
        }

        let key = |a: &(usize, usize, W), b: &(usize, usize, W)| {
            (a.0, a.1)
                .cmp(&(b.0, b.1))
                .then_with(|| crate::weight::compare(a.2, b.2))
        };
        forward.sort_by(key);
        backward.sort_by(key);
        let symmetric = forward.len() == backward.len()
            && forward
                .iter()
                .zip(&backward)
                .all(|(f, b)| key(f, b).is_eq());
        if !symmetric {
            return Err(GraphError::parse(0, "adjacency lists are not symmetric").reported());
        }

        let adjacency = lists
            .into_iter()
            .map(|mut list| {
                list.reverse();
                list
            })
            .collect();
        Ok(Self {
            adjacency,
            edge_count: forward.len(),
            released: false,
        })
    }

    fn ensure_live(&self) -> Result<(), GraphError> {
        if self.released {
            Err(GraphError::NullGraph.reported())
        } else {
            Ok(())
        }
    }

    /// Adds the undirected edge `u -- v` with the given weight.
    ///
    /// Both directed entries are created and the edge count grows by one.
    /// Parallel edges are kept.
    ///
    /// # Errors
    /// - [`GraphError::NullGraph`] if the graph has been destroyed.
    /// - [`GraphError::VertexOutOfRange`] if either endpoint is not a vertex.
    /// - [`GraphError::SelfLoop`] if `u == v`.
    /// - [`GraphError::Allocation`] if either list cannot grow.
    ///
    /// On error the graph is unchanged.
    pub fn add_edge(&mut self, u: usize, v: usize, weight: W) -> Result<(), GraphError> {
        self.ensure_live()?;
        let vertex_count = self.vertex_count();
        for vertex in [u, v] {
            if vertex >= vertex_count {
                return Err(GraphError::out_of_range(vertex, vertex_count).reported());
            }
        }
        if u == v {
            return Err(GraphError::SelfLoop { vertex: u }.reported());
        }

        self.adjacency[u].try_reserve(1)?;
        self.adjacency[v].try_reserve(1)?;
        self.adjacency[u].push(AdjacencyEntry { vertex: v, weight });
        self.adjacency[v].push(AdjacencyEntry { vertex: u, weight });
        self.edge_count += 1;
        Ok(())
    }

    /// Releases every adjacency entry and the vertex table.
    ///
    /// Afterwards the graph reports zero vertices and every operation on it
    /// returns [`GraphError::NullGraph`]. Calling this again is a no-op.
    pub fn destroy(&mut self) {
        if self.released {
            return;
        }
        tracing::trace!(
            vertices = self.adjacency.len(),
            edges = self.edge_count,
            "releasing graph storage"
        );
        self.adjacency = Vec::new();
        self.edge_count = 0;
        self.released = true;
    }

    /// Returns `true` once [`Graph::destroy`] has been called.
    pub fn is_released(&self) -> bool {
        self.released
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns the adjacency entries of `vertex`, most recently added first.
    ///
    /// # Panics
    /// Panics if `vertex` is out of bounds. A destroyed graph has no vertices,
    /// so every index panics there.
    pub fn neighbors(
        &self,
        vertex: usize,
    ) -> impl DoubleEndedIterator<Item = &AdjacencyEntry<W>> + ExactSizeIterator + '_ {
        assert!(vertex < self.vertex_count(), "vertex {vertex} out of bounds");
        self.adjacency[vertex].iter().rev()
    }

    /// Returns the number of adjacency entries of `vertex`.
    ///
    /// # Panics
    /// Panics if `vertex` is out of bounds, including any vertex of a destroyed
    /// graph.
    pub fn degree(&self, vertex: usize) -> usize {
        assert!(vertex < self.vertex_count(), "vertex {vertex} out of bounds");
        self.adjacency[vertex].len()
    }

    /// Checks if an edge exists between `u` and `v`.
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        self.weight(u, v).is_some()
    }

    /// Weight of the most recently added edge between `u` and `v`, if any.
    pub fn weight(&self, u: usize, v: usize) -> Option<W> {
        self.adjacency
            .get(u)?
            .iter()
            .rev()
            .find(|e| e.vertex == v)
            .map(|e| e.weight)
    }

    /// Iterates every undirected edge exactly once, as `u < v`.
    ///
    /// Vertices are visited in ascending order and each list newest first.
    pub fn edges(&self) -> impl Iterator<Item = Edge<W>> + '_ {
        self.adjacency.iter().enumerate().flat_map(|(u, list)| {
            list.iter()
                .rev()
                .filter(move |e| u < e.vertex)
                .map(move |e| Edge {
                    u,
                    v: e.vertex,
                    weight: e.weight,
                })
        })
    }

    /// Sum of all edge weights, each undirected edge counted once.
    pub fn total_weight(&self) -> W {
        self.edges().fold(W::zero(), |acc, e| acc + e.weight)
    }
}

/// Serialized form of a [`Graph`]: the adjacency lists, newest entry first.
///
/// `serde_json` writes NaN weights as `null` and cannot read them back; the
/// text form from [`Graph::adjacency_list`] keeps them.
#[derive(Serialize, Deserialize)]
struct GraphRepr<W> {
    vertex_count: usize,
    edge_count: usize,
    adjacency: Vec<Vec<AdjacencyEntry<W>>>,
}

impl<W: Weight> From<Graph<W>> for GraphRepr<W> {
    fn from(graph: Graph<W>) -> Self {
        let adjacency = graph
            .adjacency
            .into_iter()
            .map(|mut list| {
                list.reverse();
                list
            })
            .collect::<Vec<_>>();
        Self {
            vertex_count: adjacency.len(),
            edge_count: graph.edge_count,
            adjacency,
        }
    }
}

impl<W: Weight> TryFrom<GraphRepr<W>> for Graph<W> {
    type Error = GraphError;

    fn try_from(repr: GraphRepr<W>) -> Result<Self, Self::Error> {
        if repr.adjacency.len() != repr.vertex_count {
            return Err(GraphError::parse(0, "vertex_count does not match adjacency table").reported());
        }
        let graph = Self::try_from_adjacency(repr.adjacency)?;
        if graph.edge_count != repr.edge_count {
            return Err(GraphError::parse(0, "edge_count does not match adjacency table").reported());
        }
        Ok(graph)
    }
}
