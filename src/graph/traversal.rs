//! Breadth-first traversal.
//!
//! The frontier is a [`TraversalQueue`] of [`PendingVisit`] records copied out
//! of the graph's adjacency lists. Deduplication is lazy: a vertex may be
//! queued more than once before it is first reached, so the dequeue side
//! re-checks the visited markers and skips stale records.

use crate::collections::TraversalQueue;
use crate::graph::store::{AdjacencyEntry, Graph};
use crate::{GraphError, Weight};
use core::fmt;

/// A queued visit: the target vertex and the weight of the edge that reached it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingVisit<W = f32> {
    /// Vertex to visit.
    pub vertex: usize,
    /// Weight of the edge the visit was discovered through.
    pub weight: W,
}

impl<W: Copy> From<&AdjacencyEntry<W>> for PendingVisit<W> {
    fn from(entry: &AdjacencyEntry<W>) -> Self {
        Self {
            vertex: entry.vertex,
            weight: entry.weight,
        }
    }
}

/// An iterator for Breadth-First Search (BFS).
///
/// This iterator yields vertex indices in BFS order: every vertex at distance
/// `k` from the start before any at distance `k + 1`. Vertices outside the
/// start's connected component are never yielded.
pub struct Bfs<'a, W: Weight> {
    graph: &'a Graph<W>,
    visited: Vec<bool>,
    queue: TraversalQueue<PendingVisit<W>>,
    start: Option<usize>,
}

impl<'a, W: Weight> Bfs<'a, W> {
    /// Creates a new BFS iterator starting from `start`.
    ///
    /// All traversal state is reserved up front, so iteration itself never
    /// allocates beyond it.
    ///
    /// # Errors
    /// - [`GraphError::NullGraph`] if the graph has been destroyed.
    /// - [`GraphError::VertexOutOfRange`] if `start` is not a vertex.
    /// - [`GraphError::Allocation`] if the visited markers or queue cannot be reserved.
    pub fn new(graph: &'a Graph<W>, start: usize) -> Result<Self, GraphError> {
        if graph.is_released() {
            return Err(GraphError::NullGraph.reported());
        }
        let len = graph.vertex_count();
        if start >= len {
            return Err(GraphError::out_of_range(start, len).reported());
        }

        let mut visited = Vec::new();
        visited.try_reserve_exact(len)?;
        visited.resize(len, false);
        // Each directed entry is queued at most once.
        let queue = TraversalQueue::try_with_capacity(graph.edge_count().saturating_mul(2))?;

        tracing::debug!(start, "starting breadth-first search");
        Ok(Self {
            graph,
            visited,
            queue,
            start: Some(start),
        })
    }

    /// Marks `vertex` visited and queues its not-yet-visited neighbours.
    fn visit(&mut self, vertex: usize) -> usize {
        self.visited[vertex] = true;
        for entry in self.graph.neighbors(vertex) {
            if !self.visited[entry.vertex] {
                self.queue.push(PendingVisit::from(entry));
            }
        }
        tracing::debug!(vertex, pending = self.queue.len(), "visiting");
        vertex
    }

    /// Returns `true` if `vertex` has been yielded already.
    pub fn is_visited(&self, vertex: usize) -> bool {
        self.visited.get(vertex).copied().unwrap_or(false)
    }
}

impl<W: Weight> Iterator for Bfs<'_, W> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(start) = self.start.take() {
            return Some(self.visit(start));
        }
        loop {
            let pending = self.queue.pop()?;
            if !self.visited[pending.vertex] {
                return Some(self.visit(pending.vertex));
            }
        }
    }
}

/// The outcome of a BFS run, printable as the traversal transcript.
///
/// ```text
/// Starting BFS from vertex 0
/// Visiting 0
/// Visiting 1
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BfsReport {
    /// The start vertex.
    pub start: usize,
    /// Vertices in visitation order; the first element is `start`.
    pub order: Vec<usize>,
}

impl fmt::Display for BfsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Starting BFS from vertex {}", self.start)?;
        for vertex in &self.order {
            writeln!(f, "Visiting {vertex}")?;
        }
        Ok(())
    }
}

impl<W: Weight> Graph<W> {
    /// Returns a breadth-first iterator from `start`.
    ///
    /// # Errors
    /// See [`Bfs::new`].
    pub fn bfs(&self, start: usize) -> Result<Bfs<'_, W>, GraphError> {
        Bfs::new(self, start)
    }

    /// Runs BFS from `start`, handing each visited vertex to `observer`.
    ///
    /// Returns the number of vertices visited. On error nothing is visited.
    ///
    /// # Errors
    /// See [`Bfs::new`].
    pub fn bfs_with<F: FnMut(usize)>(&self, start: usize, mut observer: F) -> Result<usize, GraphError> {
        let mut count = 0;
        for vertex in self.bfs(start)? {
            observer(vertex);
            count += 1;
        }
        Ok(count)
    }

    /// Collects the BFS visitation order from `start`.
    ///
    /// # Errors
    /// See [`Bfs::new`].
    pub fn bfs_order(&self, start: usize) -> Result<Vec<usize>, GraphError> {
        let mut order = Vec::new();
        self.bfs_with(start, |v| order.push(v))?;
        Ok(order)
    }

    /// Runs BFS from `start` and packages the result for printing.
    ///
    /// # Errors
    /// See [`Bfs::new`].
    pub fn bfs_report(&self, start: usize) -> Result<BfsReport, GraphError> {
        Ok(BfsReport {
            start,
            order: self.bfs_order(start)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 0 - 1 - 3, 0 - 2 - 3, 4 isolated, 5 - 6 separate component.
    fn sample() -> Graph {
        Graph::from_edges(
            7,
            [
                (0, 1, 1.0),
                (0, 2, 1.0),
                (1, 3, 1.0),
                (2, 3, 1.0),
                (5, 6, 1.0),
            ],
        )
        .unwrap()
    }

    #[test]
    fn visits_component_in_breadth_first_order() {
        let graph = sample();
        // Neighbours of 0 are newest first: 2 then 1.
        assert_eq!(graph.bfs_order(0).unwrap(), vec![0, 2, 1, 3]);
    }

    #[test]
    fn never_leaves_component() {
        let graph = sample();
        assert_eq!(graph.bfs_order(5).unwrap(), vec![5, 6]);
        assert_eq!(graph.bfs_order(4).unwrap(), vec![4]);
    }

    #[test]
    fn single_vertex_graph() {
        let graph: Graph = Graph::new(1);
        assert_eq!(graph.bfs_order(0).unwrap(), vec![0]);
    }

    #[test]
    fn lazy_dedup_skips_stale_records() {
        // Triangle: 1 and 2 are both queued from 0, and 2 is queued again from 1
        // before it is reached.
        let graph: Graph = Graph::from_edges(3, [(0, 1, 1.0), (1, 2, 1.0), (0, 2, 1.0)]).unwrap();
        let order = graph.bfs_order(0).unwrap();
        assert_eq!(order.len(), 3);
        assert_eq!(order[0], 0);
    }

    #[test]
    fn start_out_of_range_is_reported() {
        let graph = sample();
        assert_eq!(
            graph.bfs_order(9).unwrap_err(),
            GraphError::VertexOutOfRange { vertex: 9, vertex_count: 7 }
        );
        let mut seen = 0;
        assert!(graph.bfs_with(7, |_| seen += 1).is_err());
        assert_eq!(seen, 0);
    }

    #[test]
    fn destroyed_graph_is_a_no_op() {
        let mut graph = sample();
        graph.destroy();
        assert_eq!(graph.bfs_order(0).unwrap_err(), GraphError::NullGraph);
    }

    #[test]
    fn traversal_does_not_touch_graph() {
        let graph = sample();
        let before = graph.clone();
        let _ = graph.bfs_order(0).unwrap();
        assert_eq!(graph, before);
    }

    #[test]
    fn report_transcript() {
        let graph: Graph = Graph::from_edges(3, [(0, 1, 1.0), (1, 2, 1.0)]).unwrap();
        let report = graph.bfs_report(1).unwrap();
        assert_eq!(
            report.to_string(),
            "Starting BFS from vertex 1\nVisiting 1\nVisiting 2\nVisiting 0\n"
        );
    }

    #[test]
    fn is_visited_tracks_progress() {
        let graph = sample();
        let mut bfs = graph.bfs(0).unwrap();
        assert!(!bfs.is_visited(0));
        assert_eq!(bfs.next(), Some(0));
        assert!(bfs.is_visited(0));
        assert!(!bfs.is_visited(3));
        assert!(!bfs.is_visited(100));
    }
}
