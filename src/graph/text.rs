//! Textual views of a [`Graph`].
//!
//! Adjacency list, one line per vertex that has entries:
//!
//! ```text
//! 0: -> 8 (weight: 8.00) -> 1 (weight: 4.00)
//! ```
//!
//! Adjacency matrix, restricted to rows and columns holding a non-zero value:
//!
//! ```text
//!         0     1     8
//!   0     0  4.00  8.00
//! ```
//!
//! The list form can be parsed back with [`Graph::parse_adjacency_list`].

use crate::graph::store::{AdjacencyEntry, Graph};
use crate::{GraphError, Weight};
use core::fmt;
use core::str::FromStr;

/// Displays a graph as adjacency lists.
pub struct AdjacencyListView<'a, W: Weight>(&'a Graph<W>);

impl<W: Weight> fmt::Display for AdjacencyListView<'_, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let graph = self.0;
        for vertex in 0..graph.vertex_count() {
            if graph.degree(vertex) == 0 {
                continue;
            }
            write!(f, "{vertex}: ")?;
            for entry in graph.neighbors(vertex) {
                write!(f, "-> {} (weight: {:.2}) ", entry.vertex, entry.weight)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Displays a graph as a dense adjacency matrix with all-zero rows and
/// columns suppressed.
pub struct AdjacencyMatrixView<'a, W: Weight>(&'a Graph<W>);

impl<W: Weight> AdjacencyMatrixView<'_, W> {
    /// Builds the dense symmetric matrix, zero where no edge exists.
    ///
    /// With parallel edges the oldest entry's weight wins.
    pub fn to_dense(&self) -> Vec<Vec<W>> {
        let graph = self.0;
        let n = graph.vertex_count();
        let mut matrix = vec![vec![W::zero(); n]; n];
        for (i, row) in matrix.iter_mut().enumerate() {
            for entry in graph.neighbors(i) {
                row[entry.vertex] = entry.weight;
            }
        }
        matrix
    }
}

impl<W: Weight> fmt::Display for AdjacencyMatrixView<'_, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let matrix = self.to_dense();
        let n = matrix.len();
        let active_columns: Vec<bool> = (0..n)
            .map(|j| matrix.iter().any(|row| !row[j].is_zero()))
            .collect();

        write!(f, "   ")?;
        for j in (0..n).filter(|&j| active_columns[j]) {
            write!(f, "{j:>6}")?;
        }
        writeln!(f)?;

        for (i, row) in matrix.iter().enumerate() {
            if row.iter().all(|w| w.is_zero()) {
                continue;
            }
            write!(f, "{i:>3}")?;
            for (j, w) in row.iter().enumerate() {
                if !active_columns[j] {
                    continue;
                }
                if w.is_zero() {
                    write!(f, "{:>6.0}", W::zero())?;
                } else {
                    write!(f, "{w:>6.2}")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<W: Weight> Graph<W> {
    /// Returns a displayable adjacency-list view.
    pub fn adjacency_list(&self) -> AdjacencyListView<'_, W> {
        AdjacencyListView(self)
    }

    /// Returns a displayable adjacency-matrix view.
    pub fn adjacency_matrix(&self) -> AdjacencyMatrixView<'_, W> {
        AdjacencyMatrixView(self)
    }
}

impl<W: Weight + FromStr> Graph<W> {
    /// Rebuilds a graph on `vertex_count` vertices from its adjacency-list text.
    ///
    /// Blank lines are ignored and vertices without a line get no entries.
    /// Entry order within each line is preserved, so printing the result
    /// reproduces the input up to the two-decimal rounding of weights.
    ///
    /// # Errors
    /// [`GraphError::Parse`] for malformed lines or asymmetric lists, and the
    /// errors of [`Graph::try_from_adjacency`].
    pub fn parse_adjacency_list(vertex_count: usize, text: &str) -> Result<Self, GraphError> {
        let mut lists: Vec<Vec<AdjacencyEntry<W>>> = Vec::new();
        lists.try_reserve_exact(vertex_count)?;
        lists.resize_with(vertex_count, Vec::new);
        let mut listed = Vec::new();
        listed.try_reserve_exact(vertex_count)?;
        listed.resize(vertex_count, false);

        for (idx, line) in text.lines().enumerate() {
            let line_no = idx + 1;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let (head, rest) = line
                .split_once(':')
                .ok_or_else(|| GraphError::parse(line_no, "missing ':' after vertex").reported())?;
            let vertex: usize = head
                .trim()
                .parse()
                .map_err(|_| GraphError::parse(line_no, format!("invalid vertex '{}'", head.trim())).reported())?;
            if vertex >= vertex_count {
                return Err(GraphError::out_of_range(vertex, vertex_count).reported());
            }
            if core::mem::replace(&mut listed[vertex], true) {
                return Err(GraphError::parse(line_no, format!("vertex {vertex} listed twice")).reported());
            }

            let list = &mut lists[vertex];
            for item in rest.split("->").map(str::trim).filter(|s| !s.is_empty()) {
                list.push(parse_entry(item).map_err(|reason| GraphError::parse(line_no, reason).reported())?);
            }
        }

        Self::try_from_adjacency(lists)
    }
}

/// Parses `<neighbor> (weight: <w>)`.
fn parse_entry<W: FromStr>(item: &str) -> Result<AdjacencyEntry<W>, String> {
    let (neighbor, weight) = item
        .split_once('(')
        .ok_or_else(|| format!("missing weight in '{item}'"))?;
    let vertex = neighbor
        .trim()
        .parse()
        .map_err(|_| format!("invalid neighbour '{}'", neighbor.trim()))?;
    let weight = weight
        .trim()
        .strip_prefix("weight:")
        .and_then(|w| w.strip_suffix(')'))
        .ok_or_else(|| format!("malformed weight in '{item}'"))?
        .trim();
    let weight = weight
        .parse()
        .map_err(|_| format!("invalid weight '{weight}'"))?;
    Ok(AdjacencyEntry { vertex, weight })
}
