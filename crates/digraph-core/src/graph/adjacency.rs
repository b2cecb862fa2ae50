//! 0-based adjacency-list form.

#![allow(clippy::module_name_repetitions)]

use petgraph::graph::{DiGraph, NodeIndex};
use serde::Serialize;

use crate::error::GraphError;

/// In- and out-degree per vertex, indexed 0-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Degrees {
    /// Number of edges ending at each vertex.
    pub in_degree: Vec<usize>,
    /// Number of edges starting at each vertex.
    pub out_degree: Vec<usize>,
}

/// A directed graph as `n` ordered out-neighbor lists over `0..n`.
///
/// `edge_count` always equals the total length of the lists; parallel edges
/// and self-loops are kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdjacencyList {
    vertex_count: usize,
    edge_count: usize,
    neighbors: Vec<Vec<usize>>,
}

impl AdjacencyList {
    /// Build from per-vertex out-neighbor lists (0-based).
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexOutOfRange`] for a neighbor `>= n`.
    pub fn from_neighbors(neighbors: Vec<Vec<usize>>) -> Result<Self, GraphError> {
        let vertex_count = neighbors.len();
        if let Some(&vertex) = neighbors.iter().flatten().find(|&&v| v >= vertex_count) {
            return Err(GraphError::VertexOutOfRange {
                vertex,
                vertex_count,
            });
        }
        Ok(Self::from_validated(neighbors))
    }

    /// Callers guarantee every neighbor is `< neighbors.len()`.
    pub(crate) fn from_validated(neighbors: Vec<Vec<usize>>) -> Self {
        let edge_count = neighbors.iter().map(Vec::len).sum();
        Self {
            vertex_count: neighbors.len(),
            edge_count,
            neighbors,
        }
    }

    /// Number of vertices `n`.
    #[must_use]
    pub const fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Number of edges `m`.
    #[must_use]
    pub const fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Out-neighbors of `v` in insertion order.
    ///
    /// # Panics
    ///
    /// Panics if `v >= vertex_count()`.
    #[must_use]
    pub fn neighbors(&self, v: usize) -> &[usize] {
        &self.neighbors[v]
    }

    /// All out-neighbor lists, indexed by vertex.
    #[must_use]
    pub fn lists(&self) -> &[Vec<usize>] {
        &self.neighbors
    }

    /// The same graph with every edge pointing the other way.
    ///
    /// `n` and `m` are preserved. Within each reversed list, sources appear
    /// in increasing order of the original source vertex.
    #[must_use]
    pub fn reverse(&self) -> Self {
        let mut reversed = vec![Vec::new(); self.vertex_count];
        for (source, targets) in self.neighbors.iter().enumerate() {
            for &dest in targets {
                reversed[dest].push(source);
            }
        }
        Self {
            vertex_count: self.vertex_count,
            edge_count: self.edge_count,
            neighbors: reversed,
        }
    }

    /// Degree counts over this form. Matches
    /// [`in_out_degrees`](super::convert::in_out_degrees) on the edge list it
    /// was converted from.
    #[must_use]
    pub fn degrees(&self) -> Degrees {
        let mut in_degree = vec![0; self.vertex_count];
        let out_degree = self.neighbors.iter().map(Vec::len).collect();
        for &dest in self.neighbors.iter().flatten() {
            in_degree[dest] += 1;
        }
        Degrees {
            in_degree,
            out_degree,
        }
    }

    /// A petgraph view. Node `i` carries weight `i` and has `NodeIndex::new(i)`.
    #[must_use]
    pub fn to_digraph(&self) -> DiGraph<usize, ()> {
        let mut graph = DiGraph::with_capacity(self.vertex_count, self.edge_count);
        for v in 0..self.vertex_count {
            graph.add_node(v);
        }
        for (source, targets) in self.neighbors.iter().enumerate() {
            for &dest in targets {
                graph.add_edge(NodeIndex::new(source), NodeIndex::new(dest), ());
            }
        }
        graph
    }
}
