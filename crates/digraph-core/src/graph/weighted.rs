//! Weighted directed graphs.
//!
//! Vertices are 0-based throughout. The text reader shifts 1-based input
//! (the default) on the way in.

use std::io::BufRead;

use serde::Serialize;
use tracing::{debug, instrument};

use super::edge_list::{PREALLOCATED_EDGES, ReadOptions, Records, parse_count};
use crate::error::GraphError;
use crate::index;

/// A directed edge `source → dest` with a weight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeightedEdge {
    pub source: usize,
    pub dest: usize,
    pub weight: f64,
}

impl WeightedEdge {
    #[must_use]
    pub const fn new(source: usize, dest: usize, weight: f64) -> Self {
        Self {
            source,
            dest,
            weight,
        }
    }

    /// The same edge pointing the other way, with the same weight.
    #[must_use]
    pub const fn reverse(self) -> Self {
        Self::new(self.dest, self.source, self.weight)
    }

    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.weight < 0.0
    }
}

/// A weighted directed graph over `0..n`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightedDigraph {
    vertex_count: usize,
    edges: Vec<WeightedEdge>,
    #[serde(skip)]
    outgoing: Vec<Vec<usize>>,
    #[serde(skip)]
    negative: bool,
}

impl WeightedDigraph {
    /// Build a graph from 0-based edges.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexOutOfRange`] for the first edge with an
    /// endpoint `>= vertex_count`.
    pub fn new(vertex_count: usize, edges: Vec<WeightedEdge>) -> Result<Self, GraphError> {
        let mut graph = Self {
            vertex_count,
            edges: Vec::with_capacity(edges.len()),
            outgoing: vec![Vec::new(); vertex_count],
            negative: false,
        };
        for edge in edges {
            graph.add_edge(edge)?;
        }
        Ok(graph)
    }

    /// Parse `n m` followed by `m` lines of `source dest weight`.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`EdgeList::read_from`](super::EdgeList::read_from),
    /// plus [`GraphError::Malformed`] for a weight that is not a number.
    #[instrument(skip(reader))]
    pub fn read_from<R: BufRead>(reader: R, options: &ReadOptions) -> Result<Self, GraphError> {
        let mut records = Records::new(reader);
        let (vertex_count, edge_count) = records.header(options)?;

        let mut edges = Vec::with_capacity(edge_count.min(PREALLOCATED_EDGES));
        for _ in 0..edge_count {
            let (line, fields) = records.expect_record(3)?;
            let source = parse_endpoint(&fields[0], line, vertex_count, options)?;
            let dest = parse_endpoint(&fields[1], line, vertex_count, options)?;
            let weight = fields[2].parse::<f64>().map_err(|e| {
                GraphError::malformed(line, format!("invalid weight `{}`: {e}", fields[2]))
            })?;
            edges.push(WeightedEdge::new(source, dest, weight));
        }

        debug!(vertex_count, edge_count, "read weighted graph");
        Self::new(vertex_count, edges)
    }

    /// Append an edge.
    ///
    /// # Errors
    ///
    /// An endpoint outside the graph is a caller bug and is refused with
    /// [`GraphError::VertexOutOfRange`]; the graph is left unchanged.
    pub fn add_edge(&mut self, edge: WeightedEdge) -> Result<(), GraphError> {
        for vertex in [edge.source, edge.dest] {
            if vertex >= self.vertex_count {
                return Err(GraphError::VertexOutOfRange {
                    vertex,
                    vertex_count: self.vertex_count,
                });
            }
        }
        self.outgoing[edge.source].push(self.edges.len());
        self.negative |= edge.is_negative();
        self.edges.push(edge);
        Ok(())
    }

    /// The same graph with every edge reversed.
    #[must_use]
    pub fn reverse(&self) -> Self {
        let mut reversed = Self {
            vertex_count: self.vertex_count,
            edges: Vec::with_capacity(self.edges.len()),
            outgoing: vec![Vec::new(); self.vertex_count],
            negative: self.negative,
        };
        for edge in &self.edges {
            let edge = edge.reverse();
            reversed.outgoing[edge.source].push(reversed.edges.len());
            reversed.edges.push(edge);
        }
        reversed
    }

    #[must_use]
    pub const fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    #[must_use]
    pub fn edges(&self) -> &[WeightedEdge] {
        &self.edges
    }

    /// Edges leaving `v`, in insertion order.
    ///
    /// # Panics
    ///
    /// Panics if `v >= vertex_count()`.
    pub fn outgoing(&self, v: usize) -> impl Iterator<Item = &WeightedEdge> + '_ {
        self.outgoing[v].iter().map(|&i| &self.edges[i])
    }

    /// Whether any edge has a negative weight.
    #[must_use]
    pub const fn has_negative_weight(&self) -> bool {
        self.negative
    }

    /// `n×n` weight matrix for [`crate::shortest`]. Parallel edges keep the
    /// lightest weight; absent edges are `None`.
    #[must_use]
    pub fn weight_matrix(&self) -> Vec<Vec<Option<f64>>> {
        let n = self.vertex_count;
        let mut matrix: Vec<Vec<Option<f64>>> = vec![vec![None; n]; n];
        for edge in &self.edges {
            let cell = &mut matrix[edge.source][edge.dest];
            *cell = Some(cell.map_or(edge.weight, |w| w.min(edge.weight)));
        }
        matrix
    }
}

fn parse_endpoint(
    field: &str,
    line: usize,
    vertex_count: usize,
    options: &ReadOptions,
) -> Result<usize, GraphError> {
    let value = parse_count(field, line, "vertex")?;
    if options.one_based {
        index::to_internal(value, vertex_count)
    } else {
        Ok(value)
    }
}
