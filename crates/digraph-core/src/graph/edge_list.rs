//! Edge-list form and the plain-text graph format.
//!
//! # Format
//!
//! ```text
//! n m
//! source dest      ← m lines, 1-based vertex numbers
//! ```
//!
//! Blank lines are skipped. Weighted graphs append a third `weight` column
//! (see [`super::weighted`]).

use std::io::{BufRead, Write};

use serde::Serialize;
use tracing::{debug, instrument};

use crate::error::GraphError;
use crate::index;

/// How the text reader treats the header and vertex numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadOptions {
    /// Reject a header announcing zero vertices with [`GraphError::EmptyGraph`].
    /// Default: `true`.
    pub reject_empty: bool,
    /// Vertex numbers in the input start at 1. When `false` the input is
    /// 0-based and is shifted on read. Default: `true`.
    pub one_based: bool,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            reject_empty: true,
            one_based: true,
        }
    }
}

/// A directed graph as `n` vertices plus an ordered list of 1-based
/// `(source, dest)` pairs.
///
/// Every endpoint is checked against `1..=n` at construction, so
/// conversions never fail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EdgeList {
    vertex_count: usize,
    edges: Vec<(usize, usize)>,
}

impl EdgeList {
    /// Build an edge list from 1-based pairs.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexOutOfRange`] for the first endpoint
    /// outside `1..=vertex_count`.
    pub fn new(vertex_count: usize, edges: Vec<(usize, usize)>) -> Result<Self, GraphError> {
        for &(source, dest) in &edges {
            index::to_internal(source, vertex_count)?;
            index::to_internal(dest, vertex_count)?;
        }
        Ok(Self {
            vertex_count,
            edges,
        })
    }

    /// Parse the text format from `reader`.
    ///
    /// # Errors
    ///
    /// - [`GraphError::EmptyGraph`] for `n == 0` when `options.reject_empty`.
    /// - [`GraphError::Malformed`] for a bad header, a bad edge line, or
    ///   fewer than `m` edge lines.
    /// - [`GraphError::VertexOutOfRange`] for an endpoint outside the graph.
    /// - [`GraphError::Io`] if reading fails.
    #[instrument(skip(reader))]
    pub fn read_from<R: BufRead>(reader: R, options: &ReadOptions) -> Result<Self, GraphError> {
        let mut records = Records::new(reader);
        let (vertex_count, edge_count) = records.header(options)?;

        let mut edges = Vec::with_capacity(edge_count.min(PREALLOCATED_EDGES));
        for _ in 0..edge_count {
            let (line, fields) = records.expect_record(2)?;
            let source = parse_vertex(&fields[0], line, options)?;
            let dest = parse_vertex(&fields[1], line, options)?;
            edges.push((source, dest));
        }

        debug!(vertex_count, edge_count, "read edge list");
        Self::new(vertex_count, edges)
    }

    /// Emit the text format: the `n m` header, then one `source dest` line
    /// per edge (1-based).
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Io`] if writing fails.
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<(), GraphError> {
        writeln!(writer, "{} {}", self.vertex_count, self.edges.len())?;
        for (source, dest) in &self.edges {
            writeln!(writer, "{source} {dest}")?;
        }
        Ok(())
    }

    /// Number of vertices `n`.
    #[must_use]
    pub const fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Number of edges `m`.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// The 1-based `(source, dest)` pairs in input order.
    #[must_use]
    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    /// The edges as 0-based pairs, in input order.
    pub fn internal_edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.edges.iter().map(|&(source, dest)| {
            (
                index::to_internal_validated(source),
                index::to_internal_validated(dest),
            )
        })
    }
}

fn parse_vertex(field: &str, line: usize, options: &ReadOptions) -> Result<usize, GraphError> {
    let value = parse_count(field, line, "vertex")?;
    if options.one_based {
        return Ok(value);
    }
    index::try_to_external(value)
        .ok_or_else(|| GraphError::malformed(line, format!("vertex `{field}` is too large")))
}

/// Upper bound on the edge vector reserved from an untrusted header.
pub(crate) const PREALLOCATED_EDGES: usize = 4096;

pub(crate) fn parse_count(field: &str, line: usize, what: &str) -> Result<usize, GraphError> {
    field
        .parse::<usize>()
        .map_err(|e| GraphError::malformed(line, format!("invalid {what} `{field}`: {e}")))
}

// ---------------------------------------------------------------------------
// Record reader shared with the weighted format
// ---------------------------------------------------------------------------

/// Whitespace-separated records, one per non-blank line, with 1-based line
/// numbers for error reporting.
pub(crate) struct Records<R> {
    lines: std::io::Lines<R>,
    line: usize,
}

impl<R: BufRead> Records<R> {
    pub(crate) fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line: 0,
        }
    }

    /// Read and validate the `n m` header.
    pub(crate) fn header(&mut self, options: &ReadOptions) -> Result<(usize, usize), GraphError> {
        let (line, fields) = self.expect_record(2)?;
        let vertex_count = parse_count(&fields[0], line, "vertex count")?;
        let edge_count = parse_count(&fields[1], line, "edge count")?;
        if options.reject_empty && vertex_count == 0 {
            return Err(GraphError::EmptyGraph);
        }
        Ok((vertex_count, edge_count))
    }

    /// The next non-blank record, which must have exactly `arity` fields.
    pub(crate) fn expect_record(
        &mut self,
        arity: usize,
    ) -> Result<(usize, Vec<String>), GraphError> {
        let Some((line, fields)) = self.next_record()? else {
            return Err(GraphError::malformed(
                self.line + 1,
                format!("unexpected end of input, expected {arity} fields"),
            ));
        };
        if fields.len() != arity {
            return Err(GraphError::malformed(
                line,
                format!("expected {arity} fields, found {}", fields.len()),
            ));
        }
        Ok((line, fields))
    }

    fn next_record(&mut self) -> Result<Option<(usize, Vec<String>)>, GraphError> {
        for text in self.lines.by_ref() {
            let text = text?;
            self.line += 1;
            let fields: Vec<String> = text.split_whitespace().map(str::to_owned).collect();
            if !fields.is_empty() {
                return Ok(Some((self.line, fields)));
            }
        }
        Ok(None)
    }
}
