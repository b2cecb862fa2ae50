pub mod completions;
pub mod connectivity;
pub mod convert;
pub mod cycles;
pub mod order;
pub mod reach;
pub mod shortest;
pub mod traverse;

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use digraph_core::graph::{WeightedDigraph, edge_list_to_adjacency_list};
use digraph_core::{AdjacencyList, AnalysisConfig, EdgeList, GraphError, index};
use tracing::debug;

use crate::output::OutputMode;

/// Everything a command needs besides its own arguments.
#[derive(Debug)]
pub struct Session {
    /// Graph file; stdin when absent.
    pub input: Option<PathBuf>,
    pub config: AnalysisConfig,
    pub output: OutputMode,
}

impl Session {
    fn reader(&self) -> Result<Box<dyn BufRead>> {
        match &self.input {
            Some(path) => {
                let file = File::open(path)
                    .with_context(|| format!("failed to open input {}", path.display()))?;
                Ok(Box::new(BufReader::new(file)))
            }
            None => Ok(Box::new(io::stdin().lock())),
        }
    }

    /// Parse the unweighted text format from the input.
    pub fn read_edges(&self) -> Result<EdgeList> {
        let edges = EdgeList::read_from(self.reader()?, &self.config.read_options())?;
        debug!(
            vertex_count = edges.vertex_count(),
            edge_count = edges.edge_count(),
            "loaded graph"
        );
        Ok(edges)
    }

    /// Parse the input and build its adjacency list.
    pub fn read_adjacency(&self) -> Result<(EdgeList, AdjacencyList)> {
        let edges = self.read_edges()?;
        let adj = edge_list_to_adjacency_list(&edges);
        Ok((edges, adj))
    }

    /// Parse the weighted text format (`source dest weight` per edge).
    pub fn read_weighted(&self) -> Result<WeightedDigraph> {
        let graph = WeightedDigraph::read_from(self.reader()?, &self.config.read_options())?;
        debug!(
            vertex_count = graph.vertex_count(),
            edge_count = graph.edge_count(),
            "loaded weighted graph"
        );
        Ok(graph)
    }
}

/// A 1-based source vertex given on the command line.
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct SourceArgs {
    /// Source vertex (1-based). All sources when omitted.
    #[arg(long, short)]
    pub source: Option<usize>,
}

/// Translate a 1-based command-line source into an internal index.
pub fn internal_source(source: usize, vertex_count: usize) -> Result<usize, GraphError> {
    index::to_internal(source, vertex_count).map_err(|_| GraphError::SourceOutOfRange {
        vertex: source,
        vertex_count,
    })
}
