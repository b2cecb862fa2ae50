//! `dg shortest`: all-pairs shortest paths by Floyd-Warshall.

use std::fmt::Display;

use anyhow::Result;
use clap::Args;
use digraph_core::graph::unit_weight_matrix;
use digraph_core::shortest::{Relaxation, relax_all};
use serde::Serialize;
use tracing::warn;

use super::Session;
use crate::output::render;

/// Arguments for `dg shortest`.
#[derive(Args, Debug, Default)]
pub struct ShortestArgs {
    /// Read `source dest weight` edge lines instead of unit-weight edges.
    #[arg(long)]
    pub weighted: bool,

    /// Only accept `i → k → j` when both legs are input edges. Misses paths
    /// of three or more hops.
    #[arg(long)]
    pub base_edges: bool,
}

impl ShortestArgs {
    const fn relaxation(&self) -> Relaxation {
        if self.base_edges {
            Relaxation::BaseEdges
        } else {
            Relaxation::Accumulated
        }
    }
}

/// `null` in JSON for unreachable pairs.
#[derive(Debug, Serialize)]
struct ShortestOutput<W> {
    rows: Vec<Vec<Option<W>>>,
}

/// Execute `dg shortest`.
pub fn run_shortest(args: &ShortestArgs, session: &Session) -> Result<()> {
    if args.weighted {
        let graph = session.read_weighted()?;
        if graph.has_negative_weight() {
            warn!("negative edge weights; distances along negative cycles are not meaningful");
        }
        let rows = relax_all(&graph.weight_matrix(), args.relaxation())?;
        render_distances(session, rows)
    } else {
        let (_, adj) = session.read_adjacency()?;
        let rows = relax_all(&unit_weight_matrix(&adj), args.relaxation())?;
        render_distances(session, rows)
    }
}

fn render_distances<W: Serialize + Display>(
    session: &Session,
    rows: Vec<Vec<Option<W>>>,
) -> Result<()> {
    render(session.output, &ShortestOutput { rows }, |p, w| {
        for row in &p.rows {
            let cells: Vec<String> = row
                .iter()
                .map(|d| d.as_ref().map_or_else(|| "inf".to_string(), ToString::to_string))
                .collect();
            writeln!(w, "{}", cells.join(" "))?;
        }
        Ok(())
    })
}
