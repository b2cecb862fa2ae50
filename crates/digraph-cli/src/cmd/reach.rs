//! `dg distances` and `dg reach`: BFS hop counts and reachability, from
//! one source or from every vertex.


use anyhow::Result;
use digraph_core::reach::{
    all_pairs_distances, all_pairs_reachability, distance_from_source, distances_with_sentinel,
    reachability_from_source,
};
use serde::Serialize;

use super::{Session, SourceArgs, internal_source};
use crate::output::{join, render};

/// Hop counts; `null` in JSON for unreachable vertices.
#[derive(Debug, Serialize)]
struct DistancesOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<usize>,
    rows: Vec<Vec<Option<usize>>>,
}

#[derive(Debug, Serialize)]
struct ReachOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<usize>,
    rows: Vec<Vec<bool>>,
}

/// Execute `dg distances`.
///
/// Pretty output uses the sentinel [`digraph_core::reach::INF`] for
/// unreachable vertices, one row per source.
pub fn run_distances(args: &SourceArgs, session: &Session) -> Result<()> {
    let (_, adj) = session.read_adjacency()?;
    let rows = match args.source {
        Some(source) => {
            let internal = internal_source(source, adj.vertex_count())?;
            vec![distance_from_source(&adj, internal)?]
        }
        None => all_pairs_distances(&adj),
    };

    let payload = DistancesOutput {
        source: args.source,
        rows,
    };
    render(session.output, &payload, |p, w| {
        for row in &p.rows {
            writeln!(w, "{}", join(&distances_with_sentinel(row)))?;
        }
        Ok(())
    })
}

/// Execute `dg reach`. Pretty output writes `1`/`0` per vertex.
pub fn run_reach(args: &SourceArgs, session: &Session) -> Result<()> {
    let (_, adj) = session.read_adjacency()?;
    let rows = match args.source {
        Some(source) => {
            let internal = internal_source(source, adj.vertex_count())?;
            vec![reachability_from_source(&adj, internal)?]
        }
        None => all_pairs_reachability(&adj),
    };

    let payload = ReachOutput {
        source: args.source,
        rows,
    };
    render(session.output, &payload, |p, w| {
        for row in &p.rows {
            let bits: Vec<u8> = row.iter().map(|&r| u8::from(r)).collect();
            writeln!(w, "{}", join(&bits))?;
        }
        Ok(())
    })
}
