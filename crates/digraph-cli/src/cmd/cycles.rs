//! `dg cycles`: list cycles closed by back edges.


use anyhow::Result;
use clap::Args;
use digraph_core::cycles::find_cycles;
use serde::Serialize;
use tracing::debug;

use super::Session;
use crate::output::{join, pretty_section, render};

/// Arguments for `dg cycles`.
#[derive(Args, Debug, Default)]
pub struct CyclesArgs {
    /// Maximum number of cycles to report. Overrides `[cycles] limit` from
    /// the config file.
    #[arg(long)]
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
struct CyclesOutput {
    limit: usize,
    cycles: Vec<Vec<usize>>,
}

/// Execute `dg cycles`.
pub fn run_cycles(args: &CyclesArgs, session: &Session) -> Result<()> {
    let (_, adj) = session.read_adjacency()?;
    let limit = args.limit.unwrap_or(session.config.cycles.limit);
    debug!(limit, "searching for cycles");

    let payload = CyclesOutput {
        limit,
        cycles: find_cycles(&adj, limit),
    };
    render(session.output, &payload, |p, w| {
        if p.cycles.is_empty() {
            return writeln!(w, "no cycles");
        }
        pretty_section(w, &format!("Cycles ({})", p.cycles.len()))?;
        for cycle in &p.cycles {
            writeln!(w, "{}", join(cycle))?;
        }
        Ok(())
    })
}
