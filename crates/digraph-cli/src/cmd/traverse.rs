//! `dg traverse`: BFS or DFS from one source, optionally with the full
//! frontier trace.

use std::io::Write;

use anyhow::Result;
use clap::{Args, ValueEnum};
use digraph_core::traversal::{TraceStep, bfs_order, bfs_table, dfs_order, dfs_table};
use serde::Serialize;

use super::{Session, internal_source};
use crate::output::{join, render};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Order {
    #[default]
    Bfs,
    Dfs,
}

/// Arguments for `dg traverse`.
#[derive(Args, Debug)]
pub struct TraverseArgs {
    /// Visiting discipline.
    #[arg(long, value_enum, default_value_t = Order::Bfs)]
    pub order: Order,

    /// Start vertex (1-based).
    #[arg(long, short, default_value_t = 1)]
    pub source: usize,

    /// Emit the frontier after every step instead of just the visit order.
    #[arg(long)]
    pub trace: bool,
}

#[derive(Debug, Serialize)]
struct OrderOutput {
    order: Vec<usize>,
}

#[derive(Debug, Serialize)]
struct TraceOutput {
    steps: Vec<TraceStep>,
}

/// Execute `dg traverse`.
pub fn run_traverse(args: &TraverseArgs, session: &Session) -> Result<()> {
    let (_, adj) = session.read_adjacency()?;
    let source = internal_source(args.source, adj.vertex_count())?;

    if args.trace {
        let steps = match args.order {
            Order::Bfs => bfs_table(&adj, source)?,
            Order::Dfs => dfs_table(&adj, source)?,
        };
        return render(session.output, &TraceOutput { steps }, render_trace_human);
    }

    let order = match args.order {
        Order::Bfs => bfs_order(&adj, source)?,
        Order::Dfs => dfs_order(&adj, source)?,
    };
    render(session.output, &OrderOutput { order }, |p, w| {
        writeln!(w, "{}", join(&p.order))
    })
}

fn render_trace_human(payload: &TraceOutput, w: &mut dyn Write) -> std::io::Result<()> {
    writeln!(w, "{:>4}  {:>6}  frontier", "step", "vertex")?;
    for step in &payload.steps {
        writeln!(
            w,
            "{:>4}  {:>6}  [{}]",
            step.step,
            step.vertex,
            join(&step.frontier)
        )?;
    }
    Ok(())
}
