//! `dg toposort` and `dg scc`: orderings and groupings by finish time.


use anyhow::Result;
use digraph_core::scc::strong_components;
use digraph_core::topo::topological_sort;
use serde::Serialize;

use super::Session;
use crate::output::{join, render};

#[derive(Debug, Serialize)]
struct ToposortOutput {
    /// `null` when the graph has a cycle.
    order: Option<Vec<usize>>,
}

#[derive(Debug, Serialize)]
struct SccOutput {
    components: Vec<Vec<usize>>,
}

/// Execute `dg toposort`. A cyclic graph is reported, not treated as a
/// failure.
pub fn run_toposort(session: &Session) -> Result<()> {
    let (_, adj) = session.read_adjacency()?;
    let payload = ToposortOutput {
        order: topological_sort(&adj),
    };
    render(session.output, &payload, |p, w| match &p.order {
        Some(order) => writeln!(w, "{}", join(order)),
        None => writeln!(w, "no topological order: graph has a cycle"),
    })
}

/// Execute `dg scc`. One component per line, in discovery order.
pub fn run_scc(session: &Session) -> Result<()> {
    let (_, adj) = session.read_adjacency()?;
    let payload = SccOutput {
        components: strong_components(&adj),
    };
    render(session.output, &payload, |p, w| {
        for component in &p.components {
            writeln!(w, "{}", join(component))?;
        }
        Ok(())
    })
}
