//! `dg convert`: re-express the input graph in another representation.

use std::io::{self, Write};

use anyhow::Result;
use clap::{Args, ValueEnum};
use digraph_core::graph::{Degrees, adjacency_matrix, in_out_degrees, incidence_matrix};
use digraph_core::index::externalize;
use serde::Serialize;

use super::Session;
use crate::output::{join, pretty_section, render};

/// Target representation for `dg convert`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Form {
    /// `n × n` edge-multiplicity matrix.
    #[default]
    Adjacency,
    /// `n × m` matrix: `-1` at the source, `1` at the dest, `2` for a self-loop.
    Incidence,
    /// Per-vertex in- and out-degree.
    Degrees,
    /// Out-neighbor list per vertex.
    List,
    /// The text format itself, normalized.
    Edges,
}

/// Arguments for `dg convert`.
#[derive(Args, Debug, Default)]
pub struct ConvertArgs {
    /// Representation to emit.
    #[arg(long, value_enum, default_value_t = Form::Adjacency)]
    pub form: Form,
}

#[derive(Debug, Serialize)]
struct MatrixOutput<T> {
    rows: Vec<Vec<T>>,
}

#[derive(Debug, Serialize)]
struct ListOutput {
    /// Out-neighbors of vertex `i + 1`, 1-based.
    neighbors: Vec<Vec<usize>>,
}

/// Execute `dg convert`.
pub fn run_convert(args: &ConvertArgs, session: &Session) -> Result<()> {
    match args.form {
        Form::Adjacency => {
            let edges = session.read_edges()?;
            render_matrix(session, "Adjacency matrix", adjacency_matrix(&edges))
        }
        Form::Incidence => {
            let edges = session.read_edges()?;
            render_matrix(session, "Incidence matrix", incidence_matrix(&edges))
        }
        Form::Degrees => {
            let edges = session.read_edges()?;
            render(session.output, &in_out_degrees(&edges), render_degrees_human)
        }
        Form::List => {
            let (_, adj) = session.read_adjacency()?;
            let payload = ListOutput {
                neighbors: adj.lists().iter().map(|list| externalize(list)).collect(),
            };
            render(session.output, &payload, |p, w| {
                for (v, neighbors) in p.neighbors.iter().enumerate() {
                    writeln!(w, "{}: {}", v + 1, join(neighbors))?;
                }
                Ok(())
            })
        }
        Form::Edges => {
            let edges = session.read_edges()?;
            render(session.output, &edges, |e, w| {
                e.write_to(w).map_err(io::Error::other)
            })
        }
    }
}

fn render_matrix<T: Serialize + std::fmt::Display>(
    session: &Session,
    heading: &str,
    rows: Vec<Vec<T>>,
) -> Result<()> {
    let payload = MatrixOutput { rows };
    render(session.output, &payload, |p, w| {
        pretty_section(w, heading)?;
        for row in &p.rows {
            writeln!(w, "{}", join(row))?;
        }
        Ok(())
    })
}

fn render_degrees_human(degrees: &Degrees, w: &mut dyn Write) -> io::Result<()> {
    writeln!(w, "{:>6} {:>6} {:>6}", "vertex", "in", "out")?;
    for (v, (in_degree, out_degree)) in degrees
        .in_degree
        .iter()
        .zip(&degrees.out_degree)
        .enumerate()
    {
        writeln!(w, "{:>6} {in_degree:>6} {out_degree:>6}", v + 1)?;
    }
    Ok(())
}
