//! `dg connectivity`: classify the graph as strong, one-sided, weak or
//! disconnected.

use anyhow::Result;
use digraph_core::connectivity::{
    Connectivity, classify, is_one_side_connected, is_strongly_connected, is_weakly_connected,
};
use digraph_core::graph::edge_list_to_adjacency_list;
use digraph_core::reach::all_pairs_reachability;
use serde::Serialize;

use super::Session;
use crate::output::{pretty_kv, render};

#[derive(Debug, Serialize)]
struct ConnectivityOutput {
    class: Connectivity,
    strong: bool,
    one_sided: bool,
    weak: bool,
}

const fn class_name(class: Connectivity) -> &'static str {
    match class {
        Connectivity::Strong => "strong",
        Connectivity::OneSided => "one-sided",
        Connectivity::Weak => "weak",
        Connectivity::Disconnected => "disconnected",
    }
}

/// Execute `dg connectivity`.
pub fn run_connectivity(session: &Session) -> Result<()> {
    let edges = session.read_edges()?;
    let reach = all_pairs_reachability(&edge_list_to_adjacency_list(&edges));

    let payload = ConnectivityOutput {
        class: classify(&edges),
        strong: is_strongly_connected(&reach),
        one_sided: is_one_side_connected(&reach),
        weak: is_weakly_connected(&edges),
    };
    render(session.output, &payload, |p, w| {
        pretty_kv(w, "class", class_name(p.class))?;
        pretty_kv(w, "strong", p.strong.to_string())?;
        pretty_kv(w, "one-sided", p.one_sided.to_string())?;
        pretty_kv(w, "weak", p.weak.to_string())
    })
}
