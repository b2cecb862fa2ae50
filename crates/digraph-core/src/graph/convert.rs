//! Representation conversion from the edge-list form.
//!
//! All matrices are indexed 0-based: row/column `i` is external vertex
//! `i + 1`.

use tracing::instrument;

use super::adjacency::{AdjacencyList, Degrees};
use super::edge_list::EdgeList;

/// `n×m` incidence matrix. Column `i` encodes edge `i`: `-1` at its source
/// row, `+1` at its dest row, or a single `2` for a self-loop.
#[must_use]
pub fn incidence_matrix(graph: &EdgeList) -> Vec<Vec<i8>> {
    let mut matrix = vec![vec![0; graph.edge_count()]; graph.vertex_count()];
    for (column, (source, dest)) in graph.internal_edges().enumerate() {
        if source == dest {
            matrix[source][column] = 2;
        } else {
            matrix[source][column] = -1;
            matrix[dest][column] = 1;
        }
    }
    matrix
}

/// `n×n` adjacency matrix; entry `[i][j]` is the number of edges `i → j`.
#[must_use]
pub fn adjacency_matrix(graph: &EdgeList) -> Vec<Vec<usize>> {
    let n = graph.vertex_count();
    let mut matrix = vec![vec![0; n]; n];
    for (source, dest) in graph.internal_edges() {
        matrix[source][dest] += 1;
    }
    matrix
}

/// In- and out-degree of every vertex. A self-loop counts once in each.
#[must_use]
pub fn in_out_degrees(graph: &EdgeList) -> Degrees {
    let n = graph.vertex_count();
    let mut in_degree = vec![0; n];
    let mut out_degree = vec![0; n];
    for (source, dest) in graph.internal_edges() {
        out_degree[source] += 1;
        in_degree[dest] += 1;
    }
    Degrees {
        in_degree,
        out_degree,
    }
}

/// Convert to the 0-based adjacency-list form, keeping edge order within
/// each source's list.
///
/// This is the only place the unweighted pipeline moves from 1-based to
/// 0-based vertices.
#[must_use]
#[instrument(skip(graph), fields(n = graph.vertex_count(), m = graph.edge_count()))]
pub fn edge_list_to_adjacency_list(graph: &EdgeList) -> AdjacencyList {
    let mut neighbors = vec![Vec::new(); graph.vertex_count()];
    for (source, dest) in graph.internal_edges() {
        neighbors[source].push(dest);
    }
    AdjacencyList::from_validated(neighbors)
}

/// Unit-weight matrix for [`crate::shortest`]: `Some(1)` where an edge
/// exists, `None` elsewhere (the diagonal included, unless there is a
/// self-loop).
#[must_use]
pub fn unit_weight_matrix(graph: &AdjacencyList) -> Vec<Vec<Option<u64>>> {
    let n = graph.vertex_count();
    let mut matrix = vec![vec![None; n]; n];
    for (source, targets) in graph.lists().iter().enumerate() {
        for &dest in targets {
            matrix[source][dest] = Some(1);
        }
    }
    matrix
}
