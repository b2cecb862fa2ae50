//! Single-source hop distances and reachability, and the "waving" all-pairs
//! tables built from them.
//!
//! Unweighted edges make breadth-first discovery order exact: the first
//! time a vertex is discovered its distance is its parent's plus one, and
//! that is the shortest hop count.

use std::collections::VecDeque;

use fixedbitset::FixedBitSet;
use tracing::instrument;

use crate::error::GraphError;
use crate::graph::AdjacencyList;
use crate::traversal::check_source;

/// Sentinel for "unreached" in the emitted distance format.
pub const INF: u64 = 1_000_000_007;

/// Hop distance from `source` to every vertex; `None` when unreached.
///
/// # Errors
///
/// Returns [`GraphError::SourceOutOfRange`] if `source >= n`.
pub fn distance_from_source(
    graph: &AdjacencyList,
    source: usize,
) -> Result<Vec<Option<usize>>, GraphError> {
    check_source(graph, source)?;
    Ok(hop_distances(graph, source))
}

/// Whether each vertex is reachable from `source` (which reaches itself).
///
/// # Errors
///
/// Returns [`GraphError::SourceOutOfRange`] if `source >= n`.
pub fn reachability_from_source(
    graph: &AdjacencyList,
    source: usize,
) -> Result<Vec<bool>, GraphError> {
    check_source(graph, source)?;
    Ok(reached_from(graph, source))
}

/// `n×n` hop-distance table: row `i` is [`distance_from_source`] from `i`.
#[must_use]
#[instrument(skip(graph), fields(n = graph.vertex_count()))]
pub fn all_pairs_distances(graph: &AdjacencyList) -> Vec<Vec<Option<usize>>> {
    (0..graph.vertex_count())
        .map(|source| hop_distances(graph, source))
        .collect()
}

/// `n×n` reachability table: row `i` is [`reachability_from_source`] from `i`.
#[must_use]
#[instrument(skip(graph), fields(n = graph.vertex_count()))]
pub fn all_pairs_reachability(graph: &AdjacencyList) -> Vec<Vec<bool>> {
    (0..graph.vertex_count())
        .map(|source| reached_from(graph, source))
        .collect()
}

/// Distances in the emitted format, with [`INF`] for unreached vertices.
#[must_use]
pub fn distances_with_sentinel(distances: &[Option<usize>]) -> Vec<u64> {
    distances
        .iter()
        .map(|d| d.and_then(|d| u64::try_from(d).ok()).unwrap_or(INF))
        .collect()
}

/// BFS from an in-range `source`.
fn hop_distances(graph: &AdjacencyList, source: usize) -> Vec<Option<usize>> {
    let mut distance = vec![None; graph.vertex_count()];
    distance[source] = Some(0);
    let mut queue = VecDeque::from([source]);

    while let Some(v) = queue.pop_front() {
        let next = distance[v].map(|d| d + 1);
        for &neighbor in graph.neighbors(v) {
            if distance[neighbor].is_none() {
                distance[neighbor] = next;
                queue.push_back(neighbor);
            }
        }
    }

    distance
}

fn reached_from(graph: &AdjacencyList, source: usize) -> Vec<bool> {
    let n = graph.vertex_count();
    let mut reached = FixedBitSet::with_capacity(n);
    reached.insert(source);
    let mut queue = VecDeque::from([source]);

    while let Some(v) = queue.pop_front() {
        for &neighbor in graph.neighbors(v) {
            if !reached.put(neighbor) {
                queue.push_back(neighbor);
            }
        }
    }

    (0..n).map(|v| reached.contains(v)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(lists: Vec<Vec<usize>>) -> AdjacencyList {
        AdjacencyList::from_neighbors(lists).expect("valid adjacency list")
    }

    #[test]
    fn distances_are_hop_counts() {
        // 0 → 1 → 2, 0 → 2 shortcut, 3 unreachable
        let g = graph(vec![vec![1, 2], vec![2], vec![], vec![0]]);
        assert_eq!(
            distance_from_source(&g, 0).expect("distances"),
            vec![Some(0), Some(1), Some(1), None]
        );
        assert_eq!(
            distance_from_source(&g, 3).expect("distances"),
            vec![Some(1), Some(2), Some(2), Some(0)]
        );
    }

    #[test]
    fn reachability_marks_source_and_descendants() {
        let g = graph(vec![vec![1], vec![], vec![3], vec![]]);
        assert_eq!(
            reachability_from_source(&g, 0).expect("reach"),
            vec![true, true, false, false]
        );
    }

    #[test]
    fn all_pairs_tables_have_one_row_per_vertex() {
        let g = graph(vec![vec![1], vec![0], vec![]]);
        let distances = all_pairs_distances(&g);
        assert_eq!(
            distances,
            vec![
                vec![Some(0), Some(1), None],
                vec![Some(1), Some(0), None],
                vec![None, None, Some(0)],
            ]
        );
        let reach = all_pairs_reachability(&g);
        assert_eq!(reach[2], vec![false, false, true]);
    }

    #[test]
    fn rows_do_not_share_state() {
        // A second run from the same source must give the same row.
        let g = graph(vec![vec![1], vec![2], vec![]]);
        let table = all_pairs_distances(&g);
        assert_eq!(table[0], distance_from_source(&g, 0).expect("row"));
        assert_eq!(table[0], vec![Some(0), Some(1), Some(2)]);
    }

    #[test]
    fn every_source_gets_a_row_matching_the_single_source_query() {
        let g = graph(vec![vec![1], vec![2], vec![0, 3], vec![], vec![4]]);
        let distances = all_pairs_distances(&g);
        let reach = all_pairs_reachability(&g);
        assert_eq!(distances.len(), g.vertex_count());
        assert_eq!(reach.len(), g.vertex_count());
        for source in 0..g.vertex_count() {
            assert_eq!(distances[source], distance_from_source(&g, source).expect("row"));
            assert_eq!(reach[source], reachability_from_source(&g, source).expect("row"));
        }
    }

    #[test]
    fn sentinel_replaces_unreached() {
        assert_eq!(distances_with_sentinel(&[Some(0), None, Some(3)]), vec![0, INF, 3]);
    }

    #[test]
    fn out_of_range_source_is_rejected() {
        let g = graph(vec![vec![]]);
        assert!(distance_from_source(&g, 1).is_err());
        assert!(reachability_from_source(&g, 1).is_err());
    }
}
