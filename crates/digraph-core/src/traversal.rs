//! Breadth-first and depth-first traversal with step tracing.
//!
//! Both traversals share one loop and differ only in which end of the
//! frontier a vertex is removed from:
//!
//! | Traversal | Frontier | Removal |
//! |-----------|----------|---------|
//! | BFS       | queue    | front   |
//! | DFS       | stack    | back    |
//!
//! A vertex is marked visited when it is *inserted*, so each reachable
//! vertex enters the frontier exactly once and a trace has at most `n`
//! steps. The loop ends as soon as the frontier is empty; vertices the
//! source cannot reach never show up.

use std::collections::VecDeque;

use fixedbitset::FixedBitSet;
use serde::Serialize;
use tracing::{debug, instrument};

use crate::error::GraphError;
use crate::graph::AdjacencyList;
use crate::index::{externalize, to_external};

/// One step of a traversal, reported 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraceStep {
    /// Step number, starting at 1.
    pub step: usize,
    /// The vertex removed from the frontier at this step.
    pub vertex: usize,
    /// What remains in the frontier after this step's insertions: front to
    /// back for BFS, bottom to top for DFS.
    pub frontier: Vec<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Discipline {
    Fifo,
    Lifo,
}

/// Breadth-first trace from `source` (0-based).
///
/// # Errors
///
/// Returns [`GraphError::SourceOutOfRange`] if `source >= n`.
pub fn bfs_table(graph: &AdjacencyList, source: usize) -> Result<Vec<TraceStep>, GraphError> {
    walk(graph, source, Discipline::Fifo, true)
}

/// Depth-first (stack-driven) trace from `source` (0-based).
///
/// # Errors
///
/// Returns [`GraphError::SourceOutOfRange`] if `source >= n`.
pub fn dfs_table(graph: &AdjacencyList, source: usize) -> Result<Vec<TraceStep>, GraphError> {
    walk(graph, source, Discipline::Lifo, true)
}

/// Breadth-first visitation order from `source` (0-based), reported 1-based.
///
/// # Errors
///
/// Returns [`GraphError::SourceOutOfRange`] if `source >= n`.
pub fn bfs_order(graph: &AdjacencyList, source: usize) -> Result<Vec<usize>, GraphError> {
    Ok(vertices(walk(graph, source, Discipline::Fifo, false)?))
}

/// Depth-first visitation order from `source` (0-based), reported 1-based.
///
/// # Errors
///
/// Returns [`GraphError::SourceOutOfRange`] if `source >= n`.
pub fn dfs_order(graph: &AdjacencyList, source: usize) -> Result<Vec<usize>, GraphError> {
    Ok(vertices(walk(graph, source, Discipline::Lifo, false)?))
}

pub(crate) const fn check_source(graph: &AdjacencyList, source: usize) -> Result<(), GraphError> {
    if source >= graph.vertex_count() {
        return Err(GraphError::SourceOutOfRange {
            vertex: source,
            vertex_count: graph.vertex_count(),
        });
    }
    Ok(())
}

fn vertices(steps: Vec<TraceStep>) -> Vec<usize> {
    steps.into_iter().map(|s| s.vertex).collect()
}

#[instrument(skip(graph), fields(n = graph.vertex_count()))]
fn walk(
    graph: &AdjacencyList,
    source: usize,
    discipline: Discipline,
    record_frontier: bool,
) -> Result<Vec<TraceStep>, GraphError> {
    check_source(graph, source)?;

    let mut visited = FixedBitSet::with_capacity(graph.vertex_count());
    let mut frontier: VecDeque<usize> = VecDeque::from([source]);
    visited.insert(source);

    let mut steps = Vec::new();
    loop {
        let next = match discipline {
            Discipline::Fifo => frontier.pop_front(),
            Discipline::Lifo => frontier.pop_back(),
        };
        let Some(v) = next else { break };

        for &neighbor in graph.neighbors(v) {
            if !visited.put(neighbor) {
                frontier.push_back(neighbor);
            }
        }

        let snapshot = if record_frontier {
            let remaining: Vec<usize> = frontier.iter().copied().collect();
            externalize(&remaining)
        } else {
            Vec::new()
        };
        steps.push(TraceStep {
            step: steps.len() + 1,
            vertex: to_external(v),
            frontier: snapshot,
        });
    }

    debug!(steps = steps.len(), "traversal exhausted frontier");
    Ok(steps)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(lists: Vec<Vec<usize>>) -> AdjacencyList {
        AdjacencyList::from_neighbors(lists).expect("valid adjacency list")
    }

    fn diamond() -> AdjacencyList {
        // 0 → 1, 0 → 2, 1 → 3, 2 → 3
        graph(vec![vec![1, 2], vec![3], vec![3], vec![]])
    }

    #[test]
    fn bfs_trace_snapshots_queue() {
        let steps = bfs_table(&diamond(), 0).expect("trace");
        assert_eq!(
            steps,
            vec![
                TraceStep { step: 1, vertex: 1, frontier: vec![2, 3] },
                TraceStep { step: 2, vertex: 2, frontier: vec![3, 4] },
                TraceStep { step: 3, vertex: 3, frontier: vec![4] },
                TraceStep { step: 4, vertex: 4, frontier: vec![] },
            ]
        );
    }

    #[test]
    fn dfs_trace_snapshots_stack() {
        let steps = dfs_table(&diamond(), 0).expect("trace");
        assert_eq!(
            steps,
            vec![
                TraceStep { step: 1, vertex: 1, frontier: vec![2, 3] },
                TraceStep { step: 2, vertex: 3, frontier: vec![2, 4] },
                TraceStep { step: 3, vertex: 4, frontier: vec![2] },
                TraceStep { step: 4, vertex: 2, frontier: vec![] },
            ]
        );
    }

    #[test]
    fn stops_when_source_cannot_reach_everything() {
        // 0 → 1, 2 isolated, 3 → 0
        let g = graph(vec![vec![1], vec![], vec![], vec![0]]);
        assert_eq!(bfs_order(&g, 0).expect("order"), vec![1, 2]);
        assert_eq!(dfs_table(&g, 0).expect("trace").len(), 2);
    }

    #[test]
    fn cycles_and_self_loops_visit_once() {
        let g = graph(vec![vec![0, 1], vec![2], vec![0, 1]]);
        assert_eq!(bfs_order(&g, 0).expect("order"), vec![1, 2, 3]);
        assert_eq!(dfs_order(&g, 0).expect("order"), vec![1, 2, 3]);
    }

    #[test]
    fn out_of_range_source_is_rejected() {
        let err = bfs_table(&diamond(), 4).expect_err("source 4 of 4");
        assert!(matches!(
            err,
            GraphError::SourceOutOfRange {
                vertex: 4,
                vertex_count: 4
            }
        ));
    }
}
