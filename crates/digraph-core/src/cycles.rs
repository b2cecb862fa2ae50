//! Cycle extraction with explicit vertex sequences.
//!
//! # Algorithm
//!
//! Depth-first visitation with tri-state marks from every unvisited root.
//! A parent map records the *first* vertex to examine an edge into each
//! vertex and is never overwritten. An edge `current → target` with
//! `target` in progress closes a cycle: start the chain at `target`, walk
//! from `current` along parents until `target` comes round again (without
//! pushing it twice), reverse the chain, and close it with its first element.
//!
//! ```text
//! 1 → 2 → 3 → 1     chain:    [1, 3, 2]
//!                   reversed: [2, 3, 1]
//!                   closed:   [2, 3, 1, 2]
//! ```
//!
//! A self-loop `v → v` yields `[v, v]`.
//!
//! # Limit
//!
//! `limit` caps how many cycles are *recorded*, not how far the visitation
//! goes: every vertex still ends up finished.

use tracing::{debug, instrument};

use crate::graph::AdjacencyList;
use crate::index::externalize;
use crate::mark::{Frame, Mark};

/// Number of cycles recorded when the caller has no preference.
pub const DEFAULT_CYCLE_LIMIT: usize = 10;

/// Up to `limit` cycles, each a closed 1-based vertex sequence.
#[must_use]
#[instrument(skip(graph), fields(n = graph.vertex_count(), m = graph.edge_count()))]
pub fn find_cycles(graph: &AdjacencyList, limit: usize) -> Vec<Vec<usize>> {
    let (cycles, _) = visit_all(graph, limit);
    debug!(found = cycles.len(), "cycle search finished");
    cycles
}

fn visit_all(graph: &AdjacencyList, limit: usize) -> (Vec<Vec<usize>>, Vec<Mark>) {
    let n = graph.vertex_count();
    let mut marks = vec![Mark::Unvisited; n];
    let mut parent: Vec<Option<usize>> = vec![None; n];
    let mut cycles: Vec<Vec<usize>> = Vec::new();
    let mut stack: Vec<Frame> = Vec::new();

    for root in 0..n {
        if marks[root] != Mark::Unvisited {
            continue;
        }
        marks[root] = Mark::InProgress;
        stack.push((root, 0));

        while let Some(frame) = stack.last_mut() {
            let (current, next) = *frame;
            let Some(&target) = graph.neighbors(current).get(next) else {
                marks[current] = Mark::Finished;
                stack.pop();
                continue;
            };
            frame.1 += 1;

            if parent[target].is_none() {
                parent[target] = Some(current);
            }

            match marks[target] {
                Mark::Unvisited => {
                    marks[target] = Mark::InProgress;
                    stack.push((target, 0));
                }
                Mark::InProgress if cycles.len() < limit => {
                    cycles.push(close_cycle(&parent, current, target));
                }
                Mark::InProgress | Mark::Finished => {}
            }
        }
    }

    (cycles, marks)
}

/// `[child of target, …, current, target, child of target]`, 1-based.
fn close_cycle(parent: &[Option<usize>], current: usize, target: usize) -> Vec<usize> {
    let mut chain = vec![target];
    let mut cursor = current;
    while cursor != target {
        chain.push(cursor);
        let Some(up) = parent[cursor] else { break };
        cursor = up;
    }
    chain.reverse();
    chain.push(chain[0]);
    externalize(&chain)
}
