//! Topological ordering by depth-first postorder.

use tracing::{debug, instrument};

use crate::graph::AdjacencyList;
use crate::index::externalize;
use crate::mark::{Frame, Mark};

/// A 1-based order in which every edge `u → v` has `u` before `v`, or `None`
/// if the graph has a cycle (self-loops included).
///
/// Never returns a partial order: the first edge into an in-progress vertex
/// abandons the whole run.
#[must_use]
#[instrument(skip(graph), fields(n = graph.vertex_count(), m = graph.edge_count()))]
pub fn topological_sort(graph: &AdjacencyList) -> Option<Vec<usize>> {
    let n = graph.vertex_count();
    let mut marks = vec![Mark::Unvisited; n];
    let mut postorder = Vec::with_capacity(n);
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
                postorder.push(current);
                stack.pop();
                continue;
            };
            frame.1 += 1;

            match marks[target] {
                Mark::Unvisited => {
                    marks[target] = Mark::InProgress;
                    stack.push((target, 0));
                }
                Mark::InProgress => {
                    debug!(from = current, to = target, "back edge, no topological order");
                    return None;
                }
                Mark::Finished => {}
            }
        }
    }

    postorder.reverse();
    Some(externalize(&postorder))
}
