//! Strongly connected components by Kosaraju's two-pass algorithm.
//!
//! # Algorithm
//!
//! 1. Depth-first over the graph from every unvisited root, pushing each
//!    vertex onto a finish stack when it completes (postorder).
//! 2. Reverse the graph. Pop the finish stack from the top, i.e. in
//!    *decreasing* finish time; each vertex not yet visited starts a new
//!    group, and a depth-first walk over the reversed graph adds every
//!    vertex it enters to that group.
//!
//! Popping in decreasing finish order is what keeps two components from
//! being merged: the first unvisited vertex popped always lies in a source
//! component of the condensation, which the reversed graph cannot leave.
//!
//! Both passes use explicit stacks.

use fixedbitset::FixedBitSet;
use tracing::{debug, instrument};

use crate::graph::AdjacencyList;
use crate::index::to_external;
use crate::mark::Frame;

/// The SCC partition as 1-based groups.
///
/// Every vertex appears in exactly one group. Groups come out in the order
/// their first vertex is popped from the finish stack; members are listed in
/// the order the reversed-graph walk enters them.
#[must_use]
#[instrument(skip(graph), fields(n = graph.vertex_count(), m = graph.edge_count()))]
pub fn strong_components(graph: &AdjacencyList) -> Vec<Vec<usize>> {
    let mut finish = finish_order(graph);
    let reversed = graph.reverse();

    let mut visited = FixedBitSet::with_capacity(graph.vertex_count());
    let mut components: Vec<Vec<usize>> = Vec::new();
    let mut stack: Vec<Frame> = Vec::new();

    while let Some(start) = finish.pop() {
        if visited.put(start) {
            continue;
        }
        let mut group = vec![to_external(start)];
        stack.push((start, 0));

        while let Some(frame) = stack.last_mut() {
            let (current, next) = *frame;
            let Some(&target) = reversed.neighbors(current).get(next) else {
                stack.pop();
                continue;
            };
            frame.1 += 1;

            if !visited.put(target) {
                group.push(to_external(target));
                stack.push((target, 0));
            }
        }

        components.push(group);
    }

    debug!(components = components.len(), "kosaraju finished");
    components
}

/// Map each 0-based vertex to the index of its group in `components`
/// (1-based members, as returned by [`strong_components`]).
///
/// Vertices missing from every group map to `usize::MAX`.
#[must_use]
pub fn component_index(components: &[Vec<usize>], vertex_count: usize) -> Vec<usize> {
    let mut index = vec![usize::MAX; vertex_count];
    for (group, members) in components.iter().enumerate() {
        for &member in members {
            if let Some(slot) = member.checked_sub(1).and_then(|v| index.get_mut(v)) {
                *slot = group;
            }
        }
    }
    index
}

/// Postorder over the whole graph; the last element finished last.
fn finish_order(graph: &AdjacencyList) -> Vec<usize> {
    let n = graph.vertex_count();
    let mut visited = FixedBitSet::with_capacity(n);
    let mut order = Vec::with_capacity(n);
    let mut stack: Vec<Frame> = Vec::new();

    for root in 0..n {
        if visited.put(root) {
            continue;
        }
        stack.push((root, 0));

        while let Some(frame) = stack.last_mut() {
            let (current, next) = *frame;
            let Some(&target) = graph.neighbors(current).get(next) else {
                order.push(current);
                stack.pop();
                continue;
            };
            frame.1 += 1;

            if !visited.put(target) {
                stack.push((target, 0));
            }
        }
    }

    order
}
