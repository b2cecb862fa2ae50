//! Connectivity classification from a reachability matrix.
//!
//! | Class        | Holds when |
//! |--------------|------------|
//! | strong       | every vertex reaches every other |
//! | one-sided    | for every pair, at least one reaches the other |
//! | weak         | connected once edge direction is ignored |
//!
//! Each class implies the ones below it.

use serde::Serialize;
use tracing::instrument;

use crate::graph::{EdgeList, edge_list_to_adjacency_list};
use crate::reach::all_pairs_reachability;

/// The strongest connectivity class a graph satisfies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Connectivity {
    Strong,
    OneSided,
    Weak,
    Disconnected,
}

/// Every row of `reach` is true off the diagonal.
#[must_use]
pub fn is_strongly_connected(reach: &[Vec<bool>]) -> bool {
    reach.iter().enumerate().all(|(i, row)| {
        row.iter()
            .enumerate()
            .all(|(j, &reachable)| i == j || reachable)
    })
}

/// Every unordered pair is reachable in at least one direction.
#[must_use]
pub fn is_one_side_connected(reach: &[Vec<bool>]) -> bool {
    let n = reach.len();
    (0..n).all(|i| (i + 1..n).all(|j| reach[i][j] || reach[j][i]))
}

/// Connected when edge direction is ignored. The empty graph counts as
/// connected.
#[must_use]
pub fn is_weakly_connected(graph: &EdgeList) -> bool {
    let n = graph.vertex_count();
    if n == 0 {
        return true;
    }
    let mut sets = DisjointSets::new(n);
    let mut components = n;
    for (source, dest) in graph.internal_edges() {
        if sets.union(source, dest) {
            components -= 1;
        }
    }
    components == 1
}

/// The strongest class `graph` satisfies.
#[must_use]
#[instrument(skip(graph), fields(n = graph.vertex_count(), m = graph.edge_count()))]
pub fn classify(graph: &EdgeList) -> Connectivity {
    let reach = all_pairs_reachability(&edge_list_to_adjacency_list(graph));
    if is_strongly_connected(&reach) {
        Connectivity::Strong
    } else if is_one_side_connected(&reach) {
        Connectivity::OneSided
    } else if is_weakly_connected(graph) {
        Connectivity::Weak
    } else {
        Connectivity::Disconnected
    }
}

/// Union-find with path halving and union by size.
struct DisjointSets {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl DisjointSets {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
        }
    }

    fn find(&mut self, mut v: usize) -> usize {
        while self.parent[v] != v {
            self.parent[v] = self.parent[self.parent[v]];
            v = self.parent[v];
        }
        v
    }

    /// Merge the sets of `a` and `b`; `false` if they were already one.
    fn union(&mut self, a: usize, b: usize) -> bool {
        let (mut a, mut b) = (self.find(a), self.find(b));
        if a == b {
            return false;
        }
        if self.size[a] < self.size[b] {
            std::mem::swap(&mut a, &mut b);
        }
        self.parent[b] = a;
        self.size[a] += self.size[b];
        true
    }
}
