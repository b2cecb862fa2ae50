//! Graph values and representation conversion.
//!
//! # Overview
//!
//! Two unweighted forms flow through the crate:
//!
//! ```text
//! text "n m" + m lines
//!        ↓  EdgeList::read_from()
//! EdgeList (1-based (source, dest) pairs)
//!        ├─ convert::incidence_matrix / adjacency_matrix / in_out_degrees
//!        ↓  convert::edge_list_to_adjacency_list()   ← the only 1→0 shift
//! AdjacencyList (0-based out-neighbor lists)
//!        ↓
//! traversal, reach, cycles, topo, scc, shortest, connectivity
//! ```
//!
//! [`weighted::WeightedDigraph`] is the weighted object model; its
//! [`weight_matrix`](weighted::WeightedDigraph::weight_matrix) feeds
//! [`crate::shortest`].
//!
//! Edge lists and adjacency lists are immutable once built; conversions
//! return fresh structures.

pub mod adjacency;
pub mod convert;
pub mod edge_list;
pub mod weighted;

pub use adjacency::{AdjacencyList, Degrees};
pub use convert::{
    adjacency_matrix, edge_list_to_adjacency_list, in_out_degrees, incidence_matrix,
    unit_weight_matrix,
};
pub use edge_list::{EdgeList, ReadOptions};
pub use weighted::{WeightedDigraph, WeightedEdge};
