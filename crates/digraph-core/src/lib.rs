#![forbid(unsafe_code)]
//! digraph-core library.
//!
//! Classical algorithms over explicit directed-graph values: representation
//! conversion, traversal, reachability, cycle detection, topological order,
//! Kosaraju SCCs, Floyd-Warshall and connectivity classification.
//!
//! # Conventions
//!
//! - **Indexing**: algorithm cores are 0-based. The edge-list form, the text
//!   format and the reported vertex sequences (traces, cycles, orders, SCC
//!   groups) are 1-based. Every shift goes through [`index`].
//! - **Errors**: [`GraphError`] for everything the library can reject;
//!   `anyhow::Result` only for config file loading.
//! - **Logging**: Use `tracing` macros (`info!`, `warn!`, `error!`, `debug!`, `trace!`).

pub mod config;
pub mod connectivity;
pub mod cycles;
pub mod error;
pub mod graph;
pub mod index;
mod mark;
pub mod reach;
pub mod scc;
pub mod shortest;
pub mod topo;
pub mod traversal;

pub use config::AnalysisConfig;
pub use error::GraphError;
pub use graph::{AdjacencyList, EdgeList, ReadOptions};
