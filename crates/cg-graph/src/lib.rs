//! `cg-graph` — the city multigraph.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`graph`]    | `Graph<V, E>`: vertices, edge arena, adjacency lists       |
//! | [`subgraph`] | named sub-graph views and `materialize`                    |
//! | [`error`]    | `GraphError`, `GraphResult<T>`                             |
//!
//! # Ownership
//!
//! The graph stores vertex and edge payloads by value.  Removing an edge
//! hands its payload back to the caller; dropping the graph drops whatever
//! payloads are still attached.  For an undirected graph both edge records
//! of a road share one payload slot, so mutating the payload through either
//! record is visible through the other.

pub mod error;
pub mod graph;
pub mod subgraph;

#[cfg(test)]
mod tests;

pub use error::{GraphError, GraphResult};
pub use graph::Graph;
pub use subgraph::SubGraph;
