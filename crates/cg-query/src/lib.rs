//! `cg-query` — the address and query layer.
//!
//! Ties the graph, the spatial index and the router together behind the
//! operations a query file drives: resolve an address to a vertex, build
//! the shortest and fastest path between two registered vertices, close and
//! reopen the streets around an area, and join two paths.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                 |
//! |---------------|----------------------------------------------------------|
//! | [`block`]     | `Block`, `Face` and the address convention               |
//! | [`city`]      | `City`, `CityBuilder`, `GraphPoint`                      |
//! | [`render`]    | `RenderablePath`, `Artifact`                             |
//! | [`processor`] | `QueryProcessor`: registers, paths, closures             |
//! | [`command`]   | `Command`, `RunSummary` and the run loop                 |
//! | [`error`]     | `QueryError`, `QueryResult<T>`                           |
//!
//! # Failure policy
//!
//! Each operation returns a `QueryResult`.  The run loop logs a failed
//! command and moves on.  A request that is well formed but has no
//! geometric answer (no route between two vertices) is not an error: it
//! produces an empty path plus a visible marker artifact.

pub mod block;
pub mod city;
pub mod command;
pub mod error;
pub mod processor;
pub mod render;


pub use block::{Block, Face};
pub use city::{City, CityBuilder, CityGraph, GraphPoint};
pub use command::{Command, RunSummary};
pub use error::{QueryError, QueryResult};
pub use processor::QueryProcessor;
pub use render::{Artifact, RenderablePath};
