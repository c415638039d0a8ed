//! `cg-core` — foundational types for the `citygraph` workspace.
//!
//! This crate is a dependency of every other `cg-*` crate.  It intentionally
//! has no `cg-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                                |
//! |--------------|---------------------------------------------------------|
//! | [`ids`]      | `VertexId`, `EdgeId`, `EntityId`                        |
//! | [`geo`]      | `Point`, `BoundingBox`, the `Located` trait             |
//! | [`street`]   | `Street`: edge payload with velocity/length/closure     |
//! | [`rng`]      | `PriorityRng` (seeded treap priorities)                 |
//! | [`config`]   | `TreapConfig`, `QueryConfig`, `CityConfig`              |
//! | [`error`]    | `CoreError`, `CoreResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod street;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{CityConfig, QueryConfig, TreapConfig};
pub use error::{CoreError, CoreResult};
pub use geo::{BoundingBox, Located, Point};
pub use ids::{EdgeId, EntityId, VertexId};
pub use rng::PriorityRng;
pub use street::Street;
