//! `cg-route` — A* over the city graph.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                    |
//! |------------|-------------------------------------------------------------|
//! | [`cost`]   | `CostMode`, the `Traversable` edge-payload trait            |
//! | [`astar`]  | `find_path`, `reconstruct_path`, `Search`                   |
//! | [`router`] | `Router` trait, `Route`, `AStarRouter`                      |
//! | [`error`]  | `RouteError`, `RouteResult<T>`                              |
//!
//! # Feature flags
//!
//! | Flag      | Effect                                                    |
//! |-----------|-----------------------------------------------------------|
//! | `fx-hash` | Search maps use `rustc_hash::FxHashMap`.                  |

pub mod astar;
pub mod cost;
pub mod error;
pub mod router;


pub use astar::{Map, Search, find_path, path_vertices, reconstruct_path};
pub use cost::{CostMode, Traversable};
pub use error::{RouteError, RouteResult};
pub use router::{AStarRouter, Route, Router};
