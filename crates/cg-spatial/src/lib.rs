//! `cg-spatial` — the spatial treap.
//!
//! A binary search tree keyed on the x coordinate and heap-ordered on a
//! per-node priority.  Priorities start random and grow as a node keeps
//! being returned by queries, so frequently requested entries drift toward
//! the root.  Every node caches the bounding box of its whole subtree, which
//! lets region and point queries skip subtrees that cannot match.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                     |
//! |------------|--------------------------------------------------------------|
//! | [`entity`] | `EntityKind`, the `Identified` trait, `Hit`, `NodeView`      |
//! | [`treap`]  | `SpatialTreap<P>`, `QueryStats`                              |
//! | [`dot`]    | Graphviz export of the tree shape                            |
//! | [`error`]  | `SpatialError`, `SpatialResult<T>`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `EntityKind` and `Hit`. |

pub mod dot;
pub mod entity;
pub mod error;
pub mod treap;


pub use entity::{EntityKind, Hit, Identified, NodeView};
pub use error::{SpatialError, SpatialResult};
pub use treap::{QueryStats, SpatialTreap};
