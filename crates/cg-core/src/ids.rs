//! Typed handles for graph slots and spatial-index entries.
//!
//! Every handle wraps a `u32` slot number.  The inner value is `pub` so the
//! graph can address its arenas directly; elsewhere prefer `.index()`.
//! Handles are never recycled: a removed edge leaves its slot empty.

use std::fmt;

macro_rules! typed_id {
    ($(#[$attr:meta])* $name:ident, $tag:literal) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name(pub u32);

        impl $name {
            /// Unassigned handle.
            pub const INVALID: $name = $name(u32::MAX);

            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }

            /// Handle for arena slot `i`, or `None` past the `u32` range.
            #[inline]
            pub fn from_index(i: usize) -> Option<$name> {
                u32::try_from(i).ok().filter(|&n| n != u32::MAX).map($name)
            }

            #[inline]
            pub fn is_valid(self) -> bool {
                self != Self::INVALID
            }
        }

        impl Default for $name {
            #[inline(always)]
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                if self.is_valid() {
                    write!(f, "{}{}", $tag, self.0)
                } else {
                    write!(f, "{}?", $tag)
                }
            }
        }
    };
}

typed_id! {
    /// Slot of a graph vertex.  Stable for the graph's lifetime.
    VertexId, "v"
}

typed_id! {
    /// One directed edge record.  An undirected road owns two.
    EdgeId, "e"
}

typed_id! {
    /// Identity of a spatial-index entry.  Removal and promotion locate
    /// entries by this value.
    EntityId, "#"
}

impl From<VertexId> for EntityId {
    /// Graph-point entries use their vertex slot as identity.
    #[inline]
    fn from(v: VertexId) -> EntityId {
        EntityId(v.0)
    }
}
