//! What the index stores and what queries hand back.

use cg_core::{BoundingBox, EntityId, Located, Point};

/// Closed set of things the index can hold.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EntityKind {
    /// A graph vertex position.
    GraphPoint,
    Circle,
    Rect,
    Line,
    Text,
}

impl EntityKind {
    pub fn label(self) -> &'static str {
        match self {
            EntityKind::GraphPoint => "point",
            EntityKind::Circle => "circle",
            EntityKind::Rect => "rectangle",
            EntityKind::Line => "line",
            EntityKind::Text => "text",
        }
    }

    /// Fill colour used by the DOT export.
    pub fn dot_color(self) -> &'static str {
        match self {
            EntityKind::Circle => "blue",
            EntityKind::Rect => "green",
            EntityKind::Text => "orange",
            EntityKind::Line => "purple",
            EntityKind::GraphPoint => "black",
        }
    }
}

/// Payloads expose a stable identity; removal and hit bookkeeping key on it.
pub trait Identified {
    fn entity_id(&self) -> EntityId;
}

impl Identified for EntityId {
    #[inline]
    fn entity_id(&self) -> EntityId {
        *self
    }
}

/// One query result.  Carries no borrow of the tree, so the tree can be
/// mutated (hit counts, promotions) while the caller holds the results.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hit {
    pub id:       EntityId,
    pub kind:     EntityKind,
    pub location: Point,
}

impl Located for Hit {
    #[inline]
    fn location(&self) -> Point {
        self.location
    }
}

/// Read-only snapshot of one node.
#[derive(Debug)]
pub struct NodeView<'a, P> {
    pub id:          EntityId,
    pub kind:        EntityKind,
    pub location:    Point,
    pub priority:    u32,
    pub hits:        u32,
    pub own_box:     BoundingBox,
    pub subtree_box: BoundingBox,
    pub payload:     &'a P,
}

impl<P> Clone for NodeView<'_, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P> Copy for NodeView<'_, P> {}
