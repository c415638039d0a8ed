//! Planar coordinate types.
//!
//! City coordinates are plain Cartesian `f64` pairs in the same units as
//! street lengths, so the straight-line distance between two vertices is an
//! admissible lower bound for length-based routing.

use std::fmt;

use crate::{CoreError, CoreResult};

// ── Point ─────────────────────────────────────────────────────────────────────

/// An immutable `(x, y)` position.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance.
    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

/// Anything that sits at a single position in the plane.  Graph vertex
/// payloads implement this so the router can compute its heuristic.
pub trait Located {
    fn location(&self) -> Point;
}

impl Located for Point {
    #[inline]
    fn location(&self) -> Point {
        *self
    }
}

// ── BoundingBox ───────────────────────────────────────────────────────────────

/// Axis-aligned box stored as origin plus extent.
///
/// All tests are closed-interval: a box touching another along an edge
/// intersects it, and a point on the border is contained.  Zero-extent boxes
/// are valid and represent a single point.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl BoundingBox {
    /// Build a box from origin and extent, rejecting negative extents and
    /// non-finite values.
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> CoreResult<Self> {
        let bb = Self { x, y, w, h };
        bb.validate()?;
        Ok(bb)
    }

    /// Degenerate box covering exactly `(x, y)`.
    #[inline]
    pub const fn point(x: f64, y: f64) -> Self {
        Self { x, y, w: 0.0, h: 0.0 }
    }

    /// Canonical box spanned by two arbitrary corners.
    pub fn from_corners(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        let (min_x, max_x) = if x1 < x2 { (x1, x2) } else { (x2, x1) };
        let (min_y, max_y) = if y1 < y2 { (y1, y2) } else { (y2, y1) };
        Self { x: min_x, y: min_y, w: max_x - min_x, h: max_y - min_y }
    }

    /// Square of half-side `radius` centred on `center`.
    pub fn around(center: Point, radius: f64) -> Self {
        Self::from_corners(
            center.x - radius,
            center.y - radius,
            center.x + radius,
            center.y + radius,
        )
    }

    pub fn validate(&self) -> CoreResult<()> {
        if !(self.x.is_finite() && self.y.is_finite() && self.w.is_finite() && self.h.is_finite()) {
            return Err(CoreError::InvalidGeometry(format!("non-finite box {self}")));
        }
        if self.w < 0.0 || self.h < 0.0 {
            return Err(CoreError::InvalidGeometry(format!("negative extent {self}")));
        }
        Ok(())
    }

    #[inline]
    pub fn max_x(&self) -> f64 {
        self.x + self.w
    }

    #[inline]
    pub fn max_y(&self) -> f64 {
        self.y + self.h
    }

    /// Smallest box covering both `self` and `other`.
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        let min_x = self.x.min(other.x);
        let min_y = self.y.min(other.y);
        let max_x = self.max_x().max(other.max_x());
        let max_y = self.max_y().max(other.max_y());
        BoundingBox { x: min_x, y: min_y, w: max_x - min_x, h: max_y - min_y }
    }

    #[inline]
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        self.x <= other.max_x()
            && other.x <= self.max_x()
            && self.y <= other.max_y()
            && other.y <= self.max_y()
    }

    #[inline]
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        x >= self.x && x <= self.max_x() && y >= self.y && y <= self.max_y()
    }

    /// `true` if `other` lies entirely inside `self`.
    #[inline]
    pub fn contains_box(&self, other: &BoundingBox) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.max_x() <= self.max_x()
            && other.max_y() <= self.max_y()
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.2}, {:.2} {:.2}x{:.2}]", self.x, self.y, self.w, self.h)
    }
}
