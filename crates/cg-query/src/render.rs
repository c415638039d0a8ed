//! Output handed to an external renderer.
//!
//! The query layer never draws anything.  It records what should be drawn
//! as [`Artifact`]s, in command order, and leaves styling and serialisation
//! to whoever consumes them.

use cg_core::{BoundingBox, Point};
use cg_route::CostMode;

/// An ordered point sequence registered under a name.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderablePath {
    pub name:   String,
    pub points: Vec<Point>,
    pub mode:   CostMode,
    /// Summed cost under `mode`; `None` when no route was found.
    pub cost:   Option<f64>,
    /// Stroke colour, set by `show_path`.
    pub color:  Option<String>,
}

impl RenderablePath {
    pub fn new(name: impl Into<String>, points: Vec<Point>, mode: CostMode, cost: Option<f64>) -> Self {
        Self { name: name.into(), points, mode, cost, color: None }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first_point(&self) -> Option<Point> {
        self.points.first().copied()
    }

    pub fn last_point(&self) -> Option<Point> {
        self.points.last().copied()
    }
}

/// One drawable produced by a command.
#[derive(Clone, Debug, PartialEq)]
pub enum Artifact {
    /// A path shown with its colour.
    Path(RenderablePath),
    /// Straight marker between two endpoints that have no route.
    NoPathLine { from: Point, to: Point },
    /// Register label with a leader line down to the axis, at a path end.
    RegisterTag { at: Point, label: String },
    /// Area whose streets were closed.
    ClosedRegion(BoundingBox),
}
