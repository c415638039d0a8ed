//! Routing trait and the default A* implementation.
//!
//! # Pluggability
//!
//! The query layer calls routing through the [`Router`] trait, so a caller
//! can swap in another engine (plain Dijkstra, a precomputed table) without
//! touching address resolution or path bookkeeping.

use cg_core::{Located, Point, VertexId};
use cg_graph::Graph;

use crate::astar::{find_path, path_vertices};
use crate::cost::{CostMode, Traversable};
use crate::{RouteError, RouteResult};

// ── Route ─────────────────────────────────────────────────────────────────────

/// A resolved path: the vertices in order, their positions, and the summed
/// cost under the mode that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub vertices:   Vec<VertexId>,
    pub points:     Vec<Point>,
    pub total_cost: f64,
    pub mode:       CostMode,
}

impl Route {
    /// Number of edges walked.
    pub fn edge_count(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }

    /// `true` if the start and goal are the same vertex.
    pub fn is_trivial(&self) -> bool {
        self.vertices.len() <= 1
    }

    pub fn first_point(&self) -> Option<Point> {
        self.points.first().copied()
    }

    pub fn last_point(&self) -> Option<Point> {
        self.points.last().copied()
    }
}

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable routing engine over graphs with vertex payload `V` and edge
/// payload `E`.
pub trait Router<V, E> {
    /// Compute a route from `from` to `to` minimising `mode`.
    ///
    /// `from == to` is a trivial one-vertex route, not an error.
    fn route(&self, graph: &Graph<V, E>, from: VertexId, to: VertexId, mode: CostMode) -> RouteResult<Route>;
}

// ── AStarRouter ───────────────────────────────────────────────────────────────

/// A* with the straight-line heuristic (see [`crate::astar`]).
#[derive(Copy, Clone, Debug, Default)]
pub struct AStarRouter;

impl<V: Located, E: Traversable> Router<V, E> for AStarRouter {
    fn route(&self, graph: &Graph<V, E>, from: VertexId, to: VertexId, mode: CostMode) -> RouteResult<Route> {
        let search = find_path(graph, from, to, mode)?;
        let total_cost = search.cost(to).ok_or(RouteError::NoPath { from, to })?;
        let vertices = path_vertices(&search.came_from, from, to)?;
        let points = vertices
            .iter()
            .map(|&v| {
                graph
                    .vertex_payload(v)
                    .map(Located::location)
                    .ok_or(RouteError::UnknownVertex(v))
            })
            .collect::<RouteResult<Vec<_>>>()?;

        tracing::debug!(%from, %to, ?mode, edges = vertices.len() - 1, total_cost, "route found");
        Ok(Route { vertices, points, total_cost, mode })
    }
}
