//! A* search and path reconstruction.
//!
//! # Open set
//!
//! The frontier is a `BinaryHeap<Reverse<Frontier>>` ordered by `f = g + h`.
//! There is no decrease-key: a vertex whose cost improves is pushed again and
//! the outdated entry is skipped when it surfaces, because its `g` no longer
//! matches the recorded cost.
//!
//! # Heuristic
//!
//! `h` is the straight-line distance from a vertex's position to the goal's.
//! It is admissible for `ByLength` when street lengths are at least the
//! distance between their endpoints, and for `ByTravelTime` only when the
//! velocity units make `distance` a lower bound on time.  The search does
//! not check either.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use cg_core::{Located, Point, VertexId};
use cg_graph::Graph;

use crate::cost::{CostMode, Traversable};
use crate::{RouteError, RouteResult};

/// Map type used for search bookkeeping.
#[cfg(feature = "fx-hash")]
pub type Map<K, V> = rustc_hash::FxHashMap<K, V>;

/// Map type used for search bookkeeping.
#[cfg(not(feature = "fx-hash"))]
pub type Map<K, V> = std::collections::HashMap<K, V>;

// ── Search result ─────────────────────────────────────────────────────────────

/// Bookkeeping of a finished search, restricted to vertices it reached.
#[derive(Clone, Debug, Default)]
pub struct Search {
    /// Predecessor on the best known path; the start maps to `None`.
    pub came_from:   Map<VertexId, Option<VertexId>>,
    /// Best known cost from the start.
    pub cost_so_far: Map<VertexId, f64>,
}

impl Search {
    pub fn cost(&self, v: VertexId) -> Option<f64> {
        self.cost_so_far.get(&v).copied()
    }

    pub fn reached(&self, v: VertexId) -> bool {
        self.came_from.contains_key(&v)
    }
}

// ── Frontier ──────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug)]
struct Frontier {
    f:      f64,
    g:      f64,
    vertex: VertexId,
}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        self.f
            .total_cmp(&other.f)
            .then_with(|| self.vertex.cmp(&other.vertex))
    }
}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Frontier {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Frontier {}

// ── find_path ─────────────────────────────────────────────────────────────────

/// Run A* from `start` to `goal` under `mode`.
///
/// Disabled edges are never relaxed.  The search stops when `goal` is popped
/// from the open set.
///
/// # Errors
///
/// [`RouteError::UnknownVertex`] if either endpoint is not in the graph,
/// [`RouteError::NoPath`] if the open set runs dry first.
pub fn find_path<V, E>(
    graph: &Graph<V, E>,
    start: VertexId,
    goal: VertexId,
    mode: CostMode,
) -> RouteResult<Search>
where
    V: Located,
    E: Traversable,
{
    let position = |v: VertexId| graph.vertex_payload(v).map(Located::location);
    let target = position(goal).ok_or(RouteError::UnknownVertex(goal))?;
    let origin = position(start).ok_or(RouteError::UnknownVertex(start))?;

    let mut search = Search::default();
    search.came_from.insert(start, None);
    search.cost_so_far.insert(start, 0.0);

    let mut open = BinaryHeap::new();
    open.push(Reverse(Frontier { f: origin.distance(target), g: 0.0, vertex: start }));

    while let Some(Reverse(Frontier { g, vertex: current, .. })) = open.pop() {
        if current == goal {
            return Ok(search);
        }

        // Skip stale heap entries.
        if search.cost(current).is_some_and(|best| g > best) {
            continue;
        }

        for e in graph.out_edges(current) {
            let Some(step) = graph.edge_payload(e).and_then(|s| mode.edge_cost(s)) else {
                continue;
            };
            let Some((_, next)) = graph.edge_endpoints(e) else { continue };

            let tentative = g + step;
            if search.cost(next).is_some_and(|known| tentative >= known) {
                continue;
            }
            search.cost_so_far.insert(next, tentative);
            search.came_from.insert(next, Some(current));

            let h = position(next).map_or(0.0, |p| p.distance(target));
            open.push(Reverse(Frontier { f: tentative + h, g: tentative, vertex: next }));
        }
    }

    Err(RouteError::NoPath { from: start, to: goal })
}

// ── Reconstruction ────────────────────────────────────────────────────────────

/// Vertices from `start` to `goal` following `came_from` backwards.
///
/// # Errors
///
/// [`RouteError::MalformedPath`] when a vertex other than `start` has no
/// predecessor entry (or the chain loops).
pub fn path_vertices(
    came_from: &Map<VertexId, Option<VertexId>>,
    start: VertexId,
    goal: VertexId,
) -> RouteResult<Vec<VertexId>> {
    let mut path = vec![goal];
    let mut current = goal;
    while current != start {
        match came_from.get(&current).copied().flatten() {
            Some(prev) if path.len() <= came_from.len() => {
                path.push(prev);
                current = prev;
            }
            _ => return Err(RouteError::MalformedPath { at: current }),
        }
    }
    path.reverse();
    Ok(path)
}

/// Positions of the vertices from `start` to `goal`.
///
/// A broken predecessor chain yields an empty path (and a warning) rather
/// than a partial one.
pub fn reconstruct_path<V: Located, E>(
    came_from: &Map<VertexId, Option<VertexId>>,
    start: VertexId,
    goal: VertexId,
    graph: &Graph<V, E>,
) -> Vec<Point> {
    let points = path_vertices(came_from, start, goal).and_then(|vertices| {
        vertices
            .into_iter()
            .map(|v| {
                graph
                    .vertex_payload(v)
                    .map(Located::location)
                    .ok_or(RouteError::UnknownVertex(v))
            })
            .collect::<RouteResult<Vec<Point>>>()
    });

    match points {
        Ok(points) => points,
        Err(err) => {
            tracing::warn!(from = %start, to = %goal, %err, "could not reconstruct path");
            Vec::new()
        }
    }
}
