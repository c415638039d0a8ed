//! `QueryProcessor`: state carried across query commands.
//!
//! The processor owns the city plus four tables that live for the whole
//! run:
//!
//! | Table       | Key            | Value                                  |
//! |-------------|----------------|----------------------------------------|
//! | registers   | register name  | vertex resolved from an address        |
//! | paths       | path name      | `RenderablePath` (shortest or fastest) |
//! | closures    | region id      | edges disabled by `close_region`       |
//! | artifacts   | (ordered)      | drawables for the external renderer    |

use std::collections::HashMap;

use cg_core::{BoundingBox, EdgeId, Point, QueryConfig, Street, VertexId};
use cg_route::{AStarRouter, CostMode, Router};
use cg_spatial::EntityKind;

use crate::block::Face;
use crate::city::City;
use crate::render::{Artifact, RenderablePath};
use crate::{QueryError, QueryResult};

pub struct QueryProcessor<R = AStarRouter> {
    pub(crate) city: City,
    router:          R,
    config:          QueryConfig,

    registers: HashMap<String, VertexId>,
    paths:     HashMap<String, RenderablePath>,
    closures:  HashMap<i64, Vec<EdgeId>>,
    artifacts: Vec<Artifact>,
}

impl QueryProcessor<AStarRouter> {
    /// Processor routing with [`AStarRouter`].
    pub fn new(city: City, config: QueryConfig) -> QueryResult<Self> {
        Self::with_router(city, config, AStarRouter)
    }
}

impl<R: Router<Point, Street>> QueryProcessor<R> {
    pub fn with_router(city: City, config: QueryConfig, router: R) -> QueryResult<Self> {
        config.validate()?;
        Ok(Self {
            city,
            router,
            config,
            registers: HashMap::new(),
            paths: HashMap::new(),
            closures: HashMap::new(),
            artifacts: Vec::new(),
        })
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn city(&self) -> &City {
        &self.city
    }

    pub fn city_mut(&mut self) -> &mut City {
        &mut self.city
    }

    pub fn config(&self) -> &QueryConfig {
        &self.config
    }

    pub fn register(&self, name: &str) -> Option<VertexId> {
        self.registers.get(name).copied()
    }

    /// Bind `name` to `v` directly, bypassing address resolution.
    pub fn set_register(&mut self, name: impl Into<String>, v: VertexId) -> QueryResult<()> {
        self.city.position(v)?;
        self.registers.insert(name.into(), v);
        Ok(())
    }

    pub fn path(&self, name: &str) -> Option<&RenderablePath> {
        self.paths.get(name)
    }

    /// Edges currently held closed under `region`.
    pub fn closed_edges(&self, region: i64) -> Option<&[EdgeId]> {
        self.closures.get(&region).map(Vec::as_slice)
    }

    pub fn artifacts(&self) -> &[Artifact] {
        &self.artifacts
    }

    /// Hand the collected artifacts to the caller, leaving none behind.
    pub fn take_artifacts(&mut self) -> Vec<Artifact> {
        std::mem::take(&mut self.artifacts)
    }

    fn fast_name(&self, name: &str) -> String {
        format!("{name}{}", self.config.fast_suffix)
    }

    fn registered(&self, name: &str) -> QueryResult<VertexId> {
        self.register(name).ok_or_else(|| QueryError::UnknownRegister(name.to_owned()))
    }

    // ── Nearest vertex ────────────────────────────────────────────────────

    /// Graph vertex nearest to `target` among those within `radius` on both
    /// axes.  The search box is not widened when it comes back empty.
    pub fn nearest_vertex(&mut self, target: Point, radius: f64) -> QueryResult<VertexId> {
        let area = BoundingBox::around(target, radius);
        let hits = self.city.index.region(area.x, area.y, area.max_x(), area.max_y());

        let mut best: Option<(f64, VertexId)> = None;
        for hit in hits.iter().filter(|h| h.kind == EntityKind::GraphPoint) {
            let Some(gp) = self.city.index.payload(hit.id) else { continue };
            let d = gp.point.distance(target);
            if best.is_none_or(|(bd, _)| d < bd) {
                best = Some((d, gp.vertex));
            }
        }

        best.map(|(_, v)| v).ok_or(QueryError::NoVertexNear { at: target, radius })
    }

    // ── Addresses ─────────────────────────────────────────────────────────

    /// Resolve `(block, face, number)` to the nearest vertex and store it in
    /// register `reg`.
    pub fn resolve_address(&mut self, reg: &str, block: &str, face: Face, number: f64) -> QueryResult<VertexId> {
        let target = self.city.block(block)?.address(face, number);
        let v = self.nearest_vertex(target, self.config.address_radius)?;

        tracing::debug!(register = reg, block, %face, number, %target, vertex = %v, "address resolved");
        self.registers.insert(reg.to_owned(), v);
        Ok(v)
    }

    // ── Paths ─────────────────────────────────────────────────────────────

    /// Route `from → to` under `mode` as a named path.  A failed route gives
    /// an empty path and a warning, never an error.
    fn route_path(&self, name: String, from: VertexId, to: VertexId, mode: CostMode) -> RenderablePath {
        match self.router.route(&self.city.graph, from, to, mode) {
            Ok(route) => RenderablePath::new(name, route.points, mode, Some(route.total_cost)),
            Err(err) => {
                tracing::warn!(path = %name, %from, %to, ?mode, %err, "no route; registering empty path");
                RenderablePath::new(name, Vec::new(), mode, None)
            }
        }
    }

    /// Build the shortest path between two registers under `name` and the
    /// fastest under `name` plus the fast suffix.
    ///
    /// An unroutable pair still registers both (empty) paths and adds a
    /// marker line between the endpoints.  Both endpoints of the fast path
    /// get a register tag.
    pub fn build_named_path(&mut self, name: &str, origin: &str, destination: &str) -> QueryResult<()> {
        let from = self.registered(origin)?;
        let to = self.registered(destination)?;
        let (start, end) = (self.city.position(from)?, self.city.position(to)?);

        let shortest = self.route_path(name.to_owned(), from, to, CostMode::ByLength);
        if shortest.is_empty() {
            self.artifacts.push(Artifact::NoPathLine { from: start, to: end });
        }
        self.paths.insert(name.to_owned(), shortest);

        let fast_name = self.fast_name(name);
        let fastest = self.route_path(fast_name.clone(), from, to, CostMode::ByTravelTime);
        self.paths.insert(fast_name.clone(), fastest);

        self.artifacts.push(Artifact::RegisterTag { at: start, label: fast_name.clone() });
        self.artifacts.push(Artifact::RegisterTag { at: end, label: fast_name });
        Ok(())
    }

    /// Colour the shortest and fastest variants of `name` and emit both.
    pub fn show_path(&mut self, name: &str, shortest_color: &str, fastest_color: &str) -> QueryResult<()> {
        let fast_name = self.fast_name(name);
        if !self.paths.contains_key(&fast_name) {
            return Err(QueryError::UnknownPath(fast_name));
        }
        let shortest = self
            .paths
            .get_mut(name)
            .ok_or_else(|| QueryError::UnknownPath(name.to_owned()))?;
        shortest.color = Some(shortest_color.to_owned());
        let shortest = shortest.clone();

        let fastest = self
            .paths
            .get_mut(&fast_name)
            .ok_or_else(|| QueryError::UnknownPath(fast_name.clone()))?;
        fastest.color = Some(fastest_color.to_owned());
        let fastest = fastest.clone();

        self.artifacts.push(Artifact::Path(shortest));
        self.artifacts.push(Artifact::Path(fastest));
        Ok(())
    }

    /// Route from the vertex nearest the end of `first` to the vertex
    /// nearest the start of `second`, registering the connection as `name`
    /// (shortest) and `name` plus the fast suffix (fastest).
    pub fn join_paths(&mut self, name: &str, first: &str, second: &str) -> QueryResult<()> {
        let lookup = |n: &str| self.paths.get(n).ok_or_else(|| QueryError::UnknownPath(n.to_owned()));
        let tail = lookup(first)?.last_point().ok_or_else(|| QueryError::EmptyPath(first.to_owned()))?;
        let head = lookup(second)?.first_point().ok_or_else(|| QueryError::EmptyPath(second.to_owned()))?;

        let radius = self.config.join_radius;
        let from = self.nearest_vertex(tail, radius)?;
        let to = self.nearest_vertex(head, radius)?;

        let shortest = self.route_path(name.to_owned(), from, to, CostMode::ByLength);
        self.paths.insert(name.to_owned(), shortest);

        let fast_name = self.fast_name(name);
        let fastest = self.route_path(fast_name.clone(), from, to, CostMode::ByTravelTime);
        self.paths.insert(fast_name, fastest);

        tracing::debug!(path = name, first, second, "paths joined");
        Ok(())
    }

    // ── Closures ──────────────────────────────────────────────────────────

    /// Disable every street leaving a vertex inside `area` and remember the
    /// set under `region`.  Returns the number of edges closed.
    ///
    /// Closing an id that is already closed adds to its set.
    pub fn close_region(&mut self, region: i64, area: BoundingBox) -> QueryResult<usize> {
        area.validate()?;
        self.artifacts.push(Artifact::ClosedRegion(area));

        let hits = self.city.index.region(area.x, area.y, area.max_x(), area.max_y());
        // Gather first: a lookup failure must not leave streets half closed.
        let mut candidates = Vec::new();
        for hit in hits.iter().filter(|h| h.kind == EntityKind::GraphPoint) {
            let Some(gp) = self.city.index.payload(hit.id) else { continue };
            candidates.extend(self.city.graph.adjacent_edges(gp.vertex)?);
        }

        let mut closed = Vec::with_capacity(candidates.len());
        for e in candidates {
            if let Some(street) = self.city.graph.edge_payload_mut(e) {
                street.disable();
                tracing::debug!(region, street = %street.name, "street closed");
                closed.push(e);
            }
        }

        let count = closed.len();
        self.closures.entry(region).or_default().extend(closed);
        Ok(count)
    }

    /// Re-enable exactly the edges closed under `region` and forget it.
    /// Returns the number of edges reopened (edges removed from the graph in
    /// the meantime are skipped).
    pub fn reopen_region(&mut self, region: i64) -> QueryResult<usize> {
        let edges = self.closures.remove(&region).ok_or(QueryError::UnknownRegion(region))?;
        let mut reopened = 0;
        for e in edges {
            if let Some(street) = self.city.graph.edge_payload_mut(e) {
                street.enable();
                tracing::debug!(region, street = %street.name, "street reopened");
                reopened += 1;
            }
        }
        Ok(reopened)
    }
}
