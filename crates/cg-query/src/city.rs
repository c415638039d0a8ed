//! The assembled city: street graph, spatial index over its vertices, and
//! the block table.

use std::collections::HashMap;

use cg_core::{EdgeId, EntityId, Located, Point, Street, TreapConfig, VertexId};
use cg_graph::Graph;
use cg_spatial::{EntityKind, Identified, SpatialTreap};

use crate::block::Block;
use crate::{QueryError, QueryResult};

/// Street graph with positioned vertices.
pub type CityGraph = Graph<Point, Street>;

/// Spatial-index payload for a graph vertex.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GraphPoint {
    pub vertex: VertexId,
    pub point:  Point,
}

impl Identified for GraphPoint {
    #[inline]
    fn entity_id(&self) -> EntityId {
        self.vertex.into()
    }
}

impl Located for GraphPoint {
    #[inline]
    fn location(&self) -> Point {
        self.point
    }
}

// ── City ──────────────────────────────────────────────────────────────────────

pub struct City {
    pub(crate) graph:  CityGraph,
    pub(crate) index:  SpatialTreap<GraphPoint>,
    pub(crate) blocks: HashMap<String, Block>,
}

impl City {
    pub fn graph(&self) -> &CityGraph {
        &self.graph
    }

    pub fn graph_mut(&mut self) -> &mut CityGraph {
        &mut self.graph
    }

    pub fn index(&self) -> &SpatialTreap<GraphPoint> {
        &self.index
    }

    pub fn index_mut(&mut self) -> &mut SpatialTreap<GraphPoint> {
        &mut self.index
    }

    pub fn block(&self, name: &str) -> QueryResult<&Block> {
        self.blocks.get(name).ok_or_else(|| QueryError::UnknownBlock(name.to_owned()))
    }

    pub fn blocks(&self) -> impl Iterator<Item = &Block> + '_ {
        self.blocks.values()
    }

    /// Position of a vertex.
    pub fn position(&self, v: VertexId) -> QueryResult<Point> {
        self.graph
            .vertex_payload(v)
            .copied()
            .ok_or_else(|| cg_graph::GraphError::VertexNotFound(v).into())
    }
}

// ── CityBuilder ───────────────────────────────────────────────────────────────

/// Incrementally assembles a [`City`].
///
/// ```rust,ignore
/// let mut b = CityBuilder::new(64, false, "downtown");
/// b.add_vertex("a", Point::new(0.0, 0.0))?;
/// b.add_vertex("b", Point::new(100.0, 0.0))?;
/// b.add_street("a", "b", Street::new("Main St", 10.0, 100.0))?;
/// b.add_block(Block::new("b1", BoundingBox::new(10.0, 10.0, 80.0, 80.0)?));
/// let city = b.build()?;
/// ```
pub struct CityBuilder {
    graph:  CityGraph,
    blocks: HashMap<String, Block>,
    treap:  TreapConfig,
}

impl CityBuilder {
    pub fn new(max_vertices: usize, directed: bool, name: impl Into<String>) -> Self {
        Self {
            graph:  Graph::new(max_vertices, directed, name),
            blocks: HashMap::new(),
            treap:  TreapConfig::default(),
        }
    }

    /// Use `config` for the spatial index instead of the defaults.
    pub fn treap_config(mut self, config: TreapConfig) -> Self {
        self.treap = config;
        self
    }

    pub fn add_vertex(&mut self, name: impl Into<String>, at: Point) -> QueryResult<VertexId> {
        if !at.is_finite() {
            return Err(cg_core::CoreError::InvalidGeometry(format!("vertex at {at}")).into());
        }
        Ok(self.graph.add_vertex(name, at)?)
    }

    /// Connect two vertices by name.
    pub fn add_street(&mut self, from: &str, to: &str, street: Street) -> QueryResult<EdgeId> {
        let lookup = |name: &str| {
            self.graph
                .vertex_by_name(name)
                .ok_or_else(|| cg_graph::GraphError::UnknownVertexName(name.to_owned()))
        };
        let (a, b) = (lookup(from)?, lookup(to)?);
        Ok(self.graph.add_edge(a, b, street)?)
    }

    pub fn add_street_between(&mut self, from: VertexId, to: VertexId, street: Street) -> QueryResult<EdgeId> {
        Ok(self.graph.add_edge(from, to, street)?)
    }

    /// Add or replace a block.
    pub fn add_block(&mut self, block: Block) {
        self.blocks.insert(block.name.clone(), block);
    }

    /// Finish the graph and index one graph-point entry per vertex.
    pub fn build(self) -> QueryResult<City> {
        let mut index = SpatialTreap::new(self.treap)?;
        for v in self.graph.vertices() {
            let Some(&point) = self.graph.vertex_payload(v) else { continue };
            index.insert(point.x, point.y, EntityKind::GraphPoint, GraphPoint { vertex: v, point })?;
        }
        tracing::debug!(
            vertices = self.graph.vertex_count(),
            edges = self.graph.edge_count(),
            blocks = self.blocks.len(),
            "city built"
        );
        Ok(City { graph: self.graph, index, blocks: self.blocks })
    }
}
