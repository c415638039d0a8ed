//! Graph storage: a fixed-capacity vertex table plus an edge arena.
//!
//! # Data layout
//!
//! Vertices live in a dense `Vec` indexed by `VertexId`; a vertex's id is its
//! slot and never changes.  Capacity is fixed at construction and the table
//! never grows past it.
//!
//! Edge records live in an arena indexed by `EdgeId`.  Removed records leave
//! a `None` hole and their id is never handed out again, so a stale `EdgeId`
//! resolves to "not found" instead of aliasing a newer edge.
//!
//! Payloads live in a second arena.  A directed edge owns one payload slot;
//! an undirected road inserts two edge records (A→B and B→A) that point at
//! the same slot.  The pair is matched for removal by reversed endpoints and
//! identical payload slot.

use std::collections::HashMap;

use cg_core::{EdgeId, VertexId};

use crate::subgraph::SubGraph;
use crate::{GraphError, GraphResult};

// ── Internal records ──────────────────────────────────────────────────────────

/// Index into the payload arena.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub(crate) struct PayloadSlot(pub(crate) u32);

pub(crate) struct Vertex<V> {
    pub(crate) name:      String,
    pub(crate) payload:   V,
    /// Outgoing edge records, in insertion order.
    pub(crate) adjacency: Vec<EdgeId>,
}

#[derive(Copy, Clone, Debug)]
pub(crate) struct EdgeRecord {
    pub(crate) from:    VertexId,
    pub(crate) to:      VertexId,
    pub(crate) payload: PayloadSlot,
}

// ── Graph ─────────────────────────────────────────────────────────────────────

/// Directed or undirected multigraph with named vertices.
///
/// `V` is the per-vertex payload (a `Point` for the city), `E` the per-edge
/// payload (a `Street`).
pub struct Graph<V, E> {
    name:         String,
    directed:     bool,
    max_vertices: usize,

    pub(crate) vertices: Vec<Vertex<V>>,
    pub(crate) edges:    Vec<Option<EdgeRecord>>,
    payloads:            Vec<Option<E>>,
    live_edges:          usize,

    pub(crate) subgraphs: HashMap<String, SubGraph>,
}

impl<V, E> Graph<V, E> {
    /// Create an empty graph that can hold at most `max_vertices` vertices.
    pub fn new(max_vertices: usize, directed: bool, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            directed,
            max_vertices,
            vertices: Vec::with_capacity(max_vertices),
            edges: Vec::new(),
            payloads: Vec::new(),
            live_edges: 0,
            subgraphs: HashMap::new(),
        }
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn max_vertices(&self) -> usize {
        self.max_vertices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of live edge records (an undirected road counts twice).
    pub fn edge_count(&self) -> usize {
        self.live_edges
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    // ── Vertices ──────────────────────────────────────────────────────────

    /// Add a vertex and return its id.
    ///
    /// # Errors
    ///
    /// [`GraphError::CapacityExceeded`] once `max_vertices` vertices exist;
    /// the table is never resized.
    pub fn add_vertex(&mut self, name: impl Into<String>, payload: V) -> GraphResult<VertexId> {
        if self.vertices.len() >= self.max_vertices {
            return Err(GraphError::CapacityExceeded { capacity: self.max_vertices });
        }
        let id = VertexId(self.vertices.len() as u32);
        self.vertices.push(Vertex { name: name.into(), payload, adjacency: Vec::new() });
        Ok(id)
    }

    /// First vertex whose name equals `name` (linear scan).
    pub fn vertex_by_name(&self, name: &str) -> Option<VertexId> {
        self.vertices
            .iter()
            .position(|v| v.name == name)
            .map(|i| VertexId(i as u32))
    }

    pub fn contains_vertex(&self, v: VertexId) -> bool {
        v.index() < self.vertices.len()
    }

    pub fn vertex_name(&self, v: VertexId) -> Option<&str> {
        self.vertices.get(v.index()).map(|vx| vx.name.as_str())
    }

    pub fn vertex_payload(&self, v: VertexId) -> Option<&V> {
        self.vertices.get(v.index()).map(|vx| &vx.payload)
    }

    pub fn vertex_payload_mut(&mut self, v: VertexId) -> Option<&mut V> {
        self.vertices.get_mut(v.index()).map(|vx| &mut vx.payload)
    }

    /// Replace a vertex payload, returning the previous one.
    pub fn set_vertex_payload(&mut self, v: VertexId, payload: V) -> GraphResult<V> {
        let vx = self.vertices.get_mut(v.index()).ok_or(GraphError::VertexNotFound(v))?;
        Ok(std::mem::replace(&mut vx.payload, payload))
    }

    /// All vertex ids in slot order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        (0..self.vertices.len()).map(|i| VertexId(i as u32))
    }

    /// All vertex names in slot order.
    pub fn vertex_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.vertices.iter().map(|v| v.name.as_str())
    }

    // ── Edges ─────────────────────────────────────────────────────────────

    /// Add an edge `from → to` and return its handle.
    ///
    /// On an undirected graph the mirror record `to → from` is inserted into
    /// `to`'s adjacency as well, sharing the same payload.  The returned
    /// handle is the `from → to` record.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId, payload: E) -> GraphResult<EdgeId> {
        if !self.contains_vertex(from) {
            return Err(GraphError::VertexNotFound(from));
        }
        if !self.contains_vertex(to) {
            return Err(GraphError::VertexNotFound(to));
        }

        let slot = PayloadSlot(self.payloads.len() as u32);
        self.payloads.push(Some(payload));

        let edge = self.push_record(EdgeRecord { from, to, payload: slot });
        if !self.directed {
            self.push_record(EdgeRecord { from: to, to: from, payload: slot });
        }
        Ok(edge)
    }

    fn push_record(&mut self, record: EdgeRecord) -> EdgeId {
        let id = EdgeId(self.edges.len() as u32);
        self.edges.push(Some(record));
        self.vertices[record.from.index()].adjacency.push(id);
        self.live_edges += 1;
        id
    }

    pub(crate) fn record(&self, e: EdgeId) -> Option<&EdgeRecord> {
        self.edges.get(e.index()).and_then(Option::as_ref)
    }

    pub fn contains_edge(&self, e: EdgeId) -> bool {
        self.record(e).is_some()
    }

    /// First edge in `from`'s adjacency whose target is `to`.
    pub fn edge(&self, from: VertexId, to: VertexId) -> Option<EdgeId> {
        self.out_edges(from)
            .find(|&e| self.record(e).is_some_and(|r| r.to == to))
    }

    pub fn edge_endpoints(&self, e: EdgeId) -> Option<(VertexId, VertexId)> {
        self.record(e).map(|r| (r.from, r.to))
    }

    pub fn edge_payload(&self, e: EdgeId) -> Option<&E> {
        let slot = self.record(e)?.payload;
        self.payloads.get(slot.0 as usize).and_then(Option::as_ref)
    }

    pub fn edge_payload_mut(&mut self, e: EdgeId) -> Option<&mut E> {
        let slot = self.record(e)?.payload;
        self.payloads.get_mut(slot.0 as usize).and_then(Option::as_mut)
    }

    /// Replace an edge payload (shared by both records of an undirected
    /// road), returning the previous one.
    pub fn set_edge_payload(&mut self, e: EdgeId, payload: E) -> GraphResult<E> {
        let current = self.edge_payload_mut(e).ok_or(GraphError::EdgeNotFound(e))?;
        Ok(std::mem::replace(current, payload))
    }

    /// Remove an edge and hand its payload back.
    ///
    /// On an undirected graph the twin record (swapped endpoints, same
    /// payload slot) is removed from the other vertex's adjacency as well.
    /// Both records are dropped from every sub-graph edge list.
    pub fn remove_edge(&mut self, e: EdgeId) -> GraphResult<E> {
        let record = *self.record(e).ok_or(GraphError::EdgeNotFound(e))?;
        self.unlink(e, record);

        if !self.directed {
            let twin = self.vertices[record.to.index()]
                .adjacency
                .iter()
                .copied()
                .find(|&t| {
                    self.record(t).is_some_and(|r| {
                        r.from == record.to && r.to == record.from && r.payload == record.payload
                    })
                });
            match twin {
                Some(t) => self.unlink(t, EdgeRecord { from: record.to, to: record.from, ..record }),
                None => tracing::debug!(edge = %e, "undirected edge had no twin record"),
            }
        }

        self.payloads[record.payload.0 as usize]
            .take()
            .ok_or(GraphError::EdgeNotFound(e))
    }

    fn unlink(&mut self, e: EdgeId, record: EdgeRecord) {
        self.vertices[record.from.index()].adjacency.retain(|&x| x != e);
        self.edges[e.index()] = None;
        self.live_edges -= 1;
        for sg in self.subgraphs.values_mut() {
            sg.edges.retain(|&x| x != e);
        }
    }

    /// Iterator over `v`'s outgoing edge handles (empty for an unknown vertex).
    #[inline]
    pub fn out_edges(&self, v: VertexId) -> impl Iterator<Item = EdgeId> + '_ {
        self.vertices
            .get(v.index())
            .into_iter()
            .flat_map(|vx| vx.adjacency.iter().copied())
    }

    /// Snapshot of `v`'s outgoing edges.
    pub fn adjacent_edges(&self, v: VertexId) -> GraphResult<Vec<EdgeId>> {
        let vx = self.vertices.get(v.index()).ok_or(GraphError::VertexNotFound(v))?;
        Ok(vx.adjacency.clone())
    }

    /// Targets of `v`'s outgoing edges, in adjacency order (may repeat).
    pub fn adjacent_vertices(&self, v: VertexId) -> GraphResult<Vec<VertexId>> {
        let vx = self.vertices.get(v.index()).ok_or(GraphError::VertexNotFound(v))?;
        Ok(vx
            .adjacency
            .iter()
            .filter_map(|&e| self.record(e).map(|r| r.to))
            .collect())
    }

    /// Every live edge record, grouped by source vertex.
    pub fn edges(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.vertices.iter().flat_map(|vx| vx.adjacency.iter().copied())
    }

    /// `true` iff some edge `from → to` exists.
    pub fn is_adjacent(&self, from: VertexId, to: VertexId) -> bool {
        self.edge(from, to).is_some()
    }
}
