//! Named sub-graph views.
//!
//! A sub-graph is a filter over its parent graph: a list of vertex names and
//! a list of edge handles borrowed from the parent's adjacency lists.  It
//! never owns edges; toggling membership leaves the parent untouched.

use std::collections::HashSet;

use cg_core::{EdgeId, VertexId};

use crate::graph::Graph;
use crate::{GraphError, GraphResult};

/// Membership lists of one named view.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SubGraph {
    pub(crate) vertices: Vec<String>,
    pub(crate) edges:    Vec<EdgeId>,
}

impl SubGraph {
    pub fn vertex_names(&self) -> &[String] {
        &self.vertices
    }

    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    fn has_vertex(&self, name: &str) -> bool {
        self.vertices.iter().any(|v| v == name)
    }
}

impl<V, E> Graph<V, E> {
    fn view(&self, name: &str) -> GraphResult<&SubGraph> {
        self.subgraphs
            .get(name)
            .ok_or_else(|| GraphError::SubgraphNotFound(name.to_owned()))
    }

    fn view_mut(&mut self, name: &str) -> GraphResult<&mut SubGraph> {
        self.subgraphs
            .get_mut(name)
            .ok_or_else(|| GraphError::SubgraphNotFound(name.to_owned()))
    }

    /// Create the sub-graph `name` over the vertices named in `vertex_names`.
    ///
    /// With `induced = true` the edge list starts with every parent edge
    /// whose endpoints are both listed; otherwise it starts empty.
    ///
    /// # Errors
    ///
    /// [`GraphError::UnknownVertexName`] if a listed name has no vertex,
    /// [`GraphError::DuplicateSubgraph`] if `name` is taken.
    pub fn create_subgraph<S: AsRef<str>>(
        &mut self,
        name: &str,
        vertex_names: &[S],
        induced: bool,
    ) -> GraphResult<()> {
        if self.subgraphs.contains_key(name) {
            return Err(GraphError::DuplicateSubgraph(name.to_owned()));
        }

        let mut members = Vec::with_capacity(vertex_names.len());
        for vname in vertex_names {
            let vname = vname.as_ref();
            let id = self
                .vertex_by_name(vname)
                .ok_or_else(|| GraphError::UnknownVertexName(vname.to_owned()))?;
            if !members.contains(&id) {
                members.push(id);
            }
        }

        let mut edges = Vec::new();
        if induced {
            for &v in &members {
                for e in self.out_edges(v) {
                    if self.record(e).is_some_and(|r| members.contains(&r.to)) {
                        edges.push(e);
                    }
                }
            }
        }

        let vertices = vertex_names.iter().map(|n| n.as_ref().to_owned()).collect();
        self.subgraphs.insert(name.to_owned(), SubGraph { vertices, edges });
        Ok(())
    }

    pub fn subgraph(&self, name: &str) -> Option<&SubGraph> {
        self.subgraphs.get(name)
    }

    /// Add a parent edge to the sub-graph's edge list (no-op if present).
    pub fn include_edge(&mut self, name: &str, e: EdgeId) -> GraphResult<()> {
        if !self.contains_edge(e) {
            return Err(GraphError::EdgeNotFound(e));
        }
        let view = self.view_mut(name)?;
        if !view.edges.contains(&e) {
            view.edges.push(e);
        }
        Ok(())
    }

    /// Drop `e` from the sub-graph's edge list.  The parent keeps the edge.
    /// Returns whether the edge was a member.
    pub fn exclude_edge(&mut self, name: &str, e: EdgeId) -> GraphResult<bool> {
        let view = self.view_mut(name)?;
        let before = view.edges.len();
        view.edges.retain(|&x| x != e);
        Ok(view.edges.len() != before)
    }

    pub fn subgraph_contains_edge(&self, name: &str, e: EdgeId) -> GraphResult<bool> {
        Ok(self.view(name)?.edges.contains(&e))
    }

    /// Ids of the sub-graph's vertices (first match per name).
    pub fn subgraph_vertices(&self, name: &str) -> GraphResult<Vec<VertexId>> {
        Ok(self
            .view(name)?
            .vertices
            .iter()
            .filter_map(|n| self.vertex_by_name(n))
            .collect())
    }

    pub fn subgraph_edges(&self, name: &str) -> GraphResult<Vec<EdgeId>> {
        Ok(self.view(name)?.edges.clone())
    }

    /// Outgoing edges of `v` restricted to the sub-graph: `v` must be a
    /// listed vertex and each edge must be in the sub-graph's edge list.
    pub fn adjacent_edges_in_subgraph(&self, name: &str, v: VertexId) -> GraphResult<Vec<EdgeId>> {
        let view = self.view(name)?;
        let vname = self.vertex_name(v).ok_or(GraphError::VertexNotFound(v))?;
        if !view.has_vertex(vname) {
            return Ok(Vec::new());
        }
        Ok(self.out_edges(v).filter(|e| view.edges.contains(e)).collect())
    }
}

impl<V: Clone, E: Clone> Graph<V, E> {
    /// Build a standalone graph from the sub-graph `name`.
    ///
    /// Vertices are copied in listed order under fresh ids with the same
    /// names and payloads.  Edges are reconnected by name lookup; an edge
    /// whose endpoint is not a listed vertex is skipped.  On an undirected
    /// graph each road is copied once even if both of its records are
    /// members.
    pub fn materialize(&self, name: &str) -> GraphResult<Graph<V, E>> {
        let view = self.view(name)?;
        let mut out = Graph::new(view.vertices.len(), self.is_directed(), name);

        for vname in &view.vertices {
            if out.vertex_by_name(vname).is_some() {
                continue;
            }
            let src = self
                .vertex_by_name(vname)
                .ok_or_else(|| GraphError::UnknownVertexName(vname.clone()))?;
            let payload = self.vertices[src.index()].payload.clone();
            out.add_vertex(vname.clone(), payload)?;
        }

        let mut copied = HashSet::new();
        for &e in &view.edges {
            let Some(record) = self.record(e) else { continue };
            if !self.is_directed() && !copied.insert(record.payload) {
                continue;
            }
            let endpoints = (
                self.vertex_name(record.from).and_then(|n| out.vertex_by_name(n)),
                self.vertex_name(record.to).and_then(|n| out.vertex_by_name(n)),
            );
            let (Some(from), Some(to)) = endpoints else {
                tracing::debug!(edge = %e, subgraph = name, "edge endpoint outside sub-graph; skipped");
                continue;
            };
            if let Some(payload) = self.edge_payload(e) {
                out.add_edge(from, to, payload.clone())?;
            }
        }
        Ok(out)
    }
}
