//! Unit tests for cg-graph.
//!
//! All tests use small hand-built graphs with `Point` vertex payloads and
//! `Street` edge payloads, the same shapes the city uses.

#[cfg(test)]
mod helpers {
    use cg_core::{Point, Street, VertexId};

    use crate::Graph;

    /// Undirected square:
    ///
    /// ```text
    ///   a(0,0) ── b(10,0)
    ///     │         │
    ///   d(0,10) ── c(10,10)
    /// ```
    pub fn square() -> (Graph<Point, Street>, [VertexId; 4]) {
        let mut g = Graph::new(8, false, "square");
        let a = g.add_vertex("a", Point::new(0.0, 0.0)).unwrap();
        let b = g.add_vertex("b", Point::new(10.0, 0.0)).unwrap();
        let c = g.add_vertex("c", Point::new(10.0, 10.0)).unwrap();
        let d = g.add_vertex("d", Point::new(0.0, 10.0)).unwrap();
        g.add_edge(a, b, Street::new("ab", 10.0, 10.0)).unwrap();
        g.add_edge(b, c, Street::new("bc", 10.0, 10.0)).unwrap();
        g.add_edge(c, d, Street::new("cd", 10.0, 10.0)).unwrap();
        g.add_edge(d, a, Street::new("da", 10.0, 10.0)).unwrap();
        (g, [a, b, c, d])
    }
}

// ── Vertices ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod vertices {
    use cg_core::{Point, VertexId};

    use crate::{Graph, GraphError};

    #[test]
    fn ids_are_sequential_slots() {
        let mut g: Graph<Point, ()> = Graph::new(3, true, "g");
        assert_eq!(g.add_vertex("x", Point::default()).unwrap(), VertexId(0));
        assert_eq!(g.add_vertex("y", Point::default()).unwrap(), VertexId(1));
        assert_eq!(g.vertex_count(), 2);
        assert_eq!(g.max_vertices(), 3);
    }

    #[test]
    fn capacity_is_fixed() {
        let mut g: Graph<(), ()> = Graph::new(1, true, "tiny");
        g.add_vertex("only", ()).unwrap();
        assert_eq!(
            g.add_vertex("extra", ()),
            Err(GraphError::CapacityExceeded { capacity: 1 })
        );
        assert_eq!(g.vertex_count(), 1);
    }

    #[test]
    fn lookup_by_name_returns_first_match() {
        let mut g: Graph<u8, ()> = Graph::new(4, true, "dup");
        let first = g.add_vertex("same", 1).unwrap();
        g.add_vertex("same", 2).unwrap();
        assert_eq!(g.vertex_by_name("same"), Some(first));
        assert_eq!(g.vertex_by_name("missing"), None);
    }

    #[test]
    fn payload_accessors() {
        let mut g: Graph<Point, ()> = Graph::new(2, true, "g");
        let v = g.add_vertex("v", Point::new(1.0, 2.0)).unwrap();
        assert_eq!(g.vertex_name(v), Some("v"));
        assert_eq!(g.vertex_payload(v), Some(&Point::new(1.0, 2.0)));
        let old = g.set_vertex_payload(v, Point::new(3.0, 4.0)).unwrap();
        assert_eq!(old, Point::new(1.0, 2.0));
        assert_eq!(g.vertex_payload(v), Some(&Point::new(3.0, 4.0)));
    }

    #[test]
    fn unknown_vertex_is_not_found() {
        let mut g: Graph<(), ()> = Graph::new(2, true, "g");
        assert_eq!(g.vertex_name(VertexId(5)), None);
        assert_eq!(g.vertex_payload(VertexId(5)), None);
        assert_eq!(g.set_vertex_payload(VertexId(5), ()), Err(GraphError::VertexNotFound(VertexId(5))));
        assert_eq!(g.adjacent_edges(VertexId(5)), Err(GraphError::VertexNotFound(VertexId(5))));
        assert_eq!(g.out_edges(VertexId(5)).count(), 0);
    }

    #[test]
    fn names_enumerate_in_slot_order() {
        let (g, _) = super::helpers::square();
        let names: Vec<_> = g.vertex_names().collect();
        assert_eq!(names, ["a", "b", "c", "d"]);
    }
}

// ── Edges ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod edges {
    use cg_core::{EdgeId, Point, Street, VertexId};

    use crate::{Graph, GraphError};

    #[test]
    fn directed_edge_is_one_way() {
        let mut g: Graph<Point, Street> = Graph::new(2, true, "g");
        let a = g.add_vertex("a", Point::default()).unwrap();
        let b = g.add_vertex("b", Point::default()).unwrap();
        let e = g.add_edge(a, b, Street::new("ab", 1.0, 1.0)).unwrap();
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.edge(a, b), Some(e));
        assert_eq!(g.edge(b, a), None);
        assert!(g.is_adjacent(a, b));
        assert!(!g.is_adjacent(b, a));
        assert_eq!(g.edge_endpoints(e), Some((a, b)));
    }

    #[test]
    fn undirected_edge_inserts_mirror() {
        let (g, [a, b, ..]) = super::helpers::square();
        assert_eq!(g.edge_count(), 8);
        let ab = g.edge(a, b).unwrap();
        let ba = g.edge(b, a).unwrap();
        assert_ne!(ab, ba);
        assert_eq!(g.edge_endpoints(ba), Some((b, a)));
        assert_eq!(g.edge_payload(ab).unwrap().name, "ab");
        assert_eq!(g.edge_payload(ba).unwrap().name, "ab");
    }

    #[test]
    fn mirror_shares_payload() {
        let (mut g, [a, b, ..]) = super::helpers::square();
        let ab = g.edge(a, b).unwrap();
        let ba = g.edge(b, a).unwrap();
        g.edge_payload_mut(ab).unwrap().disable();
        assert!(!g.edge_payload(ba).unwrap().is_enabled());
    }

    #[test]
    fn unknown_endpoint_rejected() {
        let mut g: Graph<(), ()> = Graph::new(2, true, "g");
        let a = g.add_vertex("a", ()).unwrap();
        assert_eq!(g.add_edge(a, VertexId(1), ()), Err(GraphError::VertexNotFound(VertexId(1))));
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn adjacency_snapshot_and_neighbours() {
        let (g, [a, b, _, d]) = super::helpers::square();
        let adj = g.adjacent_edges(a).unwrap();
        assert_eq!(adj.len(), 2);
        let mut n = g.adjacent_vertices(a).unwrap();
        n.sort();
        assert_eq!(n, vec![b, d]);
    }

    #[test]
    fn remove_undirected_removes_twin() {
        let mut g: Graph<(), &str> = Graph::new(2, false, "g");
        let x = g.add_vertex("x", ()).unwrap();
        let y = g.add_vertex("y", ()).unwrap();
        let e = g.add_edge(x, y, "xy").unwrap();
        assert!(g.is_adjacent(x, y) && g.is_adjacent(y, x));

        assert_eq!(g.remove_edge(e), Ok("xy"));
        assert!(!g.is_adjacent(x, y));
        assert!(!g.is_adjacent(y, x));
        assert_eq!(g.edge_count(), 0);
        assert!(g.adjacent_edges(y).unwrap().is_empty());
    }

    #[test]
    fn remove_via_mirror_handle() {
        let (mut g, [a, b, ..]) = super::helpers::square();
        let ba = g.edge(b, a).unwrap();
        let street = g.remove_edge(ba).unwrap();
        assert_eq!(street.name, "ab");
        assert!(!g.is_adjacent(a, b));
        assert!(!g.is_adjacent(b, a));
        assert_eq!(g.edge_count(), 6);
    }

    #[test]
    fn parallel_roads_keep_their_own_twin() {
        let mut g: Graph<(), &str> = Graph::new(2, false, "g");
        let x = g.add_vertex("x", ()).unwrap();
        let y = g.add_vertex("y", ()).unwrap();
        let first = g.add_edge(x, y, "first").unwrap();
        g.add_edge(x, y, "second").unwrap();
        g.remove_edge(first).unwrap();
        assert_eq!(g.edge_count(), 2);
        let back = g.edge(y, x).unwrap();
        assert_eq!(g.edge_payload(back), Some(&"second"));
    }

    #[test]
    fn stale_handle_is_not_found() {
        let (mut g, [a, b, ..]) = super::helpers::square();
        let ab = g.edge(a, b).unwrap();
        g.remove_edge(ab).unwrap();
        assert_eq!(g.remove_edge(ab), Err(GraphError::EdgeNotFound(ab)));
        assert_eq!(g.edge_payload(ab), None);
        assert_eq!(g.edge_endpoints(EdgeId(999)), None);
    }

    #[test]
    fn set_edge_payload_returns_old() {
        let mut g: Graph<(), u32> = Graph::new(2, true, "g");
        let a = g.add_vertex("a", ()).unwrap();
        let b = g.add_vertex("b", ()).unwrap();
        let e = g.add_edge(a, b, 1).unwrap();
        assert_eq!(g.set_edge_payload(e, 2), Ok(1));
        assert_eq!(g.edge_payload(e), Some(&2));
    }

    #[test]
    fn edges_enumerates_all_records() {
        let (g, _) = super::helpers::square();
        assert_eq!(g.edges().count(), g.edge_count());
    }

    #[test]
    fn undirected_self_loop_removal() {
        let mut g: Graph<Point, ()> = Graph::new(1, false, "loop");
        let a = g.add_vertex("a", Point::default()).unwrap();
        let e = g.add_edge(a, a, ()).unwrap();
        assert_eq!(g.adjacent_edges(a).unwrap().len(), 2);
        g.remove_edge(e).unwrap();
        assert!(g.adjacent_edges(a).unwrap().is_empty());
    }
}

// ── Sub-graphs ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod subgraphs {
    use crate::GraphError;

    #[test]
    fn induced_collects_internal_edges() {
        let (mut g, [a, b, c, _]) = super::helpers::square();
        g.create_subgraph("abc", &["a", "b", "c"], true).unwrap();
        // a-b and b-c in both directions; c-d and d-a leave the view.
        let edges = g.subgraph_edges("abc").unwrap();
        assert_eq!(edges.len(), 4);
        assert!(edges.contains(&g.edge(a, b).unwrap()));
        assert!(edges.contains(&g.edge(c, b).unwrap()));
    }

    #[test]
    fn plain_view_starts_without_edges() {
        let (mut g, _) = super::helpers::square();
        g.create_subgraph("plain", &["a", "b"], false).unwrap();
        assert!(g.subgraph_edges("plain").unwrap().is_empty());
        assert_eq!(g.subgraph_vertices("plain").unwrap().len(), 2);
    }

    #[test]
    fn include_and_exclude_leave_parent_alone() {
        let (mut g, [a, b, ..]) = super::helpers::square();
        g.create_subgraph("v", &["a", "b"], false).unwrap();
        let ab = g.edge(a, b).unwrap();

        g.include_edge("v", ab).unwrap();
        g.include_edge("v", ab).unwrap();
        assert_eq!(g.subgraph_edges("v").unwrap(), vec![ab]);
        assert!(g.subgraph_contains_edge("v", ab).unwrap());

        assert_eq!(g.exclude_edge("v", ab), Ok(true));
        assert_eq!(g.exclude_edge("v", ab), Ok(false));
        assert!(g.is_adjacent(a, b));
        assert_eq!(g.edge_count(), 8);
    }

    #[test]
    fn adjacency_restricted_to_view() {
        let (mut g, [a, b, c, _]) = super::helpers::square();
        g.create_subgraph("v", &["a", "b"], true).unwrap();
        assert_eq!(g.adjacent_edges_in_subgraph("v", a).unwrap(), vec![g.edge(a, b).unwrap()]);
        // c is not a member: nothing, even though it has edges.
        assert!(g.adjacent_edges_in_subgraph("v", c).unwrap().is_empty());
    }

    #[test]
    fn removing_parent_edge_purges_views() {
        let (mut g, [a, b, ..]) = super::helpers::square();
        g.create_subgraph("v", &["a", "b"], true).unwrap();
        let ab = g.edge(a, b).unwrap();
        g.remove_edge(ab).unwrap();
        assert!(g.subgraph_edges("v").unwrap().is_empty());
    }

    #[test]
    fn errors_for_unknown_names() {
        let (mut g, _) = super::helpers::square();
        assert_eq!(
            g.create_subgraph("bad", &["a", "zz"], true),
            Err(GraphError::UnknownVertexName("zz".into()))
        );
        assert!(g.subgraph("bad").is_none());
        assert_eq!(
            g.subgraph_edges("nope"),
            Err(GraphError::SubgraphNotFound("nope".into()))
        );
        g.create_subgraph("v", &["a"], false).unwrap();
        assert_eq!(
            g.create_subgraph("v", &["a"], false),
            Err(GraphError::DuplicateSubgraph("v".into()))
        );
    }

    #[test]
    fn materialize_copies_view() {
        let (mut g, _) = super::helpers::square();
        g.create_subgraph("abc", &["c", "b", "a"], true).unwrap();
        let m = g.materialize("abc").unwrap();

        assert_eq!(m.name(), "abc");
        assert_eq!(m.vertex_count(), 3);
        assert!(!m.is_directed());
        // Fresh ids in listed order.
        assert_eq!(m.vertex_name(cg_core::VertexId(0)), Some("c"));

        let ma = m.vertex_by_name("a").unwrap();
        let mb = m.vertex_by_name("b").unwrap();
        let mc = m.vertex_by_name("c").unwrap();
        assert!(m.is_adjacent(ma, mb) && m.is_adjacent(mb, ma));
        assert!(m.is_adjacent(mb, mc) && m.is_adjacent(mc, mb));
        assert!(!m.is_adjacent(ma, mc));
        // Two roads, each copied once.
        assert_eq!(m.edge_count(), 4);
        assert_eq!(m.vertex_payload(ma), g.vertex_payload(g.vertex_by_name("a").unwrap()));
    }

    #[test]
    fn materialize_directed_keeps_direction() {
        let mut g: crate::Graph<(), u8> = crate::Graph::new(3, true, "d");
        let a = g.add_vertex("a", ()).unwrap();
        let b = g.add_vertex("b", ()).unwrap();
        g.add_edge(a, b, 7).unwrap();
        g.create_subgraph("ab", &["a", "b"], true).unwrap();
        let m = g.materialize("ab").unwrap();
        let (ma, mb) = (m.vertex_by_name("a").unwrap(), m.vertex_by_name("b").unwrap());
        assert!(m.is_adjacent(ma, mb));
        assert!(!m.is_adjacent(mb, ma));
        assert_eq!(m.edge_payload(m.edge(ma, mb).unwrap()), Some(&7));
    }
}
