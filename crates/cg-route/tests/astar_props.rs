use cg_core::{Point, Street, VertexId};
use cg_graph::Graph;
use cg_route::{CostMode, RouteError, find_path, reconstruct_path};
use proptest::prelude::*;

/// `(from, to, stretch, velocity, enabled)`; length is the straight-line
/// distance times `stretch ≥ 1`, so the heuristic stays consistent.
type EdgeSpec = (usize, usize, f64, f64, bool);

fn city() -> impl Strategy<Value = (Vec<(f64, f64)>, Vec<EdgeSpec>)> {
    (2usize..12).prop_flat_map(|n| {
        (
            proptest::collection::vec((0.0f64..100.0, 0.0f64..100.0), n),
            proptest::collection::vec((0..n, 0..n, 1.0f64..3.0, 0.1f64..1.0, prop::bool::weighted(0.85)), 0..40),
        )
    })
}

fn build(points: &[(f64, f64)], edges: &[EdgeSpec]) -> Graph<Point, Street> {
    let mut g = Graph::new(points.len(), true, "prop");
    for (i, &(x, y)) in points.iter().enumerate() {
        g.add_vertex(format!("v{i}"), Point::new(x, y)).expect("capacity");
    }
    for (k, &(from, to, stretch, velocity, enabled)) in edges.iter().enumerate() {
        let (a, b) = (Point::new(points[from].0, points[from].1), Point::new(points[to].0, points[to].1));
        let mut street = Street::new(format!("e{k}"), velocity, a.distance(b) * stretch);
        street.set_enabled(enabled);
        g.add_edge(VertexId(from as u32), VertexId(to as u32), street).expect("endpoints exist");
    }
    g
}

/// Brute-force single-source costs over enabled edges.
fn bellman_ford(g: &Graph<Point, Street>, start: VertexId, mode: CostMode) -> Vec<Option<f64>> {
    let mut dist = vec![None; g.vertex_count()];
    dist[start.index()] = Some(0.0);
    for _ in 0..g.vertex_count() {
        for e in g.edges() {
            let (from, to) = g.edge_endpoints(e).expect("live edge");
            let Some(step) = mode.edge_cost(g.edge_payload(e).expect("payload")) else { continue };
            if let Some(d) = dist[from.index()] {
                let candidate: f64 = d + step;
                if dist[to.index()].is_none_or(|cur| candidate < cur) {
                    dist[to.index()] = Some(candidate);
                }
            }
        }
    }
    dist
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-6 * a.abs().max(b.abs()).max(1.0)
}

proptest! {
    #[test]
    fn cost_matches_bellman_ford((points, edges) in city(), time in any::<bool>()) {
        let g = build(&points, &edges);
        let mode = if time { CostMode::ByTravelTime } else { CostMode::ByLength };
        let start = VertexId(0);
        let oracle = bellman_ford(&g, start, mode);

        for goal in g.vertices() {
            match (find_path(&g, start, goal, mode), oracle[goal.index()]) {
                (Ok(search), Some(best)) => {
                    let got = search.cost(goal).expect("goal reached");
                    prop_assert!(close(got, best), "{goal}: A* {got} vs oracle {best}");

                    let path = reconstruct_path(&search.came_from, start, goal, &g);
                    prop_assert!(!path.is_empty());
                    prop_assert_eq!(path.first().copied(), g.vertex_payload(start).copied());
                    prop_assert_eq!(path.last().copied(), g.vertex_payload(goal).copied());
                }
                (Err(RouteError::NoPath { .. }), None) => {}
                (got, best) => prop_assert!(false, "{goal}: A* {got:?} vs oracle {best:?}"),
            }
        }
    }

    #[test]
    fn disabling_an_edge_never_helps((points, edges) in city(), pick in any::<prop::sample::Index>()) {
        prop_assume!(!edges.is_empty());
        let mut g = build(&points, &edges);
        let start = VertexId(0);
        let goal = VertexId(points.len() as u32 - 1);

        let before = find_path(&g, start, goal, CostMode::ByLength).ok().and_then(|s| s.cost(goal));

        let victim = g.edges().nth(pick.index(g.edge_count())).expect("edge exists");
        g.edge_payload_mut(victim).expect("payload").disable();
        let after = find_path(&g, start, goal, CostMode::ByLength).ok().and_then(|s| s.cost(goal));

        match (before, after) {
            (Some(b), Some(a)) => prop_assert!(a >= b - 1e-6 * b.max(1.0), "closing a street made the trip cheaper"),
            (None, Some(_)) => prop_assert!(false, "closing a street created a path"),
            _ => {}
        }
    }
}
