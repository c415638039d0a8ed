use std::collections::BTreeSet;

use cg_core::{EntityId, TreapConfig};
use cg_spatial::{EntityKind, SpatialTreap};
use proptest::prelude::*;
use rstar::primitives::GeomWithData;
use rstar::{AABB, RTree};

fn coords() -> impl Strategy<Value = Vec<(f64, f64)>> {
    proptest::collection::vec((-100.0f64..100.0, -100.0f64..100.0), 1..80)
}

fn build(points: &[(f64, f64)], config: TreapConfig) -> SpatialTreap<EntityId> {
    let mut t = SpatialTreap::new(config).expect("valid config");
    for (i, &(x, y)) in points.iter().enumerate() {
        t.insert(x, y, EntityKind::GraphPoint, EntityId(i as u32)).expect("finite point");
    }
    t
}

proptest! {
    #[test]
    fn invariants_hold_after_every_insert(points in coords(), seed in any::<u64>()) {
        let mut t = SpatialTreap::new(TreapConfig { seed, ..TreapConfig::default() }).expect("valid config");
        for (i, &(x, y)) in points.iter().enumerate() {
            t.insert(x, y, EntityKind::GraphPoint, EntityId(i as u32)).expect("finite point");
            prop_assert!(t.verify().is_ok(), "{:?}", t.verify());
        }
        prop_assert_eq!(t.len(), points.len());
    }

    #[test]
    fn region_matches_rtree_oracle(
        points in coords(),
        (x1, y1, x2, y2) in (-120.0f64..120.0, -120.0f64..120.0, -120.0f64..120.0, -120.0f64..120.0),
        hit_threshold in 1u32..4,
    ) {
        let config = TreapConfig { hit_threshold, promotion_rate: 1.5, ..TreapConfig::default() };
        let mut t = build(&points, config);

        let rtree = RTree::bulk_load(
            points
                .iter()
                .enumerate()
                .map(|(i, &(x, y))| GeomWithData::new([x, y], i as u32))
                .collect(),
        );
        let envelope = AABB::from_corners([x1.min(x2), y1.min(y2)], [x1.max(x2), y1.max(y2)]);
        let expected: BTreeSet<u32> = rtree.locate_in_envelope(&envelope).map(|p| p.data).collect();

        // Every node whose subtree box meets the query must be visited, and
        // nothing else: a subtree box always covers its descendants' boxes.
        let query = cg_core::BoundingBox::from_corners(x1, y1, x2, y2);
        let must_visit = t.iter().filter(|v| v.subtree_box.intersects(&query)).count();

        let hits = t.region(x1, y1, x2, y2);
        let got: BTreeSet<u32> = hits.iter().map(|h| h.id.0).collect();
        prop_assert_eq!(got, expected);
        prop_assert_eq!(hits.len(), hits.iter().map(|h| h.id).collect::<BTreeSet<_>>().len());
        prop_assert_eq!(t.stats().visited, must_visit);
        prop_assert!(t.verify().is_ok(), "{:?}", t.verify());
    }

    #[test]
    fn removal_drops_exactly_one(points in coords(), picks in proptest::collection::vec(any::<prop::sample::Index>(), 1..40)) {
        let mut t = build(&points, TreapConfig::default());
        let mut alive: BTreeSet<u32> = (0..points.len() as u32).collect();

        for pick in picks {
            let victims: Vec<u32> = alive.iter().copied().collect();
            if victims.is_empty() {
                break;
            }
            let id = victims[pick.index(victims.len())];
            let before = t.len();
            prop_assert_eq!(t.remove(EntityId(id)), Ok(EntityId(id)));
            alive.remove(&id);
            prop_assert_eq!(t.len(), before - 1);
            prop_assert_eq!(t.iter().count(), before - 1);
            prop_assert!(t.verify().is_ok(), "{:?}", t.verify());
        }
    }

    #[test]
    fn promotion_never_lowers_priority(
        points in coords(),
        promotions in proptest::collection::vec((any::<prop::sample::Index>(), 0.0f64..4.0), 1..30),
    ) {
        let config = TreapConfig { max_priority: 500, ..TreapConfig::default() };
        let mut t = build(&points, config);

        for (pick, rate) in promotions {
            let id = EntityId(pick.index(points.len()) as u32);
            let before = t.get(id).map(|v| v.priority).expect("indexed");
            let after = t.promote_by(id, rate).expect("indexed");
            prop_assert!(after >= before);
            prop_assert!(after <= 500);
            prop_assert!(t.verify().is_ok(), "{:?}", t.verify());
        }
    }
}
