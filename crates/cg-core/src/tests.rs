//! Unit tests for cg-core primitives.

#[cfg(test)]
mod ids {
    use crate::{EdgeId, EntityId, VertexId};

    #[test]
    fn index_roundtrip() {
        let id = VertexId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(VertexId::from_index(42), Some(id));
        assert_eq!(VertexId::from_index(u32::MAX as usize), None);
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(VertexId::INVALID.0, u32::MAX);
        assert_eq!(EdgeId::INVALID.0, u32::MAX);
        assert_eq!(EntityId::default(), EntityId::INVALID);
        assert!(!EdgeId::default().is_valid());
    }

    #[test]
    fn vertex_converts_to_entity() {
        assert_eq!(EntityId::from(VertexId(7)), EntityId(7));
    }

    #[test]
    fn display() {
        assert_eq!(VertexId(7).to_string(), "v7");
        assert_eq!(EdgeId(3).to_string(), "e3");
        assert_eq!(EdgeId::INVALID.to_string(), "e?");
    }
}

#[cfg(test)]
mod geo {
    use crate::{BoundingBox, CoreError, Point};

    #[test]
    fn distance_is_euclidean() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(b.distance(a), 5.0);
    }

    #[test]
    fn corners_are_normalised() {
        let bb = BoundingBox::from_corners(6.0, 6.0, -1.0, -1.0);
        assert_eq!(bb, BoundingBox { x: -1.0, y: -1.0, w: 7.0, h: 7.0 });
    }

    #[test]
    fn union_covers_both() {
        let a = BoundingBox::point(0.0, 0.0);
        let b = BoundingBox::new(5.0, -2.0, 1.0, 1.0).unwrap();
        let u = a.union(&b);
        assert_eq!(u, BoundingBox { x: 0.0, y: -2.0, w: 6.0, h: 2.0 });
        assert!(u.contains_box(&a));
        assert!(u.contains_box(&b));
    }

    #[test]
    fn intersection_is_closed() {
        let a = BoundingBox::new(0.0, 0.0, 5.0, 5.0).unwrap();
        let touching = BoundingBox::new(5.0, 5.0, 1.0, 1.0).unwrap();
        let apart = BoundingBox::new(5.1, 0.0, 1.0, 1.0).unwrap();
        assert!(a.intersects(&touching));
        assert!(!a.intersects(&apart));
        assert!(a.intersects(&BoundingBox::point(2.0, 2.0)));
    }

    #[test]
    fn border_points_are_contained() {
        let a = BoundingBox::new(0.0, 0.0, 5.0, 5.0).unwrap();
        assert!(a.contains_point(5.0, 0.0));
        assert!(!a.contains_point(5.0, -0.01));
    }

    #[test]
    fn invalid_boxes_rejected() {
        assert!(matches!(
            BoundingBox::new(0.0, 0.0, -1.0, 1.0),
            Err(CoreError::InvalidGeometry(_))
        ));
        assert!(BoundingBox::new(f64::NAN, 0.0, 1.0, 1.0).is_err());
        assert!(BoundingBox::new(0.0, f64::INFINITY, 1.0, 1.0).is_err());
    }

    #[test]
    fn around_is_square() {
        let bb = BoundingBox::around(Point::new(10.0, 10.0), 2.0);
        assert_eq!(bb, BoundingBox { x: 8.0, y: 8.0, w: 4.0, h: 4.0 });
    }
}

#[cfg(test)]
mod street {
    use crate::Street;

    #[test]
    fn starts_enabled() {
        let s = Street::new("Rua A", 10.0, 100.0);
        assert!(s.is_enabled());
        assert_eq!(s.travel_time(), Some(10.0));
    }

    #[test]
    fn toggles() {
        let mut s = Street::new("Rua A", 10.0, 100.0);
        s.disable();
        assert!(!s.is_enabled());
        s.enable();
        assert!(s.is_enabled());
        s.set_enabled(false);
        assert!(!s.is_enabled());
    }

    #[test]
    fn zero_velocity_has_no_travel_time() {
        assert_eq!(Street::new("dead end", 0.0, 5.0).travel_time(), None);
    }
}

#[cfg(test)]
mod rng {
    use crate::PriorityRng;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = PriorityRng::new(99);
        let mut b = PriorityRng::new(99);
        for _ in 0..50 {
            assert_eq!(a.priority(1000), b.priority(1000));
        }
    }

    #[test]
    fn priority_within_bounds() {
        let mut r = PriorityRng::new(1);
        for _ in 0..500 {
            assert!(r.priority(10) <= 10);
        }
        assert_eq!(r.priority(0), 0);
    }
}

#[cfg(test)]
mod config {
    use crate::{CityConfig, QueryConfig, TreapConfig};

    #[test]
    fn defaults_are_valid() {
        assert!(CityConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_hit_threshold_rejected() {
        let cfg = TreapConfig { hit_threshold: 0, ..TreapConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn negative_rate_rejected() {
        let cfg = TreapConfig { promotion_rate: -0.5, ..TreapConfig::default() };
        assert!(cfg.validate().is_err());
        let cfg = TreapConfig { promotion_rate: f64::NAN, ..TreapConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn empty_suffix_rejected() {
        let cfg = QueryConfig { fast_suffix: String::new(), ..QueryConfig::default() };
        assert!(cfg.validate().is_err());
    }
}
