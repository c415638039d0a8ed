//! Edge cost metrics.

use cg_core::Street;

/// Which quantity the search minimises.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CostMode {
    /// Sum of street lengths.
    ByLength,
    /// Sum of `length / mean_velocity`.
    ByTravelTime,
}

impl CostMode {
    /// Cost of crossing `edge`, or `None` if the edge cannot be used: it is
    /// disabled, or (for travel time) its velocity is not positive.
    #[inline]
    pub fn edge_cost<E: Traversable>(self, edge: &E) -> Option<f64> {
        if !edge.is_enabled() {
            return None;
        }
        match self {
            CostMode::ByLength => Some(edge.length()),
            CostMode::ByTravelTime => {
                let v = edge.mean_velocity();
                (v > 0.0).then(|| edge.length() / v)
            }
        }
    }
}

/// Edge payloads the router can cost.
pub trait Traversable {
    fn length(&self) -> f64;

    fn mean_velocity(&self) -> f64;

    /// Disabled edges are invisible to the search.
    fn is_enabled(&self) -> bool {
        true
    }
}

impl Traversable for Street {
    #[inline]
    fn length(&self) -> f64 {
        self.length
    }

    #[inline]
    fn mean_velocity(&self) -> f64 {
        self.mean_velocity
    }

    #[inline]
    fn is_enabled(&self) -> bool {
        Street::is_enabled(self)
    }
}
