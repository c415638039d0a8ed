//! `Street`, the payload carried by every edge of the city graph.

/// A directed street segment.
///
/// Undirected graphs store one `Street` per road and share it between both
/// edge records, so closing a street closes both directions.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Street {
    pub name: String,
    /// Mean travel velocity, in length units per time unit.
    pub mean_velocity: f64,
    pub length: f64,
    enabled: bool,
}

impl Street {
    /// New street, open to traffic.
    pub fn new(name: impl Into<String>, mean_velocity: f64, length: f64) -> Self {
        Self { name: name.into(), mean_velocity, length, enabled: true }
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    #[inline]
    pub fn enable(&mut self) {
        self.enabled = true;
    }

    #[inline]
    pub fn disable(&mut self) {
        self.enabled = false;
    }

    #[inline]
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// `length / mean_velocity`, or `None` when the velocity cannot move
    /// anything (zero, negative, NaN).
    pub fn travel_time(&self) -> Option<f64> {
        (self.mean_velocity > 0.0).then(|| self.length / self.mean_velocity)
    }
}
