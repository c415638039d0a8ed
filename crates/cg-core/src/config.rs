//! Runtime configuration.
//!
//! Typically loaded from a JSON file by the application crate (with the
//! `serde` feature) and handed to `cg-spatial` / `cg-query` constructors.

use crate::{CoreError, CoreResult};

// ── TreapConfig ───────────────────────────────────────────────────────────────

/// Tuning for the popularity-promoting spatial index.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TreapConfig {
    /// Query hits a node must accumulate before it is promoted.  Must be ≥ 1.
    pub hit_threshold: u32,

    /// Multiplicative priority boost applied on promotion.  Must be ≥ 0.
    pub promotion_rate: f64,

    /// Per-axis tolerance used by exact-point lookup.
    pub tolerance: f64,

    /// Upper bound for node priorities (random draws and promotions).
    pub max_priority: u32,

    /// Seed for the priority RNG.
    pub seed: u64,
}

impl Default for TreapConfig {
    fn default() -> Self {
        Self {
            hit_threshold:  3,
            promotion_rate: 1.1,
            tolerance:      1e-4,
            max_priority:   10_000,
            seed:           0x5eed_c17e,
        }
    }
}

impl TreapConfig {
    pub fn validate(&self) -> CoreResult<()> {
        if self.hit_threshold < 1 {
            return Err(CoreError::Config("hit_threshold cannot be lower than 1".into()));
        }
        if self.promotion_rate.is_nan() || self.promotion_rate < 0.0 {
            return Err(CoreError::Config("promotion_rate cannot be lower than 0".into()));
        }
        if self.tolerance.is_nan() || self.tolerance < 0.0 {
            return Err(CoreError::Config("tolerance cannot be negative".into()));
        }
        Ok(())
    }
}

// ── QueryConfig ───────────────────────────────────────────────────────────────

/// Parameters of the address/query layer.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct QueryConfig {
    /// Half-side of the square searched around an address for a vertex.
    pub address_radius: f64,

    /// Half-side of the square searched around path endpoints by `join`.
    pub join_radius: f64,

    /// Suffix appended to a path name for its travel-time variant.
    pub fast_suffix: String,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            address_radius: 50.0,
            join_radius:    1.0,
            fast_suffix:    "_fast".to_owned(),
        }
    }
}

impl QueryConfig {
    pub fn validate(&self) -> CoreResult<()> {
        let radii = [self.address_radius, self.join_radius];
        if radii.iter().any(|r| r.is_nan() || *r < 0.0) {
            return Err(CoreError::Config("search radii must be non-negative".into()));
        }
        if self.fast_suffix.is_empty() {
            return Err(CoreError::Config("fast_suffix cannot be empty".into()));
        }
        Ok(())
    }
}

// ── CityConfig ────────────────────────────────────────────────────────────────

/// Top-level configuration bundle.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CityConfig {
    pub treap: TreapConfig,
    pub query: QueryConfig,
}

impl CityConfig {
    pub fn validate(&self) -> CoreResult<()> {
        self.treap.validate()?;
        self.query.validate()
    }
}
