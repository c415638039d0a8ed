//! Seeded RNG for spatial-index priorities.
//!
//! Treap shape depends on the priorities drawn at insertion, so a fixed seed
//! reproduces the same tree (and the same query visit counts) run to run.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Deterministic priority source.
///
/// Used only in single-threaded contexts; the index is never shared across
/// threads.
pub struct PriorityRng(SmallRng);

impl PriorityRng {
    pub fn new(seed: u64) -> Self {
        PriorityRng(SmallRng::seed_from_u64(seed))
    }

    /// Uniform priority in `[0, max]` (inclusive).
    #[inline]
    pub fn priority(&mut self, max: u32) -> u32 {
        self.0.gen_range(0..=max)
    }
}
