//! Deterministic per-visitor RNG wrapper.
//!
//! # Determinism strategy
//!
//! Each visitor gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (visitor_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive visitor IDs uniformly across the seed space.
//! This means:
//!
//! - Visitors never share RNG state (no contention, no ordering dependency
//!   between threads).
//! - The same global seed always reproduces the same path assignments and
//!   dwell durations, regardless of thread interleaving.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::VisitorId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Per-visitor deterministic RNG.
///
/// Create one per visitor at pool construction; each visitor thread owns its
/// RNG exclusively for the run's duration.
pub struct VisitorRng(SmallRng);

impl VisitorRng {
    /// Seed deterministically from the run's global seed and a visitor ID.
    pub fn new(global_seed: u64, visitor: VisitorId) -> Self {
        let seed = global_seed ^ (visitor.0 as u64).wrapping_mul(MIXING_CONSTANT);
        VisitorRng(SmallRng::seed_from_u64(seed))
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}
