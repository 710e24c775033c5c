//! Top-level simulation configuration.

use std::time::Duration;

use crate::{MuseumError, MuseumResult};

/// Everything the core consumes: the two hall capacities, the visitor pool
/// size, the nominal dwell durations, and the master RNG seed.
///
/// Actual dwell times are sampled uniformly in `[0, nominal)` per dwell
/// point, so the nominals bound — but do not equal — time spent in a hall.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Hall A admission slots.  Note that Hall B's occupants also count
    /// against this gate (see `museum-hall` docs for the rationale).
    pub capacity_a: u32,

    /// Hall B admission slots.
    pub capacity_b: u32,

    /// Number of visitor threads to run.
    pub visitor_count: usize,

    /// Nominal viewing time in Hall A.
    pub viewing_a: Duration,

    /// Nominal viewing time in Hall B.
    pub viewing_b: Duration,

    /// Nominal time walking back out through Hall A — a distinct, shorter
    /// duration class than viewing.
    pub walkthrough: Duration,

    /// Master RNG seed.  The same seed always produces the same path
    /// assignments and dwell samples.
    pub seed: u64,
}

impl Default for SimConfig {
    /// Mirrors the classic formulation: two single-slot halls, 20 visitors,
    /// 3 s nominal viewing, 2 s nominal walkthrough.
    fn default() -> Self {
        Self {
            capacity_a:    1,
            capacity_b:    1,
            visitor_count: 20,
            viewing_a:     Duration::from_secs(3),
            viewing_b:     Duration::from_secs(3),
            walkthrough:   Duration::from_secs(2),
            seed:          42,
        }
    }
}

impl SimConfig {
    /// Check the structural constraints: positive capacities and visitor
    /// count, non-zero dwell nominals.
    pub fn validate(&self) -> MuseumResult<()> {
        if self.capacity_a == 0 {
            return Err(MuseumError::Config("capacity_a must be positive".into()));
        }
        if self.capacity_b == 0 {
            return Err(MuseumError::Config("capacity_b must be positive".into()));
        }
        if self.visitor_count == 0 {
            return Err(MuseumError::Config("visitor_count must be positive".into()));
        }
        if self.viewing_a.is_zero() || self.viewing_b.is_zero() || self.walkthrough.is_zero() {
            return Err(MuseumError::Config("dwell durations must be positive".into()));
        }
        Ok(())
    }
}
