//! Dwell-time sampling.
//!
//! A dwell is an unsynchronized sleep representing time spent viewing a hall
//! or walking out.  Given a nominal duration, a source returns a sampled
//! delay in `[0, nominal)` — the nominal bounds the dwell, it does not equal
//! it.

use std::time::Duration;

use museum_core::{VisitorId, VisitorRng};

/// Samples an actual dwell delay from a nominal duration.
///
/// Owned by exactly one visitor, so sampling may mutate internal state
/// without synchronization.
pub trait DwellSource: Send {
    /// A delay in `[0, nominal)`.  Must return `Duration::ZERO` for a zero
    /// nominal.
    fn sample(&mut self, nominal: Duration) -> Duration;
}

/// Uniform sampling over `[0, nominal)` from a per-visitor deterministic
/// RNG: the same global seed reproduces every visitor's dwell sequence
/// regardless of thread interleaving.
pub struct UniformDwell {
    rng: VisitorRng,
}

impl UniformDwell {
    pub fn new(global_seed: u64, visitor: VisitorId) -> Self {
        Self {
            rng: VisitorRng::new(global_seed, visitor),
        }
    }
}

impl DwellSource for UniformDwell {
    fn sample(&mut self, nominal: Duration) -> Duration {
        let bound = nominal.as_micros() as u64;
        if bound == 0 {
            return Duration::ZERO;
        }
        Duration::from_micros(self.rng.gen_range(0..bound))
    }
}

/// Zero-delay source for tests: itineraries run at full speed while keeping
/// every synchronization point intact.
pub struct NoDwell;

impl DwellSource for NoDwell {
    fn sample(&mut self, _nominal: Duration) -> Duration {
        Duration::ZERO
    }
}
