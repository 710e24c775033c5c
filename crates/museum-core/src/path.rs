//! Visitor itineraries and the path-assignment seam.

use crate::{VisitorId, VisitorRng};

// ── VisitPath ─────────────────────────────────────────────────────────────────

/// The two fixed itineraries a visitor may follow.
///
/// Chosen before the visitor's first action and immutable thereafter.  A
/// closed two-case dispatch: the visitor run loop branches on this tag.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VisitPath {
    /// View Hall A, then walk out.
    HallAOnly,
    /// View Hall A, transit to Hall B, return through Hall A, walk out.
    HallAThenB,
}

impl VisitPath {
    /// Short lowercase name, used in output rows and log lines.
    pub fn as_str(self) -> &'static str {
        match self {
            VisitPath::HallAOnly  => "hall_a_only",
            VisitPath::HallAThenB => "hall_a_then_b",
        }
    }
}

// ── PathSource ────────────────────────────────────────────────────────────────

/// Assigns an itinerary to each visitor before its first action.
///
/// Implementations must be pure per ID: calling `path_for` twice with the
/// same ID returns the same path.  The runner resolves the source into a
/// concrete `Vec<VisitPath>` before spawning any visitor thread.
pub trait PathSource {
    fn path_for(&self, visitor: VisitorId) -> VisitPath;
}

/// Deterministic 50/50 path assignment — the "coin flip at spawn time" of
/// the classic formulation, made reproducible by seeding per visitor ID.
pub struct CoinFlipPaths {
    seed: u64,
}

impl CoinFlipPaths {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl PathSource for CoinFlipPaths {
    fn path_for(&self, visitor: VisitorId) -> VisitPath {
        if VisitorRng::new(self.seed, visitor).gen_bool(0.5) {
            VisitPath::HallAThenB
        } else {
            VisitPath::HallAOnly
        }
    }
}
