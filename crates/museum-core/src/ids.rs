//! Strongly typed visitor identifier.
//!
//! `VisitorId` is `Copy + Ord + Hash` so it can be used as a map key or
//! sorted without ceremony.  The inner integer is `pub`: IDs are assigned
//! densely from 0 by the runner, seed the per-visitor RNG, and appear
//! directly in event rows and log lines.

use std::fmt;

/// Index of a visitor in the run's visitor pool.
///
/// Assigned densely from 0 at pool construction and never reused within a
/// run.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisitorId(pub u32);

impl VisitorId {
    /// Sentinel meaning "no valid ID" — equivalent to `u32::MAX`.
    pub const INVALID: VisitorId = VisitorId(u32::MAX);

    /// Cast to `usize`.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl Default for VisitorId {
    /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
    #[inline(always)]
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for VisitorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VisitorId({})", self.0)
    }
}

impl From<VisitorId> for usize {
    #[inline(always)]
    fn from(id: VisitorId) -> usize {
        id.0 as usize
    }
}

impl TryFrom<usize> for VisitorId {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<VisitorId, Self::Error> {
        u32::try_from(n).map(VisitorId)
    }
}
