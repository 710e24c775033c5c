//! `museum-core` — foundational types for the `museum` admission simulation.
//!
//! This crate is a dependency of every other `museum-*` crate.  It has no
//! `museum-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                              |
//! |------------|-------------------------------------------------------|
//! | [`ids`]    | `VisitorId`                                           |
//! | [`path`]   | `VisitPath`, `PathSource`, `CoinFlipPaths`            |
//! | [`event`]  | `EventKind`, `EventRecord`, `EventSink` + stock sinks |
//! | [`rng`]    | `VisitorRng` (per-visitor deterministic RNG)          |
//! | [`config`] | `SimConfig`                                           |
//! | [`error`]  | `MuseumError`, `MuseumResult`                         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod config;
pub mod error;
pub mod event;
pub mod ids;
pub mod path;
pub mod rng;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::SimConfig;
pub use error::{MuseumError, MuseumResult};
pub use event::{EventKind, EventRecord, EventSink, MemorySink, NoopSink};
pub use ids::VisitorId;
pub use path::{CoinFlipPaths, PathSource, VisitPath};
pub use rng::VisitorRng;
