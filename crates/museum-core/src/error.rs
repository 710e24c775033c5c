//! Framework error type.
//!
//! The admission core itself has no recoverable errors — capacity is
//! enforced by blocking, and counter-underflow contract violations abort via
//! `assert!`.  What remains is configuration validation here, plus per-crate
//! enums in `museum-sim` and `museum-output` that wrap or mirror this one.

use thiserror::Error;

/// The top-level error type for `museum-core`.
#[derive(Debug, Error)]
pub enum MuseumError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `museum-*` crates.
pub type MuseumResult<T> = Result<T, MuseumError>;
