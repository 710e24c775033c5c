//! `museum-visitor` — the concurrent unit of execution.
//!
//! A [`Visitor`] runs on its own OS thread and is nothing but a fixed
//! sequence of [`SharedSpace`][museum_hall::SharedSpace] calls interleaved
//! with unsynchronized dwell sleeps.  All coordination between visitors
//! happens inside the shared space; a visitor holds no lock while dwelling.
//!
//! Dwell sampling sits behind the [`DwellSource`] seam so tests can run
//! itineraries at full speed with [`NoDwell`].

pub mod dwell;
pub mod visitor;

#[cfg(test)]
mod tests;

pub use dwell::{DwellSource, NoDwell, UniformDwell};
pub use visitor::Visitor;
