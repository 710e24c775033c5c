//! `museum-output` — persistent event traces for the museum simulation.
//!
//! One backend: [`CsvTraceSink`], an [`EventSink`][museum_core::EventSink]
//! that appends every admission event to `events.csv` in a configured
//! directory.
//!
//! `EventSink::record` is infallible by signature — a failing trace must
//! never affect admission correctness — so write errors are stashed
//! internally (first error wins, later rows are dropped) and retrieved with
//! [`CsvTraceSink::take_error`] after the run.
//!
//! # Usage
//!
//! ```rust,ignore
//! use museum_output::CsvTraceSink;
//!
//! let sink = CsvTraceSink::new(Path::new("./output"))?;
//! let sim = SimBuilder::new(config).sink(sink).build()?;
//! sim.run();
//! let sink = sim.into_sink();
//! sink.finish()?;
//! if let Some(e) = sink.take_error() {
//!     eprintln!("trace incomplete: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod row;


pub use crate::csv::CsvTraceSink;
pub use error::{OutputError, OutputResult};
pub use row::EventRow;
