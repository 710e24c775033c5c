//! `museum-sim` — orchestrates one full simulation run.
//!
//! The runner owns the configuration, the resolved path assignments, and the
//! event sink.  [`Sim::run`] constructs the shared space, spawns one OS
//! thread per visitor inside a [`std::thread::scope`], joins them all, and
//! returns a [`RunSummary`].
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use museum_core::{MemorySink, SimConfig};
//! use museum_sim::SimBuilder;
//!
//! let sim = SimBuilder::new(SimConfig::default())
//!     .sink(MemorySink::new())
//!     .build()?;
//! let summary = sim.run();
//! println!("{} visitors done in {:?}", summary.visitors, summary.elapsed);
//! ```

pub mod builder;
pub mod error;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use sim::{RunSummary, Sim};
