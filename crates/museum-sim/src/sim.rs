//! The `Sim` struct and its run loop.

use std::thread;
use std::time::{Duration, Instant};

use museum_core::{EventSink, SimConfig, VisitPath, VisitorId};
use museum_hall::SharedSpace;
use museum_visitor::{UniformDwell, Visitor};

// ── RunSummary ────────────────────────────────────────────────────────────────

/// What a completed run looked like.
#[derive(Clone, Debug)]
pub struct RunSummary {
    /// Visitors that completed their itinerary (always the full pool — a run
    /// only returns once every thread has joined).
    pub visitors: usize,
    /// How many followed the Hall-A-only itinerary.
    pub hall_a_only: usize,
    /// How many followed the Hall-A-then-B itinerary.
    pub hall_a_then_b: usize,
    /// Wall-clock duration of the run.
    pub elapsed: Duration,
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// One configured simulation run.
///
/// Holds the validated configuration, the resolved per-visitor itineraries,
/// and the event sink.  Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<S: EventSink> {
    /// Validated configuration.
    pub config: SimConfig,

    /// Itinerary per visitor, indexed by `VisitorId`.  Resolved before any
    /// visitor starts and immutable for the run.
    pub paths: Vec<VisitPath>,

    pub(crate) sink: S,
}

impl<S: EventSink> Sim<S> {
    /// Run every visitor to completion and summarize.
    ///
    /// Constructs the shared space, spawns one thread per visitor, and
    /// joins them all via [`thread::scope`].  Per-visitor dwell sampling is
    /// seeded deterministically from `config.seed`, so the same
    /// configuration replays the same dwell sequence per visitor (thread
    /// interleaving — and therefore the event trace — may still vary).
    ///
    /// Blocks until the museum is empty; there is no timeout and no error
    /// path.  A non-empty museum after all threads join would mean corrupted
    /// accounting and aborts.
    pub fn run(&self) -> RunSummary {
        let started = Instant::now();
        let space = SharedSpace::new(&self.config, &self.sink);

        thread::scope(|scope| {
            for (i, &path) in self.paths.iter().enumerate() {
                let id = VisitorId(i as u32);
                let dwell = UniformDwell::new(self.config.seed, id);
                let visitor = Visitor::new(id, path, dwell, &self.config);
                let space = &space;
                scope.spawn(move || visitor.run(space));
            }
        });

        let occupancy = space.occupancy();
        assert_eq!(
            occupancy,
            (0, 0),
            "museum not empty after all visitors finished"
        );

        let hall_a_then_b = self
            .paths
            .iter()
            .filter(|&&p| p == VisitPath::HallAThenB)
            .count();
        RunSummary {
            visitors:      self.paths.len(),
            hall_a_only:   self.paths.len() - hall_a_then_b,
            hall_a_then_b,
            elapsed:       started.elapsed(),
        }
    }

    /// Borrow the sink (e.g. to read a [`MemorySink`][museum_core::MemorySink]
    /// trace after a run).
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Unwrap the sink (e.g. to flush and close an output backend).
    pub fn into_sink(self) -> S {
        self.sink
    }
}
