//! The visitor run loop.

use std::thread;
use std::time::Duration;

use museum_core::{EventSink, SimConfig, VisitPath, VisitorId};
use museum_hall::SharedSpace;

use crate::DwellSource;

/// One visitor: an ID, an immutable itinerary, and a dwell sampler.
///
/// A visitor's transient progress is implicit in its point of execution —
/// there is no materialized state record.  [`run`][Visitor::run] consumes
/// the visitor and returns only when the itinerary is complete; it can block
/// indefinitely inside an admission operation but cannot fail.
pub struct Visitor<D: DwellSource> {
    id:          VisitorId,
    path:        VisitPath,
    dwell:       D,
    viewing_a:   Duration,
    viewing_b:   Duration,
    walkthrough: Duration,
}

impl<D: DwellSource> Visitor<D> {
    /// Build a visitor with the nominal dwell durations from `config`.
    pub fn new(id: VisitorId, path: VisitPath, dwell: D, config: &SimConfig) -> Self {
        Self {
            id,
            path,
            dwell,
            viewing_a:   config.viewing_a,
            viewing_b:   config.viewing_b,
            walkthrough: config.walkthrough,
        }
    }

    pub fn id(&self) -> VisitorId {
        self.id
    }

    pub fn path(&self) -> VisitPath {
        self.path
    }

    /// Execute the full itinerary against `space`.
    ///
    /// `HallAOnly`:   enter A → view A → leave A → exit.
    /// `HallAThenB`:  enter A → view A → transit to B → view B →
    ///                return to A → walk out → leave A → exit.
    pub fn run<S: EventSink>(mut self, space: &SharedSpace<S>) {
        space.enter_a(self.id);
        self.dwell_for(self.viewing_a);

        if self.path == VisitPath::HallAThenB {
            space.move_to_b(self.id);
            self.dwell_for(self.viewing_b);

            space.return_to_a(self.id);
            self.dwell_for(self.walkthrough);
        }

        space.leave_a(self.id);
        space.exit_museum(self.id);
    }

    /// Sleep for a sampled fraction of `nominal`.  No lock is held here.
    fn dwell_for(&mut self, nominal: Duration) {
        let delay = self.dwell.sample(nominal);
        if !delay.is_zero() {
            thread::sleep(delay);
        }
    }
}
