//! Structured admission events and the sink seam they are delivered through.
//!
//! Events are emitted by the shared space while it holds its lock, so every
//! record carries a consistent snapshot of both occupancy counters at the
//! instant of the transition.  Sinks are shared by reference across all
//! visitor threads and must therefore be `Send + Sync` with a `&self`
//! recording method.
//!
//! Sink failures must never affect admission correctness: `record` is
//! infallible by signature, and fallible backends (e.g. the CSV writer in
//! `museum-output`) stash their first error internally for retrieval after
//! the run.

use std::fmt;
use std::sync::Mutex;
use std::time::Duration;

use crate::VisitorId;

// ── EventKind ─────────────────────────────────────────────────────────────────

/// The five observable state transitions of a visitor.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventKind {
    EnteredA,
    LeftA,
    EnteredB,
    LeftB,
    ExitedMuseum,
}

impl EventKind {
    /// Stable lowercase name, used as the CSV column value.
    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::EnteredA     => "entered_a",
            EventKind::LeftA        => "left_a",
            EventKind::EnteredB     => "entered_b",
            EventKind::LeftB        => "left_b",
            EventKind::ExitedMuseum => "exited_museum",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── EventRecord ───────────────────────────────────────────────────────────────

/// One admission event, with the occupancy counters as they stood
/// immediately after the transition (still under the space's lock).
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EventRecord {
    pub visitor: VisitorId,
    pub kind:    EventKind,
    /// Hall A occupancy after the transition.
    pub hall_a:  u32,
    /// Hall B occupancy after the transition.
    pub hall_b:  u32,
    /// Wall-clock time since the shared space was constructed.
    pub elapsed: Duration,
}

// ── EventSink ─────────────────────────────────────────────────────────────────

/// Receives admission events from the shared space.
///
/// Called while the space's lock is held, so implementations should be quick;
/// a slow sink throttles admission throughput but cannot break correctness.
pub trait EventSink: Send + Sync {
    fn record(&self, event: &EventRecord);
}

/// Sinks are usually passed by reference into the shared space.
impl<S: EventSink + ?Sized> EventSink for &S {
    fn record(&self, event: &EventRecord) {
        (**self).record(event);
    }
}

/// An [`EventSink`] that discards everything.  Use when you need to run the
/// simulation but don't care about the trace.
pub struct NoopSink;

impl EventSink for NoopSink {
    fn record(&self, _event: &EventRecord) {}
}

/// An [`EventSink`] that buffers every record in memory, in emission order.
///
/// Emission order is a linearization: the space's lock is held across both
/// the counter mutation and the `record` call, so the buffer order matches
/// the order transitions actually took effect.
#[derive(Default)]
pub struct MemorySink {
    events: Mutex<Vec<EventRecord>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the full trace so far.
    pub fn snapshot(&self) -> Vec<EventRecord> {
        self.events.lock().expect("memory sink lock poisoned").clone()
    }

    /// Drain the buffer, returning the trace collected so far.
    pub fn take(&self) -> Vec<EventRecord> {
        std::mem::take(&mut *self.events.lock().expect("memory sink lock poisoned"))
    }
}

impl EventSink for MemorySink {
    fn record(&self, event: &EventRecord) {
        self.events.lock().expect("memory sink lock poisoned").push(*event);
    }
}
