//! The `SharedSpace` monitor.

use std::sync::{Condvar, Mutex, MutexGuard};
use std::time::Instant;

use museum_core::{EventKind, EventRecord, EventSink, SimConfig, VisitorId};

// ── Occupancy ─────────────────────────────────────────────────────────────────

/// The two counters guarded by the space's mutex.  Never touched without
/// holding the lock.
struct Occupancy {
    in_a: u32,
    in_b: u32,
}

// ── SharedSpace ───────────────────────────────────────────────────────────────

/// The two-hall admission monitor shared by every visitor thread.
///
/// Constructed once per run, passed by reference to every visitor, dropped
/// after all visitor threads join.  All operations are atomic with respect
/// to the single internal mutex; the blocking operations release the lock
/// while suspended on a condition variable and re-check their predicate in a
/// loop on every wake (spurious and stale wakeups are expected and benign).
///
/// Events are emitted through the sink while the lock is held, so each
/// [`EventRecord`] carries a consistent snapshot of both counters and the
/// sink observes transitions in linearization order.
pub struct SharedSpace<S: EventSink> {
    state:       Mutex<Occupancy>,
    /// Signaled whenever a Hall A admission slot may have opened.
    hall_a_free: Condvar,
    /// Signaled whenever a Hall B admission slot may have opened.
    hall_b_free: Condvar,
    capacity_a:  u32,
    capacity_b:  u32,
    sink:        S,
    started:     Instant,
}

impl<S: EventSink> SharedSpace<S> {
    /// Create an empty space with the configured capacities.
    ///
    /// `config` is assumed validated (positive capacities); the runner checks
    /// this before construction.
    pub fn new(config: &SimConfig, sink: S) -> Self {
        debug_assert!(config.capacity_a > 0 && config.capacity_b > 0);
        Self {
            state:       Mutex::new(Occupancy { in_a: 0, in_b: 0 }),
            hall_a_free: Condvar::new(),
            hall_b_free: Condvar::new(),
            capacity_a:  config.capacity_a,
            capacity_b:  config.capacity_b,
            sink,
            started:     Instant::now(),
        }
    }

    // ── Primitive operations ──────────────────────────────────────────────

    /// Admit a newly arriving visitor into Hall A.
    ///
    /// Blocks while `in_a + in_b >= capacity_a` — the combined gate that
    /// also reserves slots for Hall B occupants on their way out (see the
    /// crate docs).  Cannot fail, only delay.
    pub fn enter_a(&self, visitor: VisitorId) {
        let mut state = self.lock_state();
        while state.in_a + state.in_b >= self.capacity_a {
            state = self.wait_a(state);
        }
        state.in_a += 1;
        self.emit(&state, visitor, EventKind::EnteredA);
    }

    /// Vacate Hall A and wake one Hall A waiter.
    ///
    /// Caller contract: the visitor is currently in Hall A.  A call with
    /// `in_a == 0` is a programming error and aborts.
    pub fn leave_a(&self, visitor: VisitorId) {
        let mut state = self.lock_state();
        assert!(state.in_a > 0, "{visitor} left Hall A while it was empty");
        state.in_a -= 1;
        self.emit(&state, visitor, EventKind::LeftA);
        self.hall_a_free.notify_one();
    }

    /// Admit a visitor into Hall B.  Blocks while `in_b >= capacity_b`.
    pub fn enter_b(&self, visitor: VisitorId) {
        let mut state = self.lock_state();
        while state.in_b >= self.capacity_b {
            state = self.wait_b(state);
        }
        state.in_b += 1;
        self.emit(&state, visitor, EventKind::EnteredB);
    }

    /// Vacate Hall B and wake one Hall B waiter.
    ///
    /// Caller contract: the visitor is currently in Hall B.
    pub fn leave_b(&self, visitor: VisitorId) {
        let mut state = self.lock_state();
        assert!(state.in_b > 0, "{visitor} left Hall B while it was empty");
        state.in_b -= 1;
        self.emit(&state, visitor, EventKind::LeftB);
        self.hall_b_free.notify_one();
    }

    // ── Transit operations ────────────────────────────────────────────────
    //
    // Each transit is one critical section: the destination predicate is
    // waited on, then both counters are swapped under the same lock hold.
    // No other thread ever observes the visitor in both halls (or neither),
    // which is what keeps `in_a + in_b <= capacity_a` true at every
    // observable point.

    /// Move a visitor from Hall A to Hall B.
    ///
    /// Blocks while Hall B is full.  Hall B admission is secured before
    /// Hall A is vacated; one Hall A waiter is woken for the freed slot.
    ///
    /// Caller contract: the visitor is currently in Hall A.
    pub fn move_to_b(&self, visitor: VisitorId) {
        let mut state = self.lock_state();
        while state.in_b >= self.capacity_b {
            state = self.wait_b(state);
        }
        assert!(state.in_a > 0, "{visitor} left Hall A while it was empty");
        state.in_a -= 1;
        self.emit(&state, visitor, EventKind::LeftA);
        state.in_b += 1;
        self.emit(&state, visitor, EventKind::EnteredB);
        self.hall_a_free.notify_one();
    }

    /// Move a visitor from Hall B back into Hall A on its way out.
    ///
    /// Blocks while `in_a >= capacity_a` — the plain Hall A headcount, not
    /// the combined arrival gate: the visitor's own Hall B occupancy would
    /// otherwise hold the combined predicate false forever.  One Hall B
    /// waiter is woken for the freed slot.
    ///
    /// Caller contract: the visitor is currently in Hall B.
    pub fn return_to_a(&self, visitor: VisitorId) {
        let mut state = self.lock_state();
        while state.in_a >= self.capacity_a {
            state = self.wait_a(state);
        }
        assert!(state.in_b > 0, "{visitor} left Hall B while it was empty");
        state.in_b -= 1;
        self.emit(&state, visitor, EventKind::LeftB);
        state.in_a += 1;
        self.emit(&state, visitor, EventKind::EnteredA);
        self.hall_b_free.notify_one();
    }

    // ── Observation ───────────────────────────────────────────────────────

    /// Record that a visitor has left the museum entirely.
    ///
    /// Mutates nothing; emits `ExitedMuseum` with the counters as they
    /// stand.  Called after the visitor's final `leave_a`.
    pub fn exit_museum(&self, visitor: VisitorId) {
        let state = self.lock_state();
        self.emit(&state, visitor, EventKind::ExitedMuseum);
    }

    /// Snapshot of `(in_a, in_b)` under the lock.
    pub fn occupancy(&self) -> (u32, u32) {
        let state = self.lock_state();
        (state.in_a, state.in_b)
    }

    /// Unwrap the inner sink (e.g. to inspect a trace after the run).
    pub fn into_sink(self) -> S {
        self.sink
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn lock_state(&self) -> MutexGuard<'_, Occupancy> {
        // Poisoning means another visitor panicked inside a critical
        // section; the counters can no longer be trusted, so propagate.
        self.state.lock().expect("shared space lock poisoned")
    }

    fn wait_a<'a>(&self, guard: MutexGuard<'a, Occupancy>) -> MutexGuard<'a, Occupancy> {
        self.hall_a_free.wait(guard).expect("shared space lock poisoned")
    }

    fn wait_b<'a>(&self, guard: MutexGuard<'a, Occupancy>) -> MutexGuard<'a, Occupancy> {
        self.hall_b_free.wait(guard).expect("shared space lock poisoned")
    }

    fn emit(&self, state: &Occupancy, visitor: VisitorId, kind: EventKind) {
        self.sink.record(&EventRecord {
            visitor,
            kind,
            hall_a:  state.in_a,
            hall_b:  state.in_b,
            elapsed: self.started.elapsed(),
        });
    }
}
