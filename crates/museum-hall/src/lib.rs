//! `museum-hall` — the shared two-hall admission monitor.
//!
//! A single [`SharedSpace`] value coordinates every visitor thread in a run.
//! It is a classic monitor: two occupancy counters behind one mutex, plus
//! one condition variable per hall.  Every counter read or write happens
//! while holding the mutex; blocking inside an admission operation is the
//! only retry mechanism, and it is unbounded.
//!
//! # The combined Hall A gate
//!
//! Admission to Hall A for a *newly arriving* visitor is gated on
//! `in_a + in_b >= capacity_a` — Hall B's occupants also consume Hall A
//! admission slots.  This is deliberate, not a bug: which visitors will
//! proceed to Hall B and how long any dwell takes are unknowable in advance,
//! so the space reserves return capacity for visitors already in Hall B who
//! must pass back through Hall A to leave.  New arrivals and in-transit
//! leavers are treated symmetrically, trading some throughput for guaranteed
//! forward progress of everyone already admitted.

pub mod space;


pub use space::SharedSpace;
