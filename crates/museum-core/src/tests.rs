//! Unit tests for museum-core.

use std::time::Duration;

use crate::{
    CoinFlipPaths, EventKind, EventRecord, EventSink, MemorySink, PathSource, SimConfig,
    VisitPath, VisitorId, VisitorRng,
};

// ── IDs ───────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod id_tests {
    use super::*;

    #[test]
    fn index_round_trip() {
        let id = VisitorId(7);
        assert_eq!(id.index(), 7);
        assert_eq!(VisitorId::try_from(7usize).unwrap(), id);
    }

    #[test]
    fn default_is_invalid() {
        assert_eq!(VisitorId::default(), VisitorId::INVALID);
    }

    #[test]
    fn display_includes_number() {
        assert_eq!(VisitorId(3).to_string(), "VisitorId(3)");
    }
}

// ── Path assignment ───────────────────────────────────────────────────────────

#[cfg(test)]
mod path_tests {
    use super::*;

    #[test]
    fn coin_flip_is_stable_per_id() {
        let source = CoinFlipPaths::new(42);
        for i in 0..50 {
            let id = VisitorId(i);
            assert_eq!(source.path_for(id), source.path_for(id));
        }
    }

    #[test]
    fn same_seed_same_assignment() {
        let a = CoinFlipPaths::new(123);
        let b = CoinFlipPaths::new(123);
        let paths_a: Vec<_> = (0..100).map(|i| a.path_for(VisitorId(i))).collect();
        let paths_b: Vec<_> = (0..100).map(|i| b.path_for(VisitorId(i))).collect();
        assert_eq!(paths_a, paths_b);
    }

    #[test]
    fn coin_flip_produces_both_paths() {
        let source = CoinFlipPaths::new(42);
        let paths: Vec<_> = (0..100).map(|i| source.path_for(VisitorId(i))).collect();
        assert!(paths.contains(&VisitPath::HallAOnly));
        assert!(paths.contains(&VisitPath::HallAThenB));
    }
}

// ── RNG determinism ───────────────────────────────────────────────────────────

#[cfg(test)]
mod rng_tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = VisitorRng::new(7, VisitorId(3));
        let mut b = VisitorRng::new(7, VisitorId(3));
        for _ in 0..20 {
            assert_eq!(a.gen_range(0u64..1_000_000), b.gen_range(0u64..1_000_000));
        }
    }

    #[test]
    fn gen_bool_is_deterministic_and_clamped() {
        let mut a = VisitorRng::new(5, VisitorId(2));
        let mut b = VisitorRng::new(5, VisitorId(2));
        for _ in 0..32 {
            assert_eq!(a.gen_bool(0.5), b.gen_bool(0.5));
        }
        // Out-of-range probabilities clamp instead of panicking.
        assert!(a.gen_bool(2.0));
        assert!(!a.gen_bool(-1.0));
    }

    #[test]
    fn different_visitors_diverge() {
        let mut a = VisitorRng::new(7, VisitorId(0));
        let mut b = VisitorRng::new(7, VisitorId(1));
        let seq_a: Vec<u64> = (0..8).map(|_| a.gen_range(0..u64::MAX)).collect();
        let seq_b: Vec<u64> = (0..8).map(|_| b.gen_range(0..u64::MAX)).collect();
        assert_ne!(seq_a, seq_b);
    }
}

// ── Config validation ─────────────────────────────────────────────────────────

#[cfg(test)]
mod config_tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(SimConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_capacity_rejected() {
        let mut config = SimConfig::default();
        config.capacity_a = 0;
        assert!(config.validate().is_err());

        let mut config = SimConfig::default();
        config.capacity_b = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_visitor_count_rejected() {
        let mut config = SimConfig::default();
        config.visitor_count = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_dwell_rejected() {
        let mut config = SimConfig::default();
        config.walkthrough = Duration::ZERO;
        assert!(config.validate().is_err());
    }
}

// ── Sinks ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod sink_tests {
    use super::*;

    fn record(visitor: u32, kind: EventKind) -> EventRecord {
        EventRecord {
            visitor: VisitorId(visitor),
            kind,
            hall_a:  1,
            hall_b:  0,
            elapsed: Duration::ZERO,
        }
    }

    #[test]
    fn memory_sink_preserves_order() {
        let sink = MemorySink::new();
        sink.record(&record(0, EventKind::EnteredA));
        sink.record(&record(0, EventKind::LeftA));
        sink.record(&record(0, EventKind::ExitedMuseum));

        let trace = sink.snapshot();
        let kinds: Vec<_> = trace.iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            [EventKind::EnteredA, EventKind::LeftA, EventKind::ExitedMuseum]
        );
    }

    #[test]
    fn memory_sink_take_drains() {
        let sink = MemorySink::new();
        sink.record(&record(1, EventKind::EnteredA));
        assert_eq!(sink.take().len(), 1);
        assert!(sink.take().is_empty());
    }

    #[test]
    fn sink_usable_through_reference() {
        // The &S blanket impl is what lets the shared space borrow a sink
        // owned by the runner.
        let sink = MemorySink::new();
        let by_ref: &MemorySink = &sink;
        by_ref.record(&record(2, EventKind::EnteredB));
        assert_eq!(sink.snapshot().len(), 1);
    }
}
