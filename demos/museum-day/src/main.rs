//! museum-day — one simulated opening day at the two-hall museum.
//!
//! Runs the default configuration (20 visitors, single-slot halls, random
//! mixed itineraries), narrates every admission event on the console, and
//! writes the full trace to `./output/events.csv`.

use std::path::Path;

use anyhow::Result;

use museum_core::{EventKind, EventRecord, EventSink, SimConfig};
use museum_output::CsvTraceSink;
use museum_sim::SimBuilder;

const OUTPUT_DIR: &str = "./output";

// ── Console narration ─────────────────────────────────────────────────────────

struct ConsoleSink {
    capacity_a: u32,
    capacity_b: u32,
}

impl EventSink for ConsoleSink {
    fn record(&self, event: &EventRecord) {
        let action = match event.kind {
            EventKind::EnteredA     => "enters Hall A",
            EventKind::LeftA        => "leaves Hall A",
            EventKind::EnteredB     => "enters Hall B",
            EventKind::LeftB        => "leaves Hall B",
            EventKind::ExitedMuseum => "leaves the museum",
        };
        println!(
            "[{:>9.3?}] Visitor {:>2} {:<18} (A {}/{}, B {}/{})",
            event.elapsed,
            event.visitor.0,
            action,
            event.hall_a,
            self.capacity_a,
            event.hall_b,
            self.capacity_b,
        );
    }
}

// ── Fan-out sink: console + CSV ───────────────────────────────────────────────

struct TeeSink<A: EventSink, B: EventSink>(A, B);

impl<A: EventSink, B: EventSink> EventSink for TeeSink<A, B> {
    fn record(&self, event: &EventRecord) {
        self.0.record(event);
        self.1.record(event);
    }
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let config = SimConfig::default();

    std::fs::create_dir_all(OUTPUT_DIR)?;
    let trace = CsvTraceSink::new(Path::new(OUTPUT_DIR))?;
    let console = ConsoleSink {
        capacity_a: config.capacity_a,
        capacity_b: config.capacity_b,
    };

    let sim = SimBuilder::new(config)
        .sink(TeeSink(console, trace))
        .build()?;
    let summary = sim.run();

    let TeeSink(_, trace) = sim.into_sink();
    trace.finish()?;
    if let Some(e) = trace.take_error() {
        eprintln!("warning: trace incomplete: {e}");
    }

    println!(
        "The museum is empty — {} visitors ({} Hall A only, {} through Hall B) in {:.3?}",
        summary.visitors, summary.hall_a_only, summary.hall_a_then_b, summary.elapsed,
    );
    Ok(())
}
