//! CSV trace backend.
//!
//! Creates `events.csv` in the configured output directory, one row per
//! admission event in emission (linearization) order.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use csv::Writer;

use museum_core::{EventRecord, EventSink};

use crate::row::EventRow;
use crate::{OutputError, OutputResult};

/// What the sink's mutex guards: the writer plus the error/finished latches.
struct Inner {
    writer:   Writer<File>,
    error:    Option<OutputError>,
    finished: bool,
}

/// An [`EventSink`] that appends every event to `events.csv`.
///
/// The interior mutex exists because sinks are shared by reference across
/// all visitor threads; emission already happens under the shared space's
/// lock, so this mutex is uncontended in practice.
///
/// After the first write error, subsequent rows are dropped and the error is
/// held for [`take_error`][Self::take_error].
pub struct CsvTraceSink {
    inner: Mutex<Inner>,
}

impl CsvTraceSink {
    /// Open (or create) `events.csv` in `dir` and write the header row.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut writer = Writer::from_path(dir.join("events.csv"))?;
        writer.write_record(["visitor_id", "event", "hall_a", "hall_b", "elapsed_micros"])?;
        Ok(Self {
            inner: Mutex::new(Inner {
                writer,
                error:    None,
                finished: false,
            }),
        })
    }

    /// Flush the underlying file.  Idempotent — safe to call more than once.
    pub fn finish(&self) -> OutputResult<()> {
        let mut inner = self.lock_inner();
        if inner.finished {
            return Ok(());
        }
        inner.finished = true;
        inner.writer.flush()?;
        Ok(())
    }

    /// Take the stored write error (if any) after the run.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&self) -> Option<OutputError> {
        self.lock_inner().error.take()
    }

    fn lock_inner(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().expect("trace sink lock poisoned")
    }

    fn write_row(inner: &mut Inner, row: &EventRow) -> OutputResult<()> {
        inner.writer.write_record(&[
            row.visitor_id.to_string(),
            row.event.to_string(),
            row.hall_a.to_string(),
            row.hall_b.to_string(),
            row.elapsed_micros.to_string(),
        ])?;
        Ok(())
    }
}

impl EventSink for CsvTraceSink {
    fn record(&self, event: &EventRecord) {
        let mut inner = self.lock_inner();
        if inner.error.is_some() || inner.finished {
            return;
        }
        let row = EventRow::from(event);
        if let Err(e) = Self::write_row(&mut inner, &row) {
            // Keep only the first error; the trace is incomplete either way.
            inner.error = Some(e);
        }
    }
}
