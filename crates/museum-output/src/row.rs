//! Plain data row type written by the trace backend.

use museum_core::EventRecord;

/// One admission event as it appears in `events.csv`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventRow {
    pub visitor_id:     u32,
    /// Stable lowercase event name (`entered_a`, `left_b`, …).
    pub event:          &'static str,
    pub hall_a:         u32,
    pub hall_b:         u32,
    /// Microseconds since the shared space was constructed.
    pub elapsed_micros: u64,
}

impl From<&EventRecord> for EventRow {
    fn from(record: &EventRecord) -> Self {
        Self {
            visitor_id:     record.visitor.0,
            event:          record.kind.as_str(),
            hall_a:         record.hall_a,
            hall_b:         record.hall_b,
            elapsed_micros: record.elapsed.as_micros() as u64,
        }
    }
}
