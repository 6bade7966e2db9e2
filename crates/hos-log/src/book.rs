//! `LogBook` — the append-only log and route summary of one trip.

use hos_core::Span;

use crate::{Activity, LogEntry, Milestone, RouteSummaryEntry};

/// Append-only store for log entries and route summary rows.
///
/// Nothing is ever mutated or removed after it is appended; callers get
/// shared references only.
#[derive(Clone, Debug, Default)]
pub struct LogBook {
    entries: Vec<LogEntry>,
    summary: Vec<RouteSummaryEntry>,
}

impl LogBook {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Appending ─────────────────────────────────────────────────────────

    /// Append a log entry for `activity` starting at `start` on `day`.
    ///
    /// Returns the stored entry; its `end()` is the new clock reading.
    pub fn record(&mut self, day: u32, start: Span, duration: Span, activity: Activity) -> &LogEntry {
        let index = self.entries.len();
        self.entries.push(LogEntry::new(
            day,
            start,
            duration,
            activity.status,
            activity.location,
            activity.remarks,
            activity.kind,
        ));
        &self.entries[index]
    }

    /// Append a route summary row stamped `at` on `day`.
    pub fn note(&mut self, day: u32, at: Span, milestone: Milestone) -> &RouteSummaryEntry {
        let index = self.summary.len();
        self.summary.push(RouteSummaryEntry {
            day,
            time:     at.into(),
            activity: milestone.activity(),
            location: milestone.location().to_owned(),
        });
        &self.summary[index]
    }

    /// Hand the entries and summary rows over, both in creation order.
    pub fn into_parts(self) -> (Vec<LogEntry>, Vec<RouteSummaryEntry>) {
        (self.entries, self.summary)
    }
}
