//! `TripPlan` — the planner's output.

use hos_core::{EntryKind, Span};
use hos_log::{DailyTotals, LogEntry, RouteSummaryEntry};

/// A complete trip schedule.
///
/// Serializes (feature `serde`) to
/// `{ logs, routeSummary, totalDays, finalCycleUsed }`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TripPlan {
    /// Log entries in creation (chronological) order.
    pub logs: Vec<LogEntry>,

    pub route_summary: Vec<RouteSummaryEntry>,

    /// The last log day.
    pub total_days: u32,

    /// Cycle hours on the books when the trip ends.
    pub final_cycle_used: Span,
}

impl TripPlan {
    /// Entries of one log day, in order.
    pub fn day_logs(&self, day: u32) -> impl Iterator<Item = &LogEntry> + '_ {
        self.logs.iter().filter(move |e| e.day() == day)
    }

    /// Entries of one day listed under "Activity/Remarks".
    pub fn remark_entries(&self, day: u32) -> impl Iterator<Item = &LogEntry> + '_ {
        self.day_logs(day).filter(|e| e.is_remark())
    }

    /// Entries of the given kind, in order.
    pub fn entries_of(&self, kind: EntryKind) -> impl Iterator<Item = &LogEntry> + '_ {
        self.logs.iter().filter(move |e| e.kind() == kind)
    }

    /// Total time spent driving.
    pub fn driving_time(&self) -> Span {
        self.entries_of(EntryKind::Drive).map(LogEntry::duration).sum()
    }

    pub fn daily_totals(&self) -> Vec<DailyTotals> {
        DailyTotals::from_entries(&self.logs)
    }
}
