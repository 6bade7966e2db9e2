//! Flat row types written by the tabular backends.
//!
//! Hours are plain `f64` here; the planner's fixed-point values are
//! converted once, when a row is built.

use hos_core::{ClockTime, DutyStatus, EntryKind};
use hos_log::{DailyTotals, LogEntry, RouteSummaryEntry};

/// One log entry.
#[derive(Debug, Clone, PartialEq)]
pub struct LogRow {
    pub day:         u32,
    pub start_hours: f64,
    pub end_hours:   f64,
    pub status:      DutyStatus,
    pub duty_line:   u8,
    pub kind:        EntryKind,
    pub location:    String,
    pub remarks:     String,
}

impl From<&LogEntry> for LogRow {
    fn from(entry: &LogEntry) -> Self {
        Self {
            day:         entry.day(),
            start_hours: entry.start().as_hours(),
            end_hours:   entry.end().as_hours(),
            status:      entry.status(),
            duty_line:   entry.duty_line(),
            kind:        entry.kind(),
            location:    entry.location().to_owned(),
            remarks:     entry.remarks().to_owned(),
        }
    }
}

/// One route summary line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    pub day:      u32,
    pub time:     ClockTime,
    pub activity: String,
    pub location: String,
}

impl From<&RouteSummaryEntry> for SummaryRow {
    fn from(entry: &RouteSummaryEntry) -> Self {
        Self {
            day:      entry.day,
            time:     entry.time,
            activity: entry.activity.clone(),
            location: entry.location.clone(),
        }
    }
}

/// Hours per duty status for one log day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyTotalsRow {
    pub day:            u32,
    pub off_duty_hours: f64,
    pub sleeper_hours:  f64,
    pub driving_hours:  f64,
    pub on_duty_hours:  f64,
    pub total_hours:    f64,
}

impl From<&DailyTotals> for DailyTotalsRow {
    fn from(totals: &DailyTotals) -> Self {
        Self {
            day:            totals.day,
            off_duty_hours: totals.off_duty.as_hours(),
            sleeper_hours:  totals.sleeper.as_hours(),
            driving_hours:  totals.driving.as_hours(),
            on_duty_hours:  totals.on_duty.as_hours(),
            total_hours:    totals.total().as_hours(),
        }
    }
}
