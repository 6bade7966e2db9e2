//! Record types: `LogEntry` and `RouteSummaryEntry`.
//!
//! Both are immutable once built.  `LogEntry` keeps its fields private so the
//! derived `duty_line` can never disagree with `status`.

use hos_core::{ClockTime, DutyStatus, EntryKind, Span};

// ── LogEntry ──────────────────────────────────────────────────────────────────

/// One continuous activity on the driver's log.
///
/// `start` and `end` are in-day clock readings.  The last entry of a day may
/// end past 24 h when the rest it records carries over into the next day.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct LogEntry {
    day:       u32,
    start:     Span,
    end:       Span,
    status:    DutyStatus,
    location:  String,
    remarks:   String,
    duty_line: u8,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    kind:      EntryKind,
}

impl LogEntry {
    /// Build an entry spanning `start .. start + duration`.
    ///
    /// # Panics
    /// Panics in debug mode if `duration` is not positive.
    pub fn new(
        day:      u32,
        start:    Span,
        duration: Span,
        status:   DutyStatus,
        location: impl Into<String>,
        remarks:  impl Into<String>,
        kind:     EntryKind,
    ) -> Self {
        debug_assert!(duration.is_positive(), "log entries must have positive duration");
        Self {
            day,
            start,
            end: start + duration,
            status,
            location: location.into(),
            remarks: remarks.into(),
            duty_line: status.duty_line(),
            kind,
        }
    }

    #[inline]
    pub fn day(&self) -> u32 {
        self.day
    }

    #[inline]
    pub fn start(&self) -> Span {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Span {
        self.end
    }

    #[inline]
    pub fn duration(&self) -> Span {
        self.end - self.start
    }

    #[inline]
    pub fn status(&self) -> DutyStatus {
        self.status
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn remarks(&self) -> &str {
        &self.remarks
    }

    /// Grid row for chart rendering (OFF=1, SB=2, D=3, ON=4).
    #[inline]
    pub fn duty_line(&self) -> u8 {
        self.duty_line
    }

    #[inline]
    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    /// Listed under a log sheet's "Activity/Remarks" section: work, breaks,
    /// restarts and the closing rest.  Drive segments and daily rests are
    /// left to the grid.
    pub fn is_remark(&self) -> bool {
        matches!(
            self.kind,
            EntryKind::Work | EntryKind::Break | EntryKind::Restart | EntryKind::End
        )
    }
}

// ── RouteSummaryEntry ─────────────────────────────────────────────────────────

/// A human-readable itinerary line derived from the log.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteSummaryEntry {
    pub day:      u32,
    pub time:     ClockTime,
    pub activity: String,
    pub location: String,
}
