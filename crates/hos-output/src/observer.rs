//! `PlanOutputObserver<W>` — bridges `PlanObserver` to an `OutputWriter`.

use hos_log::{LogEntry, RouteSummaryEntry};
use hos_sim::{PlanObserver, SimulationState, TripPlan};

use crate::row::{DailyTotalsRow, LogRow, SummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`PlanObserver`] that streams log entries and route summary lines to
/// any [`OutputWriter`] backend as the planner produces them, then writes the
/// daily recap and finishes the writer when the plan ends.
///
/// Errors from the writer are stored internally because `PlanObserver`
/// methods have no return value.  After `plan_with` returns, check for
/// errors with [`take_error`][Self::take_error].
pub struct PlanOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> PlanOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after planning returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> PlanObserver for PlanOutputObserver<W> {
    fn on_entry(&mut self, entry: &LogEntry, _state: &SimulationState) {
        let result = self.writer.write_log_rows(&[LogRow::from(entry)]);
        self.store_err(result);
    }

    fn on_route_note(&mut self, row: &RouteSummaryEntry) {
        let result = self.writer.write_summary_rows(&[SummaryRow::from(row)]);
        self.store_err(result);
    }

    fn on_plan_end(&mut self, plan: &TripPlan) {
        let rows: Vec<DailyTotalsRow> = plan.daily_totals().iter().map(DailyTotalsRow::from).collect();
        let result = self.writer.write_daily_totals(&rows);
        self.store_err(result);
        let result = self.writer.finish();
        self.store_err(result);
    }
}
