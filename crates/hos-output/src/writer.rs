//! The `OutputWriter` trait implemented by the tabular backends.

use hos_sim::TripPlan;

use crate::{DailyTotalsRow, LogRow, OutputResult, SummaryRow};

/// Trait implemented by the CSV and SQLite writers.
///
/// Rows can be streamed as the planner produces them (see
/// [`PlanOutputObserver`][crate::PlanOutputObserver]) or written from a
/// finished plan with [`write_plan`][Self::write_plan].
pub trait OutputWriter {
    /// Write a batch of log entries.
    fn write_log_rows(&mut self, rows: &[LogRow]) -> OutputResult<()>;

    /// Write a batch of route summary lines.
    fn write_summary_rows(&mut self, rows: &[SummaryRow]) -> OutputResult<()>;

    /// Write the per-day recap.
    fn write_daily_totals(&mut self, rows: &[DailyTotalsRow]) -> OutputResult<()>;

    /// Flush and close all underlying handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;

    /// Write every row of a finished plan.  Does not call `finish`.
    fn write_plan(&mut self, plan: &TripPlan) -> OutputResult<()> {
        let logs: Vec<LogRow> = plan.logs.iter().map(LogRow::from).collect();
        let summary: Vec<SummaryRow> = plan.route_summary.iter().map(SummaryRow::from).collect();
        let totals: Vec<DailyTotalsRow> = plan.daily_totals().iter().map(DailyTotalsRow::from).collect();
        self.write_log_rows(&logs)?;
        self.write_summary_rows(&summary)?;
        self.write_daily_totals(&totals)
    }
}
