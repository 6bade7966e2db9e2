//! Planner observer trait for progress reporting and data collection.

use hos_log::{LogEntry, RouteSummaryEntry};

use crate::{DayCloseReason, SimulationState, TripPlan};

/// Callbacks invoked by [`TripPlanner::plan_with`][crate::TripPlanner::plan_with]
/// as the schedule is built.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — drive counter
///
/// ```rust,ignore
/// struct DriveCounter(usize);
///
/// impl PlanObserver for DriveCounter {
///     fn on_entry(&mut self, entry: &LogEntry, _state: &SimulationState) {
///         if entry.kind() == EntryKind::Drive {
///             self.0 += 1;
///         }
///     }
/// }
/// ```
pub trait PlanObserver {
    /// Called after every log entry, with the state it produced (clock
    /// already advanced past the entry).
    fn on_entry(&mut self, _entry: &LogEntry, _state: &SimulationState) {}

    /// Called after every route summary row.
    fn on_route_note(&mut self, _row: &RouteSummaryEntry) {}

    /// Called when `finished_day` closes and the next day begins.
    fn on_day_rollover(&mut self, _finished_day: u32, _reason: DayCloseReason) {}

    /// Called once with the finished plan.
    fn on_plan_end(&mut self, _plan: &TripPlan) {}
}

/// A [`PlanObserver`] that does nothing.
pub struct NoopObserver;

impl PlanObserver for NoopObserver {}

/// A [`PlanObserver`] that reports progress through the `log` facade.
///
/// Entries go to `debug`, day rollovers and the final tally to `info`.
#[derive(Default)]
pub struct LoggingObserver;

impl PlanObserver for LoggingObserver {
    fn on_entry(&mut self, entry: &LogEntry, state: &SimulationState) {
        log::debug!(
            "day {} {:>6.2}h–{:>6.2}h {:<3} {:<8} {} (cycle {:.2}h, remaining {:.2}h)",
            entry.day(),
            entry.start().as_hours(),
            entry.end().as_hours(),
            entry.status(),
            entry.kind(),
            entry.remarks(),
            state.cycle_used.as_hours(),
            state.remaining_trip_time.as_hours(),
        );
    }

    fn on_day_rollover(&mut self, finished_day: u32, reason: DayCloseReason) {
        log::info!("day {finished_day} closed: {}", reason.remark());
    }

    fn on_plan_end(&mut self, plan: &TripPlan) {
        log::info!(
            "trip planned: {} entries over {} day(s), {:.2}h driving, cycle at {:.2}h",
            plan.logs.len(),
            plan.total_days,
            plan.driving_time().as_hours(),
            plan.final_cycle_used.as_hours(),
        );
    }
}
