//! Constraint resolution: which corrective action runs when no driving is
//! legal.
//!
//! Every function here is pure.  The planner applies the returned
//! [`Correction`] and loops back to the allocator.

use hos_core::{HosRules, Span};

use crate::SimulationState;

// ── Types ─────────────────────────────────────────────────────────────────────

/// Why a log day was closed.  The remark becomes the rest entry's remarks.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DayCloseReason {
    DrivingLimit,
    WindowLimit,
    EndOfWindow,
    BeforeDropoff,
    /// Follows a restart; the restart entry already filled the day.
    RestartCompleted,
}

impl DayCloseReason {
    pub fn remark(self) -> &'static str {
        match self {
            DayCloseReason::DrivingLimit     => "Reached 11-Hour Driving Limit",
            DayCloseReason::WindowLimit      => "Reached 14-Hour Window Limit",
            DayCloseReason::EndOfWindow      => "End of Daily Driving Window",
            DayCloseReason::BeforeDropoff    => "Required Rest before Final Dropoff",
            DayCloseReason::RestartCompleted => "34-Hour Restart Completed",
        }
    }
}

/// Exactly one corrective action.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Correction {
    /// Daily rest, then a new log day.
    CloseDay(DayCloseReason),
    /// 30-minute off-duty break within the same day.
    TakeBreak,
    /// Cycle restart, then a new log day.
    Restart,
}

// ── Decisions ─────────────────────────────────────────────────────────────────

/// Pick the corrective action for a state in which no driving is legal.
///
/// Conditions are checked in a fixed order and the first match wins; more
/// than one can hold at once (e.g. break due and cycle exhausted).
pub fn resolve(state: &SimulationState, rules: &HosRules) -> Correction {
    if state.driving_since_rest >= rules.max_driving {
        Correction::CloseDay(DayCloseReason::DrivingLimit)
    } else if state.daily_on_duty >= rules.max_window {
        Correction::CloseDay(DayCloseReason::WindowLimit)
    } else if state.driving_since_break >= rules.break_after
        && state.daily_driving < rules.max_driving
    {
        Correction::TakeBreak
    } else if state.cycle_used >= rules.max_cycle {
        Correction::Restart
    } else {
        Correction::CloseDay(DayCloseReason::EndOfWindow)
    }
}

/// A restart is owed before the pre-trip inspection and pickup when that
/// work would not fit in what is left of the cycle.
pub fn before_prologue(state: &SimulationState, rules: &HosRules) -> Option<Correction> {
    let prologue = rules.pickup_duration + rules.pickup_duration;
    (state.cycle_used + prologue > rules.max_cycle).then_some(Correction::Restart)
}

/// Corrective action owed before `work` more on-duty time can be logged
/// without breaking the cycle or the window.
///
/// The cycle is checked first: a daily rest would not free any cycle hours.
pub fn before_on_duty(
    state:  &SimulationState,
    rules:  &HosRules,
    work:   Span,
    reason: DayCloseReason,
) -> Option<Correction> {
    if state.cycle_used + work > rules.max_cycle {
        Some(Correction::Restart)
    } else if state.clock + work > rules.max_window
        || state.daily_on_duty + work > rules.max_window
    {
        Some(Correction::CloseDay(reason))
    } else {
        None
    }
}

/// Corrective action owed before the final dropoff.
///
/// Always a daily rest, whichever limit the dropoff would break; the cycle
/// is never restarted for the dropoff.
pub fn before_dropoff(state: &SimulationState, rules: &HosRules) -> Option<Correction> {
    let work = rules.dropoff_duration;
    let blocked = state.cycle_used + work > rules.max_cycle
        || state.clock + work > rules.max_window
        || state.daily_on_duty + work > rules.max_window;
    blocked.then_some(Correction::CloseDay(DayCloseReason::BeforeDropoff))
}
