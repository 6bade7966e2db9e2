//! Segment allocation: the longest drive that is legal right now.

use hos_core::{HosRules, Span};

use crate::SimulationState;

/// The constraint that bounded an allocation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Limit {
    /// Only this much trip is left.
    Trip,
    /// Daily driving limit.
    Driving,
    /// On-duty hours in the window.
    Window,
    Cycle,
    /// A break is due.
    Break,
    /// The window closes on the clock.
    WindowClock,
}

/// Result of [`allocate`].  `segment` may be zero or negative, meaning no
/// driving is legal until a corrective action runs.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Allocation {
    pub segment: Span,
    pub limit:   Limit,
}

/// Minimum headroom over every binding constraint.
///
/// Ties go to the constraint listed first, in the order of [`Limit`].
pub fn allocate(state: &SimulationState, rules: &HosRules) -> Allocation {
    let candidates = [
        (Limit::Driving,     rules.max_driving - state.daily_driving),
        (Limit::Window,      rules.max_window - state.daily_on_duty),
        (Limit::Cycle,       rules.max_cycle - state.cycle_used),
        (Limit::Break,       rules.break_after - state.driving_since_break),
        (Limit::WindowClock, rules.max_window - state.clock),
    ];

    let mut best = Allocation { segment: state.remaining_trip_time, limit: Limit::Trip };
    for (limit, headroom) in candidates {
        if headroom < best.segment {
            best = Allocation { segment: headroom, limit };
        }
    }
    best
}
