//! Mutable per-run simulation state.

use hos_core::{Miles, Span};

/// Counters threaded through one planning run.
///
/// Created once per trip with `cycle_used` seeded from the request and every
/// other counter zeroed, mutated in place by each planner step, and dropped
/// when the plan is returned.  All step functions receive it explicitly;
/// nothing is captured.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulationState {
    /// Current log day, starting at 1.
    pub day: u32,

    /// Elapsed time within the current day.  Reset to zero only when a day
    /// closes.
    pub clock: Span,

    /// On-duty time in the active cycle.
    pub cycle_used: Span,

    /// Driving since the last daily rest.
    pub driving_since_rest: Span,

    /// Driving since the last 30-minute break (or daily rest).
    pub driving_since_break: Span,

    /// Driving today, against the daily driving limit.
    pub daily_driving: Span,

    /// On-duty time today, against the on-duty window.
    pub daily_on_duty: Span,

    /// Driving still needed to cover the whole trip.
    pub remaining_trip_time: Span,

    /// Odometer since departure; only used to place fuel stops.
    pub miles_driven: Miles,

    /// The truck reached a fueling point but the stop did not fit in the
    /// current window or cycle; it is made before any further driving.
    pub fuel_due: bool,
}

impl SimulationState {
    pub fn new(remaining_trip_time: Span, cycle_used: Span) -> Self {
        Self {
            day: 1,
            clock: Span::ZERO,
            cycle_used,
            driving_since_rest: Span::ZERO,
            driving_since_break: Span::ZERO,
            daily_driving: Span::ZERO,
            daily_on_duty: Span::ZERO,
            remaining_trip_time,
            miles_driven: Miles::ZERO,
            fuel_due: false,
        }
    }

    /// `true` once no driving remains.
    #[inline]
    pub fn trip_complete(&self) -> bool {
        !self.remaining_trip_time.is_positive()
    }

    /// Account for `span` of driving covering `distance`.
    pub fn add_driving(&mut self, span: Span, distance: Miles) {
        self.driving_since_rest  += span;
        self.driving_since_break += span;
        self.daily_driving       += span;
        self.daily_on_duty       += span;
        self.cycle_used          += span;
        self.remaining_trip_time -= span;
        self.miles_driven        += distance;
    }

    /// Account for non-driving on-duty work.
    pub fn add_on_duty(&mut self, span: Span) {
        self.daily_on_duty += span;
        self.cycle_used    += span;
    }

    pub fn finish_break(&mut self) {
        self.driving_since_break = Span::ZERO;
    }

    pub fn reset_cycle(&mut self) {
        self.cycle_used = Span::ZERO;
    }

    /// Roll over to the next log day: clock and all daily counters restart.
    pub fn start_new_day(&mut self) {
        self.day += 1;
        self.clock = Span::ZERO;
        self.driving_since_rest = Span::ZERO;
        self.driving_since_break = Span::ZERO;
        self.daily_driving = Span::ZERO;
        self.daily_on_duty = Span::ZERO;
    }
}
