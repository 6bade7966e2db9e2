//! The `TripPlanner` and its planning loop.

use hos_core::{HosRules, Miles, Span};
use hos_log::{Activity, LogBook, Milestone};

use crate::allocator::allocate;
use crate::fueling::plan_fuel_stop;
use crate::resolver::{before_dropoff, before_on_duty, before_prologue, resolve};
use crate::{
    Correction, DayCloseReason, NoopObserver, PlanError, PlanObserver, PlanResult,
    SimulationState, TripPlan, TripRequest,
};

// ── TripPlanner ───────────────────────────────────────────────────────────────

/// Turns a [`TripRequest`] into a [`TripPlan`] under a fixed set of rules.
///
/// The planner holds no per-trip state: every call builds its own
/// [`SimulationState`], so one planner can serve many trips, including from
/// several threads at once.
///
/// Create via [`TripPlannerBuilder`][crate::TripPlannerBuilder] or
/// [`TripPlanner::new`].
#[derive(Clone, Debug)]
pub struct TripPlanner {
    pub(crate) rules:          HosRules,
    pub(crate) max_iterations: usize,
}

impl TripPlanner {
    /// Loop iterations allowed per trip before giving up.  Each log day
    /// takes roughly half a dozen, so this covers trips of several million
    /// miles.
    pub const DEFAULT_MAX_ITERATIONS: usize = 100_000;

    /// A planner with validated `rules` and the default iteration cap.
    pub fn new(rules: HosRules) -> PlanResult<Self> {
        rules.validate()?;
        Ok(Self { rules, max_iterations: Self::DEFAULT_MAX_ITERATIONS })
    }

    pub fn rules(&self) -> &HosRules {
        &self.rules
    }

    /// Plan one trip without observer callbacks.
    pub fn plan(&self, request: &TripRequest) -> PlanResult<TripPlan> {
        self.plan_with(request, &mut NoopObserver)
    }

    /// Plan one trip, reporting progress to `observer`.
    pub fn plan_with<O: PlanObserver>(
        &self,
        request:  &TripRequest,
        observer: &mut O,
    ) -> PlanResult<TripPlan> {
        let mut run = Run {
            rules: &self.rules,
            state: SimulationState::new(self.rules.drive_time(request.trip_distance), request.cycle_used),
            book: LogBook::new(),
            observer,
        };
        run.execute(self.max_iterations)?;
        Ok(run.finish())
    }

    /// Plan independent trips.  Results are in request order.
    ///
    /// With the `parallel` Cargo feature the trips run on Rayon's thread
    /// pool.
    pub fn plan_batch(&self, requests: &[TripRequest]) -> Vec<PlanResult<TripPlan>> {
        #[cfg(not(feature = "parallel"))]
        {
            requests.iter().map(|r| self.plan(r)).collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            requests.par_iter().map(|r| self.plan(r)).collect()
        }
    }
}

// ── Run ───────────────────────────────────────────────────────────────────────

/// One planning run: the state record, the log being built, and the rules.
struct Run<'a, O: PlanObserver> {
    rules:    &'a HosRules,
    state:    SimulationState,
    book:     LogBook,
    observer: &'a mut O,
}

impl<O: PlanObserver> Run<'_, O> {
    fn execute(&mut self, max_iterations: usize) -> PlanResult<()> {
        if let Some(correction) = before_prologue(&self.state, self.rules) {
            log::warn!(
                "cycle already at {:.2}h of {:.2}h; restarting before pickup",
                self.state.cycle_used.as_hours(),
                self.rules.max_cycle.as_hours(),
            );
            self.apply(correction);
        }

        self.prologue();

        let mut iterations = 0usize;
        while !self.state.trip_complete() {
            iterations += 1;
            if iterations > max_iterations {
                return Err(PlanError::IterationLimit { limit: max_iterations });
            }

            if self.state.fuel_due {
                match before_on_duty(
                    &self.state,
                    self.rules,
                    self.rules.fueling_duration,
                    DayCloseReason::EndOfWindow,
                ) {
                    None => self.refuel(),
                    Some(correction) => self.apply(correction),
                }
                continue;
            }

            let allocation = allocate(&self.state, self.rules);
            if !allocation.segment.is_positive() {
                let correction = resolve(&self.state, self.rules);
                log::trace!(
                    "day {} at {}: {:?} exhausted, applying {:?}",
                    self.state.day,
                    self.state.clock,
                    allocation.limit,
                    correction,
                );
                self.apply(correction);
                continue;
            }

            match plan_fuel_stop(self.state.miles_driven, allocation.segment, self.rules) {
                Some(stop) => {
                    self.drive(stop.drive_time, stop.distance, Activity::drive_to_fuel());
                    self.state.fuel_due = true;
                }
                None => {
                    let distance = self.rules.distance_for(allocation.segment);
                    self.drive(allocation.segment, distance, Activity::drive());
                }
            }
        }

        self.epilogue();
        Ok(())
    }

    fn finish(self) -> TripPlan {
        let (logs, route_summary) = self.book.into_parts();
        let plan = TripPlan {
            logs,
            route_summary,
            total_days:       self.state.day,
            final_cycle_used: self.state.cycle_used,
        };
        self.observer.on_plan_end(&plan);
        plan
    }

    // ── Trip framing ──────────────────────────────────────────────────────

    fn prologue(&mut self) {
        let duration = self.rules.pickup_duration;
        for (activity, milestone) in [
            (Activity::pre_trip(), Milestone::PreTrip),
            (Activity::pickup(), Milestone::Pickup),
        ] {
            self.state.add_on_duty(duration);
            self.commit(duration, activity);
            self.note(milestone);
        }
    }

    fn epilogue(&mut self) {
        if let Some(correction) = before_dropoff(&self.state, self.rules) {
            self.apply(correction);
        }

        let dropoff = self.rules.dropoff_duration;
        self.state.add_on_duty(dropoff);
        self.commit(dropoff, Activity::dropoff());
        self.note(Milestone::Dropoff);

        let rest = self.rules.post_trip_rest + (Span::DAY - self.state.clock);
        self.commit(rest, Activity::final_rest());
    }

    // ── Steps ─────────────────────────────────────────────────────────────

    fn drive(&mut self, span: Span, distance: Miles, activity: Activity) {
        self.state.add_driving(span, distance);
        self.commit(span, activity);
        self.note(Milestone::Drive(distance));
    }

    fn refuel(&mut self) {
        let duration = self.rules.fueling_duration;
        self.state.add_on_duty(duration);
        self.state.fuel_due = false;
        self.commit(duration, Activity::fueling());
        self.note(Milestone::FuelStop);
    }

    fn apply(&mut self, correction: Correction) {
        match correction {
            Correction::CloseDay(reason) => self.close_day(reason),
            Correction::TakeBreak => self.take_break(),
            Correction::Restart => self.restart(),
        }
    }

    fn take_break(&mut self) {
        self.state.finish_break();
        self.commit(self.rules.break_duration, Activity::rest_break());
        self.note(Milestone::Break);
    }

    /// Rest out the day (at least the daily minimum) and start the next one.
    ///
    /// No rest entry is written when the clock has already passed the end
    /// of the day, which only happens right after a restart.
    fn close_day(&mut self, reason: DayCloseReason) {
        if self.state.clock < Span::DAY {
            let rest = self.rules.daily_rest.max(Span::DAY - self.state.clock);
            self.commit(rest, Activity::daily_rest(reason.remark()));
        }
        let finished = self.state.day;
        self.state.start_new_day();
        self.observer.on_day_rollover(finished, reason);
    }

    /// The restart also consumes the rest of the current day.
    fn restart(&mut self) {
        self.note(Milestone::CycleExhausted);
        let rest = self.rules.restart_duration + (Span::DAY - self.state.clock);
        self.state.reset_cycle();
        self.commit(rest, Activity::restart());
        self.close_day(DayCloseReason::RestartCompleted);
    }

    // ── Recording ─────────────────────────────────────────────────────────

    /// Log `activity` from the current clock and advance the clock past it.
    /// Counters must already reflect the step.
    fn commit(&mut self, duration: Span, activity: Activity) {
        let entry = self.book.record(self.state.day, self.state.clock, duration, activity);
        self.state.clock = entry.end();
        self.observer.on_entry(entry, &self.state);
    }

    fn note(&mut self, milestone: Milestone) {
        let row = self.book.note(self.state.day, self.state.clock, milestone);
        self.observer.on_route_note(row);
    }
}
