//! Validated planner input.

use hos_core::{HosError, HosResult, Miles, Span};

/// Trip distance and cycle hours already used, both known non-negative,
/// finite and within [`TripRequest::MAX_TRIP_MILES`] /
/// [`TripRequest::MAX_CYCLE_HOURS`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TripRequest {
    pub trip_distance: Miles,
    pub cycle_used:    Span,
}

impl TripRequest {
    /// Longest accepted trip.  Keeps drive time and every counter derived
    /// from it far inside the fixed-point range.
    pub const MAX_TRIP_MILES: f64 = 1_000_000.0;

    /// Largest accepted starting cycle.
    pub const MAX_CYCLE_HOURS: f64 = 1_000_000.0;

    /// Validate raw caller numbers and convert them to fixed point.
    pub fn new(trip_distance_miles: f64, cycle_used_hours: f64) -> HosResult<Self> {
        check_finite("tripDistance", trip_distance_miles)?;
        check_finite("cycleUsed", cycle_used_hours)?;
        if trip_distance_miles < 0.0 || cycle_used_hours < 0.0 {
            return Err(HosError::Negative);
        }
        check_at_most("tripDistance", trip_distance_miles, Self::MAX_TRIP_MILES)?;
        check_at_most("cycleUsed", cycle_used_hours, Self::MAX_CYCLE_HOURS)?;
        Ok(Self {
            trip_distance: Miles::from_miles_f64(trip_distance_miles),
            cycle_used:    Span::from_hours_f64(cycle_used_hours),
        })
    }
}

fn check_finite(field: &'static str, value: f64) -> HosResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(HosError::NonFinite { field, value })
    }
}

fn check_at_most(field: &'static str, value: f64, max: f64) -> HosResult<()> {
    if value <= max {
        Ok(())
    } else {
        Err(HosError::OutOfRange { field, value, max })
    }
}
