//! Fuel stop placement.

use hos_core::{HosRules, Miles, Span};

/// A proposed segment has to stop at a fueling point first.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FuelStop {
    /// Distance from the current position to the fueling point.
    pub distance:   Miles,
    /// Driving time to get there; always shorter than the proposed segment.
    pub drive_time: Span,
}

/// Split `segment` at the next fueling multiple if it lies strictly inside it.
///
/// A segment that ends exactly on a multiple is driven whole, and that
/// multiple then counts as passed.
pub fn plan_fuel_stop(miles_driven: Miles, segment: Span, rules: &HosRules) -> Option<FuelStop> {
    let interval = rules.fueling_interval;
    let after = miles_driven + rules.distance_for(segment);
    if after.intervals_completed(interval) <= miles_driven.intervals_completed(interval) {
        return None;
    }

    let distance = miles_driven.until_next_multiple(interval);
    let drive_time = rules.drive_time(distance);
    (drive_time.is_positive() && drive_time < segment).then_some(FuelStop { distance, drive_time })
}
