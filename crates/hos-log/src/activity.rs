//! The fixed vocabulary of a trip: log activities and route milestones.
//!
//! Every activity the planner can record is one of the constructors below,
//! so status, entry kind, location and remark always travel together.

use hos_core::{DutyStatus, EntryKind, Miles};

// ── Activity ──────────────────────────────────────────────────────────────────

/// What goes on the log for one state-advancing step (the duration is
/// supplied separately by the planner).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Activity {
    pub status:   DutyStatus,
    pub kind:     EntryKind,
    pub location: &'static str,
    pub remarks:  &'static str,
}

impl Activity {
    const fn new(
        status:   DutyStatus,
        kind:     EntryKind,
        location: &'static str,
        remarks:  &'static str,
    ) -> Self {
        Self { status, kind, location, remarks }
    }

    pub const fn pre_trip() -> Self {
        Self::new(
            DutyStatus::OnDuty,
            EntryKind::Work,
            "Current Location",
            "Pre-Trip Inspection / Initial Hookup",
        )
    }

    pub const fn pickup() -> Self {
        Self::new(DutyStatus::OnDuty, EntryKind::Work, "Pickup Location", "Loading/Pickup")
    }

    pub const fn drive() -> Self {
        Self::new(DutyStatus::Driving, EntryKind::Drive, "On Route", "Driving")
    }

    pub const fn drive_to_fuel() -> Self {
        Self::new(DutyStatus::Driving, EntryKind::Drive, "On Route", "Driving to Fuel Stop")
    }

    pub const fn fueling() -> Self {
        Self::new(DutyStatus::OnDuty, EntryKind::Work, "Fuel Station", "Fueling")
    }

    pub const fn rest_break() -> Self {
        Self::new(DutyStatus::Off, EntryKind::Break, "Roadside Rest", "30-Minute Rest Break")
    }

    /// Daily off-duty period; `reason` explains why the day closed.
    pub const fn daily_rest(reason: &'static str) -> Self {
        Self::new(DutyStatus::SleeperBerth, EntryKind::Rest, "Rest Location", reason)
    }

    pub const fn restart() -> Self {
        Self::new(DutyStatus::SleeperBerth, EntryKind::Restart, "Terminal/Home", "34-Hour Restart")
    }

    pub const fn dropoff() -> Self {
        Self::new(DutyStatus::OnDuty, EntryKind::Work, "Dropoff Location", "Unloading/Dropoff")
    }

    pub const fn final_rest() -> Self {
        Self::new(
            DutyStatus::SleeperBerth,
            EntryKind::End,
            "Home/Terminal",
            "Final Post-Trip Inspection and Rest",
        )
    }
}

// ── Milestone ─────────────────────────────────────────────────────────────────

/// Externally visible events that get a line in the route summary.
///
/// Internal bookkeeping (daily rests, the closing rest) has no milestone.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Milestone {
    PreTrip,
    Pickup,
    /// A drive segment covering the given distance.
    Drive(Miles),
    Break,
    FuelStop,
    CycleExhausted,
    Dropoff,
}

impl Milestone {
    /// Summary text; drive distances are rounded to the nearest mile.
    pub fn activity(self) -> String {
        match self {
            Milestone::PreTrip        => "Pre-Trip & Hookup".to_owned(),
            Milestone::Pickup         => "Loading/Pickup".to_owned(),
            Milestone::Drive(miles)   => format!("Driving {} miles", miles.rounded()),
            Milestone::Break          => "30-Minute Break".to_owned(),
            Milestone::FuelStop       => "Fueling Stop (30 mins)".to_owned(),
            Milestone::CycleExhausted => "70-Hour Cycle Limit Reached".to_owned(),
            Milestone::Dropoff        => "Unloading/Dropoff".to_owned(),
        }
    }

    pub fn location(self) -> &'static str {
        match self {
            Milestone::PreTrip        => "Start Location",
            Milestone::Pickup         => "Pickup Location",
            Milestone::Drive(_)       => "On Route",
            Milestone::Break          => "Roadside Rest",
            Milestone::FuelStop       => "Fuel Station",
            Milestone::CycleExhausted => "Terminal/Home",
            Milestone::Dropoff        => "Dropoff Location",
        }
    }
}
