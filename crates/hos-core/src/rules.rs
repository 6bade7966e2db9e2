//! Hours-of-Service rule configuration.
//!
//! The defaults describe a property-carrying driver on the 70-hour / 8-day
//! cycle.  Applications may load overrides from a JSON file (feature
//! `serde`); absent fields keep their default value.

use crate::{HosError, HosResult, Miles, Span};

/// Every limit and fixed duration the planner depends on.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HosRules {
    /// Maximum driving between daily rests.  Default: 11 h.
    pub max_driving: Span,

    /// On-duty window per day.  Default: 14 h.
    pub max_window: Span,

    /// On-duty hours allowed per cycle.  Default: 70 h.
    pub max_cycle: Span,

    /// Minimum consecutive off-duty time that closes a day.  Default: 10 h.
    pub daily_rest: Span,

    /// Cumulative driving after which a break is due.  Default: 8 h.
    pub break_after: Span,

    /// Default: 0.5 h.
    pub break_duration: Span,

    /// Average speed used to turn distance into driving time.  Default: 60.
    pub average_speed_mph: u32,

    /// Default: 1 000 mi.
    pub fueling_interval: Miles,

    /// Default: 0.5 h.
    pub fueling_duration: Span,

    /// Off-duty time that resets the cycle.  Default: 34 h.
    pub restart_duration: Span,

    /// Pre-trip inspection and loading are each this long.  Default: 1 h.
    pub pickup_duration: Span,

    /// Default: 1 h.
    pub dropoff_duration: Span,

    /// Base of the closing rest after dropoff; the rest of the day is added
    /// on top.  Default: 8 h.
    pub post_trip_rest: Span,
}

impl Default for HosRules {
    fn default() -> Self {
        Self {
            max_driving:       Span::from_hours(11),
            max_window:        Span::from_hours(14),
            max_cycle:         Span::from_hours(70),
            daily_rest:        Span::from_hours(10),
            break_after:       Span::from_hours(8),
            break_duration:    Span::from_minutes(30),
            average_speed_mph: 60,
            fueling_interval:  Miles::from_whole(1_000),
            fueling_duration:  Span::from_minutes(30),
            restart_duration:  Span::from_hours(34),
            pickup_duration:   Span::from_hours(1),
            dropoff_duration:  Span::from_hours(1),
            post_trip_rest:    Span::from_hours(8),
        }
    }
}

impl HosRules {
    /// Reject rule sets the planner cannot make progress under.
    pub fn validate(&self) -> HosResult<()> {
        let positive = [
            ("max_driving", self.max_driving),
            ("max_window", self.max_window),
            ("max_cycle", self.max_cycle),
            ("daily_rest", self.daily_rest),
            ("break_after", self.break_after),
            ("break_duration", self.break_duration),
            ("restart_duration", self.restart_duration),
            ("fueling_duration", self.fueling_duration),
            ("pickup_duration", self.pickup_duration),
            ("dropoff_duration", self.dropoff_duration),
        ];
        for (name, span) in positive {
            if !span.is_positive() {
                return Err(HosError::Config(format!("{name} must be positive, got {span}")));
            }
        }

        if self.post_trip_rest < Span::ZERO {
            return Err(HosError::Config(format!(
                "post_trip_rest must not be negative, got {}",
                self.post_trip_rest
            )));
        }

        if self.average_speed_mph == 0 {
            return Err(HosError::Config("average_speed_mph must be positive".into()));
        }
        if self.fueling_interval.0 <= 0 {
            return Err(HosError::Config(format!(
                "fueling_interval must be positive, got {}",
                self.fueling_interval
            )));
        }
        if self.max_driving > self.max_window {
            return Err(HosError::Config(format!(
                "max_driving ({}) exceeds max_window ({})",
                self.max_driving, self.max_window
            )));
        }
        if self.max_window > Span::DAY {
            return Err(HosError::Config(format!(
                "max_window ({}) does not fit in a {} day",
                self.max_window,
                Span::DAY
            )));
        }
        // Fixed work must fit in a fresh window and a fresh cycle, or no
        // corrective action could ever make room for it.
        let prologue = self.pickup_duration + self.pickup_duration;
        if prologue >= self.max_window
            || self.dropoff_duration >= self.max_window
            || self.fueling_duration >= self.max_window
        {
            return Err(HosError::Config(
                "pickup, dropoff and fueling must each fit in the on-duty window".into(),
            ));
        }
        if prologue > self.max_cycle
            || self.dropoff_duration > self.max_cycle
            || self.fueling_duration > self.max_cycle
        {
            return Err(HosError::Config(
                "pickup, dropoff and fueling must each fit in the cycle".into(),
            ));
        }
        Ok(())
    }

    /// Driving time for `distance` at the configured average speed.
    #[inline]
    pub fn drive_time(&self, distance: Miles) -> Span {
        distance.drive_time(self.average_speed_mph)
    }

    /// Distance covered by driving for `span` at the configured speed.
    #[inline]
    pub fn distance_for(&self, span: Span) -> Miles {
        Miles::covered_in(span, self.average_speed_mph)
    }
}
