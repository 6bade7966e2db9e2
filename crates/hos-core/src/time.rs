//! Duty-time model.
//!
//! # Design
//!
//! Hours are represented as a fixed-point `Span` counting milliseconds.  Every
//! regulatory constant (11 h, 0.5 h, 34 h, …) is a whole number of
//! milliseconds, and so is the time needed to drive one mile at any whole
//! speed that divides 3 600 (60 mph → 60 000 ms/mi).  Schedule arithmetic is
//! therefore exact: no drift accumulates over a multi-week trip and threshold
//! comparisons are plain integer comparisons.
//!
//! Floating point only appears at the edges: [`Span::from_hours_f64`] rounds
//! caller input to the nearest millisecond, and [`Span::as_hours`] converts
//! back for display and JSON.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub, SubAssign};

// ── Span ──────────────────────────────────────────────────────────────────────

/// A signed duration (or in-day clock reading) in milliseconds.
///
/// Signed because the segment allocator legitimately produces negative
/// headroom (`70 h − 71 h`) when a limit has already been passed.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Span(pub i64);

impl Span {
    pub const ZERO: Span = Span(0);

    pub const MILLIS_PER_MINUTE: i64 = 60_000;
    pub const MILLIS_PER_HOUR:   i64 = 3_600_000;

    /// Length of one log day.
    pub const DAY: Span = Span::from_hours(24);

    #[inline]
    pub const fn from_millis(ms: i64) -> Span {
        Span(ms)
    }

    #[inline]
    pub const fn from_minutes(minutes: i64) -> Span {
        Span(minutes * Self::MILLIS_PER_MINUTE)
    }

    #[inline]
    pub const fn from_hours(hours: i64) -> Span {
        Span(hours * Self::MILLIS_PER_HOUR)
    }

    /// Convert fractional hours, rounding to the nearest millisecond.
    ///
    /// Non-finite input maps to `Span::ZERO`; callers validate before
    /// converting.
    pub fn from_hours_f64(hours: f64) -> Span {
        if !hours.is_finite() {
            return Span::ZERO;
        }
        Span((hours * Self::MILLIS_PER_HOUR as f64).round() as i64)
    }

    #[inline]
    pub const fn millis(self) -> i64 {
        self.0
    }

    /// Fractional hours, for display and serialization.
    #[inline]
    pub fn as_hours(self) -> f64 {
        self.0 as f64 / Self::MILLIS_PER_HOUR as f64
    }

    /// `true` if strictly greater than zero.  A zero-length segment is not
    /// drivable.
    #[inline]
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// Round to the nearest whole minute and split into (hours, minutes).
    ///
    /// Rounding happens before the split so 1 h 59.6 min reads as `02:00`
    /// rather than `01:60`.
    pub fn to_hours_minutes(self) -> (i64, i64) {
        let half = Self::MILLIS_PER_MINUTE / 2;
        let total_minutes = (self.0 + half).div_euclid(Self::MILLIS_PER_MINUTE);
        (total_minutes.div_euclid(60), total_minutes.rem_euclid(60))
    }
}

impl Add for Span {
    type Output = Span;
    #[inline]
    fn add(self, rhs: Span) -> Span {
        Span(self.0 + rhs.0)
    }
}

impl Sub for Span {
    type Output = Span;
    #[inline]
    fn sub(self, rhs: Span) -> Span {
        Span(self.0 - rhs.0)
    }
}

impl AddAssign for Span {
    #[inline]
    fn add_assign(&mut self, rhs: Span) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Span {
    #[inline]
    fn sub_assign(&mut self, rhs: Span) {
        self.0 -= rhs.0;
    }
}

impl Sum for Span {
    fn sum<I: Iterator<Item = Span>>(iter: I) -> Span {
        iter.fold(Span::ZERO, Add::add)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h", self.as_hours())
    }
}

// ── ClockTime ─────────────────────────────────────────────────────────────────

/// An in-day clock reading rendered as `HH:MM`.
///
/// Hours are not wrapped at 24: a reading taken after an overnight rest that
/// spills past midnight shows e.g. `26:30`, matching the log entry it stamps.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct ClockTime {
    pub hours:   i64,
    pub minutes: i64,
}

impl ClockTime {
    pub fn new(hours: i64, minutes: i64) -> Self {
        Self { hours, minutes }
    }
}

impl From<Span> for ClockTime {
    fn from(span: Span) -> Self {
        let (hours, minutes) = span.to_hours_minutes();
        Self { hours, minutes }
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hours, self.minutes)
    }
}

// ── serde ─────────────────────────────────────────────────────────────────────
//
// Spans travel as fractional hours and clock readings as "HH:MM" strings so
// that JSON consumers never see the internal millisecond unit.

#[cfg(feature = "serde")]
mod serde_impls {
    use serde::de::{self, Deserializer};
    use serde::ser::Serializer;
    use serde::{Deserialize, Serialize};

    use super::{ClockTime, Span};

    impl Serialize for Span {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_f64(self.as_hours())
        }
    }

    impl<'de> Deserialize<'de> for Span {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let hours = f64::deserialize(deserializer)?;
            if !hours.is_finite() {
                return Err(de::Error::custom("hours must be a finite number"));
            }
            Ok(Span::from_hours_f64(hours))
        }
    }

    impl Serialize for ClockTime {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_str(self)
        }
    }

    impl<'de> Deserialize<'de> for ClockTime {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let s = String::deserialize(deserializer)?;
            let (h, m) = s
                .split_once(':')
                .ok_or_else(|| de::Error::custom(format!("invalid clock time {s:?}: expected HH:MM")))?;
            let hours = h.parse::<i64>().map_err(de::Error::custom)?;
            let minutes = m.parse::<i64>().map_err(de::Error::custom)?;
            Ok(ClockTime { hours, minutes })
        }
    }
}
