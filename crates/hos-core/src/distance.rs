//! Fixed-point distance and its conversion to driving time.

use std::fmt;
use std::ops::{Add, AddAssign, Sub};

use crate::Span;

/// A distance in thousandths of a mile.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Miles(pub i64);

impl Miles {
    pub const ZERO: Miles = Miles(0);

    pub const MILLIS_PER_MILE: i64 = 1_000;

    #[inline]
    pub const fn from_whole(miles: i64) -> Miles {
        Miles(miles * Self::MILLIS_PER_MILE)
    }

    /// Convert fractional miles, rounding to the nearest thousandth.
    pub fn from_miles_f64(miles: f64) -> Miles {
        if !miles.is_finite() {
            return Miles::ZERO;
        }
        Miles((miles * Self::MILLIS_PER_MILE as f64).round() as i64)
    }

    #[inline]
    pub fn as_f64(self) -> f64 {
        self.0 as f64 / Self::MILLIS_PER_MILE as f64
    }

    /// Nearest whole mile, halves rounded to even (30.5 → 30, 31.5 → 32).
    pub fn rounded(self) -> i64 {
        let whole = self.0.div_euclid(Self::MILLIS_PER_MILE);
        let frac = self.0.rem_euclid(Self::MILLIS_PER_MILE);
        let half = Self::MILLIS_PER_MILE / 2;
        if frac > half || (frac == half && whole % 2 != 0) {
            whole + 1
        } else {
            whole
        }
    }

    /// How many whole `interval`s fit into this distance.
    ///
    /// # Panics
    /// Panics if `interval` is zero; `HosRules::validate` rejects that.
    #[inline]
    pub fn intervals_completed(self, interval: Miles) -> i64 {
        self.0.div_euclid(interval.0)
    }

    /// Distance left until the next multiple of `interval`.
    ///
    /// Sitting exactly on a multiple returns a full `interval`: that multiple
    /// counts as already passed.
    pub fn until_next_multiple(self, interval: Miles) -> Miles {
        Miles(interval.0 - self.0.rem_euclid(interval.0))
    }

    /// Time needed to cover this distance at `mph`.
    ///
    /// Exact whenever `mph` divides 3 600; otherwise rounded down to the
    /// millisecond.  Saturates at the ends of the `i64` range.
    pub fn drive_time(self, mph: u32) -> Span {
        let ms = self.0 as i128 * Span::MILLIS_PER_HOUR as i128
            / (Self::MILLIS_PER_MILE as i128 * mph as i128);
        Span(saturate(ms))
    }

    /// Distance covered in `span` at `mph`.  Saturates like
    /// [`Miles::drive_time`].
    pub fn covered_in(span: Span, mph: u32) -> Miles {
        let milli = span.0 as i128 * mph as i128 * Self::MILLIS_PER_MILE as i128
            / Span::MILLIS_PER_HOUR as i128;
        Miles(saturate(milli))
    }
}

fn saturate(value: i128) -> i64 {
    i64::try_from(value).unwrap_or(if value < 0 { i64::MIN } else { i64::MAX })
}

impl Add for Miles {
    type Output = Miles;
    #[inline]
    fn add(self, rhs: Miles) -> Miles {
        Miles(self.0 + rhs.0)
    }
}

impl Sub for Miles {
    type Output = Miles;
    #[inline]
    fn sub(self, rhs: Miles) -> Miles {
        Miles(self.0 - rhs.0)
    }
}

impl AddAssign for Miles {
    #[inline]
    fn add_assign(&mut self, rhs: Miles) {
        self.0 += rhs.0;
    }
}

impl fmt::Display for Miles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} mi", self.as_f64())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Miles {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Miles {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let miles = <f64 as serde::Deserialize>::deserialize(deserializer)?;
        if !miles.is_finite() {
            return Err(serde::de::Error::custom("miles must be a finite number"));
        }
        Ok(Miles::from_miles_f64(miles))
    }
}
