//! Daily hours recap — the footer line of each log sheet.

use std::collections::BTreeMap;

use hos_core::{ClockTime, DutyStatus, Span};

use crate::LogEntry;

/// Hours spent in each duty status on one log day.
///
/// A day whose closing rest runs past midnight reports the full rest, so
/// the four columns may add up to more than 24 h.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct DailyTotals {
    pub day:      u32,
    pub off_duty: Span,
    pub sleeper:  Span,
    pub driving:  Span,
    pub on_duty:  Span,
}

impl DailyTotals {
    pub fn new(day: u32) -> Self {
        Self { day, ..Self::default() }
    }

    /// Add `entry`'s duration to its status column.
    pub fn add(&mut self, entry: &LogEntry) {
        *self.column_mut(entry.status()) += entry.duration();
    }

    pub fn get(&self, status: DutyStatus) -> Span {
        match status {
            DutyStatus::Off          => self.off_duty,
            DutyStatus::SleeperBerth => self.sleeper,
            DutyStatus::Driving      => self.driving,
            DutyStatus::OnDuty       => self.on_duty,
        }
    }

    pub fn total(&self) -> Span {
        self.off_duty + self.sleeper + self.driving + self.on_duty
    }

    /// Group `entries` by day, ascending.  Days without entries are absent.
    pub fn from_entries(entries: &[LogEntry]) -> Vec<DailyTotals> {
        let mut by_day: BTreeMap<u32, DailyTotals> = BTreeMap::new();
        for entry in entries {
            by_day
                .entry(entry.day())
                .or_insert_with(|| DailyTotals::new(entry.day()))
                .add(entry);
        }
        by_day.into_values().collect()
    }

    fn column_mut(&mut self, status: DutyStatus) -> &mut Span {
        match status {
            DutyStatus::Off          => &mut self.off_duty,
            DutyStatus::SleeperBerth => &mut self.sleeper,
            DutyStatus::Driving      => &mut self.driving,
            DutyStatus::OnDuty       => &mut self.on_duty,
        }
    }
}

impl std::fmt::Display for DailyTotals {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, status) in DutyStatus::ALL.into_iter().enumerate() {
            if i > 0 {
                f.write_str(" | ")?;
            }
            write!(f, "{}: {}", status.label(), ClockTime::from(self.get(status)))?;
        }
        Ok(())
    }
}
