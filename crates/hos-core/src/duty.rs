//! Duty statuses and log entry categories.
//!
//! Both enums are closed: every variant has an explicit code and the
//! status → chart line mapping is a plain `match`, so an unknown status can
//! never silently map to a default line.

/// The four rows of a driver's daily log grid.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DutyStatus {
    /// Off duty (line 1).
    #[cfg_attr(feature = "serde", serde(rename = "OFF"))]
    Off,
    /// Sleeper berth (line 2).
    #[cfg_attr(feature = "serde", serde(rename = "SB"))]
    SleeperBerth,
    /// Driving (line 3).
    #[cfg_attr(feature = "serde", serde(rename = "D"))]
    Driving,
    /// On duty, not driving (line 4).
    #[cfg_attr(feature = "serde", serde(rename = "ON"))]
    OnDuty,
}

impl DutyStatus {
    /// Grid order, top to bottom.
    pub const ALL: [DutyStatus; 4] = [
        DutyStatus::Off,
        DutyStatus::SleeperBerth,
        DutyStatus::Driving,
        DutyStatus::OnDuty,
    ];

    /// Row of the log grid this status is drawn on (1-based, top to bottom).
    #[inline]
    pub fn duty_line(self) -> u8 {
        match self {
            DutyStatus::Off          => 1,
            DutyStatus::SleeperBerth => 2,
            DutyStatus::Driving      => 3,
            DutyStatus::OnDuty       => 4,
        }
    }

    /// Short code used on log sheets and in CSV/JSON output.
    pub fn as_str(self) -> &'static str {
        match self {
            DutyStatus::Off          => "OFF",
            DutyStatus::SleeperBerth => "SB",
            DutyStatus::Driving      => "D",
            DutyStatus::OnDuty       => "ON",
        }
    }

    /// Column heading in the daily hours recap.
    pub fn label(self) -> &'static str {
        match self {
            DutyStatus::Off          => "OFF Duty",
            DutyStatus::SleeperBerth => "Sleeper Berth",
            DutyStatus::Driving      => "DRIVE",
            DutyStatus::OnDuty       => "ON-DUTY",
        }
    }

    /// `true` for statuses that count against the on-duty window and cycle.
    #[inline]
    pub fn is_on_duty(self) -> bool {
        matches!(self, DutyStatus::Driving | DutyStatus::OnDuty)
    }
}

impl std::fmt::Display for DutyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// What a log entry represents in the trip.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum EntryKind {
    /// Non-driving on-duty work: inspection, loading, fueling, unloading.
    Work,
    Drive,
    /// Short off-duty break after the cumulative driving threshold.
    Break,
    /// Daily off-duty period closing a log day.
    Rest,
    /// Cycle restart.
    Restart,
    /// Closing rest after the final dropoff.
    End,
}

impl EntryKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EntryKind::Work    => "WORK",
            EntryKind::Drive   => "DRIVE",
            EntryKind::Break   => "BREAK",
            EntryKind::Rest    => "REST",
            EntryKind::Restart => "RESTART",
            EntryKind::End     => "END",
        }
    }
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}
