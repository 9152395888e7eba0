use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::scheduler::SchedulerError;

/// Number of seconds in one service day.
pub const SECONDS_PER_DAY: i64 = 24 * 3600;

/// Wall-clock time within a 24-hour cycle.
///
/// Upstream rows may carry hours of 24 and above to mean "past midnight, same
/// service day"; [`parse_time`] folds those back into `[0, 23]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(NaiveTime);

impl TimeOfDay {
    /// Build from validated components. Returns `None` when any field is out of range.
    pub fn from_hms(hour: u32, minute: u32, second: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, second).map(Self)
    }

    /// Build from a second offset, wrapping into `[0, 86400)`.
    pub fn from_seconds(seconds: i64) -> Self {
        let normalized = seconds.rem_euclid(SECONDS_PER_DAY) as u32;
        // rem_euclid keeps the value inside the day, so this cannot fail
        Self(NaiveTime::from_num_seconds_from_midnight_opt(normalized, 0).unwrap_or(NaiveTime::MIN))
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    pub fn second(&self) -> u32 {
        self.0.second()
    }

    /// Same-day offset: `hour*3600 + minute*60 + second`.
    pub fn seconds_from_midnight(&self) -> i64 {
        i64::from(self.0.num_seconds_from_midnight())
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hour(),
            self.minute(),
            self.second()
        )
    }
}

impl FromStr for TimeOfDay {
    type Err = SchedulerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_time(s)
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_time(&raw).map_err(serde::de::Error::custom)
    }
}

/// Parse an `"HH:MM:SS"` string into a [`TimeOfDay`].
///
/// An hour of 24 or more is reduced by 24 once. Anything that does not end up
/// as a valid wall-clock time is reported as `MalformedTime` with the raw value.
pub fn parse_time(raw: &str) -> Result<TimeOfDay, SchedulerError> {
    let malformed = || SchedulerError::MalformedTime {
        raw: raw.to_string(),
    };

    let fields: Vec<&str> = raw.trim().split(':').collect();
    if fields.len() != 3 {
        return Err(malformed());
    }

    let mut parts = [0u32; 3];
    for (slot, field) in parts.iter_mut().zip(&fields) {
        if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }
        *slot = field.parse().map_err(|_| malformed())?;
    }

    let [mut hour, minute, second] = parts;
    if hour >= 24 {
        hour -= 24;
    }

    TimeOfDay::from_hms(hour, minute, second).ok_or_else(malformed)
}

/// Render a travel duration as `"MM:SS"`; minutes are not capped at 59.
pub fn format_travel_time(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
