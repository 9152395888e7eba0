//! Public API surface for the scheduler backend.
//!
//! This file consolidates identifiers, enums and the DTO types returned by
//! the departure-times endpoint. All types derive Serialize/Deserialize for
//! JSON serialization.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::models::TimeOfDay;
use crate::scheduler::SchedulerError;

/// Line identifier (database primary key).
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct LineId(pub i64);

impl LineId {
    pub fn new(value: i64) -> Self {
        LineId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Travel direction on a line, carried on the wire as `bound_to` 0 or 1.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    Outbound,
    Inbound,
}

impl Direction {
    pub fn code(&self) -> i64 {
        match self {
            Direction::Outbound => 0,
            Direction::Inbound => 1,
        }
    }
}

impl TryFrom<i64> for Direction {
    type Error = SchedulerError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Direction::Outbound),
            1 => Ok(Direction::Inbound),
            other => Err(SchedulerError::InvalidDirection { value: other }),
        }
    }
}

impl Serialize for Direction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.code())
    }
}

impl<'de> Deserialize<'de> for Direction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = i64::deserialize(deserializer)?;
        Direction::try_from(value).map_err(serde::de::Error::custom)
    }
}

/// Shape of a line's route; selects which histogram the provider computes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RouteShape {
    /// Out-and-back line
    #[serde(rename = "ROUND-TRIP")]
    RoundTrip,
    /// Loop line
    #[serde(rename = "CIRCULAR")]
    Circular,
}

impl RouteShape {
    pub fn as_str(&self) -> &'static str {
        match self {
            RouteShape::RoundTrip => "ROUND-TRIP",
            RouteShape::Circular => "CIRCULAR",
        }
    }
}

impl fmt::Display for RouteShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RouteShape {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ROUND-TRIP" => Ok(RouteShape::RoundTrip),
            "CIRCULAR" => Ok(RouteShape::Circular),
            _ => Err(format!("Unknown route shape: {}", s)),
        }
    }
}

/// One computed departure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DepartureEntry {
    pub departure_time: TimeOfDay,
    /// Target cumulative probability, rounded to four decimals
    pub cdf_value: f64,
}

/// Expected travel time to a station, formatted as `"MM:SS"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EtaEntry {
    pub station_name: String,
    pub et: String,
}

/// Full response of the departure-times endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartureTimesData {
    pub line_id: LineId,
    pub train_count: u32,
    pub departure_times: Vec<DepartureEntry>,
    pub etas: Vec<EtaEntry>,
    pub route_shape: RouteShape,
}
