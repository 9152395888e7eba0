//! Records stored by repositories and the JSON seed format of the local backend.

use serde::{Deserialize, Serialize};

use crate::api::{LineId, RouteShape};
use crate::models::RawHistogramRow;

/// Expected travel time from the line origin to a station.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationEta {
    pub station_name: String,
    pub travel_seconds: u32,
}

impl StationEta {
    pub fn new(station_name: impl Into<String>, travel_seconds: u32) -> Self {
        Self {
            station_name: station_name.into(),
            travel_seconds,
        }
    }
}

/// Line metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineRecord {
    pub id: LineId,
    pub name: String,
    pub route_shape: RouteShape,
    pub train_count: u32,
}

/// Per-direction histograms of a circular line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CircularHistograms {
    #[serde(default)]
    pub outbound: Vec<RawHistogramRow>,
    #[serde(default)]
    pub inbound: Vec<RawHistogramRow>,
}

/// One line in a seed file, with everything the scheduler needs for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineSeed {
    #[serde(flatten)]
    pub line: LineRecord,
    #[serde(default)]
    pub round_trip_histogram: Vec<RawHistogramRow>,
    #[serde(default)]
    pub circular_histograms: CircularHistograms,
    #[serde(default)]
    pub stations: Vec<StationEta>,
}

/// Root of a seed file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub lines: Vec<LineSeed>,
}
