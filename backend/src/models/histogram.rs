//! Histogram rows as produced by the upstream histogram procedures.

use serde::{Deserialize, Serialize};

use super::time::{parse_time, TimeOfDay};
use crate::scheduler::{SchedulerError, SchedulerResult};

/// One untyped result row: `(time, density, cumulative probability)`.
///
/// The time may carry an hour of 24 or more and the probability arrives as a
/// decimal string, exactly as the stored procedures return them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawHistogramRow {
    pub time: String,
    #[serde(default)]
    pub density: f64,
    pub cumulative_probability: String,
}

impl RawHistogramRow {
    pub fn new(
        time: impl Into<String>,
        density: f64,
        cumulative_probability: impl Into<String>,
    ) -> Self {
        Self {
            time: time.into(),
            density,
            cumulative_probability: cumulative_probability.into(),
        }
    }
}

/// A parsed histogram sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistogramSample {
    pub time: TimeOfDay,
    pub density: f64,
    pub cumulative_probability: f64,
}

impl HistogramSample {
    pub fn new(time: TimeOfDay, density: f64, cumulative_probability: f64) -> Self {
        Self {
            time,
            density,
            cumulative_probability,
        }
    }

    /// Parse both the time and the cumulative probability of a raw row.
    pub fn from_raw(row: &RawHistogramRow) -> SchedulerResult<Self> {
        let time = parse_time(&row.time)?;
        let cumulative_probability = parse_probability(&row.cumulative_probability)?;
        Ok(Self::new(time, row.density, cumulative_probability))
    }
}

fn parse_probability(raw: &str) -> SchedulerResult<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite())
        .ok_or_else(|| SchedulerError::MalformedProbability {
            raw: raw.to_string(),
        })
}

/// Parse a full histogram, stopping at the first malformed row.
pub fn parse_histogram(rows: &[RawHistogramRow]) -> SchedulerResult<Vec<HistogramSample>> {
    rows.iter().map(HistogramSample::from_raw).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_normalizes_time() {
        let sample = HistogramSample::from_raw(&RawHistogramRow::new("24:10:00", 3.0, "1.0000")).unwrap();
        assert_eq!(sample.time, TimeOfDay::from_hms(0, 10, 0).unwrap());
        assert_eq!(sample.density, 3.0);
        assert_eq!(sample.cumulative_probability, 1.0);
    }

    #[test]
    fn test_from_raw_rejects_bad_probability() {
        for raw in ["", "abc", "NaN", "inf"] {
            let err = HistogramSample::from_raw(&RawHistogramRow::new("05:00:00", 0.0, raw)).unwrap_err();
            assert!(matches!(err, SchedulerError::MalformedProbability { raw: ref r } if r == raw));
        }
    }

    #[test]
    fn test_parse_histogram_reports_first_bad_time() {
        let rows = vec![
            RawHistogramRow::new("05:00:00", 0.0, "0.0"),
            RawHistogramRow::new("oops", 0.0, "0.5"),
            RawHistogramRow::new("bad", 0.0, "1.0"),
        ];
        let err = parse_histogram(&rows).unwrap_err();
        assert!(matches!(err, SchedulerError::MalformedTime { raw } if raw == "oops"));
    }

    #[test]
    fn test_raw_row_deserializes_without_density() {
        let row: RawHistogramRow =
            serde_json::from_str(r#"{"time": "06:00:00", "cumulative_probability": "0.25"}"#).unwrap();
        assert_eq!(row.density, 0.0);
        assert_eq!(row.cumulative_probability, "0.25");
    }
}
