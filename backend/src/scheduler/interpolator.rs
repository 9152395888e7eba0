//! CDF interpolation of departure times.
//!
//! Given the cumulative distribution of a line's daily train traffic, the
//! interpolator solves for the `N` times at which the distribution reaches
//! `0/N, 1/N, ..., (N-1)/N`. Each solution is a linear interpolation between
//! the two adjacent samples that bracket the target probability.

use log::debug;

use super::error::{SchedulerError, SchedulerResult};
use crate::api::DepartureEntry;
use crate::models::{parse_histogram, HistogramSample, RawHistogramRow, TimeOfDay, SECONDS_PER_DAY};

/// Brackets whose probabilities differ by less than this are treated as flat.
pub const DEGENERATE_BRACKET_EPSILON: f64 = 1e-10;

/// Evenly spaced targets `i / N` for `i in 0..N`. Starts at 0 and never reaches 1.
pub fn target_quantiles(train_count: u32) -> Vec<f64> {
    (0..train_count)
        .map(|i| f64::from(i) / f64::from(train_count))
        .collect()
}

/// Round a probability to four decimal places.
pub fn round_cdf(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

/// Forward-only scan over a histogram.
///
/// The cursor points at the upper sample of the current bracket. It starts at 1
/// and never moves backwards, so a full pass over ascending targets is linear
/// in the number of samples.
#[derive(Debug)]
pub struct BracketCursor<'a> {
    samples: &'a [HistogramSample],
    index: usize,
}

impl<'a> BracketCursor<'a> {
    pub fn new(samples: &'a [HistogramSample]) -> SchedulerResult<Self> {
        if samples.len() < 2 {
            return Err(SchedulerError::InsufficientData {
                samples: samples.len(),
            });
        }
        Ok(Self { samples, index: 1 })
    }

    /// Index of the upper sample of the current bracket.
    pub fn position(&self) -> usize {
        self.index
    }

    /// Move forward while the upper sample is still below `target`, stopping
    /// at the last sample. Returns the `(lower, upper)` bracket.
    ///
    /// Assumes cumulative probabilities are non-decreasing in provider order;
    /// a dip will stop the scan early rather than be corrected.
    pub fn advance_to(&mut self, target: f64) -> (&'a HistogramSample, &'a HistogramSample) {
        let last = self.samples.len() - 1;
        while self.index < last && self.samples[self.index].cumulative_probability < target {
            self.index += 1;
        }
        (&self.samples[self.index - 1], &self.samples[self.index])
    }
}

/// Linearly interpolate the time at which the CDF reaches `target` inside the
/// bracket `(lower, upper)`.
///
/// A bracket whose upper time is earlier than its lower time straddles midnight
/// and is unrolled onto a continuous timeline before interpolating.
pub fn interpolate_time(lower: &HistogramSample, upper: &HistogramSample, target: f64) -> TimeOfDay {
    let lower_seconds = lower.time.seconds_from_midnight() as f64;
    let mut upper_seconds = upper.time.seconds_from_midnight() as f64;
    if upper_seconds < lower_seconds {
        upper_seconds += SECONDS_PER_DAY as f64;
    }

    let span = upper.cumulative_probability - lower.cumulative_probability;
    let seconds = if span.abs() < DEGENERATE_BRACKET_EPSILON {
        lower_seconds
    } else {
        let ratio = (target - lower.cumulative_probability) / span;
        lower_seconds + (upper_seconds - lower_seconds) * ratio
    };

    TimeOfDay::from_seconds(seconds.floor() as i64)
}

/// Compute `train_count` departures from typed histogram samples.
pub fn interpolate_departures(
    samples: &[HistogramSample],
    train_count: u32,
) -> SchedulerResult<Vec<DepartureEntry>> {
    if train_count == 0 {
        return Err(SchedulerError::NoTrains);
    }
    let mut cursor = BracketCursor::new(samples)?;

    debug!(
        "Interpolating {} departures over {} histogram samples",
        train_count,
        samples.len()
    );

    let departures = target_quantiles(train_count)
        .into_iter()
        .map(|target| {
            let (lower, upper) = cursor.advance_to(target);
            DepartureEntry {
                departure_time: interpolate_time(lower, upper, target),
                cdf_value: round_cdf(target),
            }
        })
        .collect();

    Ok(departures)
}

/// Compute `train_count` departures from raw provider rows.
///
/// Every input problem is reported before any interpolation happens: a zero
/// train count, fewer than two rows, then the first malformed row.
pub fn compute_departures(
    rows: &[RawHistogramRow],
    train_count: u32,
) -> SchedulerResult<Vec<DepartureEntry>> {
    if train_count == 0 {
        return Err(SchedulerError::NoTrains);
    }
    if rows.len() < 2 {
        return Err(SchedulerError::InsufficientData { samples: rows.len() });
    }

    let samples = parse_histogram(rows)?;
    interpolate_departures(&samples, train_count)
}
