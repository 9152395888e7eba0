//! Departure-time scheduling.
//!
//! Pure, synchronous computation: a histogram in, a list of departures out.
//! Topology selection and data access belong to the caller (see
//! [`crate::services::departures`]).

pub mod error;
pub mod interpolator;

pub use error::{SchedulerError, SchedulerResult};
pub use interpolator::{
    compute_departures, interpolate_departures, interpolate_time, round_cdf, target_quantiles,
    BracketCursor, DEGENERATE_BRACKET_EPSILON,
};

#[cfg(test)]
mod tests;
