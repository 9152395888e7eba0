//! Error taxonomy for departure scheduling.

use thiserror::Error;

/// Result type for scheduling operations
pub type SchedulerResult<T> = std::result::Result<T, SchedulerError>;

/// Errors raised while turning a histogram into departure times.
///
/// All of these are structural or input problems; none is retried.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SchedulerError {
    /// The line has no trains (train count of zero)
    #[error("No trains found for this line")]
    NoTrains,

    /// Direction outside the accepted {0, 1} domain
    #[error("Invalid bound_to value: {value}")]
    InvalidDirection { value: i64 },

    /// Fewer than two histogram samples, so no bracket can be formed
    #[error("Insufficient histogram data: {samples} sample(s), at least 2 required")]
    InsufficientData { samples: usize },

    /// A raw time string could not be parsed into hour/minute/second
    #[error("Malformed time value '{raw}'")]
    MalformedTime { raw: String },

    /// A raw cumulative probability could not be parsed as a finite float
    #[error("Malformed cumulative probability '{raw}'")]
    MalformedProbability { raw: String },
}
