//! Histogram provider trait.
//!
//! Mirrors the two stored procedures that turn a line's timetable into a
//! cumulative distribution of train traffic over one operating day.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::api::{Direction, LineId};
use crate::models::RawHistogramRow;

/// Repository trait for departure histograms.
///
/// Rows are returned in provider order (ascending service time) and are not
/// re-sorted by callers.
#[async_trait]
pub trait HistogramRepository: Send + Sync {
    /// Histogram for an out-and-back line. Both directions share one histogram.
    async fn fetch_round_trip_histogram(
        &self,
        line_id: LineId,
    ) -> RepositoryResult<Vec<RawHistogramRow>>;

    /// Histogram for a loop line in the given direction.
    async fn fetch_circular_histogram(
        &self,
        line_id: LineId,
        direction: Direction,
    ) -> RepositoryResult<Vec<RawHistogramRow>>;
}
