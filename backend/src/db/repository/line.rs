//! Line repository trait for the line-level data the scheduler reads.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::api::{LineId, RouteShape};
use crate::db::models::StationEta;

/// Repository trait for line metadata.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait LineRepository: Send + Sync {
    /// Check if the backing store is reachable.
    ///
    /// # Returns
    /// - `Ok(true)` if connection is healthy
    /// - `Ok(false)` if connection is unhealthy but no error occurred
    /// - `Err(RepositoryError)` if an error occurred during the check
    async fn health_check(&self) -> RepositoryResult<bool>;

    /// Number of trains assigned to a line. Unknown lines have zero trains.
    async fn count_trains(&self, line_id: LineId) -> RepositoryResult<u32>;

    /// Route topology of a line.
    ///
    /// # Returns
    /// * `Ok(RouteShape)` - The line's shape
    /// * `Err(RepositoryError::NotFound)` - If the line doesn't exist
    async fn get_route_shape(&self, line_id: LineId) -> RepositoryResult<RouteShape>;

    /// Expected travel time to every station on a line.
    async fn list_station_etas(&self, line_id: LineId) -> RepositoryResult<Vec<StationEta>>;
}
