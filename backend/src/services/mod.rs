//! Service layer for business logic and orchestration.
//!
//! Services sit between the HTTP handlers and the repositories: they fetch
//! data, call into the scheduler and shape the results.

pub mod departures;

pub use departures::{fetch_histogram, get_departure_times, ServiceError};

use crate::db::repository::{FullRepository, RepositoryResult};

/// Check if the repository backend is healthy.
pub async fn health_check<R: FullRepository + ?Sized>(repo: &R) -> RepositoryResult<bool> {
    repo.health_check().await
}
