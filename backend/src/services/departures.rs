//! Departure-times service.
//!
//! Gathers everything the interpolator needs from the repository, runs it,
//! and attaches the per-station travel times that are passed through to the
//! response untouched.

use log::{info, warn};

use crate::api::{DepartureTimesData, Direction, EtaEntry, LineId, RouteShape};
use crate::db::models::StationEta;
use crate::db::repository::{FullRepository, RepositoryError, RepositoryResult};
use crate::models::{format_travel_time, RawHistogramRow};
use crate::scheduler::{compute_departures, SchedulerError};

/// Errors surfaced by the service layer.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Scheduler(#[from] SchedulerError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Compute the departure schedule of a line in one direction.
///
/// Checks run in a fixed order: the line must have trains, `bound_to` must be
/// 0 or 1, then the route shape decides which histogram is fetched. A
/// round-trip line has one histogram for both directions.
///
/// # Arguments
/// * `repo` - Repository implementation
/// * `line_id` - Line to schedule
/// * `bound_to` - Raw direction code from the request
pub async fn get_departure_times<R: FullRepository + ?Sized>(
    repo: &R,
    line_id: LineId,
    bound_to: i64,
) -> Result<DepartureTimesData, ServiceError> {
    let result = build_departure_times(repo, line_id, bound_to).await;
    match &result {
        Ok(data) => info!(
            "Computed {} departures for line {} ({}, bound_to={})",
            data.departure_times.len(),
            line_id,
            data.route_shape,
            bound_to
        ),
        Err(e) => warn!(
            "Departure computation failed for line {} (bound_to={}): {}",
            line_id, bound_to, e
        ),
    }
    result
}

async fn build_departure_times<R: FullRepository + ?Sized>(
    repo: &R,
    line_id: LineId,
    bound_to: i64,
) -> Result<DepartureTimesData, ServiceError> {
    let train_count = repo.count_trains(line_id).await?;
    if train_count == 0 {
        return Err(SchedulerError::NoTrains.into());
    }

    let direction = Direction::try_from(bound_to)?;
    let route_shape = repo.get_route_shape(line_id).await?;
    let rows = fetch_histogram(repo, line_id, route_shape, direction).await?;

    let departure_times = compute_departures(&rows, train_count)?;

    let etas = repo
        .list_station_etas(line_id)
        .await?
        .into_iter()
        .map(format_eta)
        .collect();

    Ok(DepartureTimesData {
        line_id,
        train_count,
        departure_times,
        etas,
        route_shape,
    })
}

/// Fetch the histogram matching a line's topology.
pub async fn fetch_histogram<R: FullRepository + ?Sized>(
    repo: &R,
    line_id: LineId,
    route_shape: RouteShape,
    direction: Direction,
) -> RepositoryResult<Vec<RawHistogramRow>> {
    match route_shape {
        RouteShape::Circular => repo.fetch_circular_histogram(line_id, direction).await,
        RouteShape::RoundTrip => repo.fetch_round_trip_histogram(line_id).await,
    }
}

fn format_eta(eta: StationEta) -> EtaEntry {
    EtaEntry {
        et: format_travel_time(eta.travel_seconds),
        station_name: eta.station_name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::LineRecord;
    use crate::db::repositories::LocalRepository;

    fn rows(points: &[(&str, &str)]) -> Vec<RawHistogramRow> {
        points
            .iter()
            .map(|(t, p)| RawHistogramRow::new(*t, 1.0, *p))
            .collect()
    }

    fn repo_with_line(shape: RouteShape, trains: u32) -> LocalRepository {
        let repo = LocalRepository::new();
        repo.insert_line(LineRecord {
            id: LineId::new(1),
            name: "Line 1".to_string(),
            route_shape: shape,
            train_count: trains,
        });
        repo
    }

    #[tokio::test]
    async fn test_round_trip_ignores_direction() {
        let repo = repo_with_line(RouteShape::RoundTrip, 2);
        repo.set_round_trip_histogram(
            LineId::new(1),
            rows(&[("05:30:00", "0.0"), ("06:00:00", "0.5"), ("06:30:00", "1.0")]),
        );

        let outbound = get_departure_times(&repo, LineId::new(1), 0).await.unwrap();
        let inbound = get_departure_times(&repo, LineId::new(1), 1).await.unwrap();
        assert_eq!(outbound.departure_times, inbound.departure_times);
        assert_eq!(outbound.route_shape, RouteShape::RoundTrip);
        assert_eq!(outbound.departure_times[1].departure_time.to_string(), "06:00:00");
    }

    #[tokio::test]
    async fn test_circular_uses_direction() {
        let repo = repo_with_line(RouteShape::Circular, 1);
        repo.set_circular_histogram(
            LineId::new(1),
            Direction::Outbound,
            rows(&[("05:00:00", "0.0"), ("06:00:00", "1.0")]),
        );
        repo.set_circular_histogram(
            LineId::new(1),
            Direction::Inbound,
            rows(&[("07:00:00", "0.0"), ("08:00:00", "1.0")]),
        );

        let outbound = get_departure_times(&repo, LineId::new(1), 0).await.unwrap();
        let inbound = get_departure_times(&repo, LineId::new(1), 1).await.unwrap();
        assert_eq!(outbound.departure_times[0].departure_time.to_string(), "05:00:00");
        assert_eq!(inbound.departure_times[0].departure_time.to_string(), "07:00:00");
    }

    #[tokio::test]
    async fn test_no_trains_checked_before_direction() {
        let repo = repo_with_line(RouteShape::RoundTrip, 0);
        let err = get_departure_times(&repo, LineId::new(1), 7).await.unwrap_err();
        assert!(matches!(err, ServiceError::Scheduler(SchedulerError::NoTrains)));
    }

    #[tokio::test]
    async fn test_invalid_direction() {
        let repo = repo_with_line(RouteShape::RoundTrip, 3);
        let err = get_departure_times(&repo, LineId::new(1), 2).await.unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Scheduler(SchedulerError::InvalidDirection { value: 2 })
        ));
    }

    #[tokio::test]
    async fn test_missing_histogram_is_insufficient_data() {
        let repo = repo_with_line(RouteShape::Circular, 3);
        let err = get_departure_times(&repo, LineId::new(1), 1).await.unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Scheduler(SchedulerError::InsufficientData { samples: 0 })
        ));
    }

    #[test]
    fn test_format_eta() {
        let entry = format_eta(StationEta::new("City Hall", 95));
        assert_eq!(entry.station_name, "City Hall");
        assert_eq!(entry.et, "01:35");
    }
}
