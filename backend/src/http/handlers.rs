//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for business logic.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use tracing::instrument;

use super::dto::{DepartureTimesData, DepartureTimesQuery, HealthResponse};
use super::error::AppError;
use super::state::AppState;
use crate::api::LineId;
use crate::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// GET /health
///
/// Health check endpoint to verify the service is running and the repository is reachable.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let db_status = match services::health_check(state.repository.as_ref()).await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: db_status,
    }))
}

/// GET /scheduler/line/{line_id}/departure-times?bound_to={0|1}
///
/// Evenly spaced departure times for every train on the line, plus the
/// expected travel time to each station.
#[instrument(skip(state))]
pub async fn get_departure_times(
    State(state): State<AppState>,
    Path(line_id): Path<i64>,
    Query(query): Query<DepartureTimesQuery>,
) -> HandlerResult<DepartureTimesData> {
    let data = services::get_departure_times(
        state.repository.as_ref(),
        LineId::new(line_id),
        query.bound_to,
    )
    .await?;

    Ok(Json(data))
}
