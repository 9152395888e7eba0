//! HTTP error handling and response types.
//!
//! Translates the scheduler and repository error taxonomies into status codes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::db::repository::RepositoryError;
use crate::scheduler::SchedulerError;
use crate::services::ServiceError;

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Scheduling error
    Scheduler(SchedulerError),
    /// Repository error
    Repository(RepositoryError),
}

impl AppError {
    /// Status code and body for this error.
    pub fn to_status_and_body(&self) -> (StatusCode, ApiError) {
        match self {
            AppError::Scheduler(e) => scheduler_status(e),
            AppError::Repository(e) => {
                let body = ApiError::new(
                    if e.is_not_found() { "NOT_FOUND" } else { "REPOSITORY_ERROR" },
                    e.to_string(),
                );
                if e.is_not_found() {
                    (StatusCode::NOT_FOUND, body)
                } else {
                    (StatusCode::INTERNAL_SERVER_ERROR, body)
                }
            }
        }
    }
}

fn scheduler_status(e: &SchedulerError) -> (StatusCode, ApiError) {
    let message = e.to_string();
    match e {
        SchedulerError::NoTrains => (StatusCode::NOT_FOUND, ApiError::new("NO_TRAINS", message)),
        SchedulerError::InvalidDirection { .. } => (
            StatusCode::BAD_REQUEST,
            ApiError::new("INVALID_DIRECTION", message).with_details("bound_to must be 0 or 1"),
        ),
        SchedulerError::MalformedTime { .. } | SchedulerError::MalformedProbability { .. } => (
            StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::new("MALFORMED_HISTOGRAM", message),
        ),
        SchedulerError::InsufficientData { .. } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::new("INSUFFICIENT_DATA", message),
        ),
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = self.to_status_and_body();
        (status, Json(error)).into_response()
    }
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        AppError::Repository(err)
    }
}

impl From<SchedulerError> for AppError {
    fn from(err: SchedulerError) -> Self {
        AppError::Scheduler(err)
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Scheduler(e) => AppError::Scheduler(e),
            ServiceError::Repository(e) => AppError::Repository(e),
        }
    }
}
