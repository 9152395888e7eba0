//! Data Transfer Objects for the HTTP API.
//!
//! Response payloads of the scheduler endpoints are re-exported from
//! [`crate::api`] since they already derive Serialize/Deserialize.

use serde::{Deserialize, Serialize};

pub use crate::api::{DepartureEntry, DepartureTimesData, EtaEntry};

/// Query parameters for the departure-times endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartureTimesQuery {
    /// Direction code, 0 or 1
    pub bound_to: i64,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Database connection status
    pub database: String,
}
