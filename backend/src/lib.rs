//! # Subway Scheduler Backend
//!
//! Turns the daily distribution of a subway line's train traffic into a
//! concrete list of evenly spaced departure times, and serves the result over
//! a REST API.
//!
//! ## Architecture
//!
//! - [`scheduler`]: The CDF interpolator and its error taxonomy (pure, synchronous)
//! - [`models`]: Time-of-day handling and histogram rows
//! - [`api`]: Identifiers and response DTOs
//! - [`db`]: Repository traits for the histogram provider, plus the in-memory backend
//! - [`services`]: Orchestration between repositories and the scheduler
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! ## Example
//!
//! ```
//! use subway_scheduler::models::RawHistogramRow;
//! use subway_scheduler::scheduler::compute_departures;
//!
//! let rows = vec![
//!     RawHistogramRow::new("05:30:00", 0.0, "0.0"),
//!     RawHistogramRow::new("06:00:00", 0.0, "0.5"),
//!     RawHistogramRow::new("06:30:00", 0.0, "1.0"),
//! ];
//! let departures = compute_departures(&rows, 2).unwrap();
//! assert_eq!(departures[1].departure_time.to_string(), "06:00:00");
//! ```

pub mod api;

pub mod db;
pub mod models;

pub mod scheduler;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
