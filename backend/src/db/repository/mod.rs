//! Repository trait definitions for the scheduler's data sources.
//!
//! - [`error`]: Error types for repository operations
//! - [`line`]: Line metadata (train count, route shape, station ETAs)
//! - [`histogram`]: The upstream histogram provider

pub mod error;
pub mod histogram;
pub mod line;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};

pub use histogram::HistogramRepository;
pub use line::LineRepository;

/// Composite trait bound for a complete repository implementation.
///
/// Automatically implemented for any type that implements both traits.
pub trait FullRepository: LineRepository + HistogramRepository {}

impl<T> FullRepository for T where T: LineRepository + HistogramRepository {}
