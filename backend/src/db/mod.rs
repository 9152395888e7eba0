//! Database module for the scheduler's data sources.
//!
//! This module abstracts the upstream histogram provider and line metadata
//! behind the Repository pattern, so storage backends can be swapped easily.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  HTTP Layer (http/)                                      │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Service Layer (services/) - Departure orchestration     │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Repository Traits (repository/) - Abstract Interface    │
//! │  - LineRepository (train count, route shape, ETAs)       │
//! │  - HistogramRepository (round-trip / circular CDFs)      │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌──────────────────────────────────────────────┐
//!     │             Local Repository                  │
//!     │         (in-memory, JSON seeded)              │
//!     └──────────────────────────────────────────────┘
//! ```

pub mod factory;
pub mod models;
pub mod repo_config;
pub mod repositories;
pub mod repository;

pub use factory::{RepositoryFactory, RepositoryType};
pub use repo_config::RepositoryConfig;
pub use repositories::LocalRepository;
pub use repository::{
    ErrorContext, FullRepository, HistogramRepository, LineRepository, RepositoryError,
    RepositoryResult,
};

use anyhow::{Context, Result};
use log::{info, warn};
use std::sync::{Arc, OnceLock};

/// Global repository instance initialized once per process.
static REPOSITORY: OnceLock<Arc<dyn FullRepository>> = OnceLock::new();

fn create_selected_repository() -> RepositoryResult<Arc<dyn FullRepository>> {
    match RepositoryConfig::from_default_location() {
        Ok(config) => RepositoryFactory::from_repository_config(&config),
        Err(e) => {
            warn!("{}; falling back to environment configuration", e);
            RepositoryFactory::from_env()
        }
    }
}

/// Initialize the global repository singleton.
///
/// Uses `repository.toml` from the standard locations when present, otherwise
/// the `REPOSITORY_TYPE` / `REPOSITORY_SEED` environment variables.
pub fn init_repository() -> Result<()> {
    if REPOSITORY.get().is_some() {
        return Ok(());
    }

    let repo = create_selected_repository().context("Failed to initialize repository")?;
    if REPOSITORY.set(repo).is_ok() {
        info!("Repository initialized");
    }
    Ok(())
}

/// Get a reference to the global repository instance.
pub fn get_repository() -> Result<&'static Arc<dyn FullRepository>> {
    if REPOSITORY.get().is_none() {
        init_repository()?;
    }

    REPOSITORY
        .get()
        .context("Database not initialized. Call init_repository() first.")
}
