//! Repository factory for dependency injection.
//!
//! Creates repository instances from runtime configuration.

use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use log::info;

use super::repo_config::RepositoryConfig;
use super::repositories::LocalRepository;
use super::repository::{FullRepository, RepositoryResult};

/// Repository type configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryType {
    /// In-memory local repository
    Local,
}

impl FromStr for RepositoryType {
    type Err = String;

    /// Parse repository type from string ("local", "memory").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "local" | "memory" => Ok(Self::Local),
            _ => Err(format!("Unknown repository type: {}", s)),
        }
    }
}

impl RepositoryType {
    /// Get repository type from the `REPOSITORY_TYPE` environment variable.
    /// Defaults to Local.
    pub fn from_env() -> Self {
        std::env::var("REPOSITORY_TYPE")
            .ok()
            .and_then(|val| val.parse().ok())
            .unwrap_or(Self::Local)
    }
}

/// Repository factory for creating repository instances.
///
/// # Example
/// ```
/// use subway_scheduler::db::RepositoryFactory;
///
/// let repo = RepositoryFactory::create_local();
/// ```
pub struct RepositoryFactory;

impl RepositoryFactory {
    /// Create an empty in-memory local repository.
    pub fn create_local() -> Arc<dyn FullRepository> {
        Arc::new(LocalRepository::new())
    }

    /// Create a local repository loaded from a JSON seed file.
    pub fn create_seeded<P: AsRef<Path>>(seed_path: P) -> RepositoryResult<Arc<dyn FullRepository>> {
        let repo = LocalRepository::from_seed_file(seed_path)?;
        Ok(Arc::new(repo))
    }

    /// Create a repository from a [`RepositoryConfig`].
    pub fn from_repository_config(
        config: &RepositoryConfig,
    ) -> RepositoryResult<Arc<dyn FullRepository>> {
        match config.repository_type()? {
            RepositoryType::Local => match config.seed_path() {
                Some(path) => {
                    info!("Seeding local repository from {}", path.display());
                    Self::create_seeded(path)
                }
                None => {
                    info!("Starting with an empty local repository");
                    Ok(Self::create_local())
                }
            },
        }
    }

    /// Create a repository from a TOML configuration file.
    pub fn from_config_file<P: AsRef<Path>>(
        config_path: P,
    ) -> RepositoryResult<Arc<dyn FullRepository>> {
        let config = RepositoryConfig::from_file(config_path)?;
        Self::from_repository_config(&config)
    }

    /// Create a repository from environment configuration only.
    ///
    /// Reads `REPOSITORY_TYPE` and `REPOSITORY_SEED`.
    pub fn from_env() -> RepositoryResult<Arc<dyn FullRepository>> {
        let config = match RepositoryType::from_env() {
            RepositoryType::Local => RepositoryConfig::default(),
        };
        Self::from_repository_config(&config)
    }
}
