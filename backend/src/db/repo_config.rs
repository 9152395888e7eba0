//! Repository configuration file support.
//!
//! Reads the `[repository]` table of a `repository.toml` file:
//!
//! ```toml
//! [repository]
//! type = "local"
//! seed_path = "data/lines.json"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::factory::RepositoryType;
use super::repository::RepositoryError;

/// Environment variable that overrides `repository.seed_path`.
pub const SEED_PATH_ENV: &str = "REPOSITORY_SEED";

/// Repository configuration from file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryConfig {
    pub repository: RepositorySettings,
}

/// Repository type settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositorySettings {
    #[serde(rename = "type")]
    pub repo_type: String,
    /// JSON seed file loaded into the local repository at startup
    #[serde(default)]
    pub seed_path: Option<PathBuf>,
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            repository: RepositorySettings {
                repo_type: "local".to_string(),
                seed_path: None,
            },
        }
    }
}

impl RepositoryConfig {
    /// Load repository configuration from a TOML file.
    ///
    /// A relative `seed_path` is resolved against the directory of the file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, RepositoryError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            RepositoryError::configuration(format!("Failed to read config file: {}", e))
        })?;

        let mut config: RepositoryConfig = content.parse()?;
        if let (Some(seed), Some(dir)) = (config.repository.seed_path.as_ref(), path.parent()) {
            if seed.is_relative() {
                config.repository.seed_path = Some(dir.join(seed));
            }
        }

        Ok(config)
    }

    /// Load repository configuration from the default location.
    ///
    /// Searches for `repository.toml` in:
    /// 1. Current directory
    /// 2. `backend/` directory
    /// 3. Parent directory
    pub fn from_default_location() -> Result<Self, RepositoryError> {
        let search_paths = [
            PathBuf::from("repository.toml"),
            PathBuf::from("backend/repository.toml"),
            PathBuf::from("../repository.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Err(RepositoryError::configuration(
            "No repository.toml found in standard locations",
        ))
    }

    /// Get the repository type from configuration.
    pub fn repository_type(&self) -> Result<RepositoryType, RepositoryError> {
        RepositoryType::from_str(&self.repository.repo_type).map_err(|e| {
            RepositoryError::configuration(format!("Invalid repository type: {}", e))
        })
    }

    /// Seed file to load, with `REPOSITORY_SEED` taking precedence over the file.
    pub fn seed_path(&self) -> Option<PathBuf> {
        std::env::var_os(SEED_PATH_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .or_else(|| self.repository.seed_path.clone())
    }
}

impl FromStr for RepositoryConfig {
    type Err = RepositoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        toml::from_str(s).map_err(|e| {
            RepositoryError::configuration(format!("Failed to parse config file: {}", e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_local_config() {
        let toml = r#"
[repository]
type = "local"
"#;

        let config: RepositoryConfig = toml.parse().unwrap();
        assert_eq!(config.repository.repo_type, "local");
        assert_eq!(config.repository_type().unwrap(), RepositoryType::Local);
        assert!(config.repository.seed_path.is_none());
    }

    #[test]
    fn test_parse_seed_path() {
        let toml = r#"
[repository]
type = "local"
seed_path = "/srv/lines.json"
"#;

        let config: RepositoryConfig = toml.parse().unwrap();
        assert_eq!(
            config.repository.seed_path,
            Some(PathBuf::from("/srv/lines.json"))
        );
    }

    #[test]
    fn test_unknown_type_is_configuration_error() {
        let config: RepositoryConfig = "[repository]\ntype = \"mysql\"\n".parse().unwrap();
        let err = config.repository_type().unwrap_err();
        assert!(matches!(err, RepositoryError::ConfigurationError { .. }));
    }

    #[test]
    fn test_missing_table_fails() {
        assert!("type = \"local\"".parse::<RepositoryConfig>().is_err());
    }

    #[test]
    fn test_relative_seed_resolved_against_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("repository.toml");
        fs::write(&path, "[repository]\ntype = \"local\"\nseed_path = \"lines.json\"\n").unwrap();

        let config = RepositoryConfig::from_file(&path).unwrap();
        assert_eq!(
            config.repository.seed_path,
            Some(dir.path().join("lines.json"))
        );
    }
}
