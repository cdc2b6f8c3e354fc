use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use validator::Validate;

use crate::domain::entities::{
    BuildSettings, Directories, Environment, Repository, Secrets, ServerSettings,
};

pub const REPOSITORIES_FILE: &str = "repositories.json";
pub const DIRECTORIES_FILE: &str = "directories.json";
pub const SERVER_SETTINGS_FILE: &str = "iis-settings.json";
pub const BUILD_SETTINGS_FILE: &str = "build-settings.json";
pub const SECRETS_FILE: &str = "secrets.json";

/// Configuration store related errors
#[derive(Debug, Error)]
pub enum ConfigStoreError {
    #[error("Configuration file not found at path: {0}")]
    ConfigFileNotFound(PathBuf),

    #[error("Configuration file read failed: {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON parsing failed: {path}: {source}")]
    JsonParsingFailed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Configuration validation failed: {path}: {message}")]
    ValidationFailed { path: PathBuf, message: String },

    #[error("Repository name '{name}' is configured more than once in {path}")]
    DuplicateRepository { name: String, path: PathBuf },
}

/// Loads the JSON configuration files from one directory
pub struct ConfigStore {
    config_dir: PathBuf,
}

impl ConfigStore {
    pub fn new(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
        }
    }

    /// Read and validate every configuration file
    pub fn load(&self) -> Result<Environment, ConfigStoreError> {
        tracing::debug!("Loading configuration from {}", self.config_dir.display());

        let repositories = self.read_repositories()?;
        let directories: Directories = self.read_validated(DIRECTORIES_FILE)?;
        let server: ServerSettings = self.read_validated(SERVER_SETTINGS_FILE)?;
        let build: BuildSettings = self.read_validated(BUILD_SETTINGS_FILE)?;
        let secrets: Secrets = self.read_validated(SECRETS_FILE)?;

        let environment = Environment::new(repositories, directories, server, build, secrets);
        if let Some(name) = environment.duplicate_repository_name() {
            return Err(ConfigStoreError::DuplicateRepository {
                name: name.to_string(),
                path: self.config_dir.join(REPOSITORIES_FILE),
            });
        }

        tracing::debug!(
            "Loaded {} repositories ({} modules)",
            environment.repositories.len(),
            environment.modules().count()
        );
        Ok(environment)
    }

    fn read_repositories(&self) -> Result<Vec<Repository>, ConfigStoreError> {
        let path = self.config_dir.join(REPOSITORIES_FILE);
        let repositories: Vec<Repository> = self.read_json(&path)?;

        for (index, repository) in repositories.iter().enumerate() {
            repository
                .validate()
                .map_err(|e| ConfigStoreError::ValidationFailed {
                    path: path.clone(),
                    message: format!("entry {} ('{}'): {}", index, repository.name, e),
                })?;
        }

        Ok(repositories)
    }

    fn read_validated<T>(&self, file_name: &str) -> Result<T, ConfigStoreError>
    where
        T: DeserializeOwned + Validate,
    {
        let path = self.config_dir.join(file_name);
        let value: T = self.read_json(&path)?;
        value
            .validate()
            .map_err(|e| ConfigStoreError::ValidationFailed {
                path: path.clone(),
                message: e.to_string(),
            })?;
        Ok(value)
    }

    fn read_json<T: DeserializeOwned>(&self, path: &Path) -> Result<T, ConfigStoreError> {
        if !path.exists() {
            return Err(ConfigStoreError::ConfigFileNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigStoreError::ReadFailed {
            path: path.to_path_buf(),
            source: e,
        })?;

        serde_json::from_str(&content).map_err(|e| ConfigStoreError::JsonParsingFailed {
            path: path.to_path_buf(),
            source: e,
        })
    }
}
