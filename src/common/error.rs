use thiserror::Error;

use crate::application::use_cases::link_modules::LinkModulesError;
use crate::infrastructure::filesystem::config_store::ConfigStoreError;
use crate::infrastructure::process::CommandExecutorError;

type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

/// Errors surfaced by the setup commands
///
/// Layer errors convert into this type; the CLI reports its `Display` form.
#[derive(Error, Debug)]
pub enum DevSetupError {
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ConfigStoreError),

    #[error("{message} ({repository_name}): {source}")]
    RepositoryError {
        message: String,
        repository_name: String,
        #[source]
        source: BoxedSource,
    },

    #[error("Command '{command}' could not be run: {source}")]
    CommandError {
        command: String,
        #[source]
        source: CommandExecutorError,
    },

    #[error("Module link failed: {0}")]
    LinkError(#[from] LinkModulesError),
}

impl DevSetupError {
    pub fn repository_error(
        message: impl Into<String>,
        repository_name: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::RepositoryError {
            message: message.into(),
            repository_name: repository_name.into(),
            source: Box::new(source),
        }
    }

    /// Name of the repository the error concerns, if any
    pub fn repository_name(&self) -> Option<&str> {
        match self {
            Self::RepositoryError {
                repository_name, ..
            } => Some(repository_name),
            _ => None,
        }
    }
}

impl From<CommandExecutorError> for DevSetupError {
    fn from(error: CommandExecutorError) -> Self {
        let command = match &error {
            CommandExecutorError::SpawnFailed { command, .. } => command.clone(),
            CommandExecutorError::InvalidCommand(command) => command.clone(),
        };
        Self::CommandError {
            command,
            source: error,
        }
    }
}
