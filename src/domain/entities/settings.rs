use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use validator::{Validate, ValidationError};

/// Credentials embedded into remote URLs when cloning
#[derive(Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct Secrets {
    #[validate(length(min = 1))]
    pub username: String,

    #[validate(length(min = 1))]
    pub password: String,
}

impl Secrets {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Secrets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Secrets")
            .field("username", &self.username)
            .field("password", &"****")
            .finish()
    }
}

/// Filesystem roots
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Directories {
    /// Parent directory of every working copy
    #[validate(custom(function = "non_empty_path"))]
    pub repositories_root: PathBuf,

    /// Directory where module links are created
    #[validate(custom(function = "non_empty_path"))]
    pub platform_modules_root: PathBuf,
}

impl Directories {
    pub fn new(repositories_root: impl Into<PathBuf>, platform_modules_root: impl Into<PathBuf>) -> Self {
        Self {
            repositories_root: repositories_root.into(),
            platform_modules_root: platform_modules_root.into(),
        }
    }
}

/// Application pool recycling, read from `iis-settings.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ServerSettings {
    #[serde(rename = "appcmdPath")]
    #[validate(custom(function = "non_empty_path"))]
    pub app_pool_command_path: PathBuf,

    #[serde(rename = "apppool")]
    #[validate(length(min = 1))]
    pub app_pool_name: String,
}

impl ServerSettings {
    pub fn new(app_pool_command_path: impl Into<PathBuf>, app_pool_name: impl Into<String>) -> Self {
        Self {
            app_pool_command_path: app_pool_command_path.into(),
            app_pool_name: app_pool_name.into(),
        }
    }
}

/// External build tools, read from `build-settings.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct BuildSettings {
    #[serde(rename = "nugetPath")]
    #[validate(custom(function = "non_empty_path"))]
    pub package_restore_tool_path: PathBuf,

    #[serde(rename = "msbuildPath")]
    #[validate(custom(function = "non_empty_path"))]
    pub build_tool_path: PathBuf,
}

impl BuildSettings {
    pub fn new(
        package_restore_tool_path: impl Into<PathBuf>,
        build_tool_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            package_restore_tool_path: package_restore_tool_path.into(),
            build_tool_path: build_tool_path.into(),
        }
    }
}

fn non_empty_path(path: &PathBuf) -> Result<(), ValidationError> {
    if path.as_os_str().is_empty() {
        return Err(ValidationError::new("empty_path"));
    }
    Ok(())
}
