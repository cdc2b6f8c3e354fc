use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Version-control operations used by the clone and update use cases
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ScmOperations: Send + Sync {
    /// Clone `url` into `dest_path`
    async fn clone_repository(&self, url: &str, dest_path: &Path) -> Result<(), ScmError>;

    /// Pull `branch` from `remote` inside the working copy at `repo_path`
    async fn pull(&self, repo_path: &Path, remote: &str, branch: &str) -> Result<(), ScmError>;
}

/// Failures of a clone or pull
#[derive(Debug, thiserror::Error)]
pub enum ScmError {
    #[error("Clone failed: {stderr}")]
    CloneFailed { stderr: String },

    #[error("Pull of '{branch}' failed: {stderr}")]
    PullFailed { branch: String, stderr: String },

    #[error("'{executable}' not found; is it installed and on PATH?")]
    ExecutableNotFound { executable: String },

    #[error("Path is not valid UTF-8: {}", .0.display())]
    InvalidPath(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ScmError {
    pub fn clone_failed(stderr: impl Into<String>) -> Self {
        Self::CloneFailed {
            stderr: stderr.into(),
        }
    }

    pub fn pull_failed(branch: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self::PullFailed {
            branch: branch.into(),
            stderr: stderr.into(),
        }
    }

    pub fn executable_not_found(executable: impl Into<String>) -> Self {
        Self::ExecutableNotFound {
            executable: executable.into(),
        }
    }
}
