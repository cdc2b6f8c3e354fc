use super::scm_interface::{ScmError, ScmOperations};
use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;

/// Git implementation of SCM operations, driving the `git` executable
pub struct GitScm {
    git_executable: String,
}

impl Default for GitScm {
    fn default() -> Self {
        Self {
            git_executable: "git".to_string(),
        }
    }
}

impl GitScm {
    /// Create a new Git SCM instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new Git SCM instance with custom executable path
    pub fn with_executable(executable: impl Into<String>) -> Self {
        Self {
            git_executable: executable.into(),
        }
    }

    /// Execute a git command in the given directory
    async fn execute_git_command(
        &self,
        args: &[&str],
        working_dir: Option<&Path>,
    ) -> Result<std::process::Output, ScmError> {
        let mut cmd = Command::new(&self.git_executable);
        cmd.args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            // never block on an interactive credential prompt
            .env("GIT_TERMINAL_PROMPT", "0");

        if let Some(dir) = working_dir {
            cmd.current_dir(dir);
        }

        let output = cmd.output().await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ScmError::executable_not_found(&self.git_executable)
            } else {
                ScmError::from(e)
            }
        })?;
        Ok(output)
    }
}

#[async_trait]
impl ScmOperations for GitScm {
    async fn clone_repository(&self, url: &str, dest_path: &Path) -> Result<(), ScmError> {
        let dest = dest_path
            .to_str()
            .ok_or_else(|| ScmError::InvalidPath(dest_path.to_path_buf()))?;

        tracing::debug!("{} clone <remote> {}", self.git_executable, dest);
        let output = self
            .execute_git_command(&["clone", url, dest], None)
            .await?;

        if !output.status.success() {
            // the command line carries credentials, so only stderr is reported
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ScmError::clone_failed(format!(
                "exit code {} cloning into {}: {}",
                output.status.code().unwrap_or(-1),
                dest,
                stderr.trim()
            )));
        }

        Ok(())
    }

    async fn pull(&self, repo_path: &Path, remote: &str, branch: &str) -> Result<(), ScmError> {
        let args = ["pull", remote, branch];
        tracing::debug!(
            "{} {} (in {})",
            self.git_executable,
            args.join(" "),
            repo_path.display()
        );

        let output = self.execute_git_command(&args, Some(repo_path)).await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ScmError::pull_failed(
                branch,
                format!(
                    "exit code {}: {}",
                    output.status.code().unwrap_or(-1),
                    stderr.trim()
                ),
            ));
        }

        Ok(())
    }
}
