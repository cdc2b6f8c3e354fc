//! Recording fakes for the SCM and process seams
//!
//! Unlike the `mockall` mocks used in unit tests, these keep a call history
//! that tests inspect after the fact.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use devsetup::infrastructure::process::command_executor::{
    CommandExecutorError, ExecutionResult,
};
use devsetup::infrastructure::{CommandRunner, CommandSpec, ScmError, ScmOperations};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScmCall {
    Clone { url: String, dest: PathBuf },
    Pull { repo: PathBuf, remote: String, branch: String },
}

/// Fake SCM that creates the destination directory on a successful clone
#[derive(Default)]
pub struct RecordingScm {
    calls: Mutex<Vec<ScmCall>>,
    failing_clones: HashSet<PathBuf>,
    failing_branches: HashSet<String>,
}

impl RecordingScm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_clone_of(mut self, dest: impl Into<PathBuf>) -> Self {
        self.failing_clones.insert(dest.into());
        self
    }

    pub fn failing_pull_of(mut self, branch: &str) -> Self {
        self.failing_branches.insert(branch.to_string());
        self
    }

    pub fn calls(&self) -> Vec<ScmCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn clone_calls(&self) -> Vec<(String, PathBuf)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                ScmCall::Clone { url, dest } => Some((url, dest)),
                ScmCall::Pull { .. } => None,
            })
            .collect()
    }

    pub fn pull_calls(&self) -> Vec<(PathBuf, String, String)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                ScmCall::Pull { repo, remote, branch } => Some((repo, remote, branch)),
                ScmCall::Clone { .. } => None,
            })
            .collect()
    }
}

#[async_trait]
impl ScmOperations for RecordingScm {
    async fn clone_repository(&self, url: &str, dest_path: &Path) -> Result<(), ScmError> {
        self.calls.lock().unwrap().push(ScmCall::Clone {
            url: url.to_string(),
            dest: dest_path.to_path_buf(),
        });

        if self.failing_clones.contains(dest_path) {
            return Err(ScmError::clone_failed("fatal: repository not found"));
        }
        std::fs::create_dir_all(dest_path)?;
        Ok(())
    }

    async fn pull(&self, repo_path: &Path, remote: &str, branch: &str) -> Result<(), ScmError> {
        self.calls.lock().unwrap().push(ScmCall::Pull {
            repo: repo_path.to_path_buf(),
            remote: remote.to_string(),
            branch: branch.to_string(),
        });

        if self.failing_branches.contains(branch) {
            return Err(ScmError::pull_failed(branch, "merge conflict"));
        }
        Ok(())
    }
}

/// Fake process runner answering with a fixed exit code per program
#[derive(Default)]
pub struct RecordingRunner {
    commands: Mutex<Vec<CommandSpec>>,
    exit_codes: HashMap<PathBuf, i32>,
    missing_programs: HashSet<PathBuf>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_exit_code(mut self, program: &str, exit_code: i32) -> Self {
        self.exit_codes.insert(PathBuf::from(program), exit_code);
        self
    }

    pub fn with_missing_program(mut self, program: &str) -> Self {
        self.missing_programs.insert(PathBuf::from(program));
        self
    }

    pub fn commands(&self) -> Vec<CommandSpec> {
        self.commands.lock().unwrap().clone()
    }

    pub fn command_lines(&self) -> Vec<String> {
        self.commands().iter().map(|c| c.to_string()).collect()
    }
}

#[async_trait]
impl CommandRunner for RecordingRunner {
    async fn run(&self, command: &CommandSpec) -> Result<ExecutionResult, CommandExecutorError> {
        self.commands.lock().unwrap().push(command.clone());

        if self.missing_programs.contains(&command.program) {
            return Err(CommandExecutorError::SpawnFailed {
                command: command.to_string(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
            });
        }

        let exit_code = self.exit_codes.get(&command.program).copied().unwrap_or(0);
        Ok(ExecutionResult::new(exit_code, 1))
    }
}
