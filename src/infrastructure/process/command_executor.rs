use async_trait::async_trait;
use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Instant;
use thiserror::Error;
use tokio::process::Command as TokioCommand;

/// Command executor errors
#[derive(Debug, Error)]
pub enum CommandExecutorError {
    #[error("Failed to spawn '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid command: {0}")]
    InvalidCommand(String),
}

/// What happens to the child's stdout and stderr
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Discard both streams
    Suppressed,
    /// Share the parent's terminal
    Inherited,
}

/// A single external command: program, arguments, output handling
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: PathBuf,
    pub args: Vec<OsString>,
    pub working_directory: Option<PathBuf>,
    pub output: OutputMode,
}

impl CommandSpec {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            working_directory: None,
            output: OutputMode::Inherited,
        }
    }

    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn with_working_directory<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.working_directory = Some(dir.as_ref().to_path_buf());
        self
    }

    pub fn suppress_output(mut self) -> Self {
        self.output = OutputMode::Suppressed;
        self
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

/// Result of command execution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutionResult {
    /// Exit code of the process; -1 when terminated without one
    pub exit_code: i32,

    /// Execution time in milliseconds
    pub execution_time_ms: u64,
}

impl ExecutionResult {
    pub fn new(exit_code: i32, execution_time_ms: u64) -> Self {
        Self {
            exit_code,
            execution_time_ms,
        }
    }

    /// Whether the command was successful (exit code 0)
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Runs external commands to completion
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(&self, command: &CommandSpec) -> Result<ExecutionResult, CommandExecutorError>;
}

/// Command executor for running external processes
#[derive(Debug, Default, Clone, Copy)]
pub struct CommandExecutor;

impl CommandExecutor {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CommandRunner for CommandExecutor {
    async fn run(&self, command: &CommandSpec) -> Result<ExecutionResult, CommandExecutorError> {
        if command.program.as_os_str().is_empty() {
            return Err(CommandExecutorError::InvalidCommand(command.to_string()));
        }

        let start_time = Instant::now();

        let mut cmd = TokioCommand::new(&command.program);
        cmd.args(&command.args);

        if let Some(working_dir) = &command.working_directory {
            cmd.current_dir(working_dir);
        }

        match command.output {
            OutputMode::Suppressed => {
                cmd.stdout(Stdio::null()).stderr(Stdio::null());
            }
            OutputMode::Inherited => {
                cmd.stdout(Stdio::inherit()).stderr(Stdio::inherit());
            }
        }
        cmd.stdin(Stdio::null());

        tracing::debug!("Running: {}", command);

        let status = cmd
            .status()
            .await
            .map_err(|e| CommandExecutorError::SpawnFailed {
                command: command.to_string(),
                source: e,
            })?;

        let execution_time = start_time.elapsed().as_millis() as u64;
        let exit_code = status.code().unwrap_or(-1);
        tracing::debug!("'{}' exited with {} after {}ms", command, exit_code, execution_time);

        Ok(ExecutionResult::new(exit_code, execution_time))
    }
}
