pub mod command_executor;

pub use command_executor::{
    CommandExecutor, CommandExecutorError, CommandRunner, CommandSpec, ExecutionResult,
    OutputMode,
};

#[cfg(test)]
pub use command_executor::MockCommandRunner;
