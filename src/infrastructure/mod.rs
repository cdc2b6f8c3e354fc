/// Infrastructure layer modules
///
/// This layer provides concrete implementations for external system interactions:
/// - SCM operations (clone, pull) over the `git` executable
/// - Process execution for the build and server tools
/// - File system operations (configuration files, module links)
pub mod filesystem;
pub mod process;
pub mod scm;

// Re-export commonly used types
pub use filesystem::config_store::{ConfigStore, ConfigStoreError};
pub use process::{CommandExecutor, CommandRunner, CommandSpec};
pub use scm::{GitScm, ScmError, ScmOperations};
