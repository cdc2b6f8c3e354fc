use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::application::services::PathResolver;
use crate::domain::entities::{BuildSettings, Environment, Repository};
use crate::infrastructure::process::{CommandRunner, CommandSpec};

/// Outcome of one build step, decided by exit code only
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Ok,
    Fail,
}

impl StepStatus {
    pub fn from_exit_code(exit_code: i32) -> Self {
        if exit_code == 0 {
            StepStatus::Ok
        } else {
            StepStatus::Fail
        }
    }
}

impl fmt::Display for StepStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepStatus::Ok => write!(f, "Ok"),
            StepStatus::Fail => write!(f, "Fail"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleBuild {
    pub name: String,
    pub path: PathBuf,
    pub restore: StepStatus,
    pub build: StepStatus,
}

/// Restore packages and build every module repository
pub struct BuildModulesUseCase<'a> {
    environment: &'a Environment,
    runner: Arc<dyn CommandRunner>,
}

impl<'a> BuildModulesUseCase<'a> {
    pub fn new(environment: &'a Environment, runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            environment,
            runner,
        }
    }

    /// Runs modules one after another; the build step runs even when the
    /// restore step failed
    pub async fn execute(&self) -> Vec<ModuleBuild> {
        let mut builds = Vec::new();
        for module in self.environment.modules() {
            builds.push(self.build_module(module).await);
        }
        builds
    }

    async fn build_module(&self, module: &Repository) -> ModuleBuild {
        let path = PathResolver::new(&self.environment.directories).repository_path(module);
        let settings = &self.environment.build;

        let restore = self.run_step(restore_command(settings, &path)).await;
        let build = self.run_step(build_command(settings, &path)).await;

        tracing::debug!(
            "'{}' - restore packages: {}, build: {}",
            module.name,
            restore,
            build
        );

        ModuleBuild {
            name: module.name.clone(),
            path,
            restore,
            build,
        }
    }

    async fn run_step(&self, command: CommandSpec) -> StepStatus {
        match self.runner.run(&command).await {
            Ok(result) => StepStatus::from_exit_code(result.exit_code),
            Err(e) => {
                tracing::warn!("{}", e);
                StepStatus::Fail
            }
        }
    }
}

fn restore_command(settings: &BuildSettings, repository_path: &Path) -> CommandSpec {
    CommandSpec::new(&settings.package_restore_tool_path)
        .arg("restore")
        .arg(repository_path)
        .suppress_output()
}

fn build_command(settings: &BuildSettings, repository_path: &Path) -> CommandSpec {
    CommandSpec::new(&settings.build_tool_path)
        .arg(repository_path)
        .suppress_output()
}
