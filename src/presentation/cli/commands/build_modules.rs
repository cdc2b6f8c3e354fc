use anyhow::Result;
use colored::{ColoredString, Colorize};
use std::sync::Arc;

use crate::application::use_cases::build_modules::{BuildModulesUseCase, StepStatus};
use crate::domain::entities::Environment;
use crate::infrastructure::process::CommandRunner;

/// Handler for the build-modules command
pub struct BuildModulesCommand {
    runner: Arc<dyn CommandRunner>,
}

impl BuildModulesCommand {
    pub fn new(runner: Arc<dyn CommandRunner>) -> Self {
        Self { runner }
    }

    /// Build failures are reported, never raised
    pub async fn execute(&self, environment: &Environment) -> Result<()> {
        let builds = BuildModulesUseCase::new(environment, self.runner.clone())
            .execute()
            .await;

        for build in builds {
            println!(
                "'{}' - restore packages: {}, build: {}",
                build.name,
                paint(build.restore),
                paint(build.build)
            );
        }
        Ok(())
    }
}

fn paint(status: StepStatus) -> ColoredString {
    match status {
        StepStatus::Ok => status.to_string().green(),
        StepStatus::Fail => status.to_string().red(),
    }
}
