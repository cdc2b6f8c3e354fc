use anyhow::Result;
use colored::Colorize;
use std::sync::Arc;

use crate::application::use_cases::recycle_app_pool::RecycleAppPoolUseCase;
use crate::domain::entities::Environment;
use crate::infrastructure::process::CommandRunner;

/// Handler for the restart-iis command
pub struct RestartIisCommand {
    runner: Arc<dyn CommandRunner>,
}

impl RestartIisCommand {
    pub fn new(runner: Arc<dyn CommandRunner>) -> Self {
        Self { runner }
    }

    pub async fn execute(&self, environment: &Environment) -> Result<()> {
        let result = RecycleAppPoolUseCase::new(&environment.server, self.runner.clone())
            .execute()
            .await?;

        let status = if result.success() {
            "Ok".green()
        } else {
            format!("Fail (exit code {})", result.exit_code).red()
        };
        println!(
            "Recycle application pool '{}': {}",
            environment.server.app_pool_name, status
        );
        Ok(())
    }
}
