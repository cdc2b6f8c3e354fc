use std::sync::Arc;

use crate::common::result::DevSetupResult;
use crate::domain::entities::ServerSettings;
use crate::infrastructure::process::{CommandRunner, CommandSpec, ExecutionResult};

/// Recycle the configured application pool, which is faster than a full
/// server reset
pub struct RecycleAppPoolUseCase<'a> {
    settings: &'a ServerSettings,
    runner: Arc<dyn CommandRunner>,
}

impl<'a> RecycleAppPoolUseCase<'a> {
    pub fn new(settings: &'a ServerSettings, runner: Arc<dyn CommandRunner>) -> Self {
        Self { settings, runner }
    }

    /// The command for `appcmd recycle apppool /apppool.name:<pool>`
    pub fn command(&self) -> CommandSpec {
        CommandSpec::new(&self.settings.app_pool_command_path)
            .arg("recycle")
            .arg("apppool")
            .arg(format!("/apppool.name:{}", self.settings.app_pool_name))
    }

    /// Issue the recycle command once; its effect is not verified
    pub async fn execute(&self) -> DevSetupResult<ExecutionResult> {
        let command = self.command();
        tracing::info!("Recycling application pool '{}'", self.settings.app_pool_name);

        let result = self.runner.run(&command).await?;
        if !result.success() {
            tracing::warn!("'{}' exited with {}", command, result.exit_code);
        }
        Ok(result)
    }
}
