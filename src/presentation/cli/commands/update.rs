use anyhow::Result;
use colored::Colorize;
use std::sync::Arc;

use crate::application::use_cases::update_repositories::{
    UpdateOutcome, UpdateRepositoriesUseCase,
};
use crate::domain::entities::Environment;
use crate::infrastructure::scm::ScmOperations;

/// Handler for the update command
pub struct UpdateCommand {
    scm: Arc<dyn ScmOperations>,
}

impl UpdateCommand {
    pub fn new(scm: Arc<dyn ScmOperations>) -> Self {
        Self { scm }
    }

    pub async fn execute(&self, environment: &Environment) -> Result<()> {
        let use_case = UpdateRepositoriesUseCase::new(environment, self.scm.clone());
        let report = use_case.execute().await;

        for repository in &report.repositories {
            match &repository.outcome {
                UpdateOutcome::NotCloned => {
                    println!("Repository '{}' not cloned.", repository.name.yellow())
                }
                UpdateOutcome::Pulled(pulls) => {
                    for pull in pulls {
                        match &pull.result {
                            Ok(()) => println!(
                                "Finished pull '{}' in '{}'",
                                pull.branch.green(),
                                repository.path.display()
                            ),
                            Err(e) => println!(
                                "{} '{}' in '{}': {}",
                                "Failed pull".red(),
                                pull.branch,
                                repository.path.display(),
                                e
                            ),
                        }
                    }
                }
            }
        }

        let failed = report.failed_pulls().count();
        if failed > 0 {
            return Err(anyhow::anyhow!("{} branch pulls failed", failed));
        }
        Ok(())
    }
}
