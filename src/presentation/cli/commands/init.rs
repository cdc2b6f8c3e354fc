use anyhow::Result;
use colored::Colorize;
use std::sync::Arc;

use crate::application::use_cases::clone_repositories::{
    CloneOutcome, CloneReport, CloneRepositoriesUseCase,
};
use crate::domain::entities::Environment;
use crate::infrastructure::scm::ScmOperations;

/// Handler for the init command
pub struct InitCommand {
    scm: Arc<dyn ScmOperations>,
    verbose: bool,
}

impl InitCommand {
    pub fn new(scm: Arc<dyn ScmOperations>, verbose: bool) -> Self {
        Self { scm, verbose }
    }

    /// Clone every repository that is missing, then print one line per repository
    pub async fn execute(&self, environment: &Environment) -> Result<()> {
        let use_case = CloneRepositoriesUseCase::new(environment, self.scm.clone());
        let report = use_case.execute().await;

        print_report(&report);

        if self.verbose {
            println!("  Repositories cloned: {}", report.cloned_count());
            println!("  Repositories skipped: {}", report.skipped_count());
        }

        if !report.is_success() {
            return Err(anyhow::anyhow!(
                "{} of {} repositories failed to clone",
                report.failed_count(),
                report.repositories.len()
            ));
        }
        Ok(())
    }
}

fn print_report(report: &CloneReport) {
    for repository in &report.repositories {
        match &repository.outcome {
            CloneOutcome::AlreadyExists => println!(
                "'{}' already exists in '{}'.",
                repository.name.green(),
                repository.destination.display()
            ),
            CloneOutcome::Cloned => println!(
                "Finished clone '{}' to '{}'",
                repository.name.green(),
                repository.destination.display()
            ),
            CloneOutcome::Failed(e) => println!(
                "{} '{}': {}",
                "Failed to clone".red(),
                repository.name.bold(),
                e
            ),
        }
    }
}
