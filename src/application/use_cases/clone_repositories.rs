use futures::future::join_all;
use std::path::PathBuf;
use std::sync::Arc;

use crate::application::services::PathResolver;
use crate::common::error::DevSetupError;
use crate::common::result::ResultExt;
use crate::domain::entities::{Environment, Repository};
use crate::domain::value_objects::AuthenticatedUrl;
use crate::infrastructure::scm::ScmOperations;

/// What happened to one repository during `init`
#[derive(Debug)]
pub enum CloneOutcome {
    /// Destination already present; nothing was done
    AlreadyExists,
    Cloned,
    Failed(DevSetupError),
}

#[derive(Debug)]
pub struct RepositoryClone {
    pub name: String,
    pub destination: PathBuf,
    pub outcome: CloneOutcome,
}

/// Per-repository outcomes, in configuration order
#[derive(Debug, Default)]
pub struct CloneReport {
    pub repositories: Vec<RepositoryClone>,
}

impl CloneReport {
    pub fn cloned_count(&self) -> usize {
        self.count(|o| matches!(o, CloneOutcome::Cloned))
    }

    pub fn skipped_count(&self) -> usize {
        self.count(|o| matches!(o, CloneOutcome::AlreadyExists))
    }

    pub fn failed_count(&self) -> usize {
        self.count(|o| matches!(o, CloneOutcome::Failed(_)))
    }

    pub fn is_success(&self) -> bool {
        self.failed_count() == 0
    }

    fn count(&self, predicate: impl Fn(&CloneOutcome) -> bool) -> usize {
        self.repositories
            .iter()
            .filter(|r| predicate(&r.outcome))
            .count()
    }
}

/// Clone every configured repository that is not on disk yet
pub struct CloneRepositoriesUseCase<'a> {
    environment: &'a Environment,
    scm: Arc<dyn ScmOperations>,
}

impl<'a> CloneRepositoriesUseCase<'a> {
    pub fn new(environment: &'a Environment, scm: Arc<dyn ScmOperations>) -> Self {
        Self { environment, scm }
    }

    /// Start one clone future per repository and wait for all of them
    pub async fn execute(&self) -> CloneReport {
        let clones = self
            .environment
            .repositories
            .iter()
            .map(|repository| self.clone_one(repository));

        CloneReport {
            repositories: join_all(clones).await,
        }
    }

    async fn clone_one(&self, repository: &Repository) -> RepositoryClone {
        let destination = PathResolver::new(&self.environment.directories).repository_path(repository);

        let outcome = if destination.exists() {
            tracing::debug!(
                "'{}' already exists in '{}'",
                repository.name,
                destination.display()
            );
            CloneOutcome::AlreadyExists
        } else {
            match self.clone_into(repository, &destination).await {
                Ok(()) => CloneOutcome::Cloned,
                Err(e) => {
                    tracing::error!("Clone of '{}' failed: {}", repository.name, e);
                    CloneOutcome::Failed(e)
                }
            }
        };

        RepositoryClone {
            name: repository.name.clone(),
            destination,
            outcome,
        }
    }

    async fn clone_into(
        &self,
        repository: &Repository,
        destination: &std::path::Path,
    ) -> Result<(), DevSetupError> {
        let url = AuthenticatedUrl::new(&repository.url, &self.environment.secrets)
            .with_repository("Invalid remote URL", &repository.name)?;

        tracing::info!(
            "Starting clone '{}' to '{}'",
            repository.name,
            destination.display()
        );
        tracing::debug!("Remote for '{}': {}", repository.name, url);

        self.scm
            .clone_repository(url.expose(), destination)
            .await
            .with_repository("Clone failed", &repository.name)?;

        tracing::info!("Finished clone '{}'", repository.name);
        Ok(())
    }
}
