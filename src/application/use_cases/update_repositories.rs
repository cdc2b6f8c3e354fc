use futures::future::join_all;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::application::services::PathResolver;
use crate::domain::entities::{Environment, Repository, DEFAULT_REMOTE};
use crate::infrastructure::scm::{ScmError, ScmOperations};

/// Result of pulling one branch
#[derive(Debug)]
pub struct BranchPull {
    pub branch: String,
    pub result: Result<(), ScmError>,
}

impl BranchPull {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

#[derive(Debug)]
pub enum UpdateOutcome {
    /// No working copy at the resolved path; nothing was pulled
    NotCloned,
    /// One entry per configured branch, in pull order
    Pulled(Vec<BranchPull>),
}

#[derive(Debug)]
pub struct RepositoryUpdate {
    pub name: String,
    pub path: PathBuf,
    pub outcome: UpdateOutcome,
}

/// Per-repository outcomes, in configuration order
#[derive(Debug, Default)]
pub struct UpdateReport {
    pub repositories: Vec<RepositoryUpdate>,
}

impl UpdateReport {
    pub fn not_cloned_count(&self) -> usize {
        self.repositories
            .iter()
            .filter(|r| matches!(r.outcome, UpdateOutcome::NotCloned))
            .count()
    }

    pub fn failed_pulls(&self) -> impl Iterator<Item = (&str, &BranchPull)> {
        self.repositories.iter().flat_map(|r| {
            let pulls: &[BranchPull] = match &r.outcome {
                UpdateOutcome::Pulled(pulls) => pulls,
                UpdateOutcome::NotCloned => &[],
            };
            pulls
                .iter()
                .filter(|p| !p.is_success())
                .map(move |p| (r.name.as_str(), p))
        })
    }

    pub fn is_success(&self) -> bool {
        self.failed_pulls().next().is_none()
    }
}

/// Pull every configured branch into every cloned repository
pub struct UpdateRepositoriesUseCase<'a> {
    environment: &'a Environment,
    scm: Arc<dyn ScmOperations>,
}

impl<'a> UpdateRepositoriesUseCase<'a> {
    pub fn new(environment: &'a Environment, scm: Arc<dyn ScmOperations>) -> Self {
        Self { environment, scm }
    }

    /// Repositories are updated as independent futures; branches within one
    /// repository are pulled strictly in order
    pub async fn execute(&self) -> UpdateReport {
        let updates = self
            .environment
            .repositories
            .iter()
            .map(|repository| self.update_one(repository));

        UpdateReport {
            repositories: join_all(updates).await,
        }
    }

    async fn update_one(&self, repository: &Repository) -> RepositoryUpdate {
        let path = PathResolver::new(&self.environment.directories).repository_path(repository);

        let outcome = if path.exists() {
            UpdateOutcome::Pulled(self.pull_branches(&path).await)
        } else {
            tracing::debug!("Repository '{}' not cloned", repository.name);
            UpdateOutcome::NotCloned
        };

        RepositoryUpdate {
            name: repository.name.clone(),
            path,
            outcome,
        }
    }

    async fn pull_branches(&self, path: &Path) -> Vec<BranchPull> {
        let mut pulls = Vec::with_capacity(self.environment.branches.len());

        for branch in &self.environment.branches {
            tracing::info!("Starting pull '{}' in '{}'", branch, path.display());
            let result = self.scm.pull(path, DEFAULT_REMOTE, branch).await;

            match &result {
                Ok(()) => tracing::info!("Finished pull '{}' in '{}'", branch, path.display()),
                Err(e) => tracing::error!("Pull '{}' in '{}' failed: {}", branch, path.display(), e),
            }

            pulls.push(BranchPull {
                branch: branch.clone(),
                result,
            });
        }

        pulls
    }
}
