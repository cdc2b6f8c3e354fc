use std::collections::HashSet;

use super::repository::Repository;
use super::settings::{BuildSettings, Directories, Secrets, ServerSettings};

/// Branches pulled, in order, for every repository on update
pub const DEFAULT_BRANCHES: &[&str] = &["dev", "qa"];

/// Remote every branch is pulled from
pub const DEFAULT_REMOTE: &str = "origin";

/// The whole developer-environment configuration
///
/// Built once at startup and passed by reference into every use case.
#[derive(Debug, Clone)]
pub struct Environment {
    pub repositories: Vec<Repository>,
    pub directories: Directories,
    pub server: ServerSettings,
    pub build: BuildSettings,
    pub secrets: Secrets,
    pub branches: Vec<String>,
}

impl Environment {
    pub fn new(
        repositories: Vec<Repository>,
        directories: Directories,
        server: ServerSettings,
        build: BuildSettings,
        secrets: Secrets,
    ) -> Self {
        Self {
            repositories,
            directories,
            server,
            build,
            secrets,
            branches: DEFAULT_BRANCHES.iter().map(|b| b.to_string()).collect(),
        }
    }

    /// Module repositories, in configuration order
    pub fn modules(&self) -> impl Iterator<Item = &Repository> {
        self.repositories.iter().filter(|r| r.is_module())
    }

    /// First repository name that occurs more than once, if any
    pub fn duplicate_repository_name(&self) -> Option<&str> {
        let mut seen = HashSet::new();
        self.repositories
            .iter()
            .map(|r| r.name.as_str())
            .find(|name| !seen.insert(*name))
    }
}
