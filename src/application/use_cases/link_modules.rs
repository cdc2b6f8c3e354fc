use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::application::services::PathResolver;
use crate::domain::entities::{Environment, Repository};
use crate::infrastructure::filesystem::link_store;

/// Suffix of the web-root directory inside a module working copy
pub const WEB_DIRECTORY_SUFFIX: &str = "Web";

/// Errors raised while linking modules
#[derive(Debug, Error)]
pub enum LinkModulesError {
    #[error("Module '{module}' is not cloned at {}", .path.display())]
    RepositoryNotCloned { module: String, path: PathBuf },

    #[error("Module '{module}' has no directory ending in 'Web' in {}", .path.display())]
    NoWebDirectory { module: String, path: PathBuf },

    #[error("Link for module '{module}' already exists at {}", .link.display())]
    LinkAlreadyExists { module: String, link: PathBuf },

    #[error("Failed to list {}: {source}", .path.display())]
    ListingFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to link {} -> {}: {source}", .link.display(), .target.display())]
    LinkCreationFailed {
        link: PathBuf,
        target: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A link created for one module
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleLink {
    pub module: String,
    pub target: PathBuf,
    pub link: PathBuf,
}

/// Link each module's web directory into the platform modules root
pub struct LinkModulesUseCase<'a> {
    environment: &'a Environment,
}

impl<'a> LinkModulesUseCase<'a> {
    pub fn new(environment: &'a Environment) -> Self {
        Self { environment }
    }

    /// Stops at the first module that cannot be linked; links created
    /// before it are kept
    pub fn execute(&self) -> Result<Vec<ModuleLink>, LinkModulesError> {
        self.environment
            .modules()
            .map(|module| self.link_module(module))
            .collect()
    }

    fn link_module(&self, module: &Repository) -> Result<ModuleLink, LinkModulesError> {
        let resolver = PathResolver::new(&self.environment.directories);
        let repository_path = resolver.repository_path(module);

        if !repository_path.is_dir() {
            return Err(LinkModulesError::RepositoryNotCloned {
                module: module.name.clone(),
                path: repository_path,
            });
        }

        let target = find_web_directory(&module.name, &repository_path)?;
        let link = resolver.module_link_path(module);

        if link.symlink_metadata().is_ok() {
            return Err(LinkModulesError::LinkAlreadyExists {
                module: module.name.clone(),
                link,
            });
        }

        link_store::create_dir_link(&target, &link).map_err(|e| {
            if e.kind() == io::ErrorKind::AlreadyExists {
                LinkModulesError::LinkAlreadyExists {
                    module: module.name.clone(),
                    link: link.clone(),
                }
            } else {
                LinkModulesError::LinkCreationFailed {
                    link: link.clone(),
                    target: target.clone(),
                    source: e,
                }
            }
        })?;

        tracing::info!("Linked {} -> {}", link.display(), target.display());
        Ok(ModuleLink {
            module: module.name.clone(),
            target,
            link,
        })
    }
}

/// Lexicographically first subdirectory whose name ends in `Web`
fn find_web_directory(module: &str, repository_path: &Path) -> Result<PathBuf, LinkModulesError> {
    let candidates: Vec<PathBuf> = link_store::list_subdirectories(repository_path)
        .map_err(|e| LinkModulesError::ListingFailed {
            path: repository_path.to_path_buf(),
            source: e,
        })?
        .into_iter()
        .filter(|dir| {
            dir.file_name()
                .and_then(|name| name.to_str())
                .map_or(false, |name| name.ends_with(WEB_DIRECTORY_SUFFIX))
        })
        .collect();

    if candidates.len() > 1 {
        tracing::warn!(
            "Module '{}' has {} directories ending in '{}'; using {}",
            module,
            candidates.len(),
            WEB_DIRECTORY_SUFFIX,
            candidates[0].display()
        );
    }

    candidates
        .into_iter()
        .next()
        .ok_or_else(|| LinkModulesError::NoWebDirectory {
            module: module.to_string(),
            path: repository_path.to_path_buf(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{BuildSettings, Directories, Secrets, ServerSettings};
    use crate::domain::value_objects::RepositoryType;
    use std::fs;
    use tempfile::TempDir;

    fn environment(root: &Path, repositories: Vec<Repository>) -> Environment {
        fs::create_dir_all(root.join("modules")).unwrap();
        Environment::new(
            repositories,
            Directories::new(root.join("repos"), root.join("modules")),
            ServerSettings::new("appcmd", "Platform"),
            BuildSettings::new("nuget", "msbuild"),
            Secrets::new("builder", "s3cret"),
        )
    }

    #[test]
    fn test_find_web_directory_prefers_lexicographic_first() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("Core.Web")).unwrap();
        fs::create_dir(temp.path().join("Admin.Web")).unwrap();
        fs::create_dir(temp.path().join("Core.Tests")).unwrap();

        let found = find_web_directory("Core", temp.path()).unwrap();
        assert_eq!(found, temp.path().join("Admin.Web"));
    }

    #[test]
    fn test_find_web_directory_ignores_files() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("NotAWeb"), "").unwrap();

        let result = find_web_directory("Core", temp.path());
        assert!(matches!(result, Err(LinkModulesError::NoWebDirectory { .. })));
    }

    #[test]
    fn test_uncloned_module_fails() {
        let temp = TempDir::new().unwrap();
        let env = environment(
            temp.path(),
            vec![Repository::module("Core", "https://git.example.com/Core.git")],
        );

        let result = LinkModulesUseCase::new(&env).execute();
        assert!(matches!(
            result,
            Err(LinkModulesError::RepositoryNotCloned { .. })
        ));
    }

    #[test]
    fn test_non_module_repositories_are_ignored() {
        let temp = TempDir::new().unwrap();
        let env = environment(
            temp.path(),
            vec![Repository::new(
                "Docs",
                "https://git.example.com/Docs.git",
                RepositoryType::Other,
            )],
        );

        let links = LinkModulesUseCase::new(&env).execute().unwrap();
        assert!(links.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_module_is_linked() {
        let temp = TempDir::new().unwrap();
        let env = environment(
            temp.path(),
            vec![Repository::module("Core", "https://git.example.com/Core.git")],
        );
        let web = temp.path().join("repos").join("Core").join("Core.Web");
        fs::create_dir_all(&web).unwrap();

        let links = LinkModulesUseCase::new(&env).execute().unwrap();
        let link = temp.path().join("modules").join("Core");
        assert_eq!(
            links,
            vec![ModuleLink {
                module: "Core".to_string(),
                target: web.clone(),
                link: link.clone(),
            }]
        );
        assert_eq!(fs::read_link(&link).unwrap(), web);
    }

    #[cfg(unix)]
    #[test]
    fn test_existing_link_fails() {
        let temp = TempDir::new().unwrap();
        let env = environment(
            temp.path(),
            vec![Repository::module("Core", "https://git.example.com/Core.git")],
        );
        fs::create_dir_all(temp.path().join("repos").join("Core").join("CoreWeb")).unwrap();

        LinkModulesUseCase::new(&env).execute().unwrap();
        let again = LinkModulesUseCase::new(&env).execute();
        assert!(matches!(
            again,
            Err(LinkModulesError::LinkAlreadyExists { .. })
        ));
    }
}
