use std::path::{Path, PathBuf};

use crate::domain::entities::{Directories, Repository};

/// Maps repositories onto the configured filesystem roots
#[derive(Debug, Clone, Copy)]
pub struct PathResolver<'a> {
    directories: &'a Directories,
}

impl<'a> PathResolver<'a> {
    pub fn new(directories: &'a Directories) -> Self {
        Self { directories }
    }

    /// `repositoriesRoot/<name>`
    pub fn repository_path(&self, repository: &Repository) -> PathBuf {
        self.directories.repositories_root.join(&repository.name)
    }

    /// `platformModulesRoot/<name>`
    pub fn module_link_path(&self, repository: &Repository) -> PathBuf {
        link_path(&self.directories.platform_modules_root, &repository.name)
    }
}

/// Link location for a module under `modules_root`
pub fn link_path(modules_root: &Path, module_name: &str) -> PathBuf {
    modules_root.join(module_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_path() {
        let dirs = Directories::new("/repos", "/platform/Modules");
        let resolver = PathResolver::new(&dirs);
        let repo = Repository::module("Core", "https://git.example.com/Core.git");

        assert_eq!(resolver.repository_path(&repo), PathBuf::from("/repos/Core"));
    }

    #[test]
    fn test_module_link_path() {
        let dirs = Directories::new("/repos", "/platform/Modules");
        let resolver = PathResolver::new(&dirs);
        let repo = Repository::module("Core", "https://git.example.com/Core.git");

        assert_eq!(
            resolver.module_link_path(&repo),
            PathBuf::from("/platform/Modules/Core")
        );
        assert_eq!(
            link_path(Path::new("/other"), "Billing"),
            PathBuf::from("/other/Billing")
        );
    }
}
