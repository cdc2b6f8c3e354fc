use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::value_objects::repository_type::RepositoryType;

/// A configured repository
///
/// `name` is both the clone destination directory and the module link name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Repository {
    #[validate(length(min = 1))]
    pub name: String,

    /// Version-control remote address, without credentials
    #[validate(url)]
    pub url: String,

    #[serde(rename = "type", default)]
    pub kind: RepositoryType,
}

impl Repository {
    pub fn new(name: impl Into<String>, url: impl Into<String>, kind: RepositoryType) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            kind,
        }
    }

    /// Shorthand for a module repository
    pub fn module(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self::new(name, url, RepositoryType::Module)
    }

    pub fn is_module(&self) -> bool {
        self.kind.is_module()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_creation() {
        let repo = Repository::module("Core", "https://git.example.com/Core.git");
        assert_eq!(repo.name, "Core");
        assert!(repo.is_module());

        let repo = Repository::new("Docs", "https://git.example.com/Docs.git", RepositoryType::Other);
        assert!(!repo.is_module());
    }

    #[test]
    fn test_deserialize_from_configuration_entry() {
        let json = r#"{"name": "Core", "url": "https://git.example.com/Core.git", "type": "module"}"#;
        let repo: Repository = serde_json::from_str(json).unwrap();
        assert_eq!(repo, Repository::module("Core", "https://git.example.com/Core.git"));
    }

    #[test]
    fn test_missing_type_is_other() {
        let json = r#"{"name": "Docs", "url": "https://git.example.com/Docs.git"}"#;
        let repo: Repository = serde_json::from_str(json).unwrap();
        assert_eq!(repo.kind, RepositoryType::Other);
    }

    #[test]
    fn test_validation() {
        let repo = Repository::module("", "https://git.example.com/Core.git");
        assert!(repo.validate().is_err());

        let repo = Repository::module("Core", "git.example.com/Core");
        assert!(repo.validate().is_err());

        let repo = Repository::module("Core", "https://git.example.com/Core.git");
        assert!(repo.validate().is_ok());
    }
}
