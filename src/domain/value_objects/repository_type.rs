use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of a configured repository
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepositoryType {
    /// Web module: built and linked into the platform modules root
    Module,
    /// Anything else; only cloned and updated
    #[serde(other)]
    Other,
}

impl Default for RepositoryType {
    fn default() -> Self {
        Self::Other
    }
}

impl fmt::Display for RepositoryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepositoryType::Module => write!(f, "module"),
            RepositoryType::Other => write!(f, "other"),
        }
    }
}

impl FromStr for RepositoryType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("module") {
            Ok(RepositoryType::Module)
        } else {
            Ok(RepositoryType::Other)
        }
    }
}

impl RepositoryType {
    /// Whether build and link operations apply
    pub fn is_module(&self) -> bool {
        matches!(self, RepositoryType::Module)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(RepositoryType::Module.to_string(), "module");
        assert_eq!(RepositoryType::Other.to_string(), "other");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("module".parse::<RepositoryType>(), Ok(RepositoryType::Module));
        assert_eq!("MODULE".parse::<RepositoryType>(), Ok(RepositoryType::Module));
        assert_eq!("library".parse::<RepositoryType>(), Ok(RepositoryType::Other));
    }

    #[test]
    fn test_deserialize_unknown_type_as_other() {
        let kind: RepositoryType = serde_json::from_str("\"module\"").unwrap();
        assert_eq!(kind, RepositoryType::Module);

        let kind: RepositoryType = serde_json::from_str("\"tooling\"").unwrap();
        assert_eq!(kind, RepositoryType::Other);
    }
}
