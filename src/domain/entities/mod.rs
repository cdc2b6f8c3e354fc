pub mod environment;
pub mod repository;
pub mod settings;

pub use environment::{Environment, DEFAULT_BRANCHES, DEFAULT_REMOTE};
pub use repository::Repository;
pub use settings::{BuildSettings, Directories, Secrets, ServerSettings};
