pub mod authenticated_url;
pub mod repository_type;

pub use authenticated_url::{AuthenticatedUrl, AuthenticatedUrlError};
pub use repository_type::RepositoryType;
