use crate::common::error::DevSetupError;

/// Result alias used across the crate
///
/// # Examples
///
/// ```
/// use devsetup::common::result::{DevSetupResult, ResultExt};
///
/// fn parse_port(raw: &str) -> DevSetupResult<u16> {
///     raw.parse::<u16>().with_repository("Invalid port", "Core")
/// }
///
/// assert!(parse_port("8080").is_ok());
/// assert!(parse_port("http").is_err());
/// ```
pub type DevSetupResult<T> = Result<T, DevSetupError>;

/// Attach repository context to foreign errors
pub trait ResultExt<T> {
    fn with_repository(self, message: impl Into<String>, repository_name: &str) -> DevSetupResult<T>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn with_repository(self, message: impl Into<String>, repository_name: &str) -> DevSetupResult<T> {
        self.map_err(|e| DevSetupError::repository_error(message, repository_name, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_ext_with_repository() {
        let io_error = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        let result: Result<(), std::io::Error> = Err(io_error);

        match result.with_repository("clone failed", "Core") {
            Err(DevSetupError::RepositoryError {
                repository_name, ..
            }) => assert_eq!(repository_name, "Core"),
            other => panic!("Expected RepositoryError, got {other:?}"),
        }
    }
}
