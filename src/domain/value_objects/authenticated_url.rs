use std::fmt;
use thiserror::Error;
use url::Url;

use crate::domain::entities::settings::Secrets;

/// Errors raised while embedding credentials into a remote URL
#[derive(Debug, Error, PartialEq)]
pub enum AuthenticatedUrlError {
    #[error("Invalid URL format: {url}: {reason}")]
    InvalidFormat { url: String, reason: String },

    #[error("URL cannot carry credentials: {0}")]
    CannotCarryCredentials(String),
}

/// Remote URL with the configured username and password embedded
///
/// `Display` and `Debug` mask the password; use [`AuthenticatedUrl::expose`]
/// to get the string handed to the VCS client.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthenticatedUrl {
    url: Url,
}

impl AuthenticatedUrl {
    /// Parse `remote` and substitute the credentials from `secrets`
    pub fn new(remote: &str, secrets: &Secrets) -> Result<Self, AuthenticatedUrlError> {
        let mut url = Url::parse(remote.trim()).map_err(|e| AuthenticatedUrlError::InvalidFormat {
            url: remote.to_string(),
            reason: e.to_string(),
        })?;

        if url.cannot_be_a_base() || !url.has_host() {
            return Err(AuthenticatedUrlError::CannotCarryCredentials(
                remote.to_string(),
            ));
        }

        url.set_username(&secrets.username)
            .map_err(|_| AuthenticatedUrlError::CannotCarryCredentials(remote.to_string()))?;
        url.set_password(Some(&secrets.password))
            .map_err(|_| AuthenticatedUrlError::CannotCarryCredentials(remote.to_string()))?;

        Ok(Self { url })
    }

    /// Full URL including the password
    pub fn expose(&self) -> &str {
        self.url.as_str()
    }

    fn redacted(&self) -> String {
        let mut masked = self.url.clone();
        if masked.password().is_some() {
            // set_password only fails for URLs we rejected in new()
            let _ = masked.set_password(Some("****"));
        }
        masked.to_string()
    }
}

impl fmt::Display for AuthenticatedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.redacted())
    }
}

impl fmt::Debug for AuthenticatedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AuthenticatedUrl")
            .field(&self.redacted())
            .finish()
    }
}
