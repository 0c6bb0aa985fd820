use std::env;

use url::Url;

use crate::error::ApiConfigError;

/// Where the backend lives when nothing else is configured. This is the
/// gateway's published port on the local machine.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Environment variable consulted by [`ApiConfig::from_env`].
pub const BASE_URL_ENV: &str = "STUDY_COACH_API_URL";

/// Backend location, injected into the API client at construction.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    base_url: Url,
}

impl ApiConfig {
    /// Validates and stores a base URL.
    ///
    /// # Errors
    ///
    /// Returns `ApiConfigError` when the URL does not parse, uses a scheme
    /// other than http/https, or has no host.
    pub fn new(raw: &str) -> Result<Self, ApiConfigError> {
        let trimmed = raw.trim();
        let base_url = Url::parse(trimmed).map_err(|source| ApiConfigError::Invalid {
            raw: trimmed.to_string(),
            source,
        })?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(ApiConfigError::UnsupportedScheme(trimmed.to_string()));
        }
        if base_url.host_str().is_none() {
            return Err(ApiConfigError::MissingHost(trimmed.to_string()));
        }
        Ok(Self { base_url })
    }

    /// Reads `STUDY_COACH_API_URL`, falling back to [`DEFAULT_BASE_URL`].
    ///
    /// # Errors
    ///
    /// Returns `ApiConfigError` when the configured value is not a usable URL.
    pub fn from_env() -> Result<Self, ApiConfigError> {
        match env::var(BASE_URL_ENV) {
            Ok(value) if !value.trim().is_empty() => Self::new(&value),
            _ => Self::new(DEFAULT_BASE_URL),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Joins an absolute API path onto the base URL.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
