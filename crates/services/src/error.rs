//! Shared error types for the services crate.

use thiserror::Error;

/// Errors emitted by the API client.
///
/// Every operation normalizes into this one shape: input validation failures
/// surface before any request is issued, connection-level failures carry the
/// configured base URL so the message is actionable, and non-2xx responses
/// keep both status and body verbatim.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    #[error("text input is required")]
    EmptyText,

    #[error(
        "cannot reach the study coach backend at {base_url}; make sure this device and the \
         backend are on the same network and the address is correct"
    )]
    Unreachable {
        base_url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("backend returned {status}: {body}")]
    Http {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("backend reported failure: {0}")]
    Rejected(String),

    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

/// Errors emitted while building an [`crate::ApiConfig`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiConfigError {
    #[error("invalid backend URL {raw:?}")]
    Invalid {
        raw: String,
        #[source]
        source: url::ParseError,
    },

    #[error("backend URL {0:?} must use http or https")]
    UnsupportedScheme(String),

    #[error("backend URL {0:?} is missing a host")]
    MissingHost(String),
}
