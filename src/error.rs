//! Assessment error types

use thiserror::Error;

/// Error types for repository assessment operations
#[derive(Debug, Error)]
pub enum AssessError {
    /// The requested hosting platform has no collector
    #[error("unsupported source: {0}")]
    UnsupportedSource(String),

    /// HTTP 403 without a token: the platform wants credentials
    #[error("authorization required by the hosting API")]
    AuthRequired,

    /// HTTP 403 with a token: the external rate limit was hit
    #[error("rate limited by the hosting API")]
    RateLimited,

    /// Resource not found (404)
    #[error("repository not found: {0}")]
    NotFound(String),

    /// Other HTTP/network failures; retry policy belongs to the caller
    #[error("hosting API error: {0}")]
    Api(String),

    /// Client setup/configuration error
    #[error("client setup failed: {0}")]
    ClientSetup(String),
}

/// Convenience result alias for assessment operations
pub type AssessResult<T> = Result<T, AssessError>;

impl From<reqwest::Error> for AssessError {
    fn from(err: reqwest::Error) -> Self {
        AssessError::Api(err.to_string())
    }
}
