//! GitHub API error types.

use thiserror::Error;

/// Errors that can occur when talking to the GitHub REST API.
#[derive(Debug, Error)]
pub enum GitHubError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// GitHub returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by GitHub.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// The requested user, repository or endpoint does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// Failed to parse a GitHub response.
    #[error("parse error: {0}")]
    Parse(String),

    /// GitHub refused the request because the rate limit is exhausted.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },
}
