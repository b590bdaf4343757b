//! Typed errors for the GitHub client.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling.

use thiserror::Error;

/// Errors that can occur when talking to the GitHub API.
#[derive(Debug, Error)]
pub enum GithubError {
    /// Transport-level failure (connection, TLS, reading the body)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// GitHub answered with a non-2xx status
    #[error("GitHub returned {status} for {url}")]
    Status {
        status: u16,
        url: String,
        /// Response body, kept for error reporting
        body: String,
    },

    /// Response body was not the JSON we expected
    #[error("invalid JSON from {url}: {source}")]
    Json {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl GithubError {
    /// Status code of a [`GithubError::Status`] error, if that is what this is.
    pub fn status(&self) -> Option<u16> {
        match self {
            GithubError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type alias for GitHub client operations.
pub type Result<T> = std::result::Result<T, GithubError>;
