//! Error types for GitHub API operations.

use thiserror::Error;

/// Errors that can occur while talking to the GitHub API.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The repository does not exist (or is not visible with the current token).
    #[error("repository {0} not found")]
    NotFound(String),
    /// The HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// The server returned an unexpected status code.
    #[error("unexpected status {status}: {body}")]
    UnexpectedStatus {
        /// HTTP status code received.
        status: u16,
        /// Response body.
        body: String,
    },
    /// The response body could not be parsed.
    #[error("failed to parse response: {0}")]
    Parse(String),
    /// README content used an encoding other than base64.
    #[error("unexpected encoding: {0}")]
    UnexpectedEncoding(String),
    /// README content was not valid base64 or UTF-8.
    #[error("failed to decode readme: {0}")]
    Decode(String),
}

impl ClientError {
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
