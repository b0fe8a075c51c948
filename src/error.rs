//! Error types for content handling and session start.

use thiserror::Error;

/// Errors raised when starting a session.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("invalid content: {0}")]
    InvalidContent(String),
}

/// Failures while obtaining a level list from an external source.
///
/// Every variant is recoverable: callers fall back to the built-in catalog.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read level file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to fetch levels from {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("timed out fetching levels from {0}")]
    Timeout(String),

    #[error("malformed level document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Invalid(#[from] SessionError),
}
