//! Error types for the team audit.
//!
//! Fetch failures are returned as typed values rather than unwinding, so the
//! comparator decides how a failed fetch is reported.

use thiserror::Error;
use tokio::time::Duration;

/// Errors raised while fetching a paginated member list
#[derive(Error, Debug)]
pub enum FetchError {
    /// The retry delay grew past the configured ceiling without a 200 response
    #[error("Maximum backoff time exceeded. Aborting.")]
    BackoffExhausted { url: String, last_status: u16 },

    /// Transport-level failure (connection refused, TLS, body read)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A 200 response whose body was not a JSON array of member records
    #[error("Failed to decode member list from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    /// True when the failure came from running out of retries.
    pub fn is_backoff_exhausted(&self) -> bool {
        matches!(self, FetchError::BackoffExhausted { .. })
    }
}

/// Errors from turning command line arguments into an [`AuditConfig`](crate::AuditConfig)
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("GitHub token is required (pass --key or set GITHUB_TOKEN)")]
    MissingToken,

    #[error("Page size must be between 1 and 100, got {0}")]
    InvalidPerPage(u32),

    #[error("Maximum backoff must be at least one second")]
    InvalidMaxBackoff,

    #[error("Retry delays need 0 < initial ({initial:?}) <= maximum ({max:?})")]
    InvalidRetryPolicy { initial: Duration, max: Duration },

    #[error("{field} must not be empty")]
    EmptySlug { field: &'static str },
}
