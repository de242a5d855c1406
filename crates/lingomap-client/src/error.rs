//! Lookup error type.
//!
//! Every variant displays as "lookup failed: ..." since the hover card does not
//! distinguish between them. The variants exist for logs and tests.

use thiserror::Error;

/// Result type for lookups.
pub type LookupResult<T> = Result<T, LookupError>;

/// Errors that can occur while fetching languages for a region.
#[derive(Debug, Error)]
pub enum LookupError {
    /// Connection, TLS or timeout failure.
    #[error("lookup failed: network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status.
    #[error("lookup failed: HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body was not the expected JSON shape.
    #[error("lookup failed: malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Catch-all for lookups that are not HTTP based.
    #[error("lookup failed: {0}")]
    Other(String),
}

impl LookupError {
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into())
    }
}
