//! API client error types.

use thiserror::Error;

/// Errors surfaced by the API client. Nothing is retried.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend answered with a non-2xx status. `message` is taken from
    /// the body's `message`/`detail` field or synthesized from the status.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// The request never produced a response (connection, DNS, TLS, timeout).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A 2xx body was not valid JSON or did not match the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// HTTP status for backend rejections.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Network(_) | Self::Decode(_) => None,
        }
    }

    /// True for 401 responses (missing, invalid, or expired token).
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Api { status: 401, .. })
    }
}
