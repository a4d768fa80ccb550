use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session storage error: {0}")]
    Storage(String),

    #[error("failed to encode session: {0}")]
    Encode(#[from] serde_json::Error),
}
