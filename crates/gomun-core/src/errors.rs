//! Cross-cutting error types for the GOMUN client.
//!
//! Crate-specific failures (storage, HTTP, configuration) live in their own
//! crates. The CLI converges everything into `anyhow`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// A role string did not name a known role.
    #[error("Invalid role: '{0}' (expected guest, expert or company)")]
    InvalidRole(String),

    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// Data failed validation.
    #[error("Validation error: {0}")]
    Validation(String),
}
