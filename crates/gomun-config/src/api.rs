//! Backend API configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Raw API base. Empty means same-origin `/api`; the client normalizes
    /// any value so it ends in exactly one `/api`.
    #[serde(default)]
    pub base_url: String,

    /// Per-request timeout. Unset means requests wait indefinitely.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl ApiConfig {
    /// True when an explicit backend base has been set.
    pub fn is_configured(&self) -> bool {
        !self.base_url.trim().is_empty()
    }

    /// Reject values the HTTP client could never use.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout_secs == Some(0) {
            return Err(ConfigError::InvalidValue {
                field: "api.timeout_secs".into(),
                reason: "must be greater than zero (omit it to disable the timeout)".into(),
            });
        }
        let base = self.base_url.trim();
        if base.contains(char::is_whitespace) {
            return Err(ConfigError::InvalidValue {
                field: "api.base_url".into(),
                reason: format!("'{base}' contains whitespace"),
            });
        }
        Ok(())
    }
}
