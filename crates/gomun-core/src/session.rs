use chrono::Utc;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Role;
use crate::responses::AuthResponse;

/// Session length assumed when the backend omits `expiresIn`.
pub const DEFAULT_SESSION_DURATION_SECS: i64 = 60 * 60;

/// Client-held proof of authentication, persisted under a single storage key.
///
/// Either entirely absent or fully populated: deserialization requires every
/// field, and readers additionally reject a zero or negative `expiresAt`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub token: String,
    pub role: Role,
    pub name: String,
    pub email: String,
    /// Absolute expiry in epoch milliseconds.
    pub expires_at: i64,
}

impl Session {
    /// Compose an auth record into a session expiring `expiresIn` seconds after `now_ms`.
    #[must_use]
    pub fn from_auth(auth: &AuthResponse, now_ms: i64) -> Self {
        let duration_secs = auth
            .expires_in
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_SESSION_DURATION_SECS);
        Self {
            token: auth.token.clone(),
            role: auth.role,
            name: auth.name.clone(),
            email: auth.email.clone(),
            expires_at: now_ms.saturating_add(duration_secs.saturating_mul(1000)),
        }
    }

    /// True once `expires_at` is at or before `now_ms`.
    #[must_use]
    pub const fn is_expired_at(&self, now_ms: i64) -> bool {
        self.expires_at <= now_ms
    }

    /// Milliseconds left before expiry, zero when already expired.
    #[must_use]
    pub fn remaining_ms(&self, now_ms: i64) -> i64 {
        (self.expires_at - now_ms).max(0)
    }
}

/// Current wall-clock time in epoch milliseconds.
#[must_use]
pub fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}
