use gomun_core::session::now_ms;
use gomun_core::{Role, Session};
use serde_json::Value;

use crate::error::SessionError;
use crate::storage::Storage;

/// The single storage key holding the session record.
pub const STORAGE_KEY: &str = "gomun:user";

/// A stored session classified against the clock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// Nothing usable is stored.
    Absent,
    /// A complete record whose `expiresAt` has passed.
    Expired(Session),
    /// A complete, unexpired record.
    Active(Session),
}

impl SessionState {
    #[must_use]
    pub fn classify(session: Option<Session>, now_ms: i64) -> Self {
        match session {
            None => Self::Absent,
            Some(session) if session.is_expired_at(now_ms) => Self::Expired(session),
            Some(session) => Self::Active(session),
        }
    }

    #[must_use]
    pub const fn active(&self) -> Option<&Session> {
        match self {
            Self::Active(session) => Some(session),
            Self::Absent | Self::Expired(_) => None,
        }
    }

    /// Role used for access checks: the active session's role, otherwise guest.
    #[must_use]
    pub fn effective_role(&self) -> Role {
        self.active().map_or(Role::Guest, |session| session.role)
    }
}

/// Reads and writes the session record in a [`Storage`].
#[derive(Debug)]
pub struct SessionStore<S> {
    storage: S,
}

impl<S: Storage> SessionStore<S> {
    pub const fn new(storage: S) -> Self {
        Self { storage }
    }

    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Load the stored session. Never fails: unreadable storage, malformed
    /// JSON, incomplete records, and missing or non-positive `expiresAt` all
    /// read as `None`.
    pub fn read(&self) -> Option<Session> {
        let raw = match self.storage.get_item(STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(error) => {
                tracing::debug!(%error, "session storage unreadable; treating as absent");
                return None;
            }
        };
        parse_session(&raw)
    }

    /// Persist `session`, or remove the record when `None`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if encoding or the storage write fails.
    pub fn save(&self, session: Option<&Session>) -> Result<(), SessionError> {
        match session {
            None => self.storage.remove_item(STORAGE_KEY),
            Some(session) => {
                let raw = serde_json::to_string(session)?;
                self.storage.set_item(STORAGE_KEY, &raw)
            }
        }
    }

    /// Remove the stored session.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Storage` if the record cannot be removed.
    pub fn clear(&self) -> Result<(), SessionError> {
        self.save(None)
    }

    /// Read and classify the stored session at `now_ms`.
    pub fn state_at(&self, now_ms: i64) -> SessionState {
        SessionState::classify(self.read(), now_ms)
    }

    /// Read and classify the stored session against the wall clock.
    pub fn state(&self) -> SessionState {
        self.state_at(now_ms())
    }
}

/// True when there is no session or it expired at or before `now_ms`.
#[must_use]
pub fn is_expired_at(session: Option<&Session>, now_ms: i64) -> bool {
    session.is_none_or(|session| session.is_expired_at(now_ms))
}

/// [`is_expired_at`] against the wall clock.
#[must_use]
pub fn is_expired(session: Option<&Session>) -> bool {
    is_expired_at(session, now_ms())
}

fn parse_session(raw: &str) -> Option<Session> {
    let mut value: Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(error) => {
            tracing::debug!(%error, "stored session is not valid JSON");
            return None;
        }
    };

    let Some(expires_at) = value.get("expiresAt").and_then(expiry_millis) else {
        tracing::debug!("stored session has no usable expiresAt");
        return None;
    };
    value["expiresAt"] = Value::from(expires_at);

    match serde_json::from_value(value) {
        Ok(session) => Some(session),
        Err(error) => {
            tracing::debug!(%error, "stored session is incomplete");
            None
        }
    }
}

/// Accept integral or fractional millisecond timestamps; reject zero,
/// negatives, and non-numbers.
#[allow(clippy::cast_possible_truncation)]
fn expiry_millis(value: &Value) -> Option<i64> {
    if let Some(millis) = value.as_i64() {
        return (millis > 0).then_some(millis);
    }
    let millis = value.as_f64()?;
    (millis.is_finite() && millis >= 1.0 && millis < 9.0e18).then(|| millis as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use rstest::rstest;

    #[rstest]
    #[case::not_json("not json at all")]
    #[case::json_array("[1,2,3]")]
    #[case::json_string("\"gomun\"")]
    #[case::missing_expiry(r#"{"token":"t","role":"expert","name":"n","email":"e"}"#)]
    #[case::null_expiry(r#"{"token":"t","role":"expert","name":"n","email":"e","expiresAt":null}"#)]
    #[case::zero_expiry(r#"{"token":"t","role":"expert","name":"n","email":"e","expiresAt":0}"#)]
    #[case::string_expiry(r#"{"token":"t","role":"expert","name":"n","email":"e","expiresAt":"1700000000000"}"#)]
    #[case::missing_token(r#"{"role":"expert","name":"n","email":"e","expiresAt":1700000000000}"#)]
    #[case::unknown_role(r#"{"token":"t","role":"admin","name":"n","email":"e","expiresAt":1700000000000}"#)]
    fn malformed_records_read_as_absent(#[case] raw: &str) {
        assert!(parse_session(raw).is_none());
    }

    #[test]
    fn fractional_expiry_is_truncated() {
        let session = parse_session(
            r#"{"token":"t","role":"company","name":"n","email":"e","expiresAt":1700000000000.7}"#,
        )
        .expect("should parse");
        assert_eq!(session.expires_at, 1_700_000_000_000);
    }

    #[test]
    fn classify_distinguishes_states() {
        let session = Session {
            token: "t".into(),
            role: Role::Company,
            name: "n".into(),
            email: "e".into(),
            expires_at: 2_000,
        };
        assert_eq!(SessionState::classify(None, 0), SessionState::Absent);
        assert!(matches!(
            SessionState::classify(Some(session.clone()), 2_000),
            SessionState::Expired(_)
        ));
        let active = SessionState::classify(Some(session), 1_999);
        assert_eq!(active.effective_role(), Role::Company);
        assert_eq!(SessionState::Absent.effective_role(), Role::Guest);
    }

    #[test]
    fn store_reads_what_it_saves() {
        let store = SessionStore::new(MemoryStorage::new());
        let session = Session {
            token: "t".into(),
            role: Role::Expert,
            name: "n".into(),
            email: "e".into(),
            expires_at: 42,
        };
        store.save(Some(&session)).unwrap();
        assert_eq!(store.read(), Some(session));
        store.clear().unwrap();
        assert_eq!(store.read(), None);
    }
}
