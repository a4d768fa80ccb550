//! Response shapes returned by the GOMUN backend.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{ExpertDraft, NotificationItem};
use crate::enums::Role;

/// Result of login or registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    pub role: Role,
    pub name: String,
    pub email: String,
    /// Session lifetime in seconds. Older backends omit it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<i64>,
}

/// An expert as listed by `GET /api/experts`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RemoteExpert {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl From<RemoteExpert> for ExpertDraft {
    fn from(remote: RemoteExpert) -> Self {
        Self {
            name: remote.name,
            title: remote.title.unwrap_or_default(),
            region: remote.region.unwrap_or_default(),
            rating: remote.rating.unwrap_or_default(),
            keywords: Vec::new(),
            avatar: remote.avatar,
            years: None,
            focus: remote.focus,
            availability: remote.availability,
            response_time: remote.response_time,
            email: Some(remote.email),
            phone: None,
            website: None,
        }
    }
}

/// A notification as stored by the backend for the signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RemoteNotification {
    pub id: String,
    pub title: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_route: Option<String>,
    pub read: bool,
    pub created_at: String,
    /// Sender email.
    pub from: String,
}

impl From<RemoteNotification> for NotificationItem {
    fn from(remote: RemoteNotification) -> Self {
        Self {
            id: remote.id,
            title: remote.title,
            message: remote.message,
            time: None,
            created_at: Some(remote.created_at),
            read: Some(remote.read),
            tag: remote.tag,
            action_label: None,
            action_route: remote.action_route,
            from: Some(remote.from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_response_accepts_missing_expires_in() {
        let auth: AuthResponse = serde_json::from_str(
            r#"{"token":"t","role":"company","name":"n","email":"e@x.kr"}"#,
        )
        .unwrap();
        assert_eq!(auth.role, Role::Company);
        assert!(auth.expires_in.is_none());
    }

    #[test]
    fn remote_expert_becomes_draft_keyed_by_email() {
        let remote: RemoteExpert = serde_json::from_str(
            r#"{"name":"신규","email":"new@gomun.kr","title":"전문가","responseTime":"24시간 이내","rating":4.5}"#,
        )
        .unwrap();
        let draft = ExpertDraft::from(remote);
        assert_eq!(draft.email.as_deref(), Some("new@gomun.kr"));
        assert_eq!(draft.response_time.as_deref(), Some("24시간 이내"));
        assert!((draft.rating - 4.5).abs() < f64::EPSILON);
        assert!(draft.region.is_empty());
    }

    #[test]
    fn remote_notification_maps_read_flag_and_sender() {
        let remote: RemoteNotification = serde_json::from_str(
            r#"{"id":"n1","title":"t","message":"m","read":true,"createdAt":"2025-11-16T00:00:00Z","from":"a@b.kr"}"#,
        )
        .unwrap();
        let item = NotificationItem::from(remote);
        assert!(item.is_read());
        assert_eq!(item.from.as_deref(), Some("a@b.kr"));
        assert_eq!(item.created_at.as_deref(), Some("2025-11-16T00:00:00Z"));
    }
}
