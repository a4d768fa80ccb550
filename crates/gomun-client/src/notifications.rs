//! Notifications for the signed-in user. Every call needs a bearer token.

use gomun_core::payloads::{NotificationPayload, NotificationUpdate};
use gomun_core::responses::RemoteNotification;
use reqwest::Method;

use crate::error::ApiError;
use crate::{ApiClient, http};

impl ApiClient {
    /// `GET /notifications`: the caller's inbox, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Api`] with status 401 when the token is missing,
    /// unknown, or expired.
    pub async fn fetch_notifications(
        &self,
        token: &str,
    ) -> Result<Vec<RemoteNotification>, ApiError> {
        let value = self.get("/notifications", Some(token)).await?;
        http::decode_list(value)
    }

    /// `POST /notifications`: send a notification to another user.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Api`] with status 404 when the recipient is unknown.
    pub async fn create_notification(
        &self,
        token: &str,
        payload: &NotificationPayload,
    ) -> Result<RemoteNotification, ApiError> {
        let value = self
            .send(Method::POST, "/notifications", Some(token), Some(payload))
            .await?;
        http::decode(value)
    }

    /// `PATCH /notifications/{id}`: set the read flag.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Api`] with status 404 when the notification is not
    /// in the caller's inbox.
    pub async fn mark_notification(
        &self,
        token: &str,
        id: &str,
        read: bool,
    ) -> Result<RemoteNotification, ApiError> {
        let path = format!("/notifications/{}", urlencoding::encode(id));
        let value = self
            .send(
                Method::PATCH,
                &path,
                Some(token),
                Some(&NotificationUpdate { read }),
            )
            .await?;
        http::decode(value)
    }
}
