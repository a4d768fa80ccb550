//! Expert profile. The backend only serves a user's own profile.

use gomun_core::entities::Profile;
use gomun_core::payloads::ProfilePayload;
use reqwest::Method;

use crate::error::ApiError;
use crate::{ApiClient, http};

fn profile_path(email: &str) -> String {
    format!("/profile/{}", urlencoding::encode(email))
}

impl ApiClient {
    /// `GET /profile/{email}`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Api`] with 403 for someone else's profile and 404
    /// when no profile exists (company accounts have none).
    pub async fn fetch_profile(&self, token: &str, email: &str) -> Result<Profile, ApiError> {
        let value = self.get(&profile_path(email), Some(token)).await?;
        http::decode(value)
    }

    /// `PATCH /profile/{email}`: merge the set fields into the profile and
    /// return the updated profile.
    ///
    /// # Errors
    ///
    /// Same as [`ApiClient::fetch_profile`].
    pub async fn update_profile(
        &self,
        token: &str,
        email: &str,
        payload: &ProfilePayload,
    ) -> Result<Profile, ApiError> {
        let value = self
            .send(Method::PATCH, &profile_path(email), Some(token), Some(payload))
            .await?;
        http::decode(value)
    }
}
