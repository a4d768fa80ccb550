//! Login and registration.
//!
//! Both return the backend's auth record unchanged. Turning it into a
//! persisted session (absolute expiry, storage write) is the caller's job.

use gomun_core::Role;
use gomun_core::payloads::{LoginRequest, RegisterRequest};
use gomun_core::responses::AuthResponse;
use reqwest::Method;

use crate::error::ApiError;
use crate::{ApiClient, http};

impl ApiClient {
    /// `POST /login`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Api`] when the backend rejects the credentials
    /// (401) and [`ApiError::Network`] when it cannot be reached.
    pub async fn login(
        &self,
        role: Role,
        email: &str,
        password: &str,
    ) -> Result<AuthResponse, ApiError> {
        let body = LoginRequest {
            role,
            email: email.to_string(),
            password: password.to_string(),
        };
        let value = self.send(Method::POST, "/login", None, Some(&body)).await?;
        http::decode(value)
    }

    /// `POST /register`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Api`] for validation failures (400) or an
    /// already-registered email (409).
    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        let value = self
            .send(Method::POST, "/register", None, Some(request))
            .await?;
        http::decode(value)
    }
}
