//! # gomun-client
//!
//! Thin typed wrappers around the GOMUN REST backend.
//!
//! Every service method issues exactly one request and funnels the response
//! through [`http::handle_response`]. There are no retries and no caching;
//! failures surface to the caller as [`ApiError`].
//!
//! Services are grouped by resource, each module adding methods to
//! [`ApiClient`]:
//! - [`auth`]: login and registration
//! - [`experts`]: public expert directory
//! - [`notifications`]: per-user notifications (bearer token)
//! - [`profile`]: expert profile read/update (bearer token)

pub mod auth;
pub mod experts;
pub mod http;
pub mod notifications;
pub mod profile;

mod error;

pub use error::ApiError;

use reqwest::Method;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::Serialize;
use serde_json::Value;

/// Normalize a configured API base into a root ending in exactly one `/api`.
///
/// Whitespace and trailing slashes are stripped; an empty base means the
/// same-origin `/api`.
#[must_use]
pub fn normalize_base(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return String::from("/api");
    }
    if trimmed.ends_with("/api") {
        trimmed.to_string()
    } else {
        format!("{trimmed}/api")
    }
}

/// JSON content type plus `Authorization: Bearer <token>` when a non-empty
/// token is given.
#[must_use]
pub fn auth_headers(token: Option<&str>) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    if let Some(token) = token.filter(|t| !t.is_empty()) {
        match HeaderValue::from_str(&format!("Bearer {token}")) {
            Ok(value) => {
                headers.insert(AUTHORIZATION, value);
            }
            Err(error) => {
                tracing::warn!(%error, "token is not a valid header value; sending without it");
            }
        }
    }
    headers
}

/// HTTP client bound to one normalized API root.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base: String,
}

impl ApiClient {
    /// Create a client for `raw_base` with no request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] if the underlying `reqwest::Client`
    /// cannot be built (e.g. TLS backend initialization failure).
    pub fn new(raw_base: &str) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("gomun/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::with_http(http, raw_base))
    }

    /// Create a client from configuration, applying `api.timeout_secs` if set.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] if the underlying `reqwest::Client`
    /// cannot be built.
    pub fn from_config(config: &gomun_config::ApiConfig) -> Result<Self, ApiError> {
        let mut builder =
            reqwest::Client::builder().user_agent(concat!("gomun/", env!("CARGO_PKG_VERSION")));
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(std::time::Duration::from_secs(secs));
        }
        Ok(Self::with_http(builder.build()?, &config.base_url))
    }

    /// Wrap an existing `reqwest::Client`.
    #[must_use]
    pub fn with_http(http: reqwest::Client, raw_base: &str) -> Self {
        Self {
            http,
            base: normalize_base(raw_base),
        }
    }

    /// The normalized API root (e.g. `https://api.gomun.kr/api`).
    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }

    /// Issue one request and run the response through [`http::handle_response`].
    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        token: Option<&str>,
        body: Option<&B>,
    ) -> Result<Value, ApiError> {
        let url = self.url(path);
        tracing::debug!(%method, %url, authenticated = token.is_some(), "api request");

        let mut request = self
            .http
            .request(method, &url)
            .headers(auth_headers(token));
        if let Some(body) = body {
            request = request.body(serde_json::to_vec(body)?);
        }

        let resp = request.send().await?;
        tracing::debug!(status = resp.status().as_u16(), %url, "api response");
        http::handle_response(resp).await
    }

    async fn get(&self, path: &str, token: Option<&str>) -> Result<Value, ApiError> {
        self.send::<()>(Method::GET, path, token, None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("", "/api")]
    #[case("   ", "/api")]
    #[case("/", "/api")]
    #[case("https://x.com/", "https://x.com/api")]
    #[case("https://x.com", "https://x.com/api")]
    #[case("https://x.com/api/", "https://x.com/api")]
    #[case("https://x.com/api", "https://x.com/api")]
    #[case("https://x.com/api///", "https://x.com/api")]
    #[case("  http://localhost:8000  ", "http://localhost:8000/api")]
    #[case("https://x.com/v2", "https://x.com/v2/api")]
    fn normalize_base_cases(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(normalize_base(raw), expected);
    }

    #[test]
    fn auth_headers_without_token_only_set_content_type() {
        let headers = auth_headers(None);
        assert_eq!(headers.len(), 1);
        assert_eq!(headers[CONTENT_TYPE], "application/json");

        let headers = auth_headers(Some(""));
        assert!(headers.get(AUTHORIZATION).is_none());
    }

    #[test]
    fn auth_headers_with_token_add_bearer() {
        let headers = auth_headers(Some("abc123"));
        assert_eq!(headers[AUTHORIZATION], "Bearer abc123");
        assert_eq!(headers[CONTENT_TYPE], "application/json");
    }

    #[test]
    fn client_normalizes_its_base() {
        let client = ApiClient::new("https://api.gomun.kr/").expect("client");
        assert_eq!(client.base(), "https://api.gomun.kr/api");
        assert_eq!(client.url("/experts"), "https://api.gomun.kr/api/experts");
    }

    #[test]
    fn from_config_reads_base_url() {
        let config = gomun_config::ApiConfig {
            base_url: "http://localhost:8000".into(),
            timeout_secs: Some(5),
        };
        let client = ApiClient::from_config(&config).expect("client");
        assert_eq!(client.base(), "http://localhost:8000/api");
    }
}
