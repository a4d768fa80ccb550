//! Public expert directory.

use gomun_core::responses::RemoteExpert;

use crate::error::ApiError;
use crate::{ApiClient, http};

impl ApiClient {
    /// `GET /experts`. No authentication required.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the body is not a list
    /// of experts.
    pub async fn fetch_experts(&self) -> Result<Vec<RemoteExpert>, ApiError> {
        let value = self.get("/experts", None).await?;
        http::decode_list(value)
    }
}
