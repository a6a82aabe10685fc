//! Service root.

use serde::{Deserialize, Serialize};

use crate::http::{check_response, decode};
use crate::{ApiClient, ApiError};

/// Body of `GET /`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServiceStatus {
    #[serde(default)]
    pub message: String,
}

impl ApiClient {
    /// Check that the backend is reachable (`GET /`).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the backend is down or answers with an
    /// error.
    pub async fn health(&self) -> Result<ServiceStatus, ApiError> {
        let resp = self.http.get(self.url("/")).send().await?;
        decode(check_response(resp).await?, "/").await
    }
}
