//! `/couples` resource.

use rapport_core::entities::Couple;
use rapport_core::payloads::NewCouple;

use crate::http::{check_response, decode};
use crate::{ApiClient, ApiError};

impl ApiClient {
    /// Create a couple under a doctor (`POST /couples`).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, non-success status (unknown
    /// doctor), or an undecodable body.
    pub async fn create_couple(&self, payload: &NewCouple) -> Result<Couple, ApiError> {
        let path = "/couples";
        tracing::debug!(path, doctor_id = %payload.doctor_id, "creating couple");
        let resp = self.http.post(self.url(path)).json(payload).send().await?;
        decode(check_response(resp).await?, path).await
    }
}
