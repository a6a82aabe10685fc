//! `/doctors` resource.

use rapport_core::entities::{Dashboard, Doctor};
use rapport_core::ids::DoctorId;
use rapport_core::payloads::NewDoctor;

use crate::http::{check_response, decode};
use crate::{ApiClient, ApiError};

impl ApiClient {
    /// Register a doctor (`POST /doctors`).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, a non-success status (for
    /// example a duplicate email), or an undecodable body.
    pub async fn create_doctor(&self, payload: &NewDoctor) -> Result<Doctor, ApiError> {
        let path = "/doctors";
        tracing::debug!(path, email = %payload.email, "registering doctor");
        let resp = self.http.post(self.url(path)).json(payload).send().await?;
        decode(check_response(resp).await?, path).await
    }

    /// Look a doctor up by email (`GET /doctors/by_email?email=`).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Api`] with status 404 for an unknown email.
    pub async fn doctor_by_email(&self, email: &str) -> Result<Doctor, ApiError> {
        let path = format!("/doctors/by_email?email={}", urlencoding::encode(email));
        tracing::debug!(path = %path, "looking up doctor");
        let resp = self.http.get(self.url(&path)).send().await?;
        decode(check_response(resp).await?, "/doctors/by_email").await
    }

    /// Fetch a doctor's couples with their latest prediction
    /// (`GET /doctors/{id}/dashboard`).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, non-success status, or an
    /// undecodable body.
    pub async fn dashboard(&self, doctor_id: DoctorId) -> Result<Dashboard, ApiError> {
        let path = format!("/doctors/{doctor_id}/dashboard");
        tracing::debug!(path = %path, "loading dashboard");
        let resp = self.http.get(self.url(&path)).send().await?;
        decode(check_response(resp).await?, &path).await
    }
}
