//! Assessments, questions, answers, and predictions.

use rapport_core::entities::{Assessment, Question};
use rapport_core::ids::AssessmentId;
use rapport_core::payloads::{AnswersBulk, AnswersInserted, NewAssessment, NewQuestion};
use serde_json::Value;

use crate::http::{check_response, decode};
use crate::{ApiClient, ApiError};

impl ApiClient {
    /// Open an assessment for a couple (`POST /assessments`).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, non-success status (unknown
    /// doctor or couple, couple owned by another doctor), or an undecodable
    /// body.
    pub async fn create_assessment(
        &self,
        payload: &NewAssessment,
    ) -> Result<Assessment, ApiError> {
        let path = "/assessments";
        tracing::debug!(path, couple_id = %payload.couple_id, "creating assessment");
        let resp = self.http.post(self.url(path)).json(payload).send().await?;
        decode(check_response(resp).await?, path).await
    }

    /// Author a question (`POST /questions`).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, non-success status, or a
    /// body without a question id.
    pub async fn create_question(&self, payload: &NewQuestion) -> Result<Question, ApiError> {
        let path = "/questions";
        tracing::debug!(path, assessment_id = %payload.assessment_id, "creating question");
        let resp = self.http.post(self.url(path)).json(payload).send().await?;
        decode(check_response(resp).await?, path).await
    }

    /// Submit answers in one request (`POST /assessments/{id}/answers/bulk`).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or non-success status (for
    /// example a value outside `0..=4`).
    pub async fn submit_answers(
        &self,
        assessment_id: AssessmentId,
        payload: &AnswersBulk,
    ) -> Result<AnswersInserted, ApiError> {
        let path = format!("/assessments/{assessment_id}/answers/bulk");
        tracing::debug!(path = %path, items = payload.items.len(), "submitting answers");
        let resp = self.http.post(self.url(&path)).json(payload).send().await?;
        decode(check_response(resp).await?, &path).await
    }

    /// Run the model for an assessment (`POST /assessments/{id}/predict`).
    ///
    /// Returns the backend's JSON unchanged; callers display it verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, non-success status, or a
    /// non-JSON body.
    pub async fn predict(&self, assessment_id: AssessmentId) -> Result<Value, ApiError> {
        let path = format!("/assessments/{assessment_id}/predict");
        tracing::debug!(path = %path, "requesting prediction");
        let resp = self.http.post(self.url(&path)).send().await?;
        decode(check_response(resp).await?, &path).await
    }
}
