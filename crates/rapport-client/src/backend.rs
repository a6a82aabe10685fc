//! The seam between workflows and the transport.

use rapport_core::entities::{Assessment, Couple, Dashboard, Doctor, Question};
use rapport_core::ids::{AssessmentId, DoctorId};
use rapport_core::payloads::{
    AnswersBulk, AnswersInserted, NewAssessment, NewCouple, NewDoctor, NewQuestion,
};
use serde_json::Value;

use crate::{ApiClient, ApiError};

/// Backend operations used by the Rapport workflows.
///
/// [`ApiClient`] is the production implementation.
#[allow(async_fn_in_trait)]
pub trait ClinicBackend {
    async fn create_doctor(&self, payload: &NewDoctor) -> Result<Doctor, ApiError>;
    async fn doctor_by_email(&self, email: &str) -> Result<Doctor, ApiError>;
    async fn dashboard(&self, doctor_id: DoctorId) -> Result<Dashboard, ApiError>;
    async fn create_couple(&self, payload: &NewCouple) -> Result<Couple, ApiError>;
    async fn create_assessment(&self, payload: &NewAssessment) -> Result<Assessment, ApiError>;
    async fn create_question(&self, payload: &NewQuestion) -> Result<Question, ApiError>;
    async fn submit_answers(
        &self,
        assessment_id: AssessmentId,
        payload: &AnswersBulk,
    ) -> Result<AnswersInserted, ApiError>;
    async fn predict(&self, assessment_id: AssessmentId) -> Result<Value, ApiError>;
}

impl ClinicBackend for ApiClient {
    async fn create_doctor(&self, payload: &NewDoctor) -> Result<Doctor, ApiError> {
        Self::create_doctor(self, payload).await
    }

    async fn doctor_by_email(&self, email: &str) -> Result<Doctor, ApiError> {
        Self::doctor_by_email(self, email).await
    }

    async fn dashboard(&self, doctor_id: DoctorId) -> Result<Dashboard, ApiError> {
        Self::dashboard(self, doctor_id).await
    }

    async fn create_couple(&self, payload: &NewCouple) -> Result<Couple, ApiError> {
        Self::create_couple(self, payload).await
    }

    async fn create_assessment(&self, payload: &NewAssessment) -> Result<Assessment, ApiError> {
        Self::create_assessment(self, payload).await
    }

    async fn create_question(&self, payload: &NewQuestion) -> Result<Question, ApiError> {
        Self::create_question(self, payload).await
    }

    async fn submit_answers(
        &self,
        assessment_id: AssessmentId,
        payload: &AnswersBulk,
    ) -> Result<AnswersInserted, ApiError> {
        Self::submit_answers(self, assessment_id, payload).await
    }

    async fn predict(&self, assessment_id: AssessmentId) -> Result<Value, ApiError> {
        Self::predict(self, assessment_id).await
    }
}
