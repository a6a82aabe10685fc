//! Request bodies sent to the backend.
//!
//! Field names match the backend's JSON contract exactly.

use serde::{Deserialize, Serialize};

use crate::enums::Partner;
use crate::errors::CoreError;
use crate::ids::{AssessmentId, CoupleId, DoctorId, QuestionId};

/// Lowest answer value the backend accepts.
pub const MIN_ANSWER_VALUE: i64 = 0;
/// Highest answer value the backend accepts.
pub const MAX_ANSWER_VALUE: i64 = 4;

/// Body of `POST /doctors`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewDoctor {
    pub name: String,
    pub email: String,
}

/// Body of `POST /couples`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewCouple {
    pub doctor_id: DoctorId,
    pub partner_a_name: String,
    pub partner_b_name: String,
}

/// Body of `POST /assessments`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewAssessment {
    pub doctor_id: DoctorId,
    pub couple_id: CoupleId,
    pub title: Option<String>,
}

/// Body of `POST /questions`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewQuestion {
    pub assessment_id: AssessmentId,
    pub doctor_id: DoctorId,
    pub text: String,
}

/// One answer inside a bulk submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnswerItem {
    pub question_id: QuestionId,
    /// Question phrasing duplicated onto the answer.
    pub text: String,
    pub value: i64,
    pub partner: Partner,
}

impl AnswerItem {
    /// Reject values the backend would refuse.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] when `value` is outside `0..=4`.
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_answer_value(self.value)
    }
}

/// Check an answer value against the accepted range.
///
/// # Errors
///
/// Returns [`CoreError::Validation`] when `value` is outside `0..=4`.
pub fn validate_answer_value(value: i64) -> Result<(), CoreError> {
    if (MIN_ANSWER_VALUE..=MAX_ANSWER_VALUE).contains(&value) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "answer value must be between {MIN_ANSWER_VALUE} and {MAX_ANSWER_VALUE}, got {value}"
        )))
    }
}

/// Body of `POST /assessments/{id}/answers/bulk`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnswersBulk {
    pub items: Vec<AnswerItem>,
}

impl AnswersBulk {
    #[must_use]
    pub fn single(item: AnswerItem) -> Self {
        Self { items: vec![item] }
    }
}

/// Response of `POST /assessments/{id}/answers/bulk`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AnswersInserted {
    #[serde(default)]
    pub inserted: u32,
}
