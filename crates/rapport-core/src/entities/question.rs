use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::ids::{AssessmentId, DoctorId, QuestionId};

/// A free-text question authored by a doctor during an assessment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "QuestionRecord")]
pub struct Question {
    pub id: QuestionId,
    pub doctor_id: Option<DoctorId>,
    pub assessment_id: Option<AssessmentId>,
    pub text: String,
    pub active: Option<bool>,
}

/// Wire shape of a question; the key is `id` or `question_id`.
#[derive(Deserialize)]
struct QuestionRecord {
    id: Option<QuestionId>,
    question_id: Option<QuestionId>,
    doctor_id: Option<DoctorId>,
    assessment_id: Option<AssessmentId>,
    #[serde(default)]
    text: String,
    active: Option<bool>,
}

impl TryFrom<QuestionRecord> for Question {
    type Error = CoreError;

    fn try_from(record: QuestionRecord) -> Result<Self, Self::Error> {
        let id = record
            .id
            .or(record.question_id)
            .ok_or(CoreError::MissingField {
                entity: "question",
                field: "id",
            })?;
        Ok(Self {
            id,
            doctor_id: record.doctor_id,
            assessment_id: record.assessment_id,
            text: record.text,
            active: record.active,
        })
    }
}
