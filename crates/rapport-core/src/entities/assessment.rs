use serde::{Deserialize, Serialize};

use crate::ids::{AssessmentId, CoupleId, DoctorId};

/// One questionnaire session for a couple.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Assessment {
    pub id: AssessmentId,
    pub doctor_id: DoctorId,
    pub couple_id: CoupleId,
    #[serde(default)]
    pub title: Option<String>,
}
