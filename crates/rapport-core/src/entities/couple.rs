use serde::{Deserialize, Serialize};

use crate::ids::{CoupleId, DoctorId};

/// A patient record: two partners under one doctor's care.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Couple {
    pub id: CoupleId,
    pub doctor_id: DoctorId,
    pub partner_a_name: String,
    pub partner_b_name: String,
}
