use serde::{Deserialize, Serialize};

use crate::ids::{CoupleId, DoctorId};

/// One couple as listed on a doctor's dashboard, with its most recent
/// prediction (if any).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardRow {
    pub couple_id: CoupleId,
    pub partner_a_name: String,
    pub partner_b_name: String,
    #[serde(default)]
    pub last_proba: Option<f64>,
    #[serde(default)]
    pub last_class: Option<i64>,
}

/// Dashboard payload for a doctor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Dashboard {
    #[serde(default)]
    pub doctor_id: Option<DoctorId>,
    #[serde(default)]
    pub couples: Vec<DashboardRow>,
}
