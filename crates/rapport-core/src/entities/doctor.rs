use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::ids::DoctorId;

/// A registered doctor. The acting authority for every other record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "DoctorRecord")]
pub struct Doctor {
    pub id: DoctorId,
    pub name: String,
    pub email: String,
}

/// Wire shape of a doctor. Some backend builds name the key `doctor_id`.
#[derive(Deserialize)]
struct DoctorRecord {
    id: Option<DoctorId>,
    doctor_id: Option<DoctorId>,
    name: String,
    email: String,
}

impl TryFrom<DoctorRecord> for Doctor {
    type Error = CoreError;

    fn try_from(record: DoctorRecord) -> Result<Self, Self::Error> {
        let id = record
            .doctor_id
            .or(record.id)
            .ok_or(CoreError::MissingField {
                entity: "doctor",
                field: "id",
            })?;
        Ok(Self {
            id,
            name: record.name,
            email: record.email,
        })
    }
}
