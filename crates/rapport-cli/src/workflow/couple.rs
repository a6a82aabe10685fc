//! Couple creation and selection.

use rapport_client::ClinicBackend;
use rapport_core::entities::Couple;
use rapport_core::ids::CoupleId;
use rapport_core::payloads::NewCouple;
use rapport_session::SessionContext;

use super::WorkflowError;
use super::doctor::non_blank;

/// Add a couple under the logged-in doctor.
///
/// # Errors
///
/// [`WorkflowError::Session`] with no doctor logged in (no request is sent),
/// [`WorkflowError::Request`] when the backend refuses.
pub async fn add_couple<B: ClinicBackend>(
    backend: &B,
    session: &SessionContext,
    partner_a_name: &str,
    partner_b_name: &str,
) -> Result<Couple, WorkflowError> {
    let doctor_id = session.require_doctor()?;
    let payload = NewCouple {
        doctor_id,
        partner_a_name: non_blank(partner_a_name, "partner A name")?,
        partner_b_name: non_blank(partner_b_name, "partner B name")?,
    };

    backend
        .create_couple(&payload)
        .await
        .map_err(|error| WorkflowError::request("Error adding couple", error))
}

/// Choose the couple the next assessment is for.
///
/// # Errors
///
/// [`WorkflowError::Session`] with no doctor logged in.
pub fn select_couple(
    session: &mut SessionContext,
    couple_id: CoupleId,
) -> Result<CoupleId, WorkflowError> {
    session.require_doctor()?;
    session.select_couple(couple_id);
    Ok(couple_id)
}
