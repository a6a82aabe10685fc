//! Registration and login.

use rapport_client::ClinicBackend;
use rapport_core::CoreError;
use rapport_core::entities::Doctor;
use rapport_core::payloads::NewDoctor;
use rapport_session::SessionContext;

use super::WorkflowError;

/// Register a doctor and log in as them.
///
/// # Errors
///
/// [`WorkflowError::Invalid`] for a blank name or email,
/// [`WorkflowError::Request`] when the backend refuses (e.g. duplicate email).
pub async fn register<B: ClinicBackend>(
    backend: &B,
    session: &mut SessionContext,
    name: &str,
    email: &str,
) -> Result<Doctor, WorkflowError> {
    let payload = NewDoctor {
        name: non_blank(name, "name")?,
        email: non_blank(email, "email")?,
    };
    let doctor = backend
        .create_doctor(&payload)
        .await
        .map_err(|error| WorkflowError::request("Doctor registration failed", error))?;

    session.set_doctor(doctor.id);
    tracing::info!(doctor_id = %doctor.id, "doctor registered");
    Ok(doctor)
}

/// Log in as the doctor registered under `email`.
///
/// # Errors
///
/// [`WorkflowError::Request`] when no doctor has that email.
pub async fn login<B: ClinicBackend>(
    backend: &B,
    session: &mut SessionContext,
    email: &str,
) -> Result<Doctor, WorkflowError> {
    let email = non_blank(email, "email")?;
    let doctor = backend
        .doctor_by_email(&email)
        .await
        .map_err(|error| WorkflowError::request("Doctor not found. Please register first.", error))?;

    session.set_doctor(doctor.id);
    tracing::info!(doctor_id = %doctor.id, "doctor logged in");
    Ok(doctor)
}

pub(crate) fn non_blank(value: &str, field: &str) -> Result<String, CoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    Ok(trimmed.to_string())
}
