//! Dashboard view: a doctor's couples, their latest prediction, and totals.

use rapport_client::ClinicBackend;
use rapport_core::entities::DashboardRow;
use rapport_core::ids::{CoupleId, DoctorId};
use rapport_core::stats::{
    DashboardStats, class_label, couple_names, format_probability, history_link,
};
use rapport_session::SessionContext;
use serde::Serialize;

use super::WorkflowError;

/// One rendered dashboard line.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DashboardLine {
    pub couple_id: CoupleId,
    pub couple: String,
    pub probability: String,
    pub prediction: String,
    pub history: String,
    /// Command that begins a new assessment for this couple.
    pub assess: String,
}

impl DashboardLine {
    #[must_use]
    pub fn render(row: &DashboardRow, frontend_url: &str) -> Self {
        Self {
            couple_id: row.couple_id,
            couple: couple_names(row),
            probability: format_probability(row.last_proba),
            prediction: class_label(row.last_class).to_string(),
            history: history_link(frontend_url, row.couple_id),
            assess: format!("rapport couple select {}", row.couple_id),
        }
    }
}

/// Everything the dashboard shows.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DashboardView {
    pub doctor_id: DoctorId,
    pub stats: DashboardStats,
    pub couples: Vec<DashboardLine>,
}

/// Fetch and render the logged-in doctor's dashboard.
///
/// # Errors
///
/// [`WorkflowError::Session`] with no doctor logged in (no request is sent),
/// [`WorkflowError::Request`] when the backend refuses.
pub async fn load_dashboard<B: ClinicBackend>(
    backend: &B,
    session: &SessionContext,
    frontend_url: &str,
) -> Result<DashboardView, WorkflowError> {
    let doctor_id = session.require_doctor()?;
    let dashboard = backend
        .dashboard(doctor_id)
        .await
        .map_err(|error| WorkflowError::request("Failed to load dashboard", error))?;

    let stats = DashboardStats::tally(&dashboard.couples);
    tracing::debug!(?stats, "dashboard loaded");

    Ok(DashboardView {
        doctor_id,
        stats,
        couples: dashboard
            .couples
            .iter()
            .map(|row| DashboardLine::render(row, frontend_url))
            .collect(),
    })
}
