use chrono::{DateTime, Utc};
use rapport_core::ids::{AssessmentId, CoupleId, DoctorId};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;
use crate::ui;

#[derive(Serialize)]
struct SessionStatus {
    session_file: String,
    doctor_id: Option<DoctorId>,
    couple_id: Option<CoupleId>,
    assessment_id: Option<AssessmentId>,
    updated_at: Option<DateTime<Utc>>,
}

#[derive(Serialize)]
struct LogoutResponse {
    cleared: bool,
}

pub fn status(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let state = ctx.session.state();
    output(
        &SessionStatus {
            session_file: ctx.store.path().display().to_string(),
            doctor_id: state.doctor_id,
            couple_id: state.couple_id,
            assessment_id: state.assessment_id,
            updated_at: state.updated_at,
        },
        flags.format,
    )
}

pub fn logout(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.reset_session()?;
    ui::notice("Logged out.");
    output(&LogoutResponse { cleared: true }, flags.format)
}
