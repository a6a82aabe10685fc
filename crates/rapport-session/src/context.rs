use chrono::{DateTime, Utc};
use rapport_core::ids::{AssessmentId, CoupleId, DoctorId};
use serde::{Deserialize, Serialize};

use crate::error::{SessionError, SessionKey};

/// Persisted shape of the session file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionState {
    #[serde(default)]
    pub doctor_id: Option<DoctorId>,
    #[serde(default)]
    pub couple_id: Option<CoupleId>,
    #[serde(default)]
    pub assessment_id: Option<AssessmentId>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Single source of truth for session identifiers during one invocation.
///
/// Workflows read through `require_*` and write through the setters; the
/// caller persists the state afterwards when [`Self::is_dirty`] is set.
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    state: SessionState,
    dirty: bool,
}

impl SessionContext {
    #[must_use]
    pub const fn new(state: SessionState) -> Self {
        Self {
            state,
            dirty: false,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    #[must_use]
    pub const fn doctor_id(&self) -> Option<DoctorId> {
        self.state.doctor_id
    }

    #[must_use]
    pub const fn couple_id(&self) -> Option<CoupleId> {
        self.state.couple_id
    }

    #[must_use]
    pub const fn assessment_id(&self) -> Option<AssessmentId> {
        self.state.assessment_id
    }

    /// # Errors
    ///
    /// [`SessionError::Missing`] when no doctor is logged in.
    pub fn require_doctor(&self) -> Result<DoctorId, SessionError> {
        self.state
            .doctor_id
            .ok_or(SessionError::missing(SessionKey::Doctor))
    }

    /// # Errors
    ///
    /// [`SessionError::Missing`] when no couple is selected.
    pub fn require_couple(&self) -> Result<CoupleId, SessionError> {
        self.state
            .couple_id
            .ok_or(SessionError::missing(SessionKey::Couple))
    }

    /// # Errors
    ///
    /// [`SessionError::Missing`] when no assessment is selected.
    pub fn require_assessment(&self) -> Result<AssessmentId, SessionError> {
        self.state
            .assessment_id
            .ok_or(SessionError::missing(SessionKey::Assessment))
    }

    /// Record the logged-in doctor. Switching doctors drops the selections
    /// made under the previous one.
    pub fn set_doctor(&mut self, id: DoctorId) {
        if self.state.doctor_id != Some(id) {
            self.state.couple_id = None;
            self.state.assessment_id = None;
        }
        self.state.doctor_id = Some(id);
        self.touch();
    }

    /// Select a couple; any selected assessment belonged to the old couple.
    pub fn select_couple(&mut self, id: CoupleId) {
        if self.state.couple_id != Some(id) {
            self.state.assessment_id = None;
        }
        self.state.couple_id = Some(id);
        self.touch();
    }

    pub fn select_assessment(&mut self, id: AssessmentId) {
        self.state.assessment_id = Some(id);
        self.touch();
    }

    /// Forget everything.
    pub fn clear(&mut self) {
        self.state = SessionState::default();
        self.dirty = true;
    }

    fn touch(&mut self) {
        self.state.updated_at = Some(Utc::now());
        self.dirty = true;
    }
}
