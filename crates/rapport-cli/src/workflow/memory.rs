//! In-memory [`ClinicBackend`] that follows the backend's rules closely
//! enough to drive the workflows end to end without a network.

use std::cell::RefCell;
use std::collections::BTreeMap;

use rapport_client::{ApiError, ClinicBackend};
use rapport_core::entities::{Assessment, Couple, Dashboard, DashboardRow, Doctor, Question};
use rapport_core::ids::{AssessmentId, CoupleId, DoctorId, QuestionId};
use rapport_core::payloads::{
    AnswerItem, AnswersBulk, AnswersInserted, NewAssessment, NewCouple, NewDoctor, NewQuestion,
    validate_answer_value,
};
use rapport_session::SessionContext;
use serde_json::{Value, json};

/// Backend operation, as recorded by [`MemoryBackend::calls`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    CreateDoctor,
    DoctorByEmail,
    Dashboard,
    CreateCouple,
    CreateAssessment,
    CreateQuestion,
    SubmitAnswers,
    Predict,
}

#[derive(Debug, Default)]
struct State {
    next_id: i64,
    calls: Vec<Call>,
    failures: Vec<(Call, u16)>,
    doctors: Vec<Doctor>,
    couples: Vec<Couple>,
    assessments: Vec<Assessment>,
    questions: Vec<Question>,
    answers: Vec<(AssessmentId, AnswerItem)>,
    /// Latest `(proba, class)` per couple.
    predictions: BTreeMap<CoupleId, (f64, i64)>,
}

impl State {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn doctor_exists(&self, id: DoctorId) -> bool {
        self.doctors.iter().any(|doctor| doctor.id == id)
    }

    fn assessment(&self, id: AssessmentId) -> Option<&Assessment> {
        self.assessments.iter().find(|assessment| assessment.id == id)
    }
}

#[derive(Debug, Default)]
pub struct MemoryBackend {
    state: RefCell<State>,
}

fn rejected(status: u16, detail: &str) -> ApiError {
    ApiError::Api {
        status,
        payload: json!({ "detail": detail }),
    }
}

impl MemoryBackend {
    /// A backend holding one doctor with one couple, and a session logged
    /// in as that doctor with the couple selected.
    pub async fn with_doctor_and_couple() -> (Self, SessionContext, CoupleId) {
        let backend = Self::default();
        let doctor_id = backend.register_doctor("Ada Grey", "ada@clinic.test");
        let couple = backend
            .create_couple(&NewCouple {
                doctor_id,
                partner_a_name: "Sam".into(),
                partner_b_name: "Alex".into(),
            })
            .await
            .expect("seed couple");

        let mut session = SessionContext::default();
        session.set_doctor(doctor_id);
        session.select_couple(couple.id);
        backend.reset_calls();
        (backend, session, couple.id)
    }

    /// Insert a doctor directly, without recording a call.
    pub fn register_doctor(&self, name: &str, email: &str) -> DoctorId {
        let mut state = self.state.borrow_mut();
        let id = DoctorId(state.next_id());
        state.doctors.push(Doctor {
            id,
            name: name.into(),
            email: email.into(),
        });
        id
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.borrow().calls.clone()
    }

    pub fn reset_calls(&self) {
        self.state.borrow_mut().calls.clear();
    }

    /// Make the next `call` fail with `status`.
    pub fn fail_on(&self, call: Call, status: u16) {
        self.state.borrow_mut().failures.push((call, status));
    }

    pub fn answers_for(&self, assessment_id: AssessmentId) -> Vec<AnswerItem> {
        self.state
            .borrow()
            .answers
            .iter()
            .filter(|(id, _)| *id == assessment_id)
            .map(|(_, item)| item.clone())
            .collect()
    }

    pub fn question_exists(&self, question_id: QuestionId) -> bool {
        self.state
            .borrow()
            .questions
            .iter()
            .any(|question| question.id == question_id)
    }

    /// Record `call`, failing if a failure was scheduled for it.
    fn enter(&self, call: Call) -> Result<(), ApiError> {
        let mut state = self.state.borrow_mut();
        state.calls.push(call);
        if let Some(slot) = state.failures.iter().position(|(failing, _)| *failing == call) {
            let (_, status) = state.failures.remove(slot);
            return Err(rejected(status, "injected failure"));
        }
        Ok(())
    }
}

impl ClinicBackend for MemoryBackend {
    async fn create_doctor(&self, payload: &NewDoctor) -> Result<Doctor, ApiError> {
        self.enter(Call::CreateDoctor)?;
        let mut state = self.state.borrow_mut();
        if state.doctors.iter().any(|doctor| doctor.email == payload.email) {
            return Err(rejected(400, "Email already registered"));
        }
        let doctor = Doctor {
            id: DoctorId(state.next_id()),
            name: payload.name.clone(),
            email: payload.email.clone(),
        };
        state.doctors.push(doctor.clone());
        Ok(doctor)
    }

    async fn doctor_by_email(&self, email: &str) -> Result<Doctor, ApiError> {
        self.enter(Call::DoctorByEmail)?;
        self.state
            .borrow()
            .doctors
            .iter()
            .find(|doctor| doctor.email == email)
            .cloned()
            .ok_or_else(|| rejected(404, "Doctor not found"))
    }

    async fn dashboard(&self, doctor_id: DoctorId) -> Result<Dashboard, ApiError> {
        self.enter(Call::Dashboard)?;
        let state = self.state.borrow();
        if !state.doctor_exists(doctor_id) {
            return Err(rejected(404, "Doctor not found"));
        }
        let couples = state
            .couples
            .iter()
            .filter(|couple| couple.doctor_id == doctor_id)
            .map(|couple| {
                let latest = state.predictions.get(&couple.id);
                DashboardRow {
                    couple_id: couple.id,
                    partner_a_name: couple.partner_a_name.clone(),
                    partner_b_name: couple.partner_b_name.clone(),
                    last_proba: latest.map(|(proba, _)| *proba),
                    last_class: latest.map(|(_, class)| *class),
                }
            })
            .collect();
        Ok(Dashboard {
            doctor_id: Some(doctor_id),
            couples,
        })
    }

    async fn create_couple(&self, payload: &NewCouple) -> Result<Couple, ApiError> {
        self.enter(Call::CreateCouple)?;
        let mut state = self.state.borrow_mut();
        if !state.doctor_exists(payload.doctor_id) {
            return Err(rejected(404, "Doctor not found"));
        }
        let couple = Couple {
            id: CoupleId(state.next_id()),
            doctor_id: payload.doctor_id,
            partner_a_name: payload.partner_a_name.clone(),
            partner_b_name: payload.partner_b_name.clone(),
        };
        state.couples.push(couple.clone());
        Ok(couple)
    }

    async fn create_assessment(&self, payload: &NewAssessment) -> Result<Assessment, ApiError> {
        self.enter(Call::CreateAssessment)?;
        let mut state = self.state.borrow_mut();
        if !state.doctor_exists(payload.doctor_id) {
            return Err(rejected(404, "Doctor not found"));
        }
        let owner = state
            .couples
            .iter()
            .find(|couple| couple.id == payload.couple_id)
            .map(|couple| couple.doctor_id)
            .ok_or_else(|| rejected(404, "Couple not found"))?;
        if owner != payload.doctor_id {
            return Err(rejected(400, "Couple does not belong to doctor"));
        }
        let assessment = Assessment {
            id: AssessmentId(state.next_id()),
            doctor_id: payload.doctor_id,
            couple_id: payload.couple_id,
            title: payload.title.clone(),
        };
        state.assessments.push(assessment.clone());
        Ok(assessment)
    }

    async fn create_question(&self, payload: &NewQuestion) -> Result<Question, ApiError> {
        self.enter(Call::CreateQuestion)?;
        let mut state = self.state.borrow_mut();
        if state.assessment(payload.assessment_id).is_none() {
            return Err(rejected(404, "Assessment not found"));
        }
        let question = Question {
            id: QuestionId(state.next_id()),
            doctor_id: Some(payload.doctor_id),
            assessment_id: Some(payload.assessment_id),
            text: payload.text.clone(),
            active: Some(true),
        };
        state.questions.push(question.clone());
        Ok(question)
    }

    async fn submit_answers(
        &self,
        assessment_id: AssessmentId,
        payload: &AnswersBulk,
    ) -> Result<AnswersInserted, ApiError> {
        self.enter(Call::SubmitAnswers)?;
        let mut state = self.state.borrow_mut();
        if state.assessment(assessment_id).is_none() {
            return Err(rejected(404, "Assessment not found"));
        }
        if payload
            .items
            .iter()
            .any(|item| validate_answer_value(item.value).is_err())
        {
            return Err(rejected(400, "value must be between 0 and 4"));
        }
        state
            .answers
            .extend(payload.items.iter().cloned().map(|item| (assessment_id, item)));
        Ok(AnswersInserted {
            inserted: u32::try_from(payload.items.len()).unwrap_or(u32::MAX),
        })
    }

    async fn predict(&self, assessment_id: AssessmentId) -> Result<Value, ApiError> {
        self.enter(Call::Predict)?;
        let mut state = self.state.borrow_mut();
        let couple_id = state
            .assessment(assessment_id)
            .map(|assessment| assessment.couple_id)
            .ok_or_else(|| rejected(404, "Assessment not found"))?;

        // Deterministic stand-in for the model: mean answer value over 4.
        let values: Vec<i64> = state
            .answers
            .iter()
            .filter(|(id, _)| *id == assessment_id)
            .map(|(_, item)| item.value)
            .collect();
        #[allow(clippy::cast_precision_loss)]
        let proba = if values.is_empty() {
            0.5
        } else {
            values.iter().sum::<i64>() as f64 / (values.len() as f64 * 4.0)
        };
        let pred_class = i64::from(proba >= 0.5);
        state.predictions.insert(couple_id, (proba, pred_class));

        let id = state.next_id();
        Ok(json!({
            "id": id,
            "assessment_id": assessment_id,
            "proba": proba,
            "pred_class": pred_class,
            "vector_json": values,
            "audit_json": {"model": "memory"},
        }))
    }
}
