//! Assessment authoring: create, add question/answer items, predict.
//!
//! ```text
//! create ──► add item (repeatable) ──► predict
//! ```

use rapport_client::ClinicBackend;
use rapport_core::entities::{Assessment, Question};
use rapport_core::enums::Partner;
use rapport_core::ids::{AssessmentId, CoupleId};
use rapport_core::payloads::{AnswerItem, AnswersBulk, NewAssessment, NewQuestion};
use rapport_session::SessionContext;
use serde::Serialize;
use serde_json::Value;

use super::WorkflowError;
use super::doctor::non_blank;

/// One question and the answer to attach to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemInput {
    pub text: String,
    pub value: i64,
    pub partner: Partner,
}

/// Result of a successful add-item step.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ItemAdded {
    pub assessment_id: AssessmentId,
    pub question: Question,
    pub answer: AnswerItem,
    pub inserted: u32,
}

/// Open an assessment and make it the current one.
///
/// The couple is `couple` when given, otherwise the selected couple.
///
/// # Errors
///
/// [`WorkflowError::Session`] when no doctor is logged in or no couple is
/// known (no request is sent), [`WorkflowError::Request`] when the backend
/// refuses.
pub async fn create_assessment<B: ClinicBackend>(
    backend: &B,
    session: &mut SessionContext,
    couple: Option<CoupleId>,
    title: Option<&str>,
) -> Result<Assessment, WorkflowError> {
    let doctor_id = session.require_doctor()?;
    let couple_id = match couple {
        Some(id) => id,
        None => session.require_couple()?,
    };
    let title = title
        .map(str::trim)
        .filter(|title| !title.is_empty())
        .map(str::to_string);

    let assessment = backend
        .create_assessment(&NewAssessment {
            doctor_id,
            couple_id,
            title,
        })
        .await
        .map_err(|error| WorkflowError::request("Error creating assessment", error))?;

    session.select_couple(couple_id);
    session.select_assessment(assessment.id);
    tracing::info!(assessment_id = %assessment.id, %couple_id, "assessment created");
    Ok(assessment)
}

/// Create a question, then submit exactly one answer referencing it.
///
/// The two requests are independent. If the answer is rejected after the
/// question was created, the question is left without an answer and the
/// error is [`WorkflowError::OrphanedQuestion`].
///
/// # Errors
///
/// [`WorkflowError::Session`] / [`WorkflowError::Invalid`] before any request,
/// [`WorkflowError::Request`] if the question is rejected,
/// [`WorkflowError::OrphanedQuestion`] if only the answer is rejected.
pub async fn add_item<B: ClinicBackend>(
    backend: &B,
    session: &SessionContext,
    assessment: Option<AssessmentId>,
    input: ItemInput,
) -> Result<ItemAdded, WorkflowError> {
    let doctor_id = session.require_doctor()?;
    let assessment_id = match assessment {
        Some(id) => id,
        None => session.require_assessment()?,
    };
    let text = non_blank(&input.text, "question text")?;
    rapport_core::payloads::validate_answer_value(input.value)?;

    let question = backend
        .create_question(&NewQuestion {
            assessment_id,
            doctor_id,
            text: text.clone(),
        })
        .await
        .map_err(|error| WorkflowError::request("Error creating question", error))?;

    let answer = AnswerItem {
        question_id: question.id,
        text,
        value: input.value,
        partner: input.partner,
    };
    let inserted = backend
        .submit_answers(assessment_id, &AnswersBulk::single(answer.clone()))
        .await
        .map_err(|source| {
            tracing::warn!(question_id = %question.id, %assessment_id, "answer rejected after question was created");
            WorkflowError::OrphanedQuestion {
                question_id: question.id,
                source,
            }
        })?;

    Ok(ItemAdded {
        assessment_id,
        question,
        answer,
        inserted: inserted.inserted,
    })
}

/// Run the model for an assessment and return the backend's raw result.
///
/// # Errors
///
/// [`WorkflowError::Session`] when no assessment is given or selected,
/// [`WorkflowError::Request`] when the backend refuses.
pub async fn predict<B: ClinicBackend>(
    backend: &B,
    session: &SessionContext,
    assessment: Option<AssessmentId>,
) -> Result<Value, WorkflowError> {
    let assessment_id = match assessment {
        Some(id) => id,
        None => session.require_assessment()?,
    };
    backend
        .predict(assessment_id)
        .await
        .map_err(|error| WorkflowError::request("Prediction failed", error))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rapport_core::ids::DoctorId;
    use rapport_session::SessionKey;

    use super::*;
    use crate::workflow::memory::{Call, MemoryBackend};

    fn item(value: i64) -> ItemInput {
        ItemInput {
            text: "We resolve conflicts calmly".into(),
            value,
            partner: Partner::A,
        }
    }

    #[tokio::test]
    async fn create_without_doctor_sends_nothing() {
        let backend = MemoryBackend::default();
        let mut session = SessionContext::default();
        let err = create_assessment(&backend, &mut session, Some(CoupleId(1)), Some("Intake"))
            .await
            .unwrap_err();

        assert_eq!(err.missing_session(), Some(SessionKey::Doctor));
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn create_without_couple_sends_nothing() {
        let backend = MemoryBackend::default();
        let mut session = SessionContext::default();
        session.set_doctor(DoctorId(1));
        let err = create_assessment(&backend, &mut session, None, None)
            .await
            .unwrap_err();

        assert_eq!(err.missing_session(), Some(SessionKey::Couple));
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn create_selects_new_assessment() {
        let (backend, mut session, couple_id) = MemoryBackend::with_doctor_and_couple().await;

        let assessment = create_assessment(&backend, &mut session, None, Some("  Intake  "))
            .await
            .expect("created");

        assert_eq!(assessment.couple_id, couple_id);
        assert_eq!(assessment.title.as_deref(), Some("Intake"));
        assert_eq!(session.assessment_id(), Some(assessment.id));
    }

    #[tokio::test]
    async fn create_for_other_doctors_couple_is_rejected() {
        let (backend, _, couple_id) = MemoryBackend::with_doctor_and_couple().await;
        let mut intruder = SessionContext::default();
        intruder.set_doctor(backend.register_doctor("Eve", "eve@clinic.test"));

        let err = create_assessment(&backend, &mut intruder, Some(couple_id), None)
            .await
            .unwrap_err();
        assert!(matches!(err, WorkflowError::Request { source, .. } if source.status() == Some(400)));
        assert_eq!(intruder.assessment_id(), None);
    }

    #[tokio::test]
    async fn add_item_issues_question_then_answer() {
        let (backend, mut session, _) = MemoryBackend::with_doctor_and_couple().await;
        let assessment = create_assessment(&backend, &mut session, None, None)
            .await
            .unwrap();
        backend.reset_calls();

        let added = add_item(&backend, &session, None, item(3))
            .await
            .expect("item added");

        assert_eq!(backend.calls(), vec![Call::CreateQuestion, Call::SubmitAnswers]);
        assert_eq!(added.assessment_id, assessment.id);
        assert_eq!(added.answer.question_id, added.question.id);
        assert_eq!(added.answer.text, added.question.text);
        assert_eq!(added.inserted, 1);
        assert_eq!(backend.answers_for(assessment.id), vec![added.answer]);
    }

    #[tokio::test]
    async fn add_item_without_assessment_sends_nothing() {
        let (backend, session, _) = MemoryBackend::with_doctor_and_couple().await;
        backend.reset_calls();

        let err = add_item(&backend, &session, None, item(1)).await.unwrap_err();
        assert_eq!(err.missing_session(), Some(SessionKey::Assessment));
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn out_of_range_value_sends_nothing() {
        let (backend, mut session, _) = MemoryBackend::with_doctor_and_couple().await;
        create_assessment(&backend, &mut session, None, None)
            .await
            .unwrap();
        backend.reset_calls();

        let err = add_item(&backend, &session, None, item(5)).await.unwrap_err();
        assert!(matches!(err, WorkflowError::Invalid(_)));
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn rejected_question_stops_before_answer() {
        let (backend, mut session, _) = MemoryBackend::with_doctor_and_couple().await;
        create_assessment(&backend, &mut session, None, None)
            .await
            .unwrap();
        backend.reset_calls();
        backend.fail_on(Call::CreateQuestion, 500);

        let err = add_item(&backend, &session, None, item(2)).await.unwrap_err();
        assert!(matches!(err, WorkflowError::Request { .. }));
        assert_eq!(backend.calls(), vec![Call::CreateQuestion]);
    }

    #[tokio::test]
    async fn rejected_answer_reports_orphaned_question() {
        let (backend, mut session, _) = MemoryBackend::with_doctor_and_couple().await;
        let assessment = create_assessment(&backend, &mut session, None, None)
            .await
            .unwrap();
        backend.fail_on(Call::SubmitAnswers, 400);

        let err = add_item(&backend, &session, None, item(2)).await.unwrap_err();
        let WorkflowError::OrphanedQuestion { question_id, source } = err else {
            panic!("expected an orphaned question");
        };
        assert_eq!(source.status(), Some(400));
        assert!(backend.question_exists(question_id));
        assert!(backend.answers_for(assessment.id).is_empty());
    }

    #[tokio::test]
    async fn predict_without_assessment_sends_nothing() {
        let backend = MemoryBackend::default();
        let err = predict(&backend, &SessionContext::default(), None)
            .await
            .unwrap_err();
        assert_eq!(err.missing_session(), Some(SessionKey::Assessment));
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn predict_for_unknown_assessment_is_rejected() {
        let backend = MemoryBackend::default();
        let err = predict(&backend, &SessionContext::default(), Some(AssessmentId(77)))
            .await
            .unwrap_err();
        assert!(matches!(err, WorkflowError::Request { source, .. } if source.status() == Some(404)));
    }
}
