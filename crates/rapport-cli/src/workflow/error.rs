use rapport_client::ApiError;
use rapport_core::CoreError;
use rapport_core::ids::QuestionId;
use rapport_session::{SessionError, SessionKey};
use thiserror::Error;

/// How a workflow step failed.
#[derive(Debug, Error)]
pub enum WorkflowError {
    /// A required session identifier is missing. No request was sent.
    #[error(transparent)]
    Session(#[from] SessionError),

    /// Input rejected before any request was sent.
    #[error(transparent)]
    Invalid(#[from] CoreError),

    /// The backend rejected a request; the step did not happen.
    #[error("{action}")]
    Request {
        action: &'static str,
        #[source]
        source: ApiError,
    },

    /// The question was created but its answer was not. The question stays
    /// on the backend without an answer.
    #[error("question {question_id} was created but adding its answer failed")]
    OrphanedQuestion {
        question_id: QuestionId,
        #[source]
        source: ApiError,
    },
}

impl WorkflowError {
    pub(crate) const fn request(action: &'static str, source: ApiError) -> Self {
        Self::Request { action, source }
    }

    /// The missing session key, if this was a precondition failure.
    #[must_use]
    pub const fn missing_session(&self) -> Option<SessionKey> {
        match self {
            Self::Session(error) => error.missing_key(),
            _ => None,
        }
    }
}
