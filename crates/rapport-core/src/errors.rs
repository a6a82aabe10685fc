//! Cross-cutting error types for Rapport.
//!
//! Transport errors live in `rapport-client`, session errors in
//! `rapport-session`. The binary converges everything into `anyhow`.

use thiserror::Error;

/// Errors raised while decoding or validating domain data.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A backend record did not carry a required field.
    #[error("{entity} record is missing '{field}'")]
    MissingField {
        entity: &'static str,
        field: &'static str,
    },

    /// Data failed validation before it was sent to the backend.
    #[error("Validation error: {0}")]
    Validation(String),
}
