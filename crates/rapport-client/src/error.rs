//! API client error types.

use serde_json::Value;
use thiserror::Error;

/// Errors that can occur when talking to the backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure (connection refused, DNS, broken body).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    ///
    /// `payload` is the backend's JSON error body (or its raw text as a JSON
    /// string when the body was not JSON), shown to the user verbatim.
    #[error("API error ({status}): {payload}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Structured error body.
        payload: Value,
    },

    /// A success response did not have the expected shape.
    #[error("unexpected response from {endpoint}: {reason}")]
    Decode {
        /// Request path the body came from.
        endpoint: String,
        /// Parser message.
        reason: String,
    },

    /// The client configuration is unusable.
    #[error(transparent)]
    Config(#[from] rapport_config::ConfigError),
}

impl ApiError {
    /// HTTP status of a backend rejection.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The backend's error body, if this is a backend rejection.
    #[must_use]
    pub const fn payload(&self) -> Option<&Value> {
        match self {
            Self::Api { payload, .. } => Some(payload),
            _ => None,
        }
    }
}
