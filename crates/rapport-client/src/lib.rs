//! # rapport-client
//!
//! HTTP client for the Divorce Risk Service.
//!
//! One method per backend resource:
//! - doctors: register, look up by email, dashboard
//! - couples: create
//! - assessments: create, add questions, submit answers in bulk, predict
//!
//! Every call is fire-once: no retries, no timeouts, no caching. Non-success
//! responses surface the backend's own error body through
//! [`ApiError::Api`].
//!
//! Workflows depend on the [`ClinicBackend`] trait rather than on
//! [`ApiClient`] directly.

mod assessments;
mod backend;
mod couples;
mod doctors;
mod error;
mod health;
mod http;

pub use backend::ClinicBackend;
pub use error::ApiError;
pub use health::ServiceStatus;

use rapport_config::ApiConfig;

/// HTTP client bound to one backend base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client from the `[api]` config section.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Config`] for an unusable base URL and
    /// [`ApiError::Http`] if the underlying `reqwest::Client` fails to build.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let base_url = config.normalized_base_url()?;
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self { http, base_url })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}
