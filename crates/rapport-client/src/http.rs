//! Shared HTTP response helpers.
//!
//! Centralizes status checks (non-success → [`ApiError::Api`] carrying the
//! structured error body) and body decoding so resource modules stay focused
//! on request construction.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ApiError;

/// Return the response unchanged on success, otherwise extract the backend's
/// error payload into [`ApiError::Api`].
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let body = resp.text().await.unwrap_or_default();
    let payload = error_payload(&body);
    tracing::warn!(status = status.as_u16(), %payload, "backend rejected request");
    Err(ApiError::Api {
        status: status.as_u16(),
        payload,
    })
}

/// Parse an error body as JSON, keeping non-JSON text as a JSON string.
fn error_payload(body: &str) -> Value {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return Value::Null;
    }
    serde_json::from_str(trimmed).unwrap_or_else(|_| Value::String(trimmed.to_string()))
}

/// Read a success body and decode it as `T`.
pub async fn decode<T: DeserializeOwned>(
    resp: reqwest::Response,
    endpoint: &str,
) -> Result<T, ApiError> {
    let bytes = resp.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|error| ApiError::Decode {
        endpoint: endpoint.to_string(),
        reason: error.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn mock_response(status: u16, body: &'static str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body)
                .unwrap(),
        )
    }

    #[tokio::test]
    async fn check_response_success() {
        let resp = mock_response(200, "{}");
        assert!(check_response(resp).await.is_ok());
    }

    #[tokio::test]
    async fn check_response_keeps_json_detail() {
        let resp = mock_response(400, r#"{"detail":"Doctor with this email already exists"}"#);
        let err = check_response(resp).await.unwrap_err();
        assert_eq!(err.status(), Some(400));
        assert_eq!(
            err.payload(),
            Some(&json!({"detail": "Doctor with this email already exists"}))
        );
        assert_eq!(
            err.to_string(),
            r#"API error (400): {"detail":"Doctor with this email already exists"}"#
        );
    }

    #[tokio::test]
    async fn check_response_keeps_plain_text() {
        let resp = mock_response(502, "Bad Gateway");
        let err = check_response(resp).await.unwrap_err();
        assert_eq!(err.payload(), Some(&json!("Bad Gateway")));
    }

    #[tokio::test]
    async fn check_response_empty_body_is_null() {
        let resp = mock_response(500, "");
        let err = check_response(resp).await.unwrap_err();
        assert_eq!(err.payload(), Some(&Value::Null));
    }

    #[tokio::test]
    async fn decode_reports_endpoint() {
        let resp = mock_response(200, "not json");
        let err = decode::<Value>(resp, "/couples").await.unwrap_err();
        assert!(matches!(err, ApiError::Decode { ref endpoint, .. } if endpoint == "/couples"));
    }
}
