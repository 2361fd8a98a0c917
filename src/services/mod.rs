//! Single-shot collaborator service clients
//!
//! Each client wraps one POST-returning-JSON endpoint of the hub. They share
//! one failure contract: a non-success status surfaces as
//! [`AihubError::ApiError`] carrying the body's error text when present, and
//! a structured error object inside an otherwise successful body surfaces as
//! [`AihubError::UpstreamError`]. No partial data is ever returned.

pub mod image;
pub mod knowledge;
pub mod nl2sql;
pub mod speech;

pub use image::{ImageClient, ImageGenerationRequest, ImageGenerationResponse};
pub use knowledge::{KnowledgeBaseStatus, KnowledgeClient, KnowledgeQueryResponse, SourcePassage};
pub use nl2sql::{Nl2SqlClient, Nl2SqlResponse};
pub use speech::{SpeechClient, SpeechResponse};

use serde::de::DeserializeOwned;

use crate::error::AihubError;

/// Pull a human-readable error message out of a JSON body, if there is one.
///
/// The hub's services disagree on the shape: NL2SQL uses `{"error": "..."}`,
/// the FastAPI-based services use `{"detail": "..."}` or
/// `{"detail": {"message": "..."}}`.
fn extract_error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    for key in ["error", "detail"] {
        match value.get(key) {
            Some(serde_json::Value::String(message)) => return Some(message.clone()),
            Some(object @ serde_json::Value::Object(_)) => {
                if let Some(message) = object.get("message").and_then(|m| m.as_str()) {
                    return Some(message.to_string());
                }
            }
            _ => {}
        }
    }
    None
}

/// Decode a service response, applying the shared failure contract.
pub(crate) async fn decode_json<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, AihubError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| AihubError::ConnectionError(format!("failed to read response body: {e}")))?;

    if !status.is_success() {
        let message = extract_error_message(&body).unwrap_or(body);
        return Err(AihubError::ApiError {
            status: status.as_u16(),
            message,
        });
    }
    if let Some(message) = extract_error_message(&body) {
        return Err(AihubError::UpstreamError(message));
    }
    serde_json::from_str(&body)
        .map_err(|e| AihubError::ParseError(format!("unexpected response body: {e}")))
}

pub(crate) async fn post_json<T: DeserializeOwned>(
    http: &reqwest::Client,
    url: &str,
    body: &impl serde::Serialize,
) -> Result<T, AihubError> {
    let response = http
        .post(url)
        .json(body)
        .send()
        .await
        .map_err(|e| AihubError::ConnectionError(format!("failed to send request: {e}")))?;
    decode_json(response).await
}
