//! Error Handling Module
//!
//! Error taxonomy for the hub clients:
//! - session-level failures (`ConnectionError`, `ApiError`) terminate a call
//!   or stream and propagate to the caller,
//! - frame-level failures (`FrameParseError`) are recovered locally by the
//!   streaming decoder and never terminate a session,
//! - `UpstreamError` carries a human-readable error object returned by a
//!   collaborator service in an otherwise well-formed body.

use thiserror::Error;

/// Errors that can occur when talking to the AI services hub
#[derive(Error, Debug)]
pub enum AihubError {
    /// Transport could not be established or was interrupted before a
    /// termination signal. Terminal for the whole session.
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Non-success HTTP status from a service
    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },

    /// One stream frame's payload was not valid JSON or not valid UTF-8.
    /// Recoverable: the frame is dropped and the stream continues.
    #[error("Frame parse error: {0}")]
    FrameParseError(String),

    /// A collaborator service returned a structured error object in its body
    #[error("Upstream error: {0}")]
    UpstreamError(String),

    /// A non-streaming response body could not be decoded
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Caller-side input validation failed
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl AihubError {
    /// HTTP status code associated with this error, if any
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether this error is recoverable within an open stream
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::FrameParseError(_))
    }

    /// Friendly, generic message suitable for end users.
    ///
    /// Internal detail (status codes, JSON fragments, transport errors) is
    /// replaced by a short per-category sentence; `UpstreamError` keeps its
    /// message because it is already human-readable by contract.
    pub fn user_message(&self) -> String {
        match self {
            Self::ConnectionError(_) => {
                "The AI service could not be reached. Please try again later.".to_string()
            }
            Self::ApiError { .. } => {
                "The AI service rejected the request. Please try again later.".to_string()
            }
            Self::FrameParseError(_) | Self::ParseError(_) => {
                "The AI service returned an unexpected response.".to_string()
            }
            Self::UpstreamError(message) => message.clone(),
            Self::InvalidInput(message) => message.clone(),
        }
    }
}

/// Result type for hub client operations
pub type Result<T> = std::result::Result<T, AihubError>;
