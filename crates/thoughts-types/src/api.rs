use serde::{Deserialize, Serialize};

// -- Thoughts --

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateThoughtRequest {
    /// Absent or null is a validation failure, not a deserialization failure,
    /// so the caller gets the uniform failure envelope back.
    pub message: Option<String>,
}

// -- Envelope --

/// The uniform response wrapper used by every endpoint except `/`.
/// Failures carry the error detail in `response` and a short summary in
/// `message`, the same shape as successes.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    pub response: T,
    pub message: String,
}

impl<T> ApiEnvelope<T> {
    pub fn ok(response: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            response,
            message: message.into(),
        }
    }

    pub fn fail(response: T, message: impl Into<String>) -> Self {
        Self {
            success: false,
            response,
            message: message.into(),
        }
    }
}
