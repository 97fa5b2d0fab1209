//! Webhook error types.
//!
//! Every verification failure maps to the same opaque 401 at the HTTP edge
//! so that remote callers cannot distinguish why a forged request was
//! rejected. The variants exist for internal diagnostics only.

use axum::http::StatusCode;
use thiserror::Error;

/// Errors that occur during webhook intake.
#[derive(Debug, Error)]
pub enum WebhookError {
    /// Signature header absent, unparsable, or missing required keys.
    #[error("Malformed signature header: {0}")]
    MalformedHeader(String),

    /// Timestamp outside the replay-protection window.
    #[error("Stale timestamp: {0}s outside tolerance")]
    StaleTimestamp(i64),

    /// Computed and provided signatures differ.
    #[error("Signature mismatch")]
    SignatureMismatch,

    /// Payload verified but could not be parsed as a provider event.
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    /// Event referenced a status this gateway does not recognize.
    #[error("Unknown merchant status: {0}")]
    UnknownStatus(String),

    /// Storage update failed while applying the event.
    #[error("Storage error: {0}")]
    Storage(String),
}

impl WebhookError {
    /// True for the verification failures that must stay indistinguishable
    /// in the HTTP response.
    pub fn is_verification_failure(&self) -> bool {
        matches!(
            self,
            WebhookError::MalformedHeader(_)
                | WebhookError::StaleTimestamp(_)
                | WebhookError::SignatureMismatch
        )
    }

    /// Maps the error to an HTTP status code.
    ///
    /// All verification failures collapse to 401; only post-verification
    /// problems get distinct codes, since at that point the caller has
    /// already proven possession of the signing secret.
    pub fn status_code(&self) -> StatusCode {
        match self {
            WebhookError::MalformedHeader(_)
            | WebhookError::StaleTimestamp(_)
            | WebhookError::SignatureMismatch => StatusCode::UNAUTHORIZED,

            WebhookError::InvalidPayload(_) | WebhookError::UnknownStatus(_) => {
                StatusCode::BAD_REQUEST
            }

            WebhookError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
