// ── Core error types ──
//
// Errors surfaced by the text entry point. Validation itself never fails
// with anything but a `ValidationFailure`; this enum only adds the JSON
// syntax layer on top.

use thiserror::Error;

use crate::validate::ValidationFailure;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Response rejected: {0}")]
    Validation(#[from] ValidationFailure),
}

impl CoreError {
    /// The validation failure behind this error, if any.
    pub fn as_validation(&self) -> Option<&ValidationFailure> {
        match self {
            Self::Validation(failure) => Some(failure),
            Self::Json(_) => None,
        }
    }
}
