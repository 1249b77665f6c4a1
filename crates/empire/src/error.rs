//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` into user-facing errors with
//! actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use empire_config::ConfigError;
use empire_core::{CoreError, ValidationFailure};

/// Process exit codes.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const REJECTED: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Payload ──────────────────────────────────────────────────────

    #[error("Payload from {source_name} rejected ({count} violation(s))")]
    #[diagnostic(
        code(empire::payload_rejected),
        help("{summary}")
    )]
    PayloadRejected {
        source_name: String,
        count: usize,
        summary: String,
    },

    #[error("Invalid JSON payload: {0}")]
    #[diagnostic(code(empire::json), help("Check the JSON file contents and try again."))]
    Json(#[from] serde_json::Error),

    // ── Resources ────────────────────────────────────────────────────

    #[error("{resource_type} '{identifier}' not found")]
    #[diagnostic(
        code(empire::not_found),
        help("Run: empire {list_command} to see available {resource_type}s")
    )]
    NotFound {
        resource_type: String,
        identifier: String,
        list_command: String,
    },

    // ── Validation ───────────────────────────────────────────────────

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(empire::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────

    #[error(transparent)]
    #[diagnostic(
        code(empire::config),
        help("Fix the file at `empire config path`, or rewrite it with: empire config init --yes")
    )]
    Config(#[from] ConfigError),

    // ── Interactive ──────────────────────────────────────────────────

    #[error("Operation '{action}' requires confirmation")]
    #[diagnostic(
        code(empire::confirmation_required),
        help("Use --yes (-y) to skip confirmation in non-interactive contexts.")
    )]
    NonInteractiveRequiresYes { action: String },

    // ── IO ───────────────────────────────────────────────────────────

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::PayloadRejected { .. } => exit_code::REJECTED,
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::Validation { .. } | Self::NonInteractiveRequiresYes { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }

    pub fn rejected(source_name: &str, failure: &ValidationFailure) -> Self {
        Self::PayloadRejected {
            source_name: source_name.into(),
            count: failure.len(),
            summary: failure.to_string(),
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Json(e) => CliError::Json(e),
            CoreError::Validation(failure) => CliError::rejected("input", &failure),
        }
    }
}
