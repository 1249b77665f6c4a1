//! Domain model and response validation for Empire Builder API payloads.
//!
//! This crate owns the contract every consumer (CLI, map renderer) relies
//! on when handling data from the Empire Builder API:
//!
//! - **[`validate()`]**: Checks an untrusted [`serde_json::Value`] against
//!   the paginated empires contract. Returns a typed [`EmpiresResponse`] or
//!   a [`ValidationFailure`] carrying *every* violation found, in schema
//!   declaration order.
//!
//! - **[`format_failure()`]**: Renders a failure as a single
//!   `path: message; path: message` line for logs and error banners.
//!
//! - **[`parse_empires_response()`]**: Convenience wrapper for raw JSON
//!   text: syntax errors and contract violations both surface as
//!   [`CoreError`].
//!
//! - **Domain model** ([`model`]): [`Empire`], [`EmpiresResponse`],
//!   [`Territory`] and the medieval map palette.

pub mod error;
pub mod model;
pub mod validate;

// ── Primary re-exports ──────────────────────────────────────────────
pub use error::CoreError;
pub use validate::{
    PathSegment, ValidationFailure, Violation, ViolationKind, format_failure, validate,
};

pub use model::{
    Empire, EmpiresResponse, LogoUri, MEDIEVAL_PALETTE, PaletteColor, Territory, color_for,
};

/// Parse raw JSON text and validate it as an [`EmpiresResponse`].
pub fn parse_empires_response(json: &str) -> Result<EmpiresResponse, CoreError> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    Ok(validate(&value)?)
}
