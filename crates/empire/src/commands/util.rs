//! Shared helpers for command handlers.

use std::io::Read;
use std::path::Path;

use empire_core::{EmpiresResponse, validate};

use crate::error::CliError;

/// A parsed JSON document plus where it came from, for error messages.
pub struct Payload {
    pub source_name: String,
    pub value: serde_json::Value,
}

/// Read and parse a JSON payload from `path`, or stdin for `None` / `-`.
pub fn read_payload(path: Option<&Path>) -> Result<Payload, CliError> {
    let (source_name, contents) = match path {
        Some(p) if p.as_os_str() != "-" => (p.display().to_string(), std::fs::read_to_string(p)?),
        _ => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            ("stdin".to_owned(), buf)
        }
    };
    tracing::debug!(source = %source_name, bytes = contents.len(), "read payload");

    let value = serde_json::from_str(&contents)?;
    Ok(Payload { source_name, value })
}

/// Read a payload and require it to satisfy the empires contract.
pub fn load_empires(path: Option<&Path>) -> Result<EmpiresResponse, CliError> {
    let payload = read_payload(path)?;
    validate(&payload.value).map_err(|failure| CliError::rejected(&payload.source_name, &failure))
}

/// Prompt for confirmation, auto-approving if `--yes` was passed.
pub fn confirm(message: &str, yes_flag: bool) -> Result<bool, CliError> {
    if yes_flag {
        return Ok(true);
    }
    let confirmed = dialoguer::Confirm::new()
        .with_prompt(message)
        .default(false)
        .interact()
        .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
    Ok(confirmed)
}

/// Format a USD/token amount with thousands separators and two decimals.
pub fn format_amount(value: f64) -> String {
    let fixed = format!("{value:.2}");
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let (sign, digits) = int_part
        .strip_prefix('-')
        .map_or(("", int_part), |d| ("-", d));

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{sign}{grouped}.{frac_part}")
}
