//! Shared helpers for command handlers.

use serde_json::Value;

use crate::error::CliError;

/// Parse a JSON flag value. `subject` names it in the error message
/// (`"data"`, `"attributes"`).
pub fn parse_json(raw: &str, subject: &'static str) -> Result<Value, CliError> {
    serde_json::from_str(raw).map_err(|source| CliError::InvalidJson { subject, source })
}
