//! CLI error types with miette diagnostics.
//!
//! Only bad user input ends up here. Everything that happens once a request
//! is attempted is an `Outcome`, printed on stdout with exit code 0.

use miette::Diagnostic;
use thiserror::Error;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    #[error("Error parsing JSON {subject}: {source}")]
    #[diagnostic(
        code(hass::invalid_json),
        help("Quote the value for your shell, e.g. -d '{{\"entity_id\": \"light.kitchen\"}}'")
    )]
    InvalidJson {
        subject: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidJson { .. } => exit_code::GENERAL,
        }
    }
}
