// hass-api: Async Rust client for the Home Assistant REST API
//
// Every call produces an `Outcome` rather than a Rust error: transport
// results are captured as an `Attempt` and normalized by the `Classifier`.

pub mod attempt;
pub mod classify;
pub mod command;
pub mod config;
pub mod error;
pub mod outcome;
pub mod rest;
pub mod transport;

pub use attempt::{Attempt, RawResponse};
pub use classify::{Classifier, NoResponsePolicy, is_transient_no_response};
pub use command::Command;
pub use config::{ClientConfig, ConfigKey};
pub use error::Error;
pub use outcome::{ApiFailure, ConfigIssue, FailureKind, Metadata, Outcome};
pub use rest::HassClient;
pub use transport::{TlsMode, TransportConfig};
