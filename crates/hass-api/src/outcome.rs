//! The normalized result of one API call.
//!
//! An [`Outcome`] is what every endpoint operation returns and what the CLI
//! prints. Success serializes as `{"success": true, ...metadata, "data": ...}`
//! with metadata keys in insertion order; failure serializes as
//! `{"success": false, "error": {...}}`.

use reqwest::StatusCode;
use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};
use serde_json::{Map, Value};

use crate::config::ConfigKey;

/// Request echo fields emitted ahead of `data` on success.
pub type Metadata = Map<String, Value>;

/// Message used for every failure where no HTTP response arrived.
pub const NO_RESPONSE_MESSAGE: &str = "No response received from Home Assistant";

/// Note attached to a service call whose success was inferred.
pub const ASSUMED_SUCCESS_NOTE: &str = "No response received from Home Assistant; assuming success";

/// Tagged result of one API call.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Success { metadata: Metadata, data: Value },
    Failure(ApiFailure),
}

impl Outcome {
    /// Success without metadata.
    pub fn success(data: Value) -> Self {
        Self::Success {
            metadata: Metadata::new(),
            data,
        }
    }

    pub fn with_metadata(metadata: Metadata, data: Value) -> Self {
        Self::Success { metadata, data }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// The failure record, if this outcome is a failure.
    pub fn failure(&self) -> Option<&ApiFailure> {
        match self {
            Self::Failure(failure) => Some(failure),
            Self::Success { .. } => None,
        }
    }

    /// The success payload, if this outcome is a success.
    pub fn data(&self) -> Option<&Value> {
        match self {
            Self::Success { data, .. } => Some(data),
            Self::Failure(_) => None,
        }
    }

    /// Pretty-printed JSON document for this outcome.
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).expect("outcome serialization should not fail")
    }
}

impl From<ApiFailure> for Outcome {
    fn from(failure: ApiFailure) -> Self {
        Self::Failure(failure)
    }
}

impl Serialize for Outcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Success { metadata, data } => {
                let mut map = serializer.serialize_map(Some(metadata.len() + 2))?;
                map.serialize_entry("success", &true)?;
                for (key, value) in metadata {
                    map.serialize_entry(key, value)?;
                }
                map.serialize_entry("data", data)?;
                map.end()
            }
            Self::Failure(failure) => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("success", &false)?;
                map.serialize_entry("error", failure)?;
                map.end()
            }
        }
    }
}

/// The `error` record of a failed call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiFailure {
    pub message: String,

    /// HTTP status, when a response was received.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_text: Option<String>,

    /// Response body, when one was present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<FailureKind>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<ConfigIssue>,
}

/// Category of a failure that carries no HTTP status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FailureKind {
    /// No response was received at all.
    Network,
}

/// Required configuration that was absent when the call was made.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigIssue {
    pub missing: Vec<ConfigKey>,
}

impl ApiFailure {
    /// A bare failure with only a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: None,
            status_text: None,
            data: None,
            kind: None,
            config: None,
        }
    }

    /// A non-2xx HTTP response.
    pub fn http(status: StatusCode, body: Option<Value>) -> Self {
        Self {
            status: Some(status.as_u16()),
            status_text: status.canonical_reason().map(str::to_owned),
            data: body,
            ..Self::new(format!("Request failed with status code {}", status.as_u16()))
        }
    }

    /// No response was received.
    pub fn network() -> Self {
        Self {
            kind: Some(FailureKind::Network),
            ..Self::new(NO_RESPONSE_MESSAGE)
        }
    }

    /// Attach the missing configuration keys; a no-op when none are missing.
    pub fn with_missing_config(mut self, missing: &[ConfigKey]) -> Self {
        if !missing.is_empty() {
            self.config = Some(ConfigIssue {
                missing: missing.to_vec(),
            });
        }
        self
    }

    pub fn is_network(&self) -> bool {
        self.kind == Some(FailureKind::Network)
    }
}
