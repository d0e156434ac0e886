//! Response classification: turns an [`Attempt`] into an [`Outcome`].
//!
//! The rules, in order:
//!
//! 1. A 2xx response goes to the operation's success shaper.
//! 2. Any other response is a failure carrying `status`, `statusText`, and
//!    the body when one was sent.
//! 3. No response is a `type: "network"` failure, unless the operation
//!    asked for [`NoResponsePolicy::AssumeSuccess`] and the error looks like
//!    the server hanging up after accepting the request.
//! 4. A request that was never sent is treated like rule 3, but is never
//!    eligible for assumed success.
//!
//! Every failure is then tagged with the missing configuration keys and
//! logged as a warning before being handed back.

use serde_json::Value;
use tracing::{debug, warn};

use crate::attempt::{Attempt, RawResponse};
use crate::config::ConfigKey;
use crate::error::Error;
use crate::outcome::{ASSUMED_SUCCESS_NOTE, ApiFailure, Metadata, Outcome};

/// Connection error codes that mean "the server hung up on us".
pub const TRANSIENT_NO_RESPONSE_CODES: [&str; 3] = ["ECONNRESET", "ECONNABORTED", "ETIMEDOUT"];

const SOCKET_HANG_UP: &str = "socket hang up";

/// Whether a no-response error matches the transient hang-up rule.
pub fn is_transient_no_response(code: Option<&str>, message: &str) -> bool {
    code.is_some_and(|code| TRANSIENT_NO_RESPONSE_CODES.contains(&code))
        || message.to_lowercase().contains(SOCKET_HANG_UP)
}

/// What to report when a request went out and nothing came back.
#[derive(Debug, Clone, Default)]
pub enum NoResponsePolicy {
    /// Report a network failure.
    #[default]
    Fail,
    /// Fire-and-forget commands: a transient hang-up is reported as success
    /// with `data: null`, this metadata, and an explanatory `note`.
    AssumeSuccess(Metadata),
}

/// Normalizes attempts into outcomes for one client configuration.
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    missing: Vec<ConfigKey>,
}

impl Classifier {
    pub fn new(missing: Vec<ConfigKey>) -> Self {
        Self { missing }
    }

    /// Classify one attempt.
    ///
    /// `on_success` shapes a 2xx response into the final outcome; it may
    /// itself return a failure when the payload is not what the operation
    /// expects.
    pub fn classify<F>(&self, attempt: Attempt, policy: NoResponsePolicy, on_success: F) -> Outcome
    where
        F: FnOnce(RawResponse) -> Outcome,
    {
        let outcome = match attempt {
            Attempt::Response(resp) if resp.status.is_success() => on_success(resp),
            Attempt::Response(resp) => {
                debug!(status = resp.status.as_u16(), "error response");
                ApiFailure::http(resp.status, resp.body_if_present()).into()
            }
            Attempt::NoResponse { code, message } => match policy {
                NoResponsePolicy::AssumeSuccess(mut metadata)
                    if is_transient_no_response(code.as_deref(), &message) =>
                {
                    debug!(?code, %message, "no response to fire-and-forget request, assuming success");
                    metadata.insert("note".into(), Value::from(ASSUMED_SUCCESS_NOTE));
                    Outcome::with_metadata(metadata, Value::Null)
                }
                NoResponsePolicy::AssumeSuccess(_) | NoResponsePolicy::Fail => {
                    debug!(?code, %message, "no response received");
                    ApiFailure::network().into()
                }
            },
            Attempt::SendFailure { message } => {
                debug!(%message, "request was never sent");
                ApiFailure::network().into()
            }
        };

        self.finish(outcome)
    }

    /// Outcome for a client that could not even be constructed.
    pub fn unsent(&self, err: &Error) -> Outcome {
        self.classify(
            Attempt::SendFailure {
                message: err.to_string(),
            },
            NoResponsePolicy::Fail,
            |resp| Outcome::success(resp.json_body()),
        )
    }

    fn finish(&self, outcome: Outcome) -> Outcome {
        match outcome {
            Outcome::Failure(failure) => {
                let failure = failure.with_missing_config(&self.missing);
                let outcome = Outcome::Failure(failure);
                warn!("Home Assistant request failed:\n{}", outcome.to_json_pretty());
                outcome
            }
            success @ Outcome::Success { .. } => success,
        }
    }
}
