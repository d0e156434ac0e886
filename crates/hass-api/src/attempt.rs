// Transport result of a single HTTP attempt.
//
// reqwest reports "got a 404" and "the socket died" through very different
// channels. `Attempt` flattens both into one value so classification is a
// plain match instead of error-shape inspection.

use std::error::Error as StdError;
use std::io;

use bytes::Bytes;
use reqwest::StatusCode;
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;

/// What happened when one request was attempted.
#[derive(Debug, Clone)]
pub enum Attempt {
    /// An HTTP response arrived, with any status.
    Response(RawResponse),
    /// The request went out but no response came back.
    NoResponse {
        /// POSIX-style connection error code (`ECONNRESET`, `ETIMEDOUT`, ...).
        code: Option<String>,
        message: String,
    },
    /// The request was never sent.
    SendFailure { message: String },
}

/// An HTTP response with its body fully read.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: Bytes,
}

impl RawResponse {
    pub fn new(status: StatusCode, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            content_type: None,
            body: body.into(),
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Decode the body the way a lenient JSON client would: JSON when it
    /// parses, the raw text otherwise, and `""` for an empty body.
    pub fn json_body(&self) -> Value {
        if self.body.is_empty() {
            return Value::String(String::new());
        }
        serde_json::from_slice(&self.body)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&self.body).into_owned()))
    }

    /// Like [`json_body`](Self::json_body), but `None` for an empty body.
    pub fn body_if_present(&self) -> Option<Value> {
        if self.body.is_empty() {
            None
        } else {
            Some(self.json_body())
        }
    }
}

impl Attempt {
    /// Capture the result of `RequestBuilder::send`, reading the full body.
    pub(crate) async fn capture(result: Result<reqwest::Response, reqwest::Error>) -> Self {
        let resp = match result {
            Ok(resp) => resp,
            Err(err) => return Self::from_error(&err),
        };

        let status = resp.status();
        let content_type = resp
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);

        match resp.bytes().await {
            Ok(body) => Self::Response(RawResponse {
                status,
                content_type,
                body,
            }),
            // The connection dropped mid-body: treat it like no response at all.
            Err(err) => Self::from_error(&err),
        }
    }

    /// Map a reqwest error onto the attempt it represents.
    pub fn from_error(err: &reqwest::Error) -> Self {
        let message = describe(err);
        if err.is_builder() {
            Self::SendFailure { message }
        } else {
            Self::NoResponse {
                code: connection_error_code(err).map(str::to_owned),
                message,
            }
        }
    }
}

/// Render an error with its full source chain: `outer: inner: root`.
fn describe(err: &(dyn StdError + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(inner) = source {
        let text = inner.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = inner.source();
    }
    message
}

/// Derive a POSIX-style connection error code from a reqwest error chain.
fn connection_error_code(err: &reqwest::Error) -> Option<&'static str> {
    if err.is_timeout() {
        return Some("ETIMEDOUT");
    }

    let mut source = err.source();
    while let Some(inner) = source {
        if let Some(io_err) = inner.downcast_ref::<io::Error>() {
            if let Some(code) = io_error_code(io_err.kind()) {
                return Some(code);
            }
        }
        if let Some(code) = message_error_code(&inner.to_string()) {
            return Some(code);
        }
        source = inner.source();
    }
    None
}

fn io_error_code(kind: io::ErrorKind) -> Option<&'static str> {
    match kind {
        io::ErrorKind::ConnectionReset => Some("ECONNRESET"),
        io::ErrorKind::ConnectionAborted => Some("ECONNABORTED"),
        io::ErrorKind::TimedOut => Some("ETIMEDOUT"),
        io::ErrorKind::ConnectionRefused => Some("ECONNREFUSED"),
        io::ErrorKind::BrokenPipe => Some("EPIPE"),
        _ => None,
    }
}

/// hyper and the resolver only describe some failures in their messages.
fn message_error_code(message: &str) -> Option<&'static str> {
    let message = message.to_ascii_lowercase();
    if message.contains("connection closed before message completed") {
        // The peer hung up after reading the request and before answering.
        Some("ECONNRESET")
    } else if message.contains("dns error") || message.contains("failed to lookup address") {
        Some("ENOTFOUND")
    } else {
        None
    }
}
