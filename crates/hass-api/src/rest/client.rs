// Home Assistant REST API client
//
// Wraps `reqwest::Client` with base-URL joining and outcome classification.
// Endpoint operations are implemented as inherent methods in the sibling
// modules (states, services, history, ...) to keep this file focused on
// transport mechanics.

use reqwest::Method;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::attempt::{Attempt, RawResponse};
use crate::classify::{Classifier, NoResponsePolicy};
use crate::config::ClientConfig;
use crate::error::Error;
use crate::outcome::{Metadata, Outcome};

/// Client for one Home Assistant instance.
///
/// Every public operation issues exactly one request and returns an
/// [`Outcome`]; transport and HTTP errors never surface as `Err`.
pub struct HassClient {
    http: reqwest::Client,
    base_url: Option<String>,
    classifier: Classifier,
}

impl HassClient {
    /// Build a client from a `ClientConfig`.
    ///
    /// A missing base URL or token is not an error here: requests are still
    /// attempted and their failures report the missing keys. Only header
    /// material that cannot be encoded, or a TLS backend that fails to
    /// initialize, is rejected.
    pub fn new(config: &ClientConfig) -> Result<Self, Error> {
        let http = config.transport.build_client(config.token())?;
        Ok(Self {
            http,
            base_url: config.base_url().map(str::to_owned),
            classifier: config.classifier(),
        })
    }

    /// Create a client with a pre-built `reqwest::Client`.
    ///
    /// The caller is responsible for any auth headers.
    pub fn with_client(http: reqwest::Client, config: &ClientConfig) -> Self {
        Self {
            http,
            base_url: config.base_url().map(str::to_owned),
            classifier: config.classifier(),
        }
    }

    /// The configured base URL, if any.
    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// Join an endpoint path onto the base URL with exactly one `/`.
    ///
    /// `http://ha:8123/api/` + `/states` → `http://ha:8123/api/states`
    pub(crate) fn url(&self, path: &str) -> Result<Url, Error> {
        let base = self.base_url.as_deref().ok_or(Error::MissingBaseUrl)?;
        let full = format!(
            "{}/{}",
            base.trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        Ok(Url::parse(&full)?)
    }

    // ── Request helpers ──────────────────────────────────────────────

    async fn send(
        &self,
        method: Method,
        path: &str,
        params: &[(&str, String)],
        body: Option<&Value>,
    ) -> Attempt {
        let url = match self.url(path) {
            Ok(url) => url,
            Err(err) => {
                return Attempt::SendFailure {
                    message: err.to_string(),
                };
            }
        };

        if params.is_empty() {
            debug!("{method} {url}");
        } else {
            debug!("{method} {url} params={params:?}");
        }

        let mut request = self.http.request(method, url);
        if !params.is_empty() {
            request = request.query(params);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        Attempt::capture(request.send().await).await
    }

    pub(crate) async fn get(&self, path: &str) -> Attempt {
        self.send(Method::GET, path, &[], None).await
    }

    pub(crate) async fn get_with_params(&self, path: &str, params: &[(&str, String)]) -> Attempt {
        self.send(Method::GET, path, params, None).await
    }

    pub(crate) async fn post(&self, path: &str, body: &Value) -> Attempt {
        self.send(Method::POST, path, &[], Some(body)).await
    }

    pub(crate) async fn post_empty(&self, path: &str) -> Attempt {
        self.send(Method::POST, path, &[], None).await
    }

    // ── Outcome helpers ──────────────────────────────────────────────

    /// Classify with the default policy, echoing `metadata` ahead of the
    /// decoded body on success.
    pub(crate) fn finish(&self, attempt: Attempt, metadata: Metadata) -> Outcome {
        self.classifier
            .classify(attempt, NoResponsePolicy::Fail, passthrough(metadata))
    }

    /// Classify with the default policy and a custom success shaper.
    pub(crate) fn finish_with<F>(&self, attempt: Attempt, on_success: F) -> Outcome
    where
        F: FnOnce(RawResponse) -> Outcome,
    {
        self.classifier
            .classify(attempt, NoResponsePolicy::Fail, on_success)
    }
}

/// Success shaper that returns the decoded body unchanged.
pub(crate) fn passthrough(metadata: Metadata) -> impl FnOnce(RawResponse) -> Outcome {
    move |resp| Outcome::with_metadata(metadata, resp.json_body())
}

/// Build ordered metadata from `(key, value)` pairs.
pub(crate) fn metadata<const N: usize>(fields: [(&str, Value); N]) -> Metadata {
    fields
        .into_iter()
        .map(|(key, value)| (key.to_owned(), value))
        .collect()
}

/// An empty option value means "not given".
pub(crate) fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}

/// `Some(s)` → `"s"`, `None` → `null`.
pub(crate) fn opt_str(value: Option<&str>) -> Value {
    value.map_or(Value::Null, Value::from)
}

/// Query parameters for the optional values that are set, in order.
pub(crate) fn query<const N: usize>(params: [(&'static str, Option<String>); N]) -> Vec<(&'static str, String)> {
    params
        .into_iter()
        .filter_map(|(key, value)| value.map(|value| (key, value)))
        .collect()
}
