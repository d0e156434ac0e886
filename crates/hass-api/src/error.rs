use thiserror::Error;

/// Construction-time error for the `hass-api` crate.
///
/// These never reach the caller of an endpoint operation: a request that
/// cannot be built is reported as an `Attempt::SendFailure` and classified
/// like any other missing response.
#[derive(Debug, Error)]
pub enum Error {
    /// No base URL was configured, so no request URL can be formed.
    #[error("Home Assistant base URL is not configured (set HASS_API_URL)")]
    MissingBaseUrl,

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The bearer token contains bytes that cannot appear in a header.
    #[error("Invalid API token: {0}")]
    InvalidToken(String),

    /// `reqwest::Client` construction failed (TLS backend, proxy settings).
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),
}
