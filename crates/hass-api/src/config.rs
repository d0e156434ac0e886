//! Client configuration: base URL, bearer token, and transport settings.
//!
//! The set of missing required keys is computed once at construction so
//! every failure outcome can report it without re-reading the environment.

use std::fmt;

use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

use crate::classify::Classifier;
use crate::transport::TransportConfig;

/// A required configuration key, named after its environment variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ConfigKey {
    #[serde(rename = "HASS_API_URL")]
    ApiUrl,
    #[serde(rename = "HASS_API_TOKEN")]
    ApiToken,
}

impl ConfigKey {
    /// The environment variable that supplies this key.
    pub const fn env_var(self) -> &'static str {
        match self {
            Self::ApiUrl => "HASS_API_URL",
            Self::ApiToken => "HASS_API_TOKEN",
        }
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.env_var())
    }
}

/// Everything needed to talk to one Home Assistant instance.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    base_url: Option<String>,
    token: Option<SecretString>,
    missing: Vec<ConfigKey>,
    pub transport: TransportConfig,
}

impl ClientConfig {
    /// Build a config from the raw base URL and token.
    ///
    /// Empty values are treated as absent.
    pub fn new(base_url: Option<String>, token: Option<SecretString>) -> Self {
        let base_url = base_url.filter(|url| !url.is_empty());
        let token = token.filter(|token| !token.expose_secret().is_empty());

        let mut missing = Vec::with_capacity(2);
        if base_url.is_none() {
            missing.push(ConfigKey::ApiUrl);
        }
        if token.is_none() {
            missing.push(ConfigKey::ApiToken);
        }

        Self {
            base_url,
            token,
            missing,
            transport: TransportConfig::default(),
        }
    }

    /// Replace the transport settings.
    pub fn with_transport(mut self, transport: TransportConfig) -> Self {
        self.transport = transport;
        self
    }

    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    pub fn token(&self) -> Option<&SecretString> {
        self.token.as_ref()
    }

    /// Missing required keys, URL first.
    pub fn missing(&self) -> &[ConfigKey] {
        &self.missing
    }

    /// A classifier that enriches failures with this config's missing keys.
    pub fn classifier(&self) -> Classifier {
        Classifier::new(self.missing.clone())
    }
}
