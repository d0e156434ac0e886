// Instance-level endpoints
//
// API root, core configuration, event listeners, error log, discovery
// info, and configuration validation. None of these take parameters or
// echo metadata.

use crate::outcome::{Metadata, Outcome};
use crate::rest::client::HassClient;

impl HassClient {
    /// Check that the API is up.
    ///
    /// `GET /api/`
    pub async fn check_api(&self) -> Outcome {
        let attempt = self.get("/").await;
        self.finish(attempt, Metadata::new())
    }

    /// Get the core configuration (location, units, version, components).
    ///
    /// `GET /api/config`
    pub async fn get_config(&self) -> Outcome {
        let attempt = self.get("/config").await;
        self.finish(attempt, Metadata::new())
    }

    /// List event types and their listener counts.
    ///
    /// `GET /api/events`
    pub async fn get_events(&self) -> Outcome {
        let attempt = self.get("/events").await;
        self.finish(attempt, Metadata::new())
    }

    /// Fetch the error log of the current session as plain text.
    ///
    /// `GET /api/error_log`
    pub async fn get_error_log(&self) -> Outcome {
        let attempt = self.get("/error_log").await;
        self.finish(attempt, Metadata::new())
    }

    /// `GET /api/discovery_info`
    pub async fn get_discovery_info(&self) -> Outcome {
        let attempt = self.get("/discovery_info").await;
        self.finish(attempt, Metadata::new())
    }

    /// Validate `configuration.yaml` without restarting.
    ///
    /// `POST /api/config/core/check_config` (no body)
    pub async fn check_config(&self) -> Outcome {
        let attempt = self.post_empty("/config/core/check_config").await;
        self.finish(attempt, Metadata::new())
    }
}
