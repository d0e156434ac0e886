// Service endpoints
//
// Listing services, and calling one. Service calls are the only operation
// that infers success when the server hangs up without answering: some
// integrations (e.g. `homeassistant.restart`, `homeassistant.reload_all`)
// drop the connection right after accepting the command.

use serde_json::{Map, Value};

use crate::classify::NoResponsePolicy;
use crate::outcome::{Metadata, Outcome};
use crate::rest::client::{HassClient, metadata, passthrough, present};

impl HassClient {
    /// List services by domain, optionally narrowed to a single domain.
    ///
    /// `GET /api/services`
    ///
    /// With a domain, the result is `{domain: services}` when the domain is
    /// present upstream and `{}` otherwise, and `domain` is echoed. An
    /// empty domain lists everything.
    pub async fn get_services(&self, domain: Option<&str>) -> Outcome {
        let attempt = self.get("/services").await;

        let Some(domain) = present(domain) else {
            return self.finish(attempt, Metadata::new());
        };

        let meta = metadata([("domain", Value::from(domain))]);
        self.finish_with(attempt, |resp| {
            Outcome::with_metadata(meta, filter_services(resp.json_body(), domain))
        })
    }

    /// Call a service.
    ///
    /// `POST /api/services/{domain}/{service}` with `data` as the body.
    ///
    /// A transient hang-up (`ECONNRESET`, `ECONNABORTED`, `ETIMEDOUT`, or a
    /// "socket hang up" message) is reported as success with `data: null`
    /// and a `note`.
    pub async fn call_service(&self, domain: &str, service: &str, data: Value) -> Outcome {
        let attempt = self
            .post(&format!("/services/{domain}/{service}"), &data)
            .await;

        let meta = metadata([
            ("service", Value::from(format!("{domain}.{service}"))),
            ("serviceData", data),
        ]);

        self.classifier().classify(
            attempt,
            NoResponsePolicy::AssumeSuccess(meta.clone()),
            passthrough(meta),
        )
    }
}

/// Keep only `domain`'s entry of a `{domain: services}` mapping.
///
/// Anything that is not a JSON object yields an empty mapping.
pub fn filter_services(services: Value, domain: &str) -> Value {
    let mut filtered = Map::new();
    if let Value::Object(mut all) = services {
        if let Some(entry) = all.remove(domain) {
            filtered.insert(domain.to_owned(), entry);
        }
    }
    Value::Object(filtered)
}
