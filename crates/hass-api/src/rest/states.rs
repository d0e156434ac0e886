// State endpoints
//
// Reading all states, reading or writing one entity's state, and the
// domain-filtered entity listing built on top of `GET /api/states`.

use serde_json::{Value, json};

use crate::outcome::{ApiFailure, Metadata, Outcome};
use crate::rest::client::{HassClient, metadata, opt_str, present};

const UNEXPECTED_STATES: &str =
    "Unexpected response from Home Assistant: expected a list of entities";

impl HassClient {
    /// `GET /api/states`
    pub async fn get_states(&self) -> Outcome {
        let attempt = self.get("/states").await;
        self.finish(attempt, Metadata::new())
    }

    /// `GET /api/states/{entity_id}`
    pub async fn get_state(&self, entity_id: &str) -> Outcome {
        let attempt = self.get(&format!("/states/{entity_id}")).await;
        self.finish(attempt, metadata([("entityId", Value::from(entity_id))]))
    }

    /// Create or overwrite an entity's state representation.
    ///
    /// `POST /api/states/{entity_id}` with `{"state", "attributes"}`
    ///
    /// This only changes what Home Assistant reports; it does not talk to
    /// the device.
    pub async fn set_state(&self, entity_id: &str, state: &str, attributes: Value) -> Outcome {
        let body = json!({ "state": state, "attributes": attributes });
        let attempt = self.post(&format!("/states/{entity_id}"), &body).await;

        self.finish(
            attempt,
            metadata([
                ("entityId", Value::from(entity_id)),
                ("state", Value::from(state)),
                ("attributes", attributes),
            ]),
        )
    }

    /// List entity states, optionally only those in one domain.
    ///
    /// `GET /api/states`, filtered client-side on `entity_id` prefix
    /// `"{domain}."`. `domain` is always echoed (null when unset or empty).
    pub async fn get_entities(&self, domain: Option<&str>) -> Outcome {
        let domain = present(domain);
        let attempt = self.get("/states").await;
        let meta = metadata([("domain", opt_str(domain))]);

        self.finish_with(attempt, |resp| {
            let states = resp.json_body();
            let Some(domain) = domain else {
                return Outcome::with_metadata(meta, states);
            };
            match filter_by_domain(states, domain) {
                Some(entities) => Outcome::with_metadata(meta, Value::Array(entities)),
                None => ApiFailure::new(UNEXPECTED_STATES).into(),
            }
        })
    }
}

/// Keep the states whose `entity_id` starts with `"{domain}."`.
///
/// Returns `None` when `states` is not an array.
pub fn filter_by_domain(states: Value, domain: &str) -> Option<Vec<Value>> {
    let Value::Array(states) = states else {
        return None;
    };

    let prefix = format!("{domain}.");
    Some(
        states
            .into_iter()
            .filter(|state| {
                state
                    .get("entity_id")
                    .and_then(Value::as_str)
                    .is_some_and(|id| id.starts_with(&prefix))
            })
            .collect(),
    )
}
