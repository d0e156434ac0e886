// Template rendering endpoint

use serde_json::{Value, json};

use crate::outcome::Outcome;
use crate::rest::client::{HassClient, metadata};

impl HassClient {
    /// Render a Jinja template on the server.
    ///
    /// `POST /api/template` with `{"template": ...}`. The rendered text is
    /// returned as `{"rendered": ...}`.
    pub async fn render_template(&self, template: &str) -> Outcome {
        let attempt = self.post("/template", &json!({ "template": template })).await;
        let meta = metadata([("template", Value::from(template))]);

        self.finish_with(attempt, |resp| {
            Outcome::with_metadata(meta, json!({ "rendered": resp.json_body() }))
        })
    }
}
