// Webhook trigger endpoint

use serde_json::Value;

use crate::outcome::Outcome;
use crate::rest::client::{HassClient, metadata};

impl HassClient {
    /// `POST /api/webhook/{webhook_id}` with `data` as the body.
    pub async fn trigger_webhook(&self, webhook_id: &str, data: &Value) -> Outcome {
        let attempt = self.post(&format!("/webhook/{webhook_id}"), data).await;
        self.finish(attempt, metadata([("webhookId", Value::from(webhook_id))]))
    }
}
