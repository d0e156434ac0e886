// Camera snapshot endpoint
//
// The only binary endpoint: the image bytes are re-encoded as base64 so
// the result still fits in a JSON document.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::{Value, json};

use crate::outcome::Outcome;
use crate::rest::client::{HassClient, metadata, query};

impl HassClient {
    /// Fetch a camera still image.
    ///
    /// `GET /api/camera_proxy/{entity_id}?width=&height=`
    ///
    /// Returns `{"image": <base64>, "contentType": <Content-Type or null>}`.
    /// A zero width or height is treated as unset.
    pub async fn get_camera_snapshot(
        &self,
        entity_id: &str,
        width: Option<u32>,
        height: Option<u32>,
    ) -> Outcome {
        let width = width.filter(|w| *w > 0);
        let height = height.filter(|h| *h > 0);

        let params = query([
            ("width", width.as_ref().map(ToString::to_string)),
            ("height", height.as_ref().map(ToString::to_string)),
        ]);
        let attempt = self
            .get_with_params(&format!("/camera_proxy/{entity_id}"), &params)
            .await;

        let meta = metadata([
            ("entityId", Value::from(entity_id)),
            ("width", width.map_or(Value::Null, Value::from)),
            ("height", height.map_or(Value::Null, Value::from)),
        ]);

        self.finish_with(attempt, |resp| {
            let image = STANDARD.encode(&resp.body);
            Outcome::with_metadata(
                meta,
                json!({ "image": image, "contentType": resp.content_type }),
            )
        })
    }
}
