// Calendar endpoints

use serde_json::Value;

use crate::outcome::{Metadata, Outcome};
use crate::rest::client::{HassClient, metadata, opt_str, present, query};

impl HassClient {
    /// List calendar entities.
    ///
    /// `GET /api/calendars`
    pub async fn get_calendars(&self) -> Outcome {
        let attempt = self.get("/calendars").await;
        self.finish(attempt, Metadata::new())
    }

    /// Events of one calendar between `start` and `end`.
    ///
    /// `GET /api/calendars/{entity_id}?start=&end=`
    pub async fn get_calendar_events(
        &self,
        entity_id: &str,
        start: Option<&str>,
        end: Option<&str>,
    ) -> Outcome {
        let (start, end) = (present(start), present(end));
        let params = query([
            ("start", start.map(str::to_owned)),
            ("end", end.map(str::to_owned)),
        ]);
        let attempt = self
            .get_with_params(&format!("/calendars/{entity_id}"), &params)
            .await;

        self.finish(
            attempt,
            metadata([
                ("entityId", Value::from(entity_id)),
                ("start", opt_str(start)),
                ("end", opt_str(end)),
            ]),
        )
    }
}
