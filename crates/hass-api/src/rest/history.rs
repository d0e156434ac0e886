// History and logbook endpoints
//
// Both take an optional start timestamp as a path segment, an optional
// entity filter and an optional end time as query parameters. Empty values
// count as unset.

use serde_json::Value;

use crate::outcome::{Metadata, Outcome};
use crate::rest::client::{HassClient, opt_str, present, query};

impl HassClient {
    /// State changes in a period.
    ///
    /// `GET /api/history/period[/{timestamp}]?filter_entity_id=&end_time=`
    ///
    /// Without a timestamp Home Assistant defaults to one day before now.
    pub async fn get_history(
        &self,
        timestamp: Option<&str>,
        filter_entity_id: Option<&str>,
        end_time: Option<&str>,
    ) -> Outcome {
        let (timestamp, end_time) = (present(timestamp), present(end_time));
        let filter_entity_id = present(filter_entity_id);
        let params = query([
            ("filter_entity_id", filter_entity_id.map(str::to_owned)),
            ("end_time", end_time.map(str::to_owned)),
        ]);
        let attempt = self
            .get_with_params(&with_timestamp("/history/period", timestamp), &params)
            .await;

        let mut meta = timestamp_metadata(timestamp);
        meta.insert("filterEntityId".into(), opt_str(filter_entity_id));
        meta.insert("endTime".into(), opt_str(end_time));
        self.finish(attempt, meta)
    }

    /// Logbook entries in a period.
    ///
    /// `GET /api/logbook[/{timestamp}]?entity=&end_time=`
    pub async fn get_logbook(
        &self,
        timestamp: Option<&str>,
        entity_id: Option<&str>,
        end_time: Option<&str>,
    ) -> Outcome {
        let (timestamp, end_time) = (present(timestamp), present(end_time));
        let entity_id = present(entity_id);
        let params = query([
            ("entity", entity_id.map(str::to_owned)),
            ("end_time", end_time.map(str::to_owned)),
        ]);
        let attempt = self
            .get_with_params(&with_timestamp("/logbook", timestamp), &params)
            .await;

        let mut meta = timestamp_metadata(timestamp);
        meta.insert("entityId".into(), opt_str(entity_id));
        meta.insert("endTime".into(), opt_str(end_time));
        self.finish(attempt, meta)
    }
}

fn with_timestamp(path: &str, timestamp: Option<&str>) -> String {
    match timestamp {
        Some(timestamp) => format!("{path}/{timestamp}"),
        None => path.to_owned(),
    }
}

/// `timestamp` is only echoed when it was given.
fn timestamp_metadata(timestamp: Option<&str>) -> Metadata {
    let mut meta = Metadata::new();
    if let Some(timestamp) = timestamp {
        meta.insert("timestamp".into(), Value::from(timestamp));
    }
    meta
}
