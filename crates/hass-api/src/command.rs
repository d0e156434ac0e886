// ── Command API ──
//
// Every endpoint operation is also expressible as a `Command` value, so a
// front end can build the request first (parsing and validating its inputs)
// and dispatch it through a single `HassClient::execute` call.

use serde_json::Value;

use crate::outcome::Outcome;
use crate::rest::HassClient;

/// One Home Assistant REST operation with its inputs.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    // ── System ───────────────────────────────────────────────────────
    CheckApi,
    GetConfig,
    GetEvents,
    GetErrorLog,
    GetDiscoveryInfo,
    CheckConfig,

    // ── Services ─────────────────────────────────────────────────────
    GetServices {
        domain: Option<String>,
    },
    CallService {
        domain: String,
        service: String,
        data: Value,
    },

    // ── History ──────────────────────────────────────────────────────
    GetHistory {
        timestamp: Option<String>,
        filter_entity_id: Option<String>,
        end_time: Option<String>,
    },
    GetLogbook {
        timestamp: Option<String>,
        entity_id: Option<String>,
        end_time: Option<String>,
    },

    // ── States ───────────────────────────────────────────────────────
    GetStates,
    GetState {
        entity_id: String,
    },
    SetState {
        entity_id: String,
        state: String,
        attributes: Value,
    },
    GetEntities {
        domain: Option<String>,
    },

    // ── Misc ─────────────────────────────────────────────────────────
    GetCameraSnapshot {
        entity_id: String,
        width: Option<u32>,
        height: Option<u32>,
    },
    RenderTemplate {
        template: String,
    },
    TriggerWebhook {
        webhook_id: String,
        data: Value,
    },
    GetCalendars,
    GetCalendarEvents {
        entity_id: String,
        start: Option<String>,
        end: Option<String>,
    },
}

impl HassClient {
    /// Run one command and return its classified outcome.
    pub async fn execute(&self, cmd: Command) -> Outcome {
        tracing::debug!(?cmd, "executing command");

        match cmd {
            Command::CheckApi => self.check_api().await,
            Command::GetConfig => self.get_config().await,
            Command::GetEvents => self.get_events().await,
            Command::GetErrorLog => self.get_error_log().await,
            Command::GetDiscoveryInfo => self.get_discovery_info().await,
            Command::CheckConfig => self.check_config().await,

            Command::GetServices { domain } => self.get_services(domain.as_deref()).await,
            Command::CallService {
                domain,
                service,
                data,
            } => self.call_service(&domain, &service, data).await,

            Command::GetHistory {
                timestamp,
                filter_entity_id,
                end_time,
            } => {
                self.get_history(
                    timestamp.as_deref(),
                    filter_entity_id.as_deref(),
                    end_time.as_deref(),
                )
                .await
            }
            Command::GetLogbook {
                timestamp,
                entity_id,
                end_time,
            } => {
                self.get_logbook(
                    timestamp.as_deref(),
                    entity_id.as_deref(),
                    end_time.as_deref(),
                )
                .await
            }

            Command::GetStates => self.get_states().await,
            Command::GetState { entity_id } => self.get_state(&entity_id).await,
            Command::SetState {
                entity_id,
                state,
                attributes,
            } => self.set_state(&entity_id, &state, attributes).await,
            Command::GetEntities { domain } => self.get_entities(domain.as_deref()).await,

            Command::GetCameraSnapshot {
                entity_id,
                width,
                height,
            } => self.get_camera_snapshot(&entity_id, width, height).await,
            Command::RenderTemplate { template } => self.render_template(&template).await,
            Command::TriggerWebhook { webhook_id, data } => {
                self.trigger_webhook(&webhook_id, &data).await
            }
            Command::GetCalendars => self.get_calendars().await,
            Command::GetCalendarEvents {
                entity_id,
                start,
                end,
            } => {
                self.get_calendar_events(&entity_id, start.as_deref(), end.as_deref())
                    .await
            }
        }
    }
}
