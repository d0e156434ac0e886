//! Clap derive structures for the `hass-cli` binary.
//!
//! One subcommand per Home Assistant REST operation, plus shell
//! completions. Global flags fall back to `HASS_*` environment variables.

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

// ── Top-Level CLI ────────────────────────────────────────────────────

/// hass-cli -- query and control Home Assistant from the command line
#[derive(Debug, Parser)]
#[command(
    name = "hass-cli",
    version,
    about = "Query and control Home Assistant from the command line",
    long_about = "A thin client for the Home Assistant REST API.\n\n\
        Every command performs one request and prints one JSON document\n\
        with a `success` field. API failures exit 0 and print\n\
        `success: false`; only invalid arguments exit non-zero.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Home Assistant API base URL, e.g. http://homeassistant.local:8123/api
    #[arg(long, env = "HASS_API_URL", global = true)]
    pub url: Option<String>,

    /// Long-lived access token
    #[arg(long, env = "HASS_API_TOKEN", global = true, hide_env_values = true)]
    pub token: Option<String>,

    /// Accept self-signed TLS certificates
    #[arg(long, short = 'k', env = "HASS_INSECURE", global = true)]
    pub insecure: bool,

    /// Increase log verbosity on stderr (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

// ── Commands ─────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check that the API is running
    Check,

    /// Show the core configuration
    Config,

    /// List event types and listener counts
    Events,

    /// List available services
    Services {
        /// Only show services of this domain
        #[arg(long, short = 'd')]
        domain: Option<String>,
    },

    /// Call a service
    Call(CallArgs),

    /// Show state history for a period
    History(HistoryArgs),

    /// Show logbook entries for a period
    Logbook(LogbookArgs),

    /// List all entity states
    States,

    /// Show one entity's state
    State {
        /// Entity ID, e.g. light.kitchen
        entity_id: String,
    },

    /// Set an entity's state representation
    SetState(SetStateArgs),

    /// Show the server error log
    ErrorLog,

    /// Fetch a camera snapshot as base64
    CameraProxy(CameraArgs),

    /// Render a template
    Template {
        /// Jinja template, e.g. "{{ states('sun.sun') }}"
        template: String,
    },

    /// List entities, optionally only one domain
    Entities {
        /// Only show entities of this domain, e.g. light
        #[arg(long, short = 'd')]
        domain: Option<String>,
    },

    /// Trigger a webhook
    Webhook(WebhookArgs),

    /// Show discovery information
    Discovery,

    /// List calendar entities
    Calendars,

    /// List events of a calendar
    CalendarEvents(CalendarEventsArgs),

    /// Validate configuration.yaml
    CheckConfig,

    /// Generate shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

// ── Command Arguments ────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CallArgs {
    /// Service domain, e.g. light
    pub domain: String,

    /// Service name, e.g. turn_on
    pub service: String,

    /// Service data as a JSON object
    #[arg(long, short = 'd', default_value = "{}")]
    pub data: String,

    /// Target entity, added to the service data as `entity_id`
    #[arg(long, short = 'e')]
    pub entity_id: Option<String>,
}

#[derive(Debug, Args)]
pub struct HistoryArgs {
    /// Start of the period (ISO 8601); defaults to one day ago
    #[arg(long, short = 't')]
    pub timestamp: Option<String>,

    /// Comma-separated entity IDs to include
    #[arg(long, short = 'e')]
    pub entity_id: Option<String>,

    /// End of the period (ISO 8601)
    #[arg(long, short = 'n')]
    pub end_time: Option<String>,
}

#[derive(Debug, Args)]
pub struct LogbookArgs {
    /// Start of the period (ISO 8601); defaults to one day ago
    #[arg(long, short = 't')]
    pub timestamp: Option<String>,

    /// Only show entries for this entity
    #[arg(long, short = 'e')]
    pub entity_id: Option<String>,

    /// End of the period (ISO 8601)
    #[arg(long, short = 'n')]
    pub end_time: Option<String>,
}

#[derive(Debug, Args)]
pub struct SetStateArgs {
    /// Entity ID, e.g. sensor.kitchen_temperature
    pub entity_id: String,

    /// New state value
    pub state: String,

    /// Attributes as a JSON object
    #[arg(long, short = 'a', default_value = "{}")]
    pub attributes: String,
}

#[derive(Debug, Args)]
pub struct CameraArgs {
    /// Camera entity ID, e.g. camera.front_door
    pub entity_id: String,

    /// Scale the snapshot to this width
    #[arg(long, short = 'w')]
    pub width: Option<u32>,

    /// Scale the snapshot to this height
    #[arg(long, short = 'H')]
    pub height: Option<u32>,
}

#[derive(Debug, Args)]
pub struct WebhookArgs {
    /// Webhook ID
    pub webhook_id: String,

    /// Payload as JSON
    #[arg(long, short = 'd', default_value = "{}")]
    pub data: String,
}

#[derive(Debug, Args)]
pub struct CalendarEventsArgs {
    /// Calendar entity ID, e.g. calendar.family
    pub entity_id: String,

    /// Start of the window (ISO 8601)
    #[arg(long, short = 's')]
    pub start: Option<String>,

    /// End of the window (ISO 8601)
    #[arg(long, short = 'e')]
    pub end: Option<String>,
}
