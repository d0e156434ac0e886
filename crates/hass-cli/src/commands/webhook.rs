//! `webhook`: parse `--data`.

use crate::cli::WebhookArgs;
use crate::commands::util::parse_json;
use crate::error::CliError;

pub fn webhook(args: WebhookArgs) -> Result<hass_api::Command, CliError> {
    let data = parse_json(&args.data, "data")?;
    Ok(hass_api::Command::TriggerWebhook {
        webhook_id: args.webhook_id,
        data,
    })
}
