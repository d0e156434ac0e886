//! `set-state`: parse `--attributes`.

use crate::cli::SetStateArgs;
use crate::commands::util::parse_json;
use crate::error::CliError;

pub fn set_state(args: SetStateArgs) -> Result<hass_api::Command, CliError> {
    let attributes = parse_json(&args.attributes, "attributes")?;
    Ok(hass_api::Command::SetState {
        entity_id: args.entity_id,
        state: args.state,
        attributes,
    })
}
