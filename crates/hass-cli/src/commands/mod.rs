//! Command dispatch: turn a parsed subcommand into one API request.
//!
//! JSON flag values are parsed before the client is built, so bad input
//! never produces a request.

mod services;
mod states;
mod util;
mod webhook;

use clap::CommandFactory;
use clap_complete::Shell;

use hass_api::HassClient;

use crate::cli::{Cli, Command, GlobalOpts};
use crate::config;
use crate::error::CliError;
use crate::output;

/// Run one subcommand and print its outcome.
pub async fn dispatch(cmd: Command, global: &GlobalOpts) -> Result<(), CliError> {
    let request = match cmd {
        Command::Completions { shell } => {
            completions(shell);
            return Ok(());
        }
        cmd => build(cmd)?,
    };

    let config = config::client_config(global);
    tracing::debug!(command = ?request, base_url = ?config.base_url(), "dispatching command");

    let outcome = match HassClient::new(&config) {
        Ok(client) => client.execute(request).await,
        Err(err) => config.classifier().unsent(&err),
    };

    output::print_outcome(&outcome);
    Ok(())
}

/// Translate a subcommand into its API request.
fn build(cmd: Command) -> Result<hass_api::Command, CliError> {
    use hass_api::Command as Api;

    Ok(match cmd {
        Command::Check => Api::CheckApi,
        Command::Config => Api::GetConfig,
        Command::Events => Api::GetEvents,
        Command::Services { domain } => Api::GetServices { domain },
        Command::Call(args) => services::call(args)?,
        Command::History(args) => Api::GetHistory {
            timestamp: args.timestamp,
            filter_entity_id: args.entity_id,
            end_time: args.end_time,
        },
        Command::Logbook(args) => Api::GetLogbook {
            timestamp: args.timestamp,
            entity_id: args.entity_id,
            end_time: args.end_time,
        },
        Command::States => Api::GetStates,
        Command::State { entity_id } => Api::GetState { entity_id },
        Command::SetState(args) => states::set_state(args)?,
        Command::ErrorLog => Api::GetErrorLog,
        Command::CameraProxy(args) => Api::GetCameraSnapshot {
            entity_id: args.entity_id,
            width: args.width,
            height: args.height,
        },
        Command::Template { template } => Api::RenderTemplate { template },
        Command::Entities { domain } => Api::GetEntities { domain },
        Command::Webhook(args) => webhook::webhook(args)?,
        Command::Discovery => Api::GetDiscoveryInfo,
        Command::Calendars => Api::GetCalendars,
        Command::CalendarEvents(args) => Api::GetCalendarEvents {
            entity_id: args.entity_id,
            start: args.start,
            end: args.end,
        },
        Command::CheckConfig => Api::CheckConfig,
        // Handled in `dispatch` before a request is built.
        Command::Completions { .. } => unreachable!(),
    })
}

fn completions(shell: Shell) {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "hass-cli", &mut std::io::stdout());
}
