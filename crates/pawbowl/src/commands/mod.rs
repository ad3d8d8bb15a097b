//! Command handlers, one module per resource.

pub mod config_cmd;
pub mod players;
pub mod teams;
pub mod util;

use pawbowl_core::RosterService;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch a parsed command to its handler.
pub async fn dispatch(
    command: Command,
    service: &RosterService,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match command {
        Command::Players(args) => players::handle(service, args, global).await,
        Command::Teams(args) => teams::handle(service, args, global).await,
        // Config is handled in main before a service exists.
        Command::Config(_) => Ok(()),
    }
}
