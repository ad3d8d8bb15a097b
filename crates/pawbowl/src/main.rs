mod cli;
mod commands;
mod error;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use pawbowl_core::RosterService;

use crate::cli::{Cli, Command, OutputFormat};
use crate::error::CliError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_tracing(cli.global.verbose);

    if let Err(err) = run(cli).await {
        let code = err.exit_code();
        eprintln!("Error: {err}");
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        // Config commands don't need a service connection
        Command::Config(args) => commands::config_cmd::handle(args.command, &cli.global),

        cmd => {
            let cfg = pawbowl_config::load_config_or_default();

            // CLI flag wins, then the config file's default, then table.
            let mut global = cli.global;
            if global.output.is_none() {
                global.output =
                    <OutputFormat as clap::ValueEnum>::from_str(&cfg.output, true).ok();
            }

            let roster_config = build_roster_config(cfg, &global)?;
            let service = RosterService::new(&roster_config)?;

            tracing::debug!(command = ?cmd, "dispatching command");
            commands::dispatch(cmd, &service, &global).await
        }
    }
}

/// Overlay CLI flags onto the file config and translate to a `RosterConfig`.
fn build_roster_config(
    mut cfg: pawbowl_config::Config,
    global: &cli::GlobalOpts,
) -> Result<pawbowl_core::RosterConfig, CliError> {
    if let Some(ref url) = global.api_url {
        cfg.api_url.clone_from(url);
    }
    if let Some(ref cohort) = global.cohort {
        cfg.cohort = Some(cohort.clone());
    }
    if let Some(timeout) = global.timeout {
        cfg.timeout = timeout;
    }

    if cfg.cohort.is_none() {
        return Err(CliError::NoCohort);
    }

    Ok(pawbowl_config::to_roster_config(&cfg)?)
}
