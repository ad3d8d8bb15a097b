//! `pawbowl-tui` — terminal UI for browsing and managing a Puppy Bowl
//! roster.
//!
//! Built on [ratatui](https://ratatui.rs) over `pawbowl-core`'s
//! [`RosterService`](pawbowl_core::RosterService). One screen: the roster
//! list on the left, a detail panel (fed by per-player re-fetches) on the
//! right, with an add-form overlay and a confirm-before-remove dialog.
//!
//! Logs are written to a file (default `/tmp/pawbowl-tui.log`) to avoid
//! corrupting the terminal UI.
//!
//! Entry point: CLI argument parsing, tracing setup, panic hooks, and app
//! launch.

mod action;
mod app;
mod event;
mod theme;
mod tui;
mod ui;

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{Result, eyre};
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use pawbowl_core::RosterService;

use crate::app::App;

/// Terminal UI for the Puppy Bowl roster.
#[derive(Parser, Debug)]
#[command(name = "pawbowl-tui", version, about)]
struct Cli {
    /// Service root URL (overrides config file)
    #[arg(long, env = "PAWBOWL_API_URL")]
    api_url: Option<String>,

    /// Cohort identifier (overrides config file)
    #[arg(short = 'c', long, env = "PAWBOWL_COHORT")]
    cohort: Option<String>,

    /// Log file path
    #[arg(long, default_value = "/tmp/pawbowl-tui.log")]
    log_file: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Set up file-based tracing. We MUST NOT log to stdout/stderr — that
/// would corrupt the TUI output. Returns a guard that must be held for
/// the lifetime of the application to ensure logs are flushed.
fn setup_tracing(cli: &Cli) -> WorkerGuard {
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("pawbowl={log_level}")));

    let log_dir = cli.log_file.parent().unwrap_or(std::path::Path::new("/tmp"));
    let log_filename = cli
        .log_file
        .file_name()
        .unwrap_or(std::ffi::OsStr::new("pawbowl-tui.log"));

    let file_appender = tracing_appender::rolling::never(log_dir, log_filename);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true),
        )
        .init();

    guard
}

/// Resolve the service from the config file with CLI flag overrides.
fn build_service(cli: &Cli) -> Result<RosterService> {
    let mut cfg = pawbowl_config::load_config_or_default();
    if let Some(ref url) = cli.api_url {
        cfg.api_url.clone_from(url);
    }
    if let Some(ref cohort) = cli.cohort {
        cfg.cohort = Some(cohort.clone());
    }

    let roster_config = pawbowl_config::to_roster_config(&cfg)
        .map_err(|e| eyre!("configuration error: {e}"))?;
    RosterService::new(&roster_config).map_err(|e| eyre!("service setup failed: {e}"))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Install panic/error hooks BEFORE entering the terminal
    tui::install_hooks()?;

    // Tracing to file — hold the guard so logs flush on exit
    let _log_guard = setup_tracing(&cli);

    // Resolve config before touching the terminal so errors print cleanly
    let service = build_service(&cli)?;

    info!(
        cohort = cli.cohort.as_deref().unwrap_or("(from config)"),
        "starting pawbowl-tui"
    );

    let mut app = App::new(service);
    app.run().await?;

    Ok(())
}
