//! Clap derive structures for the `pawbowl` CLI.
//!
//! Defines the command tree, global flags, and shared types.

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// pawbowl -- roster management for the Puppy Bowl from the command line
#[derive(Debug, Parser)]
#[command(
    name = "pawbowl",
    version,
    about = "Manage a Puppy Bowl roster from the command line",
    long_about = "Browse, add, and remove Puppy Bowl players.\n\n\
        Every request is scoped to a cohort; configure one with\n\
        `pawbowl config path` / config.toml or PAWBOWL_COHORT.",
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
    /// Service root URL (overrides config file)
    #[arg(long, env = "PAWBOWL_API_URL", global = true)]
    pub api_url: Option<String>,

    /// Cohort identifier (overrides config file)
    #[arg(long, short = 'c', env = "PAWBOWL_COHORT", global = true)]
    pub cohort: Option<String>,

    /// Output format (defaults to config file, then table)
    #[arg(long, short = 'o', env = "PAWBOWL_OUTPUT", global = true)]
    pub output: Option<OutputFormat>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    /// Request timeout in seconds
    #[arg(long, env = "PAWBOWL_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

// ── Output Enum ──────────────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage roster players
    #[command(alias = "p")]
    Players(PlayersArgs),

    /// View teams and scores
    #[command(alias = "t")]
    Teams(TeamsArgs),

    /// Manage CLI configuration
    Config(ConfigArgs),
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  PLAYERS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct PlayersArgs {
    #[command(subcommand)]
    pub command: PlayersCommand,
}

#[derive(Debug, Subcommand)]
pub enum PlayersCommand {
    /// List all players on the roster
    #[command(alias = "ls")]
    List,

    /// Get a single player's details (fetched fresh from the service)
    Get {
        /// Player ID
        id: i64,
    },

    /// Add a new player to the roster
    Add {
        /// Player name
        #[arg(long, required = true)]
        name: String,

        /// Player breed
        #[arg(long, required = true)]
        breed: String,

        /// Team ID to assign (omit for unassigned)
        #[arg(long)]
        team: Option<i64>,
    },

    /// Remove a player from the roster
    #[command(alias = "rm")]
    Remove {
        /// Player ID
        id: i64,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  TEAMS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct TeamsArgs {
    #[command(subcommand)]
    pub command: TeamsCommand,
}

#[derive(Debug, Subcommand)]
pub enum TeamsCommand {
    /// List all teams
    #[command(alias = "ls")]
    List,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  CONFIG
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Display current resolved configuration
    Show,

    /// Print the config file path
    Path,

    /// Write a starter config file
    Init {
        /// Cohort identifier to store
        #[arg(long, required = true)]
        cohort: String,
    },
}
