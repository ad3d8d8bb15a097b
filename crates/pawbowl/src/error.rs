//! CLI error types.
//!
//! Maps `CoreError` variants into user-facing errors with stable exit codes.

use thiserror::Error;

use pawbowl_core::CoreError;

/// Exit codes for process termination.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const NOT_FOUND: i32 = 4;
    pub const REJECTED: i32 = 6;
    pub const CONNECTION: i32 = 7;
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error("could not reach the Puppy Bowl service: {reason}")]
    Connection { reason: String },

    #[error("player {id} not found (run `pawbowl players list` to see the roster)")]
    PlayerNotFound { id: i64 },

    #[error("the service rejected the request: {message}")]
    Rejected { message: String },

    #[error("invalid value for {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error(
        "no cohort configured (set `cohort` in the config file, PAWBOWL_COHORT, or --cohort)"
    )]
    NoCohort,

    #[error(transparent)]
    Config(#[from] pawbowl_config::ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Connection { .. } => exit_code::CONNECTION,
            Self::PlayerNotFound { .. } => exit_code::NOT_FOUND,
            Self::Rejected { .. } => exit_code::REJECTED,
            Self::Validation { .. } | Self::NoCohort => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Rejected { message } => Self::Rejected { message },
            CoreError::Connection { reason } => Self::Connection { reason },
            CoreError::PlayerNotFound { id } => Self::PlayerNotFound { id },
            CoreError::Config { message } => Self::Validation {
                field: "config".into(),
                reason: message,
            },
        }
    }
}
