//! Shared configuration for the Puppy Bowl CLI and TUI.
//!
//! TOML file plus `PAWBOWL_`-prefixed environment variables, merged via
//! figment, and translated to `pawbowl_core::RosterConfig`. Both
//! binaries depend on this crate; CLI flags override on top.

use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use pawbowl_core::RosterConfig;

/// Service root used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "https://fsa-puppy-bowl.herokuapp.com";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config struct ──────────────────────────────────────────────

/// Top-level TOML configuration shared by CLI and TUI.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Service root URL.
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Cohort identifier (every request is scoped under `/api/{cohort}/`).
    pub cohort: Option<String>,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// Default CLI output format ("table", "json", ...).
    #[serde(default = "default_output")]
    pub output: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            cohort: None,
            timeout: default_timeout(),
            output: default_output(),
        }
    }
}

fn default_api_url() -> String {
    DEFAULT_API_URL.into()
}
fn default_timeout() -> u64 {
    30
}
fn default_output() -> String {
    "table".into()
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "pawbowl", "pawbowl").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("pawbowl");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load a Config from an explicit path (plus environment). Split out so
/// tests can point at a temp file.
pub fn load_config_from(path: &std::path::Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("PAWBOWL_"));

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Load config, returning defaults if the file doesn't exist.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    let path = config_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml = toml::to_string_pretty(cfg)?;
    std::fs::write(&path, toml)?;
    Ok(())
}

// ── Translation to core config ──────────────────────────────────────

/// Build a [`RosterConfig`] from the loaded config, validating the URL
/// and requiring a cohort.
pub fn to_roster_config(cfg: &Config) -> Result<RosterConfig, ConfigError> {
    let url: Url = cfg.api_url.parse().map_err(|e| ConfigError::Validation {
        field: "api_url".into(),
        reason: format!("{e}"),
    })?;
    let cohort = cfg
        .cohort
        .clone()
        .ok_or_else(|| ConfigError::Validation {
            field: "cohort".into(),
            reason: "no cohort configured (set `cohort` in config.toml or PAWBOWL_COHORT)".into(),
        })?;

    let mut roster = RosterConfig::new(url, cohort);
    roster.timeout = Duration::from_secs(cfg.timeout);
    Ok(roster)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let cfg = Config::default();
        assert_eq!(cfg.api_url, DEFAULT_API_URL);
        assert_eq!(cfg.timeout, 30);
        assert_eq!(cfg.output, "table");
        assert!(cfg.cohort.is_none());
    }

    #[test]
    fn file_and_env_merge() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "config.toml",
                r#"
                    cohort = "2803-pups"
                    timeout = 10
                "#,
            )?;
            jail.set_env("PAWBOWL_TIMEOUT", "5");

            let cfg = load_config_from(std::path::Path::new("config.toml")).unwrap();
            assert_eq!(cfg.cohort.as_deref(), Some("2803-pups"));
            // Env overrides file.
            assert_eq!(cfg.timeout, 5);
            Ok(())
        });
    }

    #[test]
    fn missing_cohort_fails_translation() {
        let cfg = Config::default();
        assert!(matches!(
            to_roster_config(&cfg),
            Err(ConfigError::Validation { ref field, .. }) if field == "cohort"
        ));
    }

    #[test]
    fn translation_carries_timeout() {
        let cfg = Config {
            cohort: Some("2803-pups".into()),
            timeout: 7,
            ..Config::default()
        };
        let roster = to_roster_config(&cfg).unwrap();
        assert_eq!(roster.cohort, "2803-pups");
        assert_eq!(roster.timeout, Duration::from_secs(7));
    }
}
