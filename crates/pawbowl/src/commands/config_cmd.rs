//! Config command handlers. These run before a service exists.

use pawbowl_config::{Config, config_path, load_config_or_default, save_config};

use crate::cli::{ConfigCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

pub fn handle(command: ConfigCommand, global: &GlobalOpts) -> Result<(), CliError> {
    match command {
        ConfigCommand::Show => {
            let cfg = load_config_or_default();
            let rendered = toml::to_string_pretty(&cfg)
                .map_err(pawbowl_config::ConfigError::Serialization)?;
            output::print_output(rendered.trim_end(), global.quiet);
            Ok(())
        }

        ConfigCommand::Path => {
            output::print_output(&config_path().display().to_string(), global.quiet);
            Ok(())
        }

        ConfigCommand::Init { cohort } => {
            let cfg = Config {
                cohort: Some(cohort),
                ..Config::default()
            };
            save_config(&cfg)?;
            if !global.quiet {
                eprintln!("Wrote {}", config_path().display());
            }
            Ok(())
        }
    }
}
