//! `adhoc config`: inspect the effective configuration.

use crate::{
    cli::{ConfigCommands, OutputFormat},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(cmd: ConfigCommands, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    match cmd {
        ConfigCommands::List => {
            if output.format() == OutputFormat::Json {
                output.emit(&serde_json::to_string_pretty(config)?)?;
            } else {
                output.header("Current Configuration:")?;
                output.emit(&toml::to_string_pretty(config)?)?;
            }
        }

        ConfigCommands::Path => {
            output.emit(&AppConfig::config_path().display().to_string())?;
        }
    }

    Ok(())
}
