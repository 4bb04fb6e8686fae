mod cli;
mod commands;
mod config;
mod errors;
mod logging;
mod report;

use crate::cli::Cli;
use crate::commands::Settings;
use crate::config::Config;
use crate::logging::{TracingConfig, init_tracing};
use clap::Parser;
use std::io::{self, Write};
use tracing::{debug, instrument};

fn main() -> miette::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    // Flags win over the config file
    let defaults = TracingConfig::default();
    init_tracing(TracingConfig {
        format: cli
            .log_format
            .or(config.logging.format)
            .unwrap_or(defaults.format),
        level: cli
            .level
            .or(config.logging.level)
            .map_or(defaults.level, Into::into),
        filter: None,
    })?;

    run(cli, &config)
}

#[instrument(name = "hydrate_main", skip_all)]
fn run(cli: Cli, config: &Config) -> miette::Result<()> {
    let settings = Settings::resolve(&cli, config);
    debug!(?settings, correlation_id = %logging::correlation_id(), "Resolved settings");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    commands::execute(cli.command, &settings, &mut out)?;
    out.flush().map_err(errors::CliError::from)?;
    Ok(())
}
