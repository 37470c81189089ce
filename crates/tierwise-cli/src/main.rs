//! Tierwise CLI application
//!
//! Query the model registry from the command line: list models per plan,
//! resolve aliases, look up prices and check plan eligibility.
//!
//! # Installation
//!
//! ```bash
//! cargo install --path crates/tierwise-cli
//! ```

#![allow(clippy::collapsible_if)]

mod args;
mod commands;
mod console;
mod logging;
mod router;
mod settings;

use args::Cli;
use clap::Parser;
use console::CliConsole;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let console = CliConsole::new(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            console.error(&format!("{:#}", e));
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let settings = settings::load_settings(&cli)?;
    logging::init_logging(&settings.config.logging)?;

    match &settings.source {
        Some(path) => tracing::debug!("Loaded configuration from {}", path.display()),
        None => tracing::debug!("No configuration file found, using defaults"),
    }
    tracing::debug!(config = ?settings.config, "Resolved configuration");

    router::route(cli, &settings.config)
}
