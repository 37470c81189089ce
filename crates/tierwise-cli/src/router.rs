//! Command routing logic for CLI

use crate::args::{CatalogAction, Cli, Commands};
use crate::commands;
use crate::commands::models::ModelFilter;
use crate::console::CliConsole;
use anyhow::Result;
use std::process::ExitCode;
use tierwise_core::{Registry, RegistryConfig};

/// Route CLI commands to their respective handlers
pub fn route(cli: Cli, config: &RegistryConfig) -> Result<ExitCode> {
    let console = CliConsole::new(cli.verbose);

    match cli.command {
        Commands::Models {
            plan,
            tier,
            provider,
        } => {
            let filter = ModelFilter {
                plan,
                tier,
                provider,
            };
            commands::models::list(&load(config)?, &filter, &console)?;
        }
        Commands::Resolve { name } => commands::lookup::resolve(&load(config)?, &name)?,
        Commands::Price {
            key,
            exact,
            input_tokens,
            output_tokens,
        } => commands::lookup::price(
            &load(config)?,
            &key,
            exact,
            input_tokens,
            output_tokens,
            &console,
        )?,
        Commands::Plans => commands::plans::list(&load(config)?, &console)?,
        Commands::Plan { plan_id } => commands::plans::show(&load(config)?, &plan_id, &console)?,
        Commands::Check { plan_id, model } => {
            if !commands::lookup::check(&load(config)?, &plan_id, &model, &console)? {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Catalog { action } => route_catalog(action, config, &console)?,
    }

    Ok(ExitCode::SUCCESS)
}

fn route_catalog(action: CatalogAction, config: &RegistryConfig, console: &CliConsole) -> Result<()> {
    match action {
        // Builds its own registry so load failures are reported against the file.
        CatalogAction::Validate { file } => {
            commands::catalog::validate(config, file.as_deref(), console)
        }
        CatalogAction::Show => commands::catalog::show(&load(config)?, console),
        CatalogAction::Export { format } => commands::catalog::export(&load(config)?, format),
    }
}

fn load(config: &RegistryConfig) -> Result<Registry> {
    Ok(Registry::from_config(config)?)
}
