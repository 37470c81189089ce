//! Configuration assembly for the CLI
//!
//! Settings are layered in this order:
//! 1. Default configuration
//! 2. Config file (`--config-file`, else tierwise.toml, else ~/.tierwise/config.toml)
//! 3. Environment variables (TIERWISE_*)
//! 4. Command line flags

use crate::args::{Cli, DEFAULT_CONFIG_FILE};
use anyhow::{Context, Result, bail};
use std::path::{Path, PathBuf};
use tierwise_core::config::{
    LOG_FORMATS, LOG_LEVELS, LoggingConfig, RegistryConfig, load_config_from_file,
};

/// Resolved configuration and where it came from
#[derive(Debug)]
pub struct Settings {
    pub config: RegistryConfig,
    /// Config file that was read, if any
    pub source: Option<PathBuf>,
}

/// Load configuration for this invocation
pub fn load_settings(cli: &Cli) -> Result<Settings> {
    let source = config_path(cli.config_file.as_deref())?;
    let mut config = match &source {
        Some(path) => {
            let mut config = load_config_from_file(path)
                .with_context(|| format!("Loading configuration from '{}'", path.display()))?;
            anchor_catalog_path(&mut config, path);
            config
        }
        None => RegistryConfig::default(),
    };

    apply_env_overrides(&mut config, |key| std::env::var(key).ok())?;

    if let Some(catalog) = &cli.catalog {
        config.catalog_path = Some(catalog.clone());
    }
    if cli.verbose {
        config.logging.apply_overrides(Some("debug".to_string()), None);
    }

    config.validate().context("Invalid configuration")?;
    validate_logging(&config.logging)?;
    Ok(Settings { config, source })
}

/// Logging values only matter to this binary, so they are checked here
fn validate_logging(logging: &LoggingConfig) -> Result<()> {
    if !LOG_LEVELS.contains(&logging.level.to_lowercase().as_str()) {
        bail!(
            "Unknown log level '{}'. Valid levels are: {:?}",
            logging.level,
            LOG_LEVELS
        );
    }
    if !LOG_FORMATS.contains(&logging.format.as_str()) {
        bail!(
            "Unknown log format '{}'. Valid formats are: {:?}",
            logging.format,
            LOG_FORMATS
        );
    }
    Ok(())
}

/// Pick the configuration file to read, if any
fn config_path(explicit: Option<&Path>) -> Result<Option<PathBuf>> {
    if let Some(path) = explicit {
        if !path.exists() {
            bail!("Configuration file not found: {}", path.display());
        }
        return Ok(Some(path.to_path_buf()));
    }

    let local = PathBuf::from(DEFAULT_CONFIG_FILE);
    if local.exists() {
        return Ok(Some(local));
    }

    Ok(dirs::home_dir()
        .map(|home| home.join(".tierwise").join("config.toml"))
        .filter(|path| path.exists()))
}

/// Relative catalog paths are relative to the config file that names them
fn anchor_catalog_path(config: &mut RegistryConfig, config_file: &Path) {
    let Some(dir) = config_file.parent() else {
        return;
    };
    if let Some(catalog) = config.catalog_path.as_mut() {
        if catalog.is_relative() {
            *catalog = dir.join(&*catalog);
        }
    }
}

/// Apply TIERWISE_* overrides using `lookup` to read variables
pub fn apply_env_overrides<F>(config: &mut RegistryConfig, lookup: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(catalog) = lookup("TIERWISE_CATALOG") {
        config.catalog_path = Some(PathBuf::from(catalog));
    }

    if let Some(rate) = lookup("TIERWISE_CNY_TO_USD") {
        config.currency.cny_to_usd = rate
            .trim()
            .parse()
            .with_context(|| format!("Invalid TIERWISE_CNY_TO_USD value '{}'", rate))?;
    }

    if let Some(plans) = lookup("TIERWISE_PAID_PLANS") {
        config.plans.paid_plans = plans
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(String::from)
            .collect();
    }

    config.logging.apply_overrides(
        lookup("TIERWISE_LOG_LEVEL"),
        lookup("TIERWISE_LOG_FORMAT"),
    );

    Ok(())
}
