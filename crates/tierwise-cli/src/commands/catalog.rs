//! Catalog inspection commands

use crate::args::ExportFormat;
use crate::console::{CliConsole, format_price};
use anyhow::{Context, Result};
use colored::*;
use std::path::Path;
use tierwise_core::{CatalogDocument, Registry, RegistryConfig, legacy_key_for, load_catalog_from_file};

/// Load a catalog and build a registry from it, reporting what was found
pub fn validate(config: &RegistryConfig, file: Option<&Path>, console: &CliConsole) -> Result<()> {
    let registry = build_for_validation(config, file)?;

    let source = file
        .or(config.catalog_path.as_deref())
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "embedded catalog".to_string());

    console.success(&format!("Catalog is valid: {}", source));
    console.print_separator();
    println!("  models:       {}", registry.catalog().len());
    println!("  aliases:      {}", registry.alias_count());
    println!("  pricing keys: {}", registry.pricing_keys().len());
    println!("  free tier:    {}", registry.free_tier_models().len());
    println!("  paid tier:    {}", registry.paid_tier_models().len());
    Ok(())
}

fn build_for_validation(config: &RegistryConfig, file: Option<&Path>) -> Result<Registry> {
    match file {
        Some(path) => {
            let catalog = load_catalog_from_file(path, &config.currency)
                .with_context(|| format!("Loading catalog '{}'", path.display()))?;
            Ok(Registry::build(catalog, &config.plans)?)
        }
        None => Ok(Registry::from_config(config)?),
    }
}

/// Show every record with the keys it can be priced under
pub fn show(registry: &Registry, console: &CliConsole) -> Result<()> {
    console.print_header("Model Catalog");

    for record in registry.catalog().iter() {
        println!("  {}", record.canonical_id.green().bold());
        println!("    pricing: {}", format_price(&record.pricing));

        if let Some(key) = legacy_key_for(&record.canonical_id) {
            println!("    legacy:  {}", key.cyan());
        }

        let aliases = registry.aliases_of(&record.canonical_id);
        if !aliases.is_empty() {
            println!("    aliases: {}", aliases.join(", "));
        }
    }
    Ok(())
}

/// Write the catalog with USD prices to stdout
pub fn export(registry: &Registry, format: ExportFormat) -> Result<()> {
    let output = render(&registry.catalog().to_document(), format)?;
    print!("{}", output);
    Ok(())
}

/// Serialize a catalog document in the requested format
pub fn render(document: &CatalogDocument, format: ExportFormat) -> Result<String> {
    let mut output = match format {
        ExportFormat::Json => serde_json::to_string_pretty(document)?,
        ExportFormat::Toml => toml::to_string_pretty(document)?,
        ExportFormat::Yaml => serde_yaml::to_string(document)?,
    };
    if !output.ends_with('\n') {
        output.push('\n');
    }
    Ok(output)
}
