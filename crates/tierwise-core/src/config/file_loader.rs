//! File-based document loading
//!
//! Supports JSON, TOML, and YAML formats based on file extension.

use super::model::RegistryConfig;
use crate::error::{RegistryError, RegistryResult};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Load registry configuration from a file
///
/// Returns default config if the file doesn't exist. The loaded config is
/// validated before it is returned.
pub fn load_config_from_file(path: &Path) -> RegistryResult<RegistryConfig> {
    if !path.exists() {
        return Ok(RegistryConfig::default());
    }

    let config: RegistryConfig = read_document(path)?;
    config.validate()?;
    Ok(config)
}

/// Read and deserialize a document, picking the format from the extension
pub(crate) fn read_document<T: DeserializeOwned>(path: &Path) -> RegistryResult<T> {
    let content = fs::read_to_string(path).map_err(|e| {
        RegistryError::io_with_path(
            format!("Failed to read file: {}", e),
            path.display().to_string(),
        )
    })?;

    parse_document(&content, path.extension().and_then(|s| s.to_str()))
}

/// Deserialize document text; `None` or an unknown extension means JSON
pub(crate) fn parse_document<T: DeserializeOwned>(
    content: &str,
    extension: Option<&str>,
) -> RegistryResult<T> {
    match extension {
        Some("toml") => {
            toml::from_str(content).map_err(|e| RegistryError::parse("TOML", e.to_string()))
        }
        Some("yaml") | Some("yml") => {
            serde_yaml::from_str(content).map_err(|e| RegistryError::parse("YAML", e.to_string()))
        }
        _ => serde_json::from_str(content).map_err(|e| RegistryError::parse("JSON", e.to_string())),
    }
}
