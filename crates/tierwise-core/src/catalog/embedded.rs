//! Built-in model catalog
//!
//! Contains the default set of models that ships with Tierwise.

use super::model_catalog::ModelCatalog;
use super::record::CatalogDocument;
use crate::config::CurrencyConfig;
use crate::config::file_loader::parse_document;
use crate::error::RegistryResult;

/// Source of the built-in catalog
pub const DEFAULT_CATALOG_TOML: &str = include_str!("../../data/default_catalog.toml");

/// Parse and validate the built-in catalog
pub fn embedded_catalog(currency: &CurrencyConfig) -> RegistryResult<ModelCatalog> {
    let document: CatalogDocument = parse_document(DEFAULT_CATALOG_TOML, Some("toml"))?;
    ModelCatalog::from_document(document, currency)
}
