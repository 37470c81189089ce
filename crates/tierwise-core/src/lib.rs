//! Tierwise Core Library
//!
//! Turns a static catalog of language-model records into the lookup
//! structures a billing or routing layer needs: alias resolution, per-token
//! pricing (including legacy spellings of model ids) and plan eligibility.
//!
//! ```rust,ignore
//! use tierwise_core::{Registry, embedded_catalog, config::RegistryConfig};
//!
//! let config = RegistryConfig::default();
//! let catalog = embedded_catalog(&config.currency)?;
//! let registry = Registry::build(catalog, &config.plans)?;
//!
//! let model = registry.resolve_alias("deepseek-chat")?;
//! let price = registry.price_of(model)?;
//! let allowed = registry.models_for_plan("free")?;
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod registry;

pub use catalog::{
    CatalogDocument, Currency, ModelCatalog, ModelRecord, ModelSpec, PricingSpec, Tier,
    TokenPrice, embedded_catalog, load_catalog_from_file,
};
pub use config::{CNY_TO_USD, CurrencyConfig, LoggingConfig, PlanConfig, RegistryConfig};
pub use error::{RegistryError, RegistryResult, ResourceType};
pub use registry::{
    LEGACY_RULES, LegacyRule, Registry, RegistryBuilder, RegistryIndexes, SharedRegistry,
    TierTable, default_registry, legacy_key_for,
};
