//! Immutable registry and its lookup API

use super::builder::{RegistryBuilder, RegistryIndexes};
use super::tier_table::TierTable;
use crate::catalog::{ModelCatalog, TokenPrice, embedded_catalog, load_catalog_from_file};
use crate::config::{PlanConfig, RegistryConfig};
use crate::error::{RegistryError, RegistryResult, ResourceType};
use std::collections::HashMap;
use tracing::info;

/// Everything derived from one catalog, built once and never mutated
#[derive(Debug, Clone)]
pub struct Registry {
    catalog: ModelCatalog,
    aliases: HashMap<String, String>,
    pricing: HashMap<String, TokenPrice>,
    tiers: TierTable,
}

impl Registry {
    /// Derive indexes from the catalog and assemble the tier table
    pub fn build(catalog: ModelCatalog, plans: &PlanConfig) -> RegistryResult<Self> {
        let RegistryIndexes {
            free_tier,
            paid_tier,
            aliases,
            pricing,
        } = RegistryBuilder::build(&catalog)?;
        let tiers = TierTable::assemble(free_tier, paid_tier, plans)?;

        info!(
            models = catalog.len(),
            aliases = aliases.len(),
            pricing_keys = pricing.len(),
            free = tiers.free_models().len(),
            paid = tiers.paid_models().len(),
            plans = plans.paid_plans.len() + 1,
            "Built model registry"
        );

        Ok(Self {
            catalog,
            aliases,
            pricing,
            tiers,
        })
    }

    /// Load the configured catalog (or the embedded one) and build
    pub fn from_config(config: &RegistryConfig) -> RegistryResult<Self> {
        config.validate()?;
        let catalog = match &config.catalog_path {
            Some(path) => load_catalog_from_file(path, &config.currency)?,
            None => embedded_catalog(&config.currency)?,
        };
        Self::build(catalog, &config.plans)
    }

    /// Canonical id an alias points to
    pub fn resolve_alias(&self, name: &str) -> RegistryResult<&str> {
        self.aliases
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| RegistryError::not_found(name, ResourceType::Alias))
    }

    /// Price stored under a canonical id or legacy key
    pub fn price_of(&self, lookup_key: &str) -> RegistryResult<TokenPrice> {
        self.pricing
            .get(lookup_key)
            .copied()
            .ok_or_else(|| RegistryError::not_found(lookup_key, ResourceType::Pricing))
    }

    /// Models available to a plan, in catalog order
    pub fn models_for_plan(&self, plan_id: &str) -> RegistryResult<&[String]> {
        self.tiers.models_for_plan(plan_id)
    }

    /// Canonical id for a canonical id or alias
    pub fn canonicalize<'a>(&'a self, name: &'a str) -> RegistryResult<&'a str> {
        if self.catalog.contains(name) {
            return Ok(name);
        }
        self.aliases
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| RegistryError::not_found(name, ResourceType::Model))
    }

    /// Price for a pricing key, falling back to alias resolution
    pub fn price_for_model(&self, name: &str) -> RegistryResult<TokenPrice> {
        if let Some(price) = self.pricing.get(name) {
            return Ok(*price);
        }
        match self.aliases.get(name) {
            Some(canonical_id) => self.price_of(canonical_id),
            None => Err(RegistryError::not_found(name, ResourceType::Pricing)),
        }
    }

    /// USD cost of a call
    pub fn cost_of(&self, name: &str, input_tokens: u64, output_tokens: u64) -> RegistryResult<f64> {
        self.price_for_model(name)
            .map(|price| price.calculate(input_tokens, output_tokens))
    }

    /// Whether a plan may use a model (canonical id or alias)
    ///
    /// Unknown plans are an error; names that resolve to nothing are simply
    /// not allowed.
    pub fn is_model_allowed(&self, plan_id: &str, name: &str) -> RegistryResult<bool> {
        let models = self.models_for_plan(plan_id)?;
        Ok(match self.canonicalize(name) {
            Ok(canonical_id) => models.iter().any(|m| m == canonical_id),
            Err(_) => false,
        })
    }

    pub fn catalog(&self) -> &ModelCatalog {
        &self.catalog
    }

    pub fn tier_table(&self) -> &TierTable {
        &self.tiers
    }

    pub fn free_tier_models(&self) -> &[String] {
        self.tiers.free_models()
    }

    pub fn paid_tier_models(&self) -> &[String] {
        self.tiers.paid_models()
    }

    /// All pricing keys, sorted
    pub fn pricing_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.pricing.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// Aliases pointing at a canonical id, in catalog order
    pub fn aliases_of(&self, canonical_id: &str) -> &[String] {
        self.catalog
            .get(canonical_id)
            .map(|r| r.aliases.as_slice())
            .unwrap_or(&[])
    }

    pub fn alias_count(&self) -> usize {
        self.aliases.len()
    }
}
