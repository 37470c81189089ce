//! Registry builder: one pass from catalog to derived indexes

use super::legacy::legacy_key_for;
use crate::catalog::{ModelCatalog, Tier, TokenPrice};
use crate::error::{RegistryError, RegistryResult};
use std::collections::HashMap;
use tracing::debug;

/// The four indexes derived from a catalog
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistryIndexes {
    /// Canonical ids offered on the free tier, catalog order
    pub free_tier: Vec<String>,
    /// Canonical ids offered on the paid tier, catalog order
    pub paid_tier: Vec<String>,
    /// Alias → canonical id
    pub aliases: HashMap<String, String>,
    /// Canonical id or legacy key → price
    pub pricing: HashMap<String, TokenPrice>,
}

/// Derives [`RegistryIndexes`] from a catalog
pub struct RegistryBuilder;

impl RegistryBuilder {
    /// Walk the catalog once, in order
    pub fn build(catalog: &ModelCatalog) -> RegistryResult<RegistryIndexes> {
        let mut indexes = RegistryIndexes::default();

        for record in catalog.iter() {
            let id = &record.canonical_id;

            if record.is_available_in(Tier::Free) {
                indexes.free_tier.push(id.clone());
            }
            if record.is_available_in(Tier::Paid) {
                indexes.paid_tier.push(id.clone());
            }

            for alias in &record.aliases {
                match indexes.aliases.get(alias) {
                    Some(existing) if existing != id => {
                        return Err(RegistryError::config_with_context(
                            format!("Alias '{}' maps to both '{}' and '{}'", alias, existing, id),
                            format!("model '{}'", id),
                        ));
                    }
                    Some(_) => {}
                    None => {
                        indexes.aliases.insert(alias.clone(), id.clone());
                    }
                }
            }

            insert_price(&mut indexes.pricing, id.clone(), record.pricing);

            if let Some(legacy_key) = legacy_key_for(id) {
                insert_price(&mut indexes.pricing, legacy_key, record.pricing);
            }
        }

        Ok(indexes)
    }
}

// Last write wins on key collisions.
fn insert_price(pricing: &mut HashMap<String, TokenPrice>, key: String, price: TokenPrice) {
    if let Some(previous) = pricing.get(&key) {
        debug!(
            key = %key,
            previous = %previous,
            replacement = %price,
            "Pricing key registered twice, keeping the later entry"
        );
    }
    pricing.insert(key, price);
}
