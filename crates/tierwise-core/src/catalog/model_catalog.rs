//! Validated, read-only model catalog

use super::pricing::TokenPrice;
use super::record::{CatalogDocument, ModelRecord, ModelSpec};
use crate::config::CurrencyConfig;
use crate::config::file_loader::read_document;
use crate::error::{RegistryError, RegistryResult};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use tracing::{debug, warn};

/// Ordered, validated collection of model records
///
/// Construction fails fast: a catalog that exists has unique canonical ids,
/// collision-free aliases, sane prices and at least one tier per record.
/// No alias shadows another record's canonical id.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelCatalog {
    records: Vec<ModelRecord>,
    /// Canonical id → position in `records`
    index: HashMap<String, usize>,
}

impl ModelCatalog {
    /// Validate records and build a catalog
    pub fn new(records: Vec<ModelRecord>) -> RegistryResult<Self> {
        let mut index: HashMap<String, usize> = HashMap::with_capacity(records.len());
        for (position, record) in records.iter().enumerate() {
            if record.canonical_id.trim().is_empty() {
                return Err(RegistryError::config("Model id cannot be empty"));
            }
            if index.insert(record.canonical_id.clone(), position).is_some() {
                return Err(RegistryError::config_with_context(
                    format!("Duplicate canonical id '{}'", record.canonical_id),
                    format!("model '{}'", record.canonical_id),
                ));
            }
        }

        let mut alias_owners: HashMap<String, String> = HashMap::new();
        let mut validated = Vec::with_capacity(records.len());

        for mut record in records {
            let context = format!("model '{}'", record.canonical_id);

            if record.tier_availability.is_empty() {
                return Err(RegistryError::config_with_context(
                    "tier_availability cannot be empty",
                    context,
                ));
            }
            record
                .pricing
                .validate()
                .map_err(|e| e.with_context(context.clone()))?;

            let mut own_aliases = HashSet::new();
            record.aliases.retain(|alias| own_aliases.insert(alias.clone()));

            for alias in &record.aliases {
                if alias.trim().is_empty() {
                    return Err(RegistryError::config_with_context(
                        "Alias cannot be empty",
                        context,
                    ));
                }
                if *alias != record.canonical_id && index.contains_key(alias) {
                    return Err(RegistryError::config_with_context(
                        format!("Alias '{}' shadows the canonical id of another model", alias),
                        context,
                    ));
                }
                if let Some(owner) = alias_owners.get(alias) {
                    warn!(
                        alias = %alias,
                        existing = %owner,
                        conflicting = %record.canonical_id,
                        "duplicate alias detected"
                    );
                    return Err(RegistryError::config_with_context(
                        format!(
                            "Alias '{}' maps to both '{}' and '{}'",
                            alias, owner, record.canonical_id
                        ),
                        context,
                    ));
                }
                alias_owners.insert(alias.clone(), record.canonical_id.clone());
            }

            validated.push(record);
        }

        debug!(models = validated.len(), "Validated model catalog");
        Ok(Self {
            records: validated,
            index,
        })
    }

    /// Skip validation; lets builder tests feed records a real catalog rejects
    #[cfg(test)]
    pub(crate) fn unchecked(records: Vec<ModelRecord>) -> Self {
        let index = records
            .iter()
            .enumerate()
            .map(|(i, r)| (r.canonical_id.clone(), i))
            .collect();
        Self { records, index }
    }

    /// Convert an authored document, applying currency conversion once
    pub fn from_document(
        document: CatalogDocument,
        currency: &CurrencyConfig,
    ) -> RegistryResult<Self> {
        let records = document
            .models
            .into_iter()
            .map(|spec| record_from_spec(spec, currency))
            .collect::<RegistryResult<Vec<_>>>()?;
        Self::new(records)
    }

    /// All records, in catalog order
    pub fn all_records(&self) -> &[ModelRecord] {
        &self.records
    }

    /// Iterate over records in catalog order
    pub fn iter(&self) -> impl Iterator<Item = &ModelRecord> {
        self.records.iter()
    }

    /// Look up a record by canonical id
    pub fn get(&self, canonical_id: &str) -> Option<&ModelRecord> {
        self.index.get(canonical_id).map(|&i| &self.records[i])
    }

    /// Whether a canonical id is in the catalog
    pub fn contains(&self, canonical_id: &str) -> bool {
        self.index.contains_key(canonical_id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records grouped under a provider (case-insensitive)
    pub fn by_provider<'a>(&'a self, provider: &'a str) -> impl Iterator<Item = &'a ModelRecord> {
        self.records
            .iter()
            .filter(move |r| r.provider.eq_ignore_ascii_case(provider))
    }

    /// Authoring form of this catalog, prices in USD per million tokens
    pub fn to_document(&self) -> CatalogDocument {
        CatalogDocument {
            models: self.records.iter().map(ModelSpec::from).collect(),
        }
    }
}

fn record_from_spec(spec: ModelSpec, currency: &CurrencyConfig) -> RegistryResult<ModelRecord> {
    let pricing: TokenPrice = spec
        .pricing
        .to_token_price(currency)
        .map_err(|e| e.with_context(format!("model '{}'", spec.id)))?;

    let mut record = ModelRecord::new(spec.id, pricing, spec.tier_availability);
    for alias in spec.aliases {
        record = record.with_alias(alias);
    }
    if let Some(name) = spec.display_name {
        record = record.with_display_name(name);
    }
    if let Some(provider) = spec.provider {
        record = record.with_provider(provider);
    }
    Ok(record)
}

/// Load a catalog document from a file
///
/// Supports JSON, TOML, and YAML formats based on file extension. Unlike
/// configuration, a missing catalog file is an error.
pub fn load_catalog_from_file(
    path: &Path,
    currency: &CurrencyConfig,
) -> RegistryResult<ModelCatalog> {
    let document: CatalogDocument = read_document(path)?;
    debug!(
        path = %path.display(),
        models = document.models.len(),
        "Loaded catalog document"
    );
    ModelCatalog::from_document(document, currency)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Currency, PricingSpec, Tier};
    use std::fs;
    use tempfile::TempDir;

    fn record(id: &str, tiers: &[Tier]) -> ModelRecord {
        ModelRecord::new(id, TokenPrice::new(1.0, 2.0), tiers.iter().copied())
    }

    #[test]
    fn test_catalog_preserves_order() {
        let catalog = ModelCatalog::new(vec![
            record("b/model", &[Tier::Paid]),
            record("a/model", &[Tier::Free]),
        ])
        .unwrap();

        let ids: Vec<_> = catalog.iter().map(|r| r.canonical_id.as_str()).collect();
        assert_eq!(ids, vec!["b/model", "a/model"]);
        assert_eq!(catalog.len(), 2);
        assert!(catalog.contains("a/model"));
        assert!(catalog.get("c/model").is_none());
    }

    #[test]
    fn test_duplicate_canonical_id_rejected() {
        let err = ModelCatalog::new(vec![
            record("openai/gpt-4o", &[Tier::Paid]),
            record("openai/gpt-4o", &[Tier::Free]),
        ])
        .unwrap_err();

        assert!(err.is_fatal());
        assert!(err.to_string().contains("Duplicate canonical id"));
    }

    #[test]
    fn test_alias_collision_rejected() {
        let err = ModelCatalog::new(vec![
            record("deepseek/deepseek-chat", &[Tier::Free]).with_alias("deepseek"),
            record("openrouter/deepseek/deepseek-chat", &[Tier::Free]).with_alias("deepseek"),
        ])
        .unwrap_err();

        assert!(matches!(err, RegistryError::Config { .. }));
        assert!(err.to_string().contains("Alias 'deepseek'"));
    }

    #[test]
    fn test_alias_shadowing_other_canonical_id_rejected() {
        let err = ModelCatalog::new(vec![
            record("a/one", &[Tier::Free]).with_alias("b/two"),
            ModelRecord::new("b/two", TokenPrice::new(9.0, 9.0), [Tier::Paid]),
        ])
        .unwrap_err();

        assert!(matches!(err, RegistryError::Config { .. }));
        assert_eq!(err.context(), Some("model 'a/one'"));
        assert!(err.to_string().contains("Alias 'b/two'"));
    }

    #[test]
    fn test_alias_equal_to_own_id_allowed() {
        let catalog =
            ModelCatalog::new(vec![record("a/one", &[Tier::Free]).with_alias("a/one")]).unwrap();
        assert_eq!(catalog.all_records()[0].aliases, vec!["a/one"]);
    }

    #[test]
    fn test_empty_alias_rejected() {
        let err = ModelCatalog::new(vec![record("a/b", &[Tier::Free]).with_alias("")]).unwrap_err();

        assert!(matches!(err, RegistryError::Config { .. }));
        assert!(err.to_string().contains("Alias cannot be empty"));
        assert_eq!(err.context(), Some("model 'a/b'"));
    }

    #[test]
    fn test_lookup_by_id_after_dedup() {
        let catalog = ModelCatalog::new(vec![
            record("x/first", &[Tier::Paid]),
            record("x/second", &[Tier::Free]).with_alias("second"),
        ])
        .unwrap();

        assert_eq!(catalog.get("x/second").unwrap().aliases, vec!["second"]);
        assert_eq!(catalog.get("x/first").unwrap().canonical_id, "x/first");
        assert!(!catalog.contains("second"));
    }

    #[test]
    fn test_repeated_alias_within_record_collapses() {
        let catalog = ModelCatalog::new(vec![
            record("openai/gpt-4.1", &[Tier::Paid])
                .with_alias("gpt-4.1")
                .with_alias("gpt-4.1"),
        ])
        .unwrap();

        assert_eq!(catalog.all_records()[0].aliases, vec!["gpt-4.1"]);
    }

    #[test]
    fn test_empty_tiers_rejected() {
        let err = ModelCatalog::new(vec![record("openai/gpt-4o", &[])]).unwrap_err();
        assert!(err.to_string().contains("tier_availability"));
    }

    #[test]
    fn test_negative_price_rejected() {
        let bad = ModelRecord::new("openai/gpt-4o", TokenPrice::new(-1.0, 0.0), [Tier::Paid]);
        let err = ModelCatalog::new(vec![bad]).unwrap_err();
        assert_eq!(err.context(), Some("model 'openai/gpt-4o'"));
    }

    #[test]
    fn test_empty_id_rejected() {
        assert!(ModelCatalog::new(vec![record("  ", &[Tier::Free])]).is_err());
    }

    #[test]
    fn test_from_document_converts_currency() {
        let document = CatalogDocument {
            models: vec![ModelSpec {
                id: "openai/qwen3-32b".to_string(),
                aliases: vec!["qwen3-32b".to_string()],
                pricing: PricingSpec::usd(0.002, 0.02)
                    .in_currency(Currency::Cny)
                    .per_tokens(1_000),
                tier_availability: vec![Tier::Free, Tier::Paid],
                display_name: None,
                provider: None,
            }],
        };

        let catalog = ModelCatalog::from_document(document, &CurrencyConfig::default()).unwrap();
        let record = catalog.get("openai/qwen3-32b").unwrap();
        assert!((record.pricing.input_cost_per_million_tokens - 0.28).abs() < 1e-9);
        assert_eq!(record.provider, "openai");
    }

    #[test]
    fn test_from_document_keeps_metadata() {
        let document: CatalogDocument = toml::from_str(
            r#"
[[models]]
id = "openai/vllm/qwen3-8b"
aliases = ["vllm:Qwen3-8B"]
display_name = "Qwen3 8B (vLLM)"
provider = "vllm"
tier_availability = ["free"]
pricing = { input_cost = 0.0, output_cost = 0.0 }
"#,
        )
        .unwrap();

        let catalog = ModelCatalog::from_document(document, &CurrencyConfig::default()).unwrap();
        let record = catalog.get("openai/vllm/qwen3-8b").unwrap();
        assert_eq!(record.display_name, "Qwen3 8B (vLLM)");
        assert_eq!(record.provider, "vllm");
        assert_eq!(record.aliases, vec!["vllm:Qwen3-8B"]);
        assert_eq!(catalog.by_provider("vllm").count(), 1);
    }

    #[test]
    fn test_by_provider() {
        let catalog = ModelCatalog::new(vec![
            record("openai/gpt-4o", &[Tier::Paid]),
            record("anthropic/claude-3-7-sonnet-latest", &[Tier::Paid]),
            record("openai/gpt-4.1", &[Tier::Paid]),
        ])
        .unwrap();

        assert_eq!(catalog.by_provider("OpenAI").count(), 2);
        assert_eq!(catalog.by_provider("google").count(), 0);
    }

    #[test]
    fn test_load_catalog_from_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("models.yaml");
        let yaml = r#"
models:
  - id: gemini/gemini-2.5-pro
    aliases: [google/gemini-2.5-pro]
    pricing:
      input_cost_per_million_tokens: 1.25
      output_cost_per_million_tokens: 10.0
    tier_availability: [paid]
"#;
        fs::write(&path, yaml).unwrap();

        let catalog = load_catalog_from_file(&path, &CurrencyConfig::default()).unwrap();
        let record = catalog.get("gemini/gemini-2.5-pro").unwrap();
        assert_eq!(record.pricing, TokenPrice::new(1.25, 10.0));
        assert!(record.is_available_in(Tier::Paid));
    }

    #[test]
    fn test_load_missing_catalog_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = load_catalog_from_file(
            &temp_dir.path().join("absent.json"),
            &CurrencyConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, RegistryError::Io { .. }));
    }

    #[test]
    fn test_document_roundtrip_through_json() {
        let catalog = ModelCatalog::new(vec![
            record("xai/grok-4", &[Tier::Paid]).with_alias("grok-4"),
        ])
        .unwrap();

        let json = serde_json::to_string(&catalog.to_document()).unwrap();
        let document: CatalogDocument = serde_json::from_str(&json).unwrap();
        let reloaded = ModelCatalog::from_document(document, &CurrencyConfig::default()).unwrap();
        assert_eq!(reloaded, catalog);
    }
}
