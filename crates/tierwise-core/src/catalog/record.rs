//! Model records and their authoring form

use super::pricing::{PricingSpec, TokenPrice};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Subscription level a model can be offered at
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Free,
    Paid,
}

impl Tier {
    /// Parse from string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "free" => Some(Self::Free),
            "paid" => Some(Self::Paid),
            _ => None,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tier::Free => write!(f, "free"),
            Tier::Paid => write!(f, "paid"),
        }
    }
}

/// A validated catalog entry with USD pricing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelRecord {
    /// Unique model identifier (e.g. "openrouter/deepseek/deepseek-chat-v3-0324:free")
    pub canonical_id: String,
    /// Secondary names, in authoring order
    pub aliases: Vec<String>,
    /// USD price per million tokens
    pub pricing: TokenPrice,
    /// Tiers the model is offered at
    pub tier_availability: BTreeSet<Tier>,
    /// Display name
    pub display_name: String,
    /// Provider name, the first path segment of the id unless set
    pub provider: String,
}

impl ModelRecord {
    /// Create a new model record
    pub fn new<I>(canonical_id: impl Into<String>, pricing: TokenPrice, tiers: I) -> Self
    where
        I: IntoIterator<Item = Tier>,
    {
        let canonical_id = canonical_id.into();
        Self {
            display_name: canonical_id.clone(),
            provider: provider_of(&canonical_id).to_string(),
            canonical_id,
            aliases: Vec::new(),
            pricing,
            tier_availability: tiers.into_iter().collect(),
        }
    }

    /// Add an alias
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    /// Set display name
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = name.into();
        self
    }

    /// Set provider
    pub fn with_provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = provider.into();
        self
    }

    /// Whether the model is offered at `tier`
    pub fn is_available_in(&self, tier: Tier) -> bool {
        self.tier_availability.contains(&tier)
    }
}

/// First path segment of a model id, or "unknown" for bare ids
fn provider_of(canonical_id: &str) -> &str {
    canonical_id
        .split_once('/')
        .map(|(provider, _)| provider)
        .unwrap_or("unknown")
}

/// One model as written in a catalog document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSpec {
    /// Canonical model identifier
    pub id: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
    pub tier_availability: Vec<Tier>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    // Kept last so TOML output writes it as a trailing sub-table.
    pub pricing: PricingSpec,
}

impl From<&ModelRecord> for ModelSpec {
    fn from(record: &ModelRecord) -> Self {
        Self {
            id: record.canonical_id.clone(),
            aliases: record.aliases.clone(),
            tier_availability: record.tier_availability.iter().copied().collect(),
            display_name: (record.display_name != record.canonical_id)
                .then(|| record.display_name.clone()),
            provider: (record.provider != provider_of(&record.canonical_id))
                .then(|| record.provider.clone()),
            pricing: record.pricing.into(),
        }
    }
}

/// A whole catalog document: an ordered list of models
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogDocument {
    #[serde(default)]
    pub models: Vec<ModelSpec>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_parse() {
        assert_eq!(Tier::parse("free"), Some(Tier::Free));
        assert_eq!(Tier::parse("PAID"), Some(Tier::Paid));
        assert_eq!(Tier::parse("gold"), None);
    }

    #[test]
    fn test_record_defaults() {
        let record = ModelRecord::new("openai/vllm/qwen3-8b", TokenPrice::free(), [Tier::Free])
            .with_alias("vllm:Qwen3-8B");

        assert_eq!(record.provider, "openai");
        assert_eq!(record.display_name, "openai/vllm/qwen3-8b");
        assert_eq!(record.aliases, vec!["vllm:Qwen3-8B"]);
        assert!(record.is_available_in(Tier::Free));
        assert!(!record.is_available_in(Tier::Paid));
    }

    #[test]
    fn test_metadata_overrides_survive_export() {
        let record = ModelRecord::new("openai/ktransformers", TokenPrice::free(), [Tier::Free])
            .with_display_name("KTransformers (local)")
            .with_provider("local");

        assert_eq!(record.display_name, "KTransformers (local)");
        assert_eq!(record.provider, "local");

        let spec = ModelSpec::from(&record);
        assert_eq!(spec.display_name.as_deref(), Some("KTransformers (local)"));
        assert_eq!(spec.provider.as_deref(), Some("local"));
    }

    #[test]
    fn test_bare_id_provider() {
        let record = ModelRecord::new("gpt-4o", TokenPrice::new(2.5, 10.0), [Tier::Paid]);
        assert_eq!(record.provider, "unknown");
    }

    #[test]
    fn test_spec_from_record_omits_derived_fields() {
        let record = ModelRecord::new("xai/grok-4", TokenPrice::new(5.0, 15.0), [Tier::Paid])
            .with_alias("grok-4");
        let spec = ModelSpec::from(&record);

        assert_eq!(spec.id, "xai/grok-4");
        assert_eq!(spec.tier_availability, vec![Tier::Paid]);
        assert!(spec.display_name.is_none());
        assert!(spec.provider.is_none());
        assert_eq!(spec.pricing, PricingSpec::usd(5.0, 15.0));
    }
}
