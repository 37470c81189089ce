//! Configuration data structures

use super::logging_config::LoggingConfig;
use crate::catalog::Currency;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Yuan to US dollar rate used when authoring CNY-denominated prices
pub const CNY_TO_USD: f64 = 0.14;

/// Plan id that always maps to the free-tier list
pub const FREE_PLAN_ID: &str = "free";

/// Paid plans shipped by default, all sharing the paid-tier pool
pub const DEFAULT_PAID_PLANS: &[&str] = &[
    "tier_2_20",
    "tier_6_50",
    "tier_12_100",
    "tier_25_200",
    "tier_50_400",
    "tier_125_800",
    "tier_200_1000",
];

/// Top-level registry configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Catalog document to load; the embedded catalog is used when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,
    /// Currency conversion applied while loading the catalog
    #[serde(default)]
    pub currency: CurrencyConfig,
    /// Recognized plan ids
    #[serde(default)]
    pub plans: PlanConfig,
    /// Logging settings for the embedding process
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl RegistryConfig {
    /// Validate the whole configuration
    pub fn validate(&self) -> crate::error::RegistryResult<()> {
        super::validation::ConfigValidator::validate(self)
    }
}

/// Currency conversion constants
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurrencyConfig {
    /// Multiplier from CNY to USD
    #[serde(default = "default_cny_to_usd")]
    pub cny_to_usd: f64,
}

fn default_cny_to_usd() -> f64 {
    CNY_TO_USD
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self {
            cny_to_usd: CNY_TO_USD,
        }
    }
}

impl CurrencyConfig {
    /// Multiplier converting an amount in `currency` to USD
    pub fn rate(&self, currency: Currency) -> f64 {
        match currency {
            Currency::Usd => 1.0,
            Currency::Cny => self.cny_to_usd,
        }
    }
}

/// Plan identifiers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanConfig {
    /// Plan id mapped to the free-tier list
    #[serde(default = "default_free_plan")]
    pub free_plan: String,
    /// Plan ids mapped to the shared paid-tier list, in display order
    #[serde(default = "default_paid_plans")]
    pub paid_plans: Vec<String>,
}

fn default_free_plan() -> String {
    FREE_PLAN_ID.to_string()
}

fn default_paid_plans() -> Vec<String> {
    DEFAULT_PAID_PLANS.iter().map(|p| p.to_string()).collect()
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            free_plan: default_free_plan(),
            paid_plans: default_paid_plans(),
        }
    }
}

impl PlanConfig {
    /// Create a plan config with the default free plan id and the given paid plans
    pub fn with_paid_plans<I, S>(paid_plans: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            free_plan: default_free_plan(),
            paid_plans: paid_plans.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether a plan id is recognized
    pub fn is_known(&self, plan_id: &str) -> bool {
        plan_id == self.free_plan || self.paid_plans.iter().any(|p| p == plan_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_plans() {
        let plans = PlanConfig::default();
        assert_eq!(plans.free_plan, "free");
        assert_eq!(plans.paid_plans.len(), 7);
        assert!(plans.is_known("tier_2_20"));
        assert!(plans.is_known("tier_200_1000"));
        assert!(!plans.is_known("tier_1_1"));
    }

    #[test]
    fn test_currency_rate() {
        let currency = CurrencyConfig::default();
        assert_eq!(currency.rate(Currency::Usd), 1.0);
        assert!((currency.rate(Currency::Cny) - 0.14).abs() < 1e-12);
    }

    #[test]
    fn test_partial_document_uses_defaults() {
        let config: RegistryConfig = toml::from_str("[currency]\ncny_to_usd = 0.15\n").unwrap();
        assert!((config.currency.cny_to_usd - 0.15).abs() < 1e-12);
        assert_eq!(config.plans, PlanConfig::default());
        assert!(config.catalog_path.is_none());
    }
}
