//! Configuration validation

use super::model::{CurrencyConfig, PlanConfig, RegistryConfig};
use crate::error::{RegistryError, RegistryResult};
use std::collections::HashSet;

/// Configuration validator
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration
    pub fn validate(config: &RegistryConfig) -> RegistryResult<()> {
        Self::validate_currency(&config.currency)?;
        Self::validate_plans(&config.plans)?;
        Ok(())
    }

    /// Conversion rates must be usable multipliers
    pub fn validate_currency(currency: &CurrencyConfig) -> RegistryResult<()> {
        if !currency.cny_to_usd.is_finite() || currency.cny_to_usd <= 0.0 {
            return Err(RegistryError::config(format!(
                "cny_to_usd must be a positive number, got {}",
                currency.cny_to_usd
            )));
        }
        Ok(())
    }

    /// Plan ids must be non-empty and distinct
    pub fn validate_plans(plans: &PlanConfig) -> RegistryResult<()> {
        if plans.free_plan.trim().is_empty() {
            return Err(RegistryError::config("Free plan id cannot be empty"));
        }

        let mut seen = HashSet::new();
        for plan in &plans.paid_plans {
            if plan.trim().is_empty() {
                return Err(RegistryError::config("Paid plan id cannot be empty"));
            }
            if *plan == plans.free_plan {
                return Err(RegistryError::config(format!(
                    "Paid plan '{}' collides with the free plan id",
                    plan
                )));
            }
            if !seen.insert(plan.as_str()) {
                return Err(RegistryError::config(format!(
                    "Paid plan '{}' is listed more than once",
                    plan
                )));
            }
        }

        Ok(())
    }
}
