//! Model pricing definitions
//!
//! [`TokenPrice`] is what the registry stores and hands out: USD per one
//! million tokens. [`PricingSpec`] is how a catalog document writes a price,
//! possibly in another currency or per another token count. The conversion
//! happens once, while the catalog loads, never at lookup time.

use crate::config::CurrencyConfig;
use crate::error::{RegistryError, RegistryResult};
use serde::{Deserialize, Serialize};
use std::fmt;

const TOKENS_PER_MILLION: u64 = 1_000_000;

/// Price per 1M tokens (USD)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TokenPrice {
    /// Price per 1M input tokens (USD)
    pub input_cost_per_million_tokens: f64,
    /// Price per 1M output tokens (USD)
    pub output_cost_per_million_tokens: f64,
}

impl TokenPrice {
    /// Create new token price
    pub const fn new(input: f64, output: f64) -> Self {
        Self {
            input_cost_per_million_tokens: input,
            output_cost_per_million_tokens: output,
        }
    }

    /// Price that charges nothing
    pub const fn free() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Whether both directions cost nothing
    pub fn is_free(&self) -> bool {
        self.input_cost_per_million_tokens == 0.0 && self.output_cost_per_million_tokens == 0.0
    }

    /// Calculate cost for given token counts
    pub fn calculate(&self, input_tokens: u64, output_tokens: u64) -> f64 {
        let input_cost = (input_tokens as f64 / 1_000_000.0) * self.input_cost_per_million_tokens;
        let output_cost =
            (output_tokens as f64 / 1_000_000.0) * self.output_cost_per_million_tokens;
        input_cost + output_cost
    }

    /// Reject negative, NaN or infinite prices
    pub fn validate(&self) -> RegistryResult<()> {
        for (label, value) in [
            ("input_cost_per_million_tokens", self.input_cost_per_million_tokens),
            ("output_cost_per_million_tokens", self.output_cost_per_million_tokens),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(RegistryError::config(format!(
                    "{} must be a finite non-negative number, got {}",
                    label, value
                )));
            }
        }
        Ok(())
    }
}

impl fmt::Display for TokenPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "${} in / ${} out per 1M tokens",
            self.input_cost_per_million_tokens, self.output_cost_per_million_tokens
        )
    }
}

/// Currency a catalog price is written in
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    #[serde(alias = "usd")]
    Usd,
    #[serde(alias = "cny", alias = "RMB")]
    Cny,
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Currency::Usd => write!(f, "USD"),
            Currency::Cny => write!(f, "CNY"),
        }
    }
}

/// Price as authored in a catalog document
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingSpec {
    /// Input price per `per_tokens` tokens, in `currency`
    #[serde(alias = "input_cost_per_million_tokens")]
    pub input_cost: f64,
    /// Output price per `per_tokens` tokens, in `currency`
    #[serde(alias = "output_cost_per_million_tokens")]
    pub output_cost: f64,
    #[serde(default)]
    pub currency: Currency,
    #[serde(default = "default_per_tokens")]
    pub per_tokens: u64,
}

fn default_per_tokens() -> u64 {
    TOKENS_PER_MILLION
}

impl PricingSpec {
    /// USD price per million tokens
    pub fn usd(input: f64, output: f64) -> Self {
        Self {
            input_cost: input,
            output_cost: output,
            currency: Currency::Usd,
            per_tokens: TOKENS_PER_MILLION,
        }
    }

    /// Set the currency the amounts are written in
    pub fn in_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// Set how many tokens the amounts are quoted for
    pub fn per_tokens(mut self, tokens: u64) -> Self {
        self.per_tokens = tokens;
        self
    }

    /// Convert to USD per million tokens
    pub fn to_token_price(&self, currency: &CurrencyConfig) -> RegistryResult<TokenPrice> {
        if self.per_tokens == 0 {
            return Err(RegistryError::config("per_tokens must be greater than zero"));
        }

        let rate = currency.rate(self.currency);
        if !rate.is_finite() || rate <= 0.0 {
            return Err(RegistryError::config(format!(
                "Conversion rate for {} must be positive, got {}",
                self.currency, rate
            )));
        }

        let scale = TOKENS_PER_MILLION as f64 / self.per_tokens as f64;
        let price = TokenPrice::new(
            self.input_cost * rate * scale,
            self.output_cost * rate * scale,
        );
        price.validate()?;
        Ok(price)
    }
}

impl From<TokenPrice> for PricingSpec {
    fn from(price: TokenPrice) -> Self {
        Self::usd(
            price.input_cost_per_million_tokens,
            price.output_cost_per_million_tokens,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_price_calculate() {
        let price = TokenPrice::new(3.0, 15.0);
        let cost = price.calculate(1_000_000, 1_000_000);
        assert!((cost - 18.0).abs() < 0.001);
    }

    #[test]
    fn test_token_price_small_usage() {
        let price = TokenPrice::new(3.0, 15.0);
        let cost = price.calculate(1000, 500);
        assert!((cost - 0.0105).abs() < 0.0001);
    }

    #[test]
    fn test_token_price_validation() {
        assert!(TokenPrice::new(0.0, 0.0).validate().is_ok());
        assert!(TokenPrice::new(-0.1, 1.0).validate().is_err());
        assert!(TokenPrice::new(1.0, f64::INFINITY).validate().is_err());
        assert!(TokenPrice::new(f64::NAN, 1.0).validate().is_err());
    }

    #[test]
    fn test_usd_spec_passes_through() {
        let price = PricingSpec::usd(3.0, 15.0)
            .to_token_price(&CurrencyConfig::default())
            .unwrap();
        assert_eq!(price, TokenPrice::new(3.0, 15.0));
    }

    #[test]
    fn test_cny_per_thousand_conversion() {
        let currency = CurrencyConfig { cny_to_usd: 0.14 };
        let price = PricingSpec::usd(0.002, 0.02)
            .in_currency(Currency::Cny)
            .per_tokens(1_000)
            .to_token_price(&currency)
            .unwrap();

        assert!((price.input_cost_per_million_tokens - 0.28).abs() < 1e-9);
        assert!((price.output_cost_per_million_tokens - 2.8).abs() < 1e-9);
        assert!((price.input_cost_per_million_tokens - 0.002 * 0.14 * 1000.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_per_tokens_rejected() {
        let err = PricingSpec::usd(1.0, 1.0)
            .per_tokens(0)
            .to_token_price(&CurrencyConfig::default())
            .unwrap_err();
        assert!(err.is_fatal());
    }

    #[test]
    fn test_negative_spec_rejected() {
        let result = PricingSpec::usd(-1.0, 1.0).to_token_price(&CurrencyConfig::default());
        assert!(result.is_err());
    }

    #[test]
    fn test_spec_accepts_long_field_names() {
        let spec: PricingSpec = serde_json::from_str(
            r#"{"input_cost_per_million_tokens": 1.25, "output_cost_per_million_tokens": 10.0}"#,
        )
        .unwrap();
        assert_eq!(spec, PricingSpec::usd(1.25, 10.0));
    }

    #[test]
    fn test_currency_parsing() {
        let spec: PricingSpec =
            toml::from_str("input_cost = 1.0\noutput_cost = 2.0\ncurrency = \"cny\"\n").unwrap();
        assert_eq!(spec.currency, Currency::Cny);
    }
}
