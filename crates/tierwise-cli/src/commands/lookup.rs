//! Single-model lookups: resolve, price and check

use crate::console::{CliConsole, format_price, format_usd};
use anyhow::Result;
use colored::*;
use tierwise_core::{Registry, TokenPrice};

/// Print the canonical id behind a name
pub fn resolve(registry: &Registry, name: &str) -> Result<()> {
    let canonical_id = registry.canonicalize(name)?;
    println!("{}", canonical_id);
    Ok(())
}

/// Price for a key, with exact lookups skipping the alias fallback
pub fn lookup_price(registry: &Registry, key: &str, exact: bool) -> Result<TokenPrice> {
    let price = if exact {
        registry.price_of(key)?
    } else {
        registry.price_for_model(key)?
    };
    Ok(price)
}

/// Show the price of a model and the cost of a call
pub fn price(
    registry: &Registry,
    key: &str,
    exact: bool,
    input_tokens: u64,
    output_tokens: u64,
    console: &CliConsole,
) -> Result<()> {
    let price = lookup_price(registry, key, exact)?;

    console.print_header(key);
    println!("  {}", format_price(&price));

    if input_tokens > 0 || output_tokens > 0 {
        let cost = price.calculate(input_tokens, output_tokens);
        println!(
            "  {} input + {} output tokens = {}",
            input_tokens,
            output_tokens,
            format_usd(cost).bold()
        );
    }
    Ok(())
}

/// Report whether a plan may use a model; returns the verdict
pub fn check(registry: &Registry, plan_id: &str, model: &str, console: &CliConsole) -> Result<bool> {
    let allowed = registry.is_model_allowed(plan_id, model)?;
    if allowed {
        console.success(&format!("{} may use {}", plan_id, model));
    } else {
        console.warn(&format!("{} may not use {}", plan_id, model));
    }
    Ok(allowed)
}
