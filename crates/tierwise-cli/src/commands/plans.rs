//! Plan listing commands

use crate::console::CliConsole;
use anyhow::Result;
use colored::*;
use tierwise_core::Registry;

/// List configured plans with their pool sizes
pub fn list(registry: &Registry, console: &CliConsole) -> Result<()> {
    let tiers = registry.tier_table();
    console.print_header("Plans");

    for plan_id in tiers.plan_ids() {
        let kind = if tiers.is_paid_plan(plan_id) {
            "paid".yellow()
        } else {
            "free".green()
        };
        let count = registry.models_for_plan(plan_id)?.len();
        println!("  {:<16} {:<6} {} model(s)", plan_id.bold(), kind, count);
    }
    Ok(())
}

/// List the models one plan may use
pub fn show(registry: &Registry, plan_id: &str, console: &CliConsole) -> Result<()> {
    let models = registry.models_for_plan(plan_id)?;
    console.print_header(&format!("Plan {}", plan_id));
    console.info(&format!("{} model(s)", models.len()));

    for model in models {
        println!("  {}", model);
    }
    Ok(())
}
