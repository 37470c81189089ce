//! Models listing command

use crate::console::{CliConsole, format_price};
use anyhow::Result;
use colored::*;
use tierwise_core::{ModelRecord, Registry, Tier};

/// Filters for `tierwise models`
#[derive(Debug, Default, Clone)]
pub struct ModelFilter {
    pub plan: Option<String>,
    pub tier: Option<Tier>,
    pub provider: Option<String>,
}

/// List catalog models matching the filter
pub fn list(registry: &Registry, filter: &ModelFilter, console: &CliConsole) -> Result<()> {
    let records = select(registry, filter)?;

    let title = match &filter.plan {
        Some(plan) => format!("Models for plan {}", plan),
        None => "Available Models".to_string(),
    };
    console.print_header(&title);

    if records.is_empty() {
        console.warn("No models match the given filters");
        return Ok(());
    }

    for record in &records {
        print_record(registry, record);
    }

    console.print_separator();
    println!("{} model(s)", records.len());
    Ok(())
}

/// Records matching the filter, in catalog order
pub fn select<'a>(registry: &'a Registry, filter: &ModelFilter) -> Result<Vec<&'a ModelRecord>> {
    let allowed = filter
        .plan
        .as_deref()
        .map(|plan| registry.models_for_plan(plan))
        .transpose()?;

    Ok(registry
        .catalog()
        .iter()
        .filter(|r| allowed.is_none_or(|ids| ids.contains(&r.canonical_id)))
        .filter(|r| filter.tier.is_none_or(|t| r.is_available_in(t)))
        .filter(|r| {
            filter
                .provider
                .as_deref()
                .is_none_or(|p| r.provider.eq_ignore_ascii_case(p))
        })
        .collect())
}

fn print_record(registry: &Registry, record: &ModelRecord) {
    let tiers: Vec<String> = record
        .tier_availability
        .iter()
        .map(ToString::to_string)
        .collect();

    println!(
        "  {} {}",
        record.canonical_id.green().bold(),
        format!("[{}]", tiers.join(", ")).dimmed()
    );
    if record.display_name != record.canonical_id {
        println!("    name:     {}", record.display_name);
    }
    println!("    provider: {}", record.provider.magenta());
    println!("    pricing:  {}", format_price(&record.pricing));

    let aliases = registry.aliases_of(&record.canonical_id);
    if !aliases.is_empty() {
        println!("    aliases:  {}", aliases.join(", ").cyan());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tierwise_core::RegistryConfig;

    fn registry() -> Registry {
        Registry::from_config(&RegistryConfig::default()).unwrap()
    }

    fn ids<'a>(records: &[&'a ModelRecord]) -> Vec<&'a str> {
        records.iter().map(|r| r.canonical_id.as_str()).collect()
    }

    #[test]
    fn test_no_filter_lists_whole_catalog() {
        let registry = registry();
        let records = select(&registry, &ModelFilter::default()).unwrap();
        assert_eq!(records.len(), registry.catalog().len());
    }

    #[test]
    fn test_free_plan_filter() {
        let registry = registry();
        let filter = ModelFilter {
            plan: Some("free".to_string()),
            ..ModelFilter::default()
        };
        let records = select(&registry, &filter).unwrap();
        assert_eq!(ids(&records), registry.free_tier_models());
    }

    #[test]
    fn test_paid_tier_excludes_free_only_models() {
        let registry = registry();
        let filter = ModelFilter {
            tier: Some(Tier::Paid),
            ..ModelFilter::default()
        };
        let records = select(&registry, &filter).unwrap();
        assert!(
            !ids(&records).contains(&"openrouter/qwen/qwen3-235b-a22b:free"),
            "free-only model listed under paid tier"
        );
        assert_eq!(records.len(), registry.paid_tier_models().len());
    }

    #[test]
    fn test_provider_filter() {
        let registry = registry();
        let filter = ModelFilter {
            provider: Some("DeepSeek".to_string()),
            ..ModelFilter::default()
        };
        let records = select(&registry, &filter).unwrap();
        assert!(!records.is_empty());
        assert!(records.iter().all(|r| r.provider == "deepseek"));
    }

    #[test]
    fn test_unknown_plan_is_error() {
        let registry = registry();
        let filter = ModelFilter {
            plan: Some("tier_99".to_string()),
            ..ModelFilter::default()
        };
        assert!(select(&registry, &filter).is_err());
    }
}
