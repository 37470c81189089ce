//! CLI argument definitions using clap
//!
//! - tierwise models [--plan <id>] [--tier free|paid]
//! - tierwise resolve <name>
//! - tierwise price <key> [--input-tokens N --output-tokens M]
//! - tierwise plans | plan <id> | check <plan> <model>
//! - tierwise catalog validate|show|export

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tierwise_core::Tier;

/// Default configuration file name looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "tierwise.toml";

#[derive(Parser, Debug)]
#[command(name = "tierwise")]
#[command(about = "Tierwise - model registry, pricing and plan eligibility")]
#[command(
    long_about = r#"Tierwise - model registry, pricing and plan eligibility

USAGE:
  tierwise models --plan free        # Models a plan may use
  tierwise resolve deepseek-chat     # Alias -> canonical id
  tierwise price or:claude-sonnet-4  # Price per million tokens
  tierwise check tier_2_20 or:qwen3-235b-a22b:free
                                     # Exit code 1 when not allowed

CONFIGURATION:
  tierwise.toml in the working directory, else ~/.tierwise/config.toml.
  TIERWISE_CATALOG, TIERWISE_CNY_TO_USD, TIERWISE_PAID_PLANS,
  TIERWISE_LOG_LEVEL and TIERWISE_LOG_FORMAT override file settings."#
)]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    pub config_file: Option<PathBuf>,

    /// Catalog document to load instead of the configured one
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Enable verbose output and debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// List catalog models
    Models {
        /// Only models available to this plan
        #[arg(long)]
        plan: Option<String>,

        /// Only models offered at this tier (free or paid)
        #[arg(long, value_parser = parse_tier)]
        tier: Option<Tier>,

        /// Only models from this provider
        #[arg(long)]
        provider: Option<String>,
    },

    /// Resolve an alias (or canonical id) to its canonical id
    Resolve {
        /// Alias or canonical id
        name: String,
    },

    /// Show pricing for a model and optionally the cost of a call
    Price {
        /// Canonical id, legacy key or alias
        key: String,

        /// Only accept exact pricing keys (no alias fallback)
        #[arg(long)]
        exact: bool,

        /// Input tokens to price
        #[arg(long, default_value_t = 0)]
        input_tokens: u64,

        /// Output tokens to price
        #[arg(long, default_value_t = 0)]
        output_tokens: u64,
    },

    /// List configured plans
    Plans,

    /// List the models a plan may use
    Plan {
        /// Plan id (e.g. free, tier_2_20)
        plan_id: String,
    },

    /// Check whether a plan may use a model
    Check {
        /// Plan id
        plan_id: String,

        /// Canonical id or alias
        model: String,
    },

    /// Inspect the model catalog
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum CatalogAction {
    /// Validate a catalog document and the registry built from it
    Validate {
        /// Catalog file (defaults to the configured catalog)
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Show every record with its derived pricing keys
    Show,

    /// Write the catalog as a document with USD prices
    Export {
        #[arg(long, value_enum, default_value = "toml")]
        format: ExportFormat,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Toml,
    Yaml,
}

fn parse_tier(s: &str) -> Result<Tier, String> {
    Tier::parse(s).ok_or_else(|| format!("unknown tier '{}', expected free or paid", s))
}
