//! Configuration for Tierwise
//!
//! Static settings that shape the registry: where the catalog comes from,
//! the currency conversion constant applied while loading it, which plan ids
//! exist, and how the embedding process should log.

pub(crate) mod file_loader;
mod logging_config;
mod model;
pub mod validation;

pub use file_loader::load_config_from_file;
pub use logging_config::{LOG_FORMATS, LOG_LEVELS, LoggingConfig};
pub use model::{
    CNY_TO_USD, CurrencyConfig, DEFAULT_PAID_PLANS, FREE_PLAN_ID, PlanConfig, RegistryConfig,
};
pub use validation::ConfigValidator;
