//! Model catalog
//!
//! The catalog is the single source of truth the registry is derived from.
//!
//! # Features
//!
//! - **Authoring form**: [`CatalogDocument`] / [`ModelSpec`], a plain data
//!   document (TOML, YAML or JSON) with prices in any supported currency
//! - **Validated records**: [`ModelCatalog`] holds [`ModelRecord`]s with USD
//!   prices per million tokens, checked once at load time
//! - **Embedded default**: [`embedded_catalog`] parses the catalog shipped
//!   with the crate

mod embedded;
mod model_catalog;
mod pricing;
mod record;

pub use embedded::{DEFAULT_CATALOG_TOML, embedded_catalog};
pub use model_catalog::{ModelCatalog, load_catalog_from_file};
pub use pricing::{Currency, PricingSpec, TokenPrice};
pub use record::{CatalogDocument, ModelRecord, ModelSpec, Tier};
