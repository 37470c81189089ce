//! Registry derivation and lookup
//!
//! A [`ModelCatalog`](crate::catalog::ModelCatalog) goes through
//! [`RegistryBuilder`] once, producing the free and paid tier lists, the
//! alias map and the pricing index (including [legacy keys](LEGACY_RULES)).
//! [`TierTable`] then maps plan ids onto the tier lists, and [`Registry`]
//! bundles the lot behind a read-only lookup API.

mod builder;
mod legacy;
#[allow(clippy::module_inception)] // registry module in registry directory is intentional
mod registry;
mod shared;
mod tier_table;

pub use builder::{RegistryBuilder, RegistryIndexes};
pub use legacy::{LEGACY_RULES, LegacyRule, LegacyTransform, legacy_key_for};
pub use registry::Registry;
pub use shared::{SharedRegistry, default_registry};
pub use tier_table::TierTable;
