//! Swappable registry snapshots

use super::registry::Registry;
use crate::catalog::{ModelCatalog, embedded_catalog};
use crate::config::{PlanConfig, RegistryConfig};
use crate::error::RegistryResult;
use once_cell::sync::OnceCell;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{info, warn};

/// Holder of the current registry snapshot
///
/// Readers take an `Arc` to the snapshot and keep using it without locks.
/// A reload builds a whole new registry first and only then swaps the
/// pointer, so nobody ever sees a half-built registry.
#[derive(Debug)]
pub struct SharedRegistry {
    current: RwLock<Arc<Registry>>,
}

impl SharedRegistry {
    pub fn new(registry: Registry) -> Self {
        Self {
            current: RwLock::new(Arc::new(registry)),
        }
    }

    /// Create a shared (Arc-wrapped) holder
    pub fn shared(registry: Registry) -> Arc<Self> {
        Arc::new(Self::new(registry))
    }

    /// Current snapshot
    pub fn current(&self) -> Arc<Registry> {
        Arc::clone(&*self.current.read())
    }

    /// Install a new snapshot, returning the previous one
    pub fn replace(&self, registry: Registry) -> Arc<Registry> {
        let next = Arc::new(registry);
        std::mem::replace(&mut *self.current.write(), next)
    }

    /// Build from a new catalog and swap it in
    ///
    /// On failure the current snapshot stays in place.
    pub fn rebuild(&self, catalog: ModelCatalog, plans: &PlanConfig) -> RegistryResult<()> {
        match Registry::build(catalog, plans) {
            Ok(registry) => {
                self.replace(registry);
                info!("Swapped in rebuilt model registry");
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Registry rebuild failed, keeping current snapshot");
                Err(e)
            }
        }
    }

    /// Reload using a configuration (catalog path, currency, plans)
    pub fn reload(&self, config: &RegistryConfig) -> RegistryResult<()> {
        let registry = Registry::from_config(config).inspect_err(|e| {
            warn!(error = %e, "Registry reload failed, keeping current snapshot");
        })?;
        self.replace(registry);
        info!("Reloaded model registry");
        Ok(())
    }
}

static DEFAULT_REGISTRY: OnceCell<Registry> = OnceCell::new();

/// Registry over the embedded catalog with default configuration
///
/// Built on first use and memoized for the life of the process.
pub fn default_registry() -> RegistryResult<&'static Registry> {
    DEFAULT_REGISTRY.get_or_try_init(|| {
        let config = RegistryConfig::default();
        Registry::build(embedded_catalog(&config.currency)?, &config.plans)
    })
}
