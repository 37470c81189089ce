//! Plan id → eligible models

use crate::config::{ConfigValidator, PlanConfig};
use crate::error::{RegistryError, RegistryResult};
use std::collections::HashMap;
use std::sync::Arc;

/// Mapping from plan id to the models the plan may use
///
/// Every paid plan points at the same `Arc`, so all paid plans see one pool.
#[derive(Debug, Clone)]
pub struct TierTable {
    free_plan: String,
    free: Arc<[String]>,
    paid: Arc<[String]>,
    /// Plan ids in configuration order, free plan first
    order: Vec<String>,
    entries: HashMap<String, Arc<[String]>>,
}

impl TierTable {
    /// Build the table from the two tier lists and the configured plan ids
    pub fn assemble(
        free_tier: Vec<String>,
        paid_tier: Vec<String>,
        plans: &PlanConfig,
    ) -> RegistryResult<Self> {
        ConfigValidator::validate_plans(plans)?;

        let free: Arc<[String]> = free_tier.into();
        let paid: Arc<[String]> = paid_tier.into();

        let mut order = Vec::with_capacity(plans.paid_plans.len() + 1);
        let mut entries = HashMap::with_capacity(plans.paid_plans.len() + 1);

        order.push(plans.free_plan.clone());
        entries.insert(plans.free_plan.clone(), Arc::clone(&free));

        for plan in &plans.paid_plans {
            order.push(plan.clone());
            entries.insert(plan.clone(), Arc::clone(&paid));
        }

        Ok(Self {
            free_plan: plans.free_plan.clone(),
            free,
            paid,
            order,
            entries,
        })
    }

    /// Models available to a plan, in catalog order
    pub fn models_for_plan(&self, plan_id: &str) -> RegistryResult<&[String]> {
        self.pool(plan_id).map(|pool| &pool[..])
    }

    /// Shared list behind a plan
    pub fn pool(&self, plan_id: &str) -> RegistryResult<&Arc<[String]>> {
        self.entries
            .get(plan_id)
            .ok_or_else(|| RegistryError::unknown_plan(plan_id))
    }

    /// Plan ids in configuration order
    pub fn plan_ids(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn free_plan(&self) -> &str {
        &self.free_plan
    }

    pub fn is_known(&self, plan_id: &str) -> bool {
        self.entries.contains_key(plan_id)
    }

    pub fn is_paid_plan(&self, plan_id: &str) -> bool {
        plan_id != self.free_plan && self.is_known(plan_id)
    }

    /// Free-tier list
    pub fn free_models(&self) -> &[String] {
        &self.free
    }

    /// Paid-tier list, shared by every paid plan
    pub fn paid_models(&self) -> &[String] {
        &self.paid
    }
}
