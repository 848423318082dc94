//! In-memory plan store backed by DashMap.
//!
//! Production: replace with a document store behind the same API surface.
//! Writes are whole-document and last-write-wins; callers that need strict
//! consistency across concurrent editors must re-read before editing.

use chrono::Utc;
use dashmap::DashMap;
use planner_core::error::{PlannerError, PlannerResult};
use planner_core::plan::PlanData;
use tracing::info;
use uuid::Uuid;

/// Thread-safe plan store keyed by plan id.
pub struct PlanStore {
    plans: DashMap<String, PlanData>,
}

impl PlanStore {
    pub fn new() -> Self {
        info!("Plan store initialized (in-memory, development mode)");
        Self {
            plans: DashMap::new(),
        }
    }

    /// All plans owned by `user_id`, newest first.
    pub fn list_plans(&self, user_id: &str) -> Vec<PlanData> {
        let mut plans: Vec<PlanData> = self
            .plans
            .iter()
            .filter(|r| r.value().user_id.as_deref() == Some(user_id))
            .map(|r| r.value().clone())
            .collect();
        plans.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        plans
    }

    pub fn get_plan(&self, id: &str) -> Option<PlanData> {
        self.plans.get(id).map(|r| r.value().clone())
    }

    /// Fetch a plan regardless of owner, but only when it was shared.
    pub fn get_public_plan(&self, id: &str) -> Option<PlanData> {
        self.plans
            .get(id)
            .filter(|r| r.value().is_public)
            .map(|r| r.value().clone())
    }

    /// Insert or replace the whole plan document. Sets `created_at` on first
    /// save. Returns the stored document.
    pub fn save_plan(&self, mut plan: PlanData) -> PlanData {
        if plan.created_at.is_none() {
            plan.created_at = Some(Utc::now());
        }
        info!(plan_id = %plan.id, months = plan.months.len(), "Saving plan");
        self.plans.insert(plan.id.clone(), plan.clone());
        plan
    }

    /// Rename a plan in place. Returns the updated document.
    pub fn rename_plan(&self, id: &str, new_name: &str) -> PlannerResult<PlanData> {
        let mut entry = self
            .plans
            .get_mut(id)
            .ok_or_else(|| PlannerError::PlanNotFound(id.to_string()))?;
        entry.campaign_name = new_name.to_string();
        info!(plan_id = %id, "Renamed plan");
        Ok(entry.clone())
    }

    /// Copy a plan under a fresh id and its own creation time.
    pub fn duplicate_plan(&self, id: &str) -> PlannerResult<PlanData> {
        let mut copy = self
            .get_plan(id)
            .ok_or_else(|| PlannerError::PlanNotFound(id.to_string()))?;
        copy.id = format!("plan_{}", Uuid::new_v4());
        copy.campaign_name.push_str(" (copy)");
        copy.created_at = Some(Utc::now());
        info!(source_id = %id, plan_id = %copy.id, "Duplicated plan");
        self.plans.insert(copy.id.clone(), copy.clone());
        Ok(copy)
    }

    /// Remove a plan by id. Returns `true` if it existed.
    pub fn delete_plan(&self, id: &str) -> bool {
        let removed = self.plans.remove(id).is_some();
        if removed {
            info!(plan_id = %id, "Deleted plan");
        }
        removed
    }

    pub fn plan_count(&self) -> usize {
        self.plans.len()
    }
}

impl Default for PlanStore {
    fn default() -> Self {
        Self::new()
    }
}
