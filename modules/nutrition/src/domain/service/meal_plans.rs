use std::sync::Arc;

use time::OffsetDateTime;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::models::{MealPlan, MealPlanPatch, NewMealPlan};
use crate::domain::repos::MealPlansRepository;

pub struct MealPlansService {
    repo: Arc<dyn MealPlansRepository>,
}

impl MealPlansService {
    pub fn new(repo: Arc<dyn MealPlansRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<MealPlan>, DomainError> {
        debug!("listing meal plans");
        self.repo.list().await
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: Uuid) -> Result<MealPlan, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("MealPlan", id))
    }

    #[instrument(skip(self, new_plan), fields(user_id = %new_plan.user_id, week_start = %new_plan.week_start))]
    pub async fn create(&self, new_plan: NewMealPlan) -> Result<MealPlan, DomainError> {
        let now = OffsetDateTime::now_utc();
        let plan = MealPlan {
            id: new_plan.id.unwrap_or_else(Uuid::now_v7),
            user_id: new_plan.user_id,
            week_start: new_plan.week_start,
            items: new_plan.items,
            created_at: now,
            updated_at: now,
        };

        let created = self.repo.create(plan).await?;
        info!(meal_plan_id = %created.id, "meal plan created");
        Ok(created)
    }

    #[instrument(skip(self, patch))]
    pub async fn update(&self, id: Uuid, patch: MealPlanPatch) -> Result<MealPlan, DomainError> {
        let updated = self.repo.update(id, patch).await?;
        info!("meal plan updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        if !self.repo.delete(id).await? {
            return Err(DomainError::not_found("MealPlan", id));
        }
        info!("meal plan deleted");
        Ok(())
    }
}
