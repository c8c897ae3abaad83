use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::models::{MealPlan, MealPlanPatch};

#[async_trait]
pub trait MealPlansRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<MealPlan>, DomainError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<MealPlan>, DomainError>;

    async fn create(&self, plan: MealPlan) -> Result<MealPlan, DomainError>;

    /// An `items` patch replaces every slot of the plan.
    async fn update(&self, id: Uuid, patch: MealPlanPatch) -> Result<MealPlan, DomainError>;

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
