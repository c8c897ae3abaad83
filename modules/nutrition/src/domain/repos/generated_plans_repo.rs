use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::models::GeneratedMealPlan;

/// Append-only history of generated plans.
#[async_trait]
pub trait GeneratedPlansRepository: Send + Sync {
    async fn create(&self, plan: GeneratedMealPlan) -> Result<GeneratedMealPlan, DomainError>;

    /// Newest first.
    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<GeneratedMealPlan>, DomainError>;
}
