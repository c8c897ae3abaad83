use std::sync::Arc;

use time::OffsetDateTime;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::domain::error::{DomainError, GenAiError};
use crate::domain::models::{
    GeneratedMealPlan, GeneratedPlan, MealRequest, PlanDay, PlanKind, UserProfile,
};
use crate::domain::ports::{ProfileSource, TextGenerator};
use crate::domain::repos::GeneratedPlansRepository;

use super::prompt::{build_prompt, parse_plan};

/// Generates meal plans from a body profile.
pub struct MealPlannerService {
    profiles: Arc<dyn ProfileSource>,
    generator: Arc<dyn TextGenerator>,
    history: Arc<dyn GeneratedPlansRepository>,
}

impl MealPlannerService {
    pub fn new(
        profiles: Arc<dyn ProfileSource>,
        generator: Arc<dyn TextGenerator>,
        history: Arc<dyn GeneratedPlansRepository>,
    ) -> Self {
        Self {
            profiles,
            generator,
            history,
        }
    }

    #[instrument(skip(self, request), fields(kind = kind.as_str(), user_id = ?request.user_id))]
    pub async fn generate(
        &self,
        kind: PlanKind,
        request: MealRequest,
    ) -> Result<GeneratedPlan, GenAiError> {
        let request = self.resolve_profile(request).await?;
        let prompt = build_prompt(&request, kind);
        debug!(prompt_len = prompt.len(), "requesting meal plan");

        let raw = self.generator.generate(&prompt).await?;
        let plan = parse_plan(&raw).inspect_err(|e| warn!(error = %e, "unusable model output"))?;
        info!(days = plan.len(), "meal plan generated");

        if let Some(user_id) = request.user_id {
            self.remember(user_id, kind, &plan).await;
        }

        Ok(GeneratedPlan {
            steps_today: request.steps_today,
            active_kcal_24h: request.active_kcal_24h,
            plan,
        })
    }

    /// Fills missing profile fields from the stored profile of `request.user_id`.
    ///
    /// Fields present in the request are never overwritten.
    pub async fn resolve_profile(&self, mut request: MealRequest) -> Result<MealRequest, GenAiError> {
        let Some(user_id) = request.user_id else {
            return Ok(request);
        };
        if !request.has_missing_profile_fields() {
            return Ok(request);
        }

        let profile = self
            .profiles
            .profile(user_id)
            .await?
            .ok_or(GenAiError::UserNotFound(user_id))?;
        fill_missing(&mut request, profile);
        Ok(request)
    }

    #[instrument(skip(self))]
    pub async fn history(&self, user_id: Uuid) -> Result<Vec<GeneratedMealPlan>, DomainError> {
        self.history.list_for_user(user_id).await
    }

    /// Best effort: failures are logged and swallowed.
    async fn remember(&self, user_id: Uuid, kind: PlanKind, plan: &[PlanDay]) {
        let json = match serde_json::to_string(plan) {
            Ok(json) => json,
            Err(e) => {
                warn!(%user_id, error = %e, "failed to serialize generated plan");
                return;
            }
        };
        let record = GeneratedMealPlan {
            id: Uuid::now_v7(),
            user_id,
            kind,
            plan: json,
            created_at: OffsetDateTime::now_utc(),
        };
        if let Err(e) = self.history.create(record).await {
            warn!(%user_id, error = %e, "failed to save generated meal plan");
        }
    }
}

fn fill_missing(request: &mut MealRequest, profile: UserProfile) {
    if request.gender.trim().is_empty()
        && let Some(gender) = profile.gender
    {
        request.gender = gender;
    }
    if request.age <= 0
        && let Some(age) = profile.age
    {
        request.age = age;
    }
    if request.height <= 0.0
        && let Some(height) = profile.height_cm
    {
        request.height = height;
    }
    if request.weight <= 0.0
        && let Some(weight) = profile.weight_kg
    {
        request.weight = weight;
    }
    if request.target.trim().is_empty()
        && let Some(goal) = profile.goal
    {
        request.target = goal;
    }
}
