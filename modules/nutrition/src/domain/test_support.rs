//! In-memory fakes for the nutrition services.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use grocer_kit::PatchSet;
use time::OffsetDateTime;
use uuid::Uuid;

use super::error::{DomainError, GenAiError};
use super::models::{GeneratedMealPlan, MealPlan, MealPlanPatch, Recipe, RecipePatch, UserProfile};
use super::ports::{ProfileSource, TextGenerator};
use super::repos::{GeneratedPlansRepository, MealPlansRepository, RecipesRepository};

#[derive(Default)]
pub struct InMemoryRecipes {
    rows: Mutex<BTreeMap<Uuid, Recipe>>,
}

#[async_trait]
impl RecipesRepository for InMemoryRecipes {
    async fn list(&self) -> Result<Vec<Recipe>, DomainError> {
        Ok(self.rows.lock().unwrap().values().cloned().collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Recipe>, DomainError> {
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }

    async fn create(&self, recipe: Recipe) -> Result<Recipe, DomainError> {
        self.rows.lock().unwrap().insert(recipe.id, recipe.clone());
        Ok(recipe)
    }

    async fn update(&self, id: Uuid, patch: RecipePatch) -> Result<Recipe, DomainError> {
        if patch.is_empty() {
            return Err(DomainError::NoFieldsToUpdate);
        }
        let mut rows = self.rows.lock().unwrap();
        let recipe = rows
            .get_mut(&id)
            .ok_or_else(|| DomainError::not_found("Recipe", id))?;
        patch.name.apply_to(&mut recipe.name);
        patch.instructions.apply_to(&mut recipe.instructions);
        patch.calories.apply_to(&mut recipe.calories);
        patch.items.apply_to(&mut recipe.items);
        recipe.updated_at = OffsetDateTime::now_utc();
        Ok(recipe.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        Ok(self.rows.lock().unwrap().remove(&id).is_some())
    }
}

#[derive(Default)]
pub struct InMemoryMealPlans {
    rows: Mutex<BTreeMap<Uuid, MealPlan>>,
}

#[async_trait]
impl MealPlansRepository for InMemoryMealPlans {
    async fn list(&self) -> Result<Vec<MealPlan>, DomainError> {
        Ok(self.rows.lock().unwrap().values().cloned().collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<MealPlan>, DomainError> {
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }

    async fn create(&self, plan: MealPlan) -> Result<MealPlan, DomainError> {
        self.rows.lock().unwrap().insert(plan.id, plan.clone());
        Ok(plan)
    }

    async fn update(&self, id: Uuid, patch: MealPlanPatch) -> Result<MealPlan, DomainError> {
        if patch.is_empty() {
            return Err(DomainError::NoFieldsToUpdate);
        }
        let mut rows = self.rows.lock().unwrap();
        let plan = rows
            .get_mut(&id)
            .ok_or_else(|| DomainError::not_found("MealPlan", id))?;
        patch.user_id.apply_to(&mut plan.user_id);
        patch.week_start.apply_to(&mut plan.week_start);
        patch.items.apply_to(&mut plan.items);
        plan.updated_at = OffsetDateTime::now_utc();
        Ok(plan.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        Ok(self.rows.lock().unwrap().remove(&id).is_some())
    }
}

#[derive(Default)]
pub struct InMemoryGeneratedPlans {
    pub saved: Mutex<Vec<GeneratedMealPlan>>,
    pub fail: bool,
}

#[async_trait]
impl GeneratedPlansRepository for InMemoryGeneratedPlans {
    async fn create(&self, plan: GeneratedMealPlan) -> Result<GeneratedMealPlan, DomainError> {
        if self.fail {
            return Err(DomainError::database("disk I/O error"));
        }
        self.saved.lock().unwrap().push(plan.clone());
        Ok(plan)
    }

    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<GeneratedMealPlan>, DomainError> {
        let mut plans: Vec<_> = self
            .saved
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.user_id == user_id)
            .cloned()
            .collect();
        plans.reverse();
        Ok(plans)
    }
}

/// Profiles keyed by user id; `broken` makes every lookup fail.
#[derive(Default)]
pub struct StaticProfiles {
    pub profiles: BTreeMap<Uuid, UserProfile>,
    pub broken: bool,
}

#[async_trait]
impl ProfileSource for StaticProfiles {
    async fn profile(&self, user_id: Uuid) -> Result<Option<UserProfile>, GenAiError> {
        if self.broken {
            return Err(GenAiError::profile("connection refused"));
        }
        Ok(self.profiles.get(&user_id).cloned())
    }
}

/// Returns a canned reply and records every prompt it was given.
pub struct ScriptedGenerator {
    reply: Result<String, GenAiError>,
    pub prompts: Mutex<Vec<String>>,
}

impl ScriptedGenerator {
    pub fn replying(text: &str) -> Self {
        Self {
            reply: Ok(text.to_owned()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(err: GenAiError) -> Self {
        Self {
            reply: Err(err),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn last_prompt(&self) -> String {
        self.prompts.lock().unwrap().last().cloned().unwrap_or_default()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, GenAiError> {
        self.prompts.lock().unwrap().push(prompt.to_owned());
        self.reply.clone()
    }
}
