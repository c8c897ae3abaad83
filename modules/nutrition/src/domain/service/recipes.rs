use std::sync::Arc;

use time::OffsetDateTime;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::models::{NewRecipe, Recipe, RecipePatch};
use crate::domain::repos::RecipesRepository;

pub struct RecipesService {
    repo: Arc<dyn RecipesRepository>,
}

impl RecipesService {
    pub fn new(repo: Arc<dyn RecipesRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Recipe>, DomainError> {
        debug!("listing recipes");
        self.repo.list().await
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: Uuid) -> Result<Recipe, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Recipe", id))
    }

    #[instrument(skip(self, new_recipe), fields(name = %new_recipe.name, items = new_recipe.items.len()))]
    pub async fn create(&self, new_recipe: NewRecipe) -> Result<Recipe, DomainError> {
        let now = OffsetDateTime::now_utc();
        let recipe = Recipe {
            id: new_recipe.id.unwrap_or_else(Uuid::now_v7),
            name: new_recipe.name,
            instructions: new_recipe.instructions,
            calories: new_recipe.calories,
            items: new_recipe.items,
            created_at: now,
            updated_at: now,
        };

        let created = self.repo.create(recipe).await?;
        info!(recipe_id = %created.id, "recipe created");
        Ok(created)
    }

    #[instrument(skip(self, patch))]
    pub async fn update(&self, id: Uuid, patch: RecipePatch) -> Result<Recipe, DomainError> {
        let updated = self.repo.update(id, patch).await?;
        info!("recipe updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        if !self.repo.delete(id).await? {
            return Err(DomainError::not_found("Recipe", id));
        }
        info!("recipe deleted");
        Ok(())
    }
}
