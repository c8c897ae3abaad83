use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use grocer_kit::module::{DbModule, RestfulModule};
use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use tracing::{info, warn};

use crate::api::rest::routes;
use crate::config::GenAiConfig;
use crate::domain::ports::{ProfileSource, TextGenerator};
use crate::domain::service::{MealPlannerService, MealPlansService, RecipesService};
use crate::infra::genai::{GeminiClient, UnavailableGenerator};
use crate::infra::storage::migrations::Migrator;
use crate::infra::storage::{
    OrmGeneratedPlansRepository, OrmMealPlansRepository, OrmRecipesRepository,
};

/// Composition root for the nutrition module.
pub struct NutritionModule {
    recipes: Arc<RecipesService>,
    meal_plans: Arc<MealPlansService>,
    planner: Arc<MealPlannerService>,
}

impl NutritionModule {
    /// A generator that cannot be built does not stop startup; generation
    /// requests then fail with the construction error.
    #[must_use]
    pub fn new(
        db: &DatabaseConnection,
        genai: &GenAiConfig,
        profiles: Arc<dyn ProfileSource>,
    ) -> Self {
        info!(model = %genai.model, "initializing nutrition module");
        let generator: Arc<dyn TextGenerator> = match GeminiClient::new(genai) {
            Ok(client) => Arc::new(client),
            Err(e) => {
                warn!(error = %e, "meal generation disabled");
                Arc::new(UnavailableGenerator::new(e))
            }
        };
        Self::with_generator(db, generator, profiles)
    }

    #[must_use]
    pub fn with_generator(
        db: &DatabaseConnection,
        generator: Arc<dyn TextGenerator>,
        profiles: Arc<dyn ProfileSource>,
    ) -> Self {
        Self {
            recipes: Arc::new(RecipesService::new(Arc::new(OrmRecipesRepository::new(
                db.clone(),
            )))),
            meal_plans: Arc::new(MealPlansService::new(Arc::new(
                OrmMealPlansRepository::new(db.clone()),
            ))),
            planner: Arc::new(MealPlannerService::new(
                profiles,
                generator,
                Arc::new(OrmGeneratedPlansRepository::new(db.clone())),
            )),
        }
    }

    #[must_use]
    pub fn recipes(&self) -> Arc<RecipesService> {
        self.recipes.clone()
    }

    #[must_use]
    pub fn meal_plans(&self) -> Arc<MealPlansService> {
        self.meal_plans.clone()
    }
}

#[async_trait]
impl DbModule for NutritionModule {
    fn name(&self) -> &'static str {
        "nutrition"
    }

    async fn migrate(&self, db: &DatabaseConnection) -> anyhow::Result<()> {
        Migrator::up(db, None).await?;
        Ok(())
    }
}

impl RestfulModule for NutritionModule {
    fn register_rest(&self, router: Router) -> Router {
        routes::register_routes(
            router,
            self.recipes.clone(),
            self.meal_plans.clone(),
            self.planner.clone(),
        )
    }
}
