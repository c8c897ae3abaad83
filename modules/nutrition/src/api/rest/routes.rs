use std::sync::Arc;

use axum::routing::{get, post};
use axum::{Extension, Router};

use crate::domain::service::{MealPlannerService, MealPlansService, RecipesService};

use super::handlers::{genai, meal_plans, recipes};

pub fn register_routes(
    router: Router,
    recipes_svc: Arc<RecipesService>,
    meal_plans_svc: Arc<MealPlansService>,
    planner: Arc<MealPlannerService>,
) -> Router {
    let recipes_routes = Router::new()
        .route(
            "/api/recipes",
            get(recipes::list_recipes).post(recipes::create_recipe),
        )
        .route(
            "/api/recipes/{id}",
            get(recipes::get_recipe)
                .patch(recipes::update_recipe)
                .delete(recipes::delete_recipe),
        )
        .layer(Extension(recipes_svc));

    let meal_plans_routes = Router::new()
        .route(
            "/api/meal-plans",
            get(meal_plans::list_meal_plans).post(meal_plans::create_meal_plan),
        )
        .route(
            "/api/meal-plans/{id}",
            get(meal_plans::get_meal_plan)
                .patch(meal_plans::update_meal_plan)
                .delete(meal_plans::delete_meal_plan),
        )
        .layer(Extension(meal_plans_svc));

    let genai_routes = Router::new()
        .route("/api/genai/weekly", post(genai::generate_weekly))
        .route("/api/genai/daily", post(genai::generate_daily))
        .route("/api/genai/history/{id}", get(genai::list_history))
        .layer(Extension(planner));

    router
        .merge(recipes_routes)
        .merge(meal_plans_routes)
        .merge(genai_routes)
}
