//! Nutrition Module
//!
//! Recipes, weekly meal plans and a generative meal planner that turns a body
//! profile into a structured plan through a text-generation model.

pub mod config;
pub mod module;

pub use config::GenAiConfig;
pub use domain::error::{DomainError, GenAiError};
pub use domain::models::{MealPlan, MealSlot, PlanKind, Recipe, UserProfile};
pub use domain::ports::{ProfileSource, TextGenerator};
pub use domain::service::{MealPlannerService, MealPlansService, RecipesService};
pub use module::NutritionModule;

#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
