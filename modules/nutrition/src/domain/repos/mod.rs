//! Repository traits for recipes, meal plans and generated-plan history.
//!
//! `update` rejects an empty patch with `DomainError::NoFieldsToUpdate` before any
//! write, and `list` is ordered by primary key.

mod generated_plans_repo;
mod meal_plans_repo;
mod recipes_repo;

pub use generated_plans_repo::GeneratedPlansRepository;
pub use meal_plans_repo::MealPlansRepository;
pub use recipes_repo::RecipesRepository;
