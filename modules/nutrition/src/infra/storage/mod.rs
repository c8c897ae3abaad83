//! SeaORM persistence for recipes, meal plans and generated-plan history.

pub mod entity;
pub mod mapper;
pub mod migrations;

mod generated_plans_sea_repo;
mod meal_plans_sea_repo;
mod recipes_sea_repo;

pub use generated_plans_sea_repo::OrmGeneratedPlansRepository;
pub use meal_plans_sea_repo::OrmMealPlansRepository;
pub use recipes_sea_repo::OrmRecipesRepository;


use grocer_kit::db::{DbErrorKind, classify};
use sea_orm::DbErr;
use uuid::Uuid;

use crate::domain::error::DomainError;

pub(crate) fn db_err(e: DbErr) -> DomainError {
    match classify(&e) {
        DbErrorKind::UniqueViolation(detail) => DomainError::conflict(detail),
        DbErrorKind::ForeignKeyViolation(detail) => DomainError::constraint(detail),
        DbErrorKind::NotFound | DbErrorKind::Other => DomainError::database(e.to_string()),
    }
}

pub(crate) fn row_err(entity: &'static str, id: Uuid) -> impl FnOnce(DbErr) -> DomainError {
    move |e| match classify(&e) {
        DbErrorKind::NotFound => DomainError::not_found(entity, id),
        _ => db_err(e),
    }
}
