//! SeaORM persistence for the catalog.

pub mod entity;
pub mod mapper;
pub mod migrations;

mod bundles_sea_repo;
mod categories_sea_repo;
mod inventories_sea_repo;
mod product_categories_sea_repo;
mod products_sea_repo;
mod vendors_sea_repo;

pub use bundles_sea_repo::OrmBundlesRepository;
pub use categories_sea_repo::OrmCategoriesRepository;
pub use inventories_sea_repo::OrmInventoriesRepository;
pub use product_categories_sea_repo::OrmProductCategoriesRepository;
pub use products_sea_repo::OrmProductsRepository;
pub use vendors_sea_repo::OrmVendorsRepository;

#[cfg(test)]
mod repo_test;

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
