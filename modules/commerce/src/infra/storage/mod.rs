//! SeaORM persistence for carts, orders, payments and deliveries.

pub mod entity;
pub mod mapper;
pub mod migrations;

mod carts_sea_repo;
mod deliveries_sea_repo;
mod orders_sea_repo;
mod payments_sea_repo;

pub use carts_sea_repo::OrmCartsRepository;
pub use deliveries_sea_repo::OrmDeliveriesRepository;
pub use orders_sea_repo::OrmOrdersRepository;
pub use payments_sea_repo::OrmPaymentsRepository;

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
