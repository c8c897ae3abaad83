//! SeaORM persistence for users and addresses.

pub mod entity;
pub mod mapper;
pub mod migrations;

mod addresses_sea_repo;
mod users_sea_repo;

pub use addresses_sea_repo::OrmAddressesRepository;
pub use users_sea_repo::OrmUsersRepository;


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

/// Like [`db_err`], but a missing row becomes `NotFound` for `entity`/`id`.
pub(crate) fn row_err(entity: &'static str, id: Uuid) -> impl FnOnce(DbErr) -> DomainError {
    move |e| match classify(&e) {
        DbErrorKind::NotFound => DomainError::not_found(entity, id),
        _ => db_err(e),
    }
}
