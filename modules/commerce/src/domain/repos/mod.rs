//! Repository traits for the commerce resources.
//!
//! `update` rejects an empty patch with `DomainError::NoFieldsToUpdate` before any
//! write, and `list` is ordered by primary key.

mod carts_repo;
mod deliveries_repo;
mod orders_repo;
mod payments_repo;

pub use carts_repo::CartsRepository;
pub use deliveries_repo::DeliveriesRepository;
pub use orders_repo::OrdersRepository;
pub use payments_repo::PaymentsRepository;
