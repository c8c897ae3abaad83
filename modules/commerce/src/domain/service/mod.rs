//! Commerce domain services.
//!
//! Orders own their total: it is recomputed from the line items on create and on
//! every item replacement. Payments and deliveries stamp their completion time
//! when they reach a final state without one.

mod carts;
mod deliveries;
mod orders;
mod payments;

pub use carts::CartsService;
pub use deliveries::DeliveriesService;
pub use orders::OrdersService;
pub use payments::PaymentsService;
