//! Commerce Module
//!
//! Shopping carts, orders with their line items, and the payment and delivery
//! records attached one-to-one to an order.

pub mod module;

pub use domain::error::DomainError;
pub use domain::models::{
    Cart, Delivery, DeliveryStatus, Order, OrderStatus, Payment, PaymentStatus,
};
pub use domain::service::{CartsService, DeliveriesService, OrdersService, PaymentsService};
pub use module::CommerceModule;

#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
