use std::sync::Arc;

use axum::routing::get;
use axum::{Extension, Router};

use crate::domain::service::{CartsService, DeliveriesService, OrdersService, PaymentsService};

use super::handlers::{carts, deliveries, orders, payments};

/// Services backing the commerce routes.
#[derive(Clone)]
pub struct CommerceServices {
    pub carts: Arc<CartsService>,
    pub orders: Arc<OrdersService>,
    pub payments: Arc<PaymentsService>,
    pub deliveries: Arc<DeliveriesService>,
}

pub fn register_routes(router: Router, services: &CommerceServices) -> Router {
    let carts_routes = Router::new()
        .route("/api/carts", get(carts::list_carts).post(carts::create_cart))
        .route(
            "/api/carts/{id}",
            get(carts::get_cart)
                .patch(carts::update_cart)
                .delete(carts::delete_cart),
        )
        .layer(Extension(services.carts.clone()));

    let orders_routes = Router::new()
        .route(
            "/api/orders",
            get(orders::list_orders).post(orders::create_order),
        )
        .route(
            "/api/orders/{id}",
            get(orders::get_order)
                .patch(orders::update_order)
                .delete(orders::delete_order),
        )
        .layer(Extension(services.orders.clone()));

    let payments_routes = Router::new()
        .route(
            "/api/payments",
            get(payments::list_payments).post(payments::create_payment),
        )
        .route(
            "/api/payments/{id}",
            get(payments::get_payment)
                .patch(payments::update_payment)
                .delete(payments::delete_payment),
        )
        .layer(Extension(services.payments.clone()));

    let deliveries_routes = Router::new()
        .route(
            "/api/deliveries",
            get(deliveries::list_deliveries).post(deliveries::create_delivery),
        )
        .route(
            "/api/deliveries/{id}",
            get(deliveries::get_delivery)
                .patch(deliveries::update_delivery)
                .delete(deliveries::delete_delivery),
        )
        .layer(Extension(services.deliveries.clone()));

    router
        .merge(carts_routes)
        .merge(orders_routes)
        .merge(payments_routes)
        .merge(deliveries_routes)
}
