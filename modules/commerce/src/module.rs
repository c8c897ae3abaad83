use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use grocer_kit::module::{DbModule, RestfulModule};
use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use tracing::info;

use crate::api::rest::routes::{self, CommerceServices};
use crate::domain::service::{CartsService, DeliveriesService, OrdersService, PaymentsService};
use crate::infra::storage::migrations::Migrator;
use crate::infra::storage::{
    OrmCartsRepository, OrmDeliveriesRepository, OrmOrdersRepository, OrmPaymentsRepository,
};

/// Composition root for the commerce module.
pub struct CommerceModule {
    services: CommerceServices,
}

impl CommerceModule {
    #[must_use]
    pub fn new(db: &DatabaseConnection) -> Self {
        info!("initializing commerce module");
        let services = CommerceServices {
            carts: Arc::new(CartsService::new(Arc::new(OrmCartsRepository::new(
                db.clone(),
            )))),
            orders: Arc::new(OrdersService::new(Arc::new(OrmOrdersRepository::new(
                db.clone(),
            )))),
            payments: Arc::new(PaymentsService::new(Arc::new(
                OrmPaymentsRepository::new(db.clone()),
            ))),
            deliveries: Arc::new(DeliveriesService::new(Arc::new(
                OrmDeliveriesRepository::new(db.clone()),
            ))),
        };
        Self { services }
    }
}

#[async_trait]
impl DbModule for CommerceModule {
    fn name(&self) -> &'static str {
        "commerce"
    }

    async fn migrate(&self, db: &DatabaseConnection) -> anyhow::Result<()> {
        Migrator::up(db, None).await?;
        Ok(())
    }
}

impl RestfulModule for CommerceModule {
    fn register_rest(&self, router: Router) -> Router {
        routes::register_routes(router, &self.services)
    }
}
