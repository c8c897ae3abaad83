use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use grocer_kit::module::{DbModule, RestfulModule};
use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use tracing::info;

use crate::api::rest::routes::{self, CatalogServices};
use crate::domain::ports::ImageStore;
use crate::domain::service::{
    BundlesService, CategoriesService, InventoriesService, ProductCategoriesService,
    ProductsService, VendorsService,
};
use crate::infra::storage::migrations::Migrator;
use crate::infra::storage::{
    OrmBundlesRepository, OrmCategoriesRepository, OrmInventoriesRepository,
    OrmProductCategoriesRepository, OrmProductsRepository, OrmVendorsRepository,
};

/// Composition root for the catalog module.
pub struct CatalogModule {
    services: CatalogServices,
}

impl CatalogModule {
    #[must_use]
    pub fn new(db: &DatabaseConnection, images: Arc<dyn ImageStore>) -> Self {
        info!("initializing catalog module");
        let services = CatalogServices {
            vendors: Arc::new(VendorsService::new(Arc::new(OrmVendorsRepository::new(
                db.clone(),
            )))),
            categories: Arc::new(CategoriesService::new(Arc::new(
                OrmCategoriesRepository::new(db.clone()),
            ))),
            products: Arc::new(ProductsService::new(
                Arc::new(OrmProductsRepository::new(db.clone())),
                images,
            )),
            product_categories: Arc::new(ProductCategoriesService::new(Arc::new(
                OrmProductCategoriesRepository::new(db.clone()),
            ))),
            inventories: Arc::new(InventoriesService::new(Arc::new(
                OrmInventoriesRepository::new(db.clone()),
            ))),
            bundles: Arc::new(BundlesService::new(Arc::new(OrmBundlesRepository::new(
                db.clone(),
            )))),
        };
        Self { services }
    }

    /// Services shared with the server host (seeding).
    #[must_use]
    pub fn services(&self) -> &CatalogServices {
        &self.services
    }
}

#[async_trait]
impl DbModule for CatalogModule {
    fn name(&self) -> &'static str {
        "catalog"
    }

    async fn migrate(&self, db: &DatabaseConnection) -> anyhow::Result<()> {
        Migrator::up(db, None).await?;
        Ok(())
    }
}

impl RestfulModule for CatalogModule {
    fn register_rest(&self, router: Router) -> Router {
        routes::register_routes(router, &self.services)
    }
}
