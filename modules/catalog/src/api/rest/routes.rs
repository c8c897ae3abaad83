use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use axum::{Extension, Router};

use crate::domain::service::{
    BundlesService, CategoriesService, InventoriesService, ProductCategoriesService,
    ProductsService, VendorsService,
};

use super::handlers::{bundles, categories, inventories, product_categories, products, vendors};

/// Product forms may carry an image; oversized files must still reach validation.
const PRODUCT_BODY_LIMIT: usize = 20 * 1024 * 1024;

/// Services backing the catalog routes.
pub struct CatalogServices {
    pub vendors: Arc<VendorsService>,
    pub categories: Arc<CategoriesService>,
    pub products: Arc<ProductsService>,
    pub product_categories: Arc<ProductCategoriesService>,
    pub inventories: Arc<InventoriesService>,
    pub bundles: Arc<BundlesService>,
}

pub fn register_routes(router: Router, services: &CatalogServices) -> Router {
    let vendors_routes = Router::new()
        .route(
            "/api/vendors",
            get(vendors::list_vendors).post(vendors::create_vendor),
        )
        .route(
            "/api/vendors/{id}",
            get(vendors::get_vendor)
                .patch(vendors::update_vendor)
                .delete(vendors::delete_vendor),
        )
        .layer(Extension(services.vendors.clone()));

    let categories_routes = Router::new()
        .route(
            "/api/categories",
            get(categories::list_categories).post(categories::create_category),
        )
        .route(
            "/api/categories/{id}",
            get(categories::get_category)
                .patch(categories::update_category)
                .delete(categories::delete_category),
        )
        .layer(Extension(services.categories.clone()));

    let products_routes = Router::new()
        .route(
            "/api/products",
            get(products::list_products).post(products::create_product),
        )
        .route(
            "/api/products/{id}",
            get(products::get_product)
                .patch(products::update_product)
                .delete(products::delete_product),
        )
        .layer(DefaultBodyLimit::max(PRODUCT_BODY_LIMIT))
        .layer(Extension(services.products.clone()));

    let links_routes = Router::new()
        .route(
            "/api/product-categories",
            get(product_categories::list_product_categories)
                .post(product_categories::create_product_category),
        )
        .route(
            "/api/product-categories/{id}",
            get(product_categories::get_product_category)
                .patch(product_categories::update_product_category)
                .delete(product_categories::delete_product_category),
        )
        .layer(Extension(services.product_categories.clone()));

    let inventories_routes = Router::new()
        .route(
            "/api/inventories",
            get(inventories::list_inventories).post(inventories::create_inventory),
        )
        .route(
            "/api/inventories/{id}",
            get(inventories::get_inventory)
                .patch(inventories::update_inventory)
                .delete(inventories::delete_inventory),
        )
        .layer(Extension(services.inventories.clone()));

    let bundles_routes = Router::new()
        .route(
            "/api/bundles",
            get(bundles::list_bundles).post(bundles::create_bundle),
        )
        .route(
            "/api/bundles/{id}",
            get(bundles::get_bundle)
                .patch(bundles::update_bundle)
                .delete(bundles::delete_bundle),
        )
        .layer(Extension(services.bundles.clone()));

    router
        .merge(vendors_routes)
        .merge(categories_routes)
        .merge(products_routes)
        .merge(links_routes)
        .merge(inventories_routes)
        .merge(bundles_routes)
}
