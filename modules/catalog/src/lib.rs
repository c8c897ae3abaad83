//! Catalog Module
//!
//! Vendors, categories, products with optional images, product/category links,
//! inventory records and product bundles.

pub mod module;

pub use api::rest::routes::CatalogServices;
pub use domain::error::DomainError;
pub use domain::models::{Bundle, Category, Inventory, Product, ProductCategory, Vendor};
pub use domain::ports::ImageStore;
pub use domain::service::{
    BundlesService, CategoriesService, InventoriesService, ProductCategoriesService,
    ProductsService, VendorsService,
};
pub use module::CatalogModule;

#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
