//! Catalog domain services.
//!
//! Services are thin: they assign ids and timestamps, delegate to one repository and
//! turn a missing row into `NotFound`. Products additionally move images through the
//! [`ImageStore`](crate::domain::ports::ImageStore) port.

mod bundles;
mod categories;
mod inventories;
mod product_categories;
mod products;
mod vendors;

pub use bundles::BundlesService;
pub use categories::CategoriesService;
pub use inventories::InventoriesService;
pub use product_categories::ProductCategoriesService;
pub use products::{PRODUCT_IMAGE_FOLDER, ProductsService};
pub use vendors::VendorsService;
