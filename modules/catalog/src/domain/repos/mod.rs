//! Repository traits, one per aggregate.
//!
//! Every `update` fails with `DomainError::NoFieldsToUpdate` for an empty patch before
//! any write, and every `list` is ordered by primary key.

mod bundles_repo;
mod categories_repo;
mod inventories_repo;
mod product_categories_repo;
mod products_repo;
mod vendors_repo;

pub use bundles_repo::BundlesRepository;
pub use categories_repo::CategoriesRepository;
pub use inventories_repo::InventoriesRepository;
pub use product_categories_repo::ProductCategoriesRepository;
pub use products_repo::ProductsRepository;
pub use vendors_repo::VendorsRepository;
