pub mod bundle;
pub mod bundle_item;
pub mod category;
pub mod inventory;
pub mod product;
pub mod product_category;
pub mod vendor;
