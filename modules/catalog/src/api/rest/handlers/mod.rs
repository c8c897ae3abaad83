pub mod bundles;
pub mod categories;
pub mod inventories;
pub mod product_categories;
pub mod products;
pub mod vendors;

#[cfg(test)]
mod tests;
