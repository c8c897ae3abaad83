pub mod error;
pub mod models;
pub mod password;
pub mod repos;
pub mod service;

#[cfg(test)]
pub(crate) mod test_support;
