pub mod addresses;
pub mod auth;
pub mod users;
