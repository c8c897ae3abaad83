//! Accounts Module
//!
//! Users with their nutrition profile, postal addresses, and password login that
//! issues HS256 bearer tokens.

pub mod config;
pub mod module;

pub use config::AuthConfig;
pub use domain::error::DomainError;
pub use domain::models::{Address, User};
pub use domain::service::{AddressesService, AuthService, UsersService};
pub use module::AccountsModule;

#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
