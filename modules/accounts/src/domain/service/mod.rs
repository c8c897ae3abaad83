//! Domain services: one per aggregate plus token authentication.

mod addresses;
mod auth;
mod users;

pub use addresses::AddressesService;
pub use auth::{AuthService, Claims, IssuedToken};
pub use users::UsersService;
