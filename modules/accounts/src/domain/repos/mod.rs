mod addresses_repo;
mod users_repo;

pub use addresses_repo::AddressesRepository;
pub use users_repo::UsersRepository;
