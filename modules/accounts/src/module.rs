use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use grocer_kit::module::{DbModule, RestfulModule};
use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use tracing::info;

use crate::api::rest::routes;
use crate::config::AuthConfig;
use crate::domain::service::{AddressesService, AuthService, UsersService};
use crate::infra::storage::migrations::Migrator;
use crate::infra::storage::{OrmAddressesRepository, OrmUsersRepository};

/// Composition root for the accounts module.
pub struct AccountsModule {
    users: Arc<UsersService>,
    addresses: Arc<AddressesService>,
    auth: Arc<AuthService>,
}

impl AccountsModule {
    #[must_use]
    pub fn new(db: &DatabaseConnection, cfg: &AuthConfig) -> Self {
        info!("initializing accounts module");
        let users_repo = Arc::new(OrmUsersRepository::new(db.clone()));

        Self {
            users: Arc::new(UsersService::new(users_repo.clone())),
            addresses: Arc::new(AddressesService::new(Arc::new(
                OrmAddressesRepository::new(db.clone()),
            ))),
            auth: Arc::new(AuthService::new(users_repo, cfg)),
        }
    }

    #[must_use]
    pub fn users(&self) -> Arc<UsersService> {
        self.users.clone()
    }

    #[must_use]
    pub fn addresses(&self) -> Arc<AddressesService> {
        self.addresses.clone()
    }
}

#[async_trait]
impl DbModule for AccountsModule {
    fn name(&self) -> &'static str {
        "accounts"
    }

    async fn migrate(&self, db: &DatabaseConnection) -> anyhow::Result<()> {
        Migrator::up(db, None).await?;
        Ok(())
    }
}

impl RestfulModule for AccountsModule {
    fn register_rest(&self, router: Router) -> Router {
        routes::register_routes(
            router,
            self.users.clone(),
            self.addresses.clone(),
            self.auth.clone(),
        )
    }
}
