//! Capabilities a feature module exposes to the server host.

use async_trait::async_trait;
use axum::Router;
use sea_orm::DatabaseConnection;

/// A module that owns tables and knows how to migrate them.
#[async_trait]
pub trait DbModule: Send + Sync {
    fn name(&self) -> &'static str;

    /// Apply all pending migrations for this module.
    async fn migrate(&self, db: &DatabaseConnection) -> anyhow::Result<()>;
}

/// A module that contributes REST routes.
pub trait RestfulModule: Send + Sync {
    /// Mount routes on `router`. Paths are absolute (`/api/...`).
    fn register_rest(&self, router: Router) -> Router;
}
