//! Composition root: builds every module, runs migrations and serves the router.

use std::sync::Arc;
use std::time::Duration;

use accounts::AccountsModule;
use anyhow::{Context, Result};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use catalog::CatalogModule;
use commerce::CommerceModule;
use grocer_kit::module::{DbModule, RestfulModule};
use nutrition::NutritionModule;
use sea_orm::DatabaseConnection;
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use uploads::UploadsModule;

use crate::adapters::{UploadImageStore, UserProfiles};
use crate::config::{AppConfig, ServerConfig};

/// Every feature module, wired to each other through the adapters.
pub struct Modules {
    pub accounts: AccountsModule,
    pub catalog: CatalogModule,
    pub nutrition: NutritionModule,
    pub commerce: CommerceModule,
    pub uploads: UploadsModule,
}

impl Modules {
    pub fn new(db: &DatabaseConnection, config: &AppConfig) -> Self {
        Self::with_uploads(db, config, UploadsModule::new(&config.storage))
    }

    /// Same wiring over a caller-supplied object store.
    #[cfg(test)]
    pub fn with_storage(
        db: &DatabaseConnection,
        config: &AppConfig,
        storage: Arc<dyn uploads::ObjectStorage>,
    ) -> Self {
        Self::with_uploads(db, config, UploadsModule::with_storage(storage))
    }

    fn with_uploads(db: &DatabaseConnection, config: &AppConfig, uploads: UploadsModule) -> Self {
        let accounts = AccountsModule::new(db, &config.auth);
        let catalog = CatalogModule::new(db, Arc::new(UploadImageStore::new(uploads.service())));
        let nutrition = NutritionModule::new(
            db,
            &config.genai,
            Arc::new(UserProfiles::new(accounts.users())),
        );
        Self {
            accounts,
            catalog,
            nutrition,
            commerce: CommerceModule::new(db),
            uploads,
        }
    }

    /// Table owners in foreign-key order.
    fn db_modules(&self) -> [&dyn DbModule; 4] {
        [
            &self.accounts,
            &self.catalog,
            &self.nutrition,
            &self.commerce,
        ]
    }

    fn rest_modules(&self) -> [&dyn RestfulModule; 5] {
        [
            &self.accounts,
            &self.catalog,
            &self.nutrition,
            &self.commerce,
            &self.uploads,
        ]
    }

    pub async fn migrate(&self, db: &DatabaseConnection) -> Result<()> {
        for module in self.db_modules() {
            info!(module = module.name(), "running migrations");
            module
                .migrate(db)
                .await
                .with_context(|| format!("migrations failed for module {}", module.name()))?;
        }
        Ok(())
    }

    /// All module routes plus `/health`, wrapped in the HTTP middleware stack.
    pub fn router(&self, server: &ServerConfig) -> Router {
        let router = self
            .rest_modules()
            .into_iter()
            .fold(Router::new(), |router, module| module.register_rest(router));

        router
            .route("/health", get(health))
            .layer(RequestBodyLimitLayer::new(server.body_limit_bytes))
            .layer(TimeoutLayer::with_status_code(
                StatusCode::REQUEST_TIMEOUT,
                Duration::from_secs(server.request_timeout_secs),
            ))
            .layer(CorsLayer::permissive())
            .layer(TraceLayer::new_for_http())
    }
}

async fn health() -> Json<Value> {
    Json(json!({"status": "ok"}))
}

/// Connect, migrate and serve until Ctrl+C or SIGTERM.
pub async fn run(config: &AppConfig) -> Result<()> {
    let db = grocer_kit::db::connect(&config.database)
        .await
        .context("failed to connect to database")?;

    let modules = Modules::new(&db, config);
    modules.migrate(&db).await?;
    let app = modules.router(&config.server);

    let addr = config.server.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, "grocer server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    db.close().await.context("failed to close database")?;
    info!("grocer server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(%e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(%e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("received Ctrl+C"),
        () = terminate => info!("received SIGTERM"),
    }
    info!("shutdown signal received, draining connections");
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use std::time::Duration;

    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::Request;
    use bytes::Bytes;
    use nutrition::ProfileSource;
    use sea_orm::Database;
    use tower::ServiceExt as _;
    use uploads::{ObjectStorage, UploadError};

    use super::*;

    struct NullStorage;

    #[async_trait]
    impl ObjectStorage for NullStorage {
        async fn put_object(&self, _: &str, _: Bytes, _: &str) -> Result<(), UploadError> {
            Ok(())
        }

        async fn delete_object(&self, _: &str) -> Result<(), UploadError> {
            Ok(())
        }

        async fn presign_get(&self, key: &str, _: Duration) -> Result<String, UploadError> {
            Ok(format!("https://objects.test/{key}"))
        }
    }

    async fn app() -> (Router, Modules) {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        let config = AppConfig::default();
        let modules = Modules::with_storage(&db, &config, Arc::new(NullStorage));
        modules.migrate(&db).await.unwrap();
        (modules.router(&config.server), modules)
    }

    async fn call(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut request = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                request = request.header("content-type", "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };
        let response = app.clone().oneshot(request.body(body).unwrap()).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn health_is_ok() {
        let (app, _) = app().await;
        let (status, body) = call(&app, "GET", "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": "ok"}));
    }

    #[tokio::test]
    async fn product_lifecycle_over_sqlite() {
        let (app, _) = app().await;

        let (status, vendor) = call(
            &app,
            "POST",
            "/api/vendors",
            Some(json!({"name": "Green Farm"})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED, "{vendor}");

        let (status, product) = call(
            &app,
            "POST",
            "/api/products",
            Some(json!({
                "vendor_id": vendor["data"]["id"],
                "name": "Apples",
                "sku": "APL-1",
                "price": 2.5,
                "unit": "kg"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED, "{product}");
        assert_eq!(product["message"], "Product Created Successfully");

        let (status, body) = call(&app, "GET", "/api/products/invalid-uuid", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"message": "invalid uuid"}));

        let (status, _) = call(
            &app,
            "GET",
            &format!("/api/products/{}", uuid::Uuid::now_v7()),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn order_needs_existing_address() {
        let (app, _) = app().await;
        let (_, user) = call(
            &app,
            "POST",
            "/api/users",
            Some(json!({"email": "ana@example.com", "name": "Ana", "password": "longenough"})),
        )
        .await;

        let (status, body) = call(
            &app,
            "POST",
            "/api/orders",
            Some(json!({
                "user_id": user["data"]["id"],
                "shipping_address_id": uuid::Uuid::now_v7()
            })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
    }

    #[tokio::test]
    async fn planner_profiles_come_from_accounts() {
        let (app, modules) = app().await;
        let (_, user) = call(
            &app,
            "POST",
            "/api/users",
            Some(json!({
                "email": "lee@example.com",
                "name": "Lee",
                "password": "longenough",
                "age": 40,
                "goal": "weight loss"
            })),
        )
        .await;
        let id: uuid::Uuid = user["data"]["id"].as_str().unwrap().parse().unwrap();

        let profiles = UserProfiles::new(modules.accounts.users());
        let profile = profiles.profile(id).await.unwrap().unwrap();
        assert_eq!(profile.age, Some(40));
        assert_eq!(profile.goal.as_deref(), Some("weight loss"));
        assert_eq!(profiles.profile(uuid::Uuid::now_v7()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn generation_without_api_key_is_bad_gateway() {
        let (app, _) = app().await;
        let (status, body) = call(&app, "POST", "/api/genai/daily", Some(json!({}))).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert!(body["message"].as_str().unwrap().contains("api key"), "{body}");
    }
}
