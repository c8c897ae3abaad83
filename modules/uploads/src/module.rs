use std::sync::Arc;

use axum::Router;
use grocer_kit::module::RestfulModule;
use tracing::info;

use crate::api::rest::routes;
use crate::config::StorageConfig;
use crate::domain::ports::ObjectStorage;
use crate::domain::service::UploadService;
use crate::infra::S3ObjectStorage;

pub struct UploadsModule {
    service: Arc<UploadService>,
}

impl UploadsModule {
    /// Module backed by the configured S3-compatible bucket.
    #[must_use]
    pub fn new(cfg: &StorageConfig) -> Self {
        info!(bucket = %cfg.bucket, endpoint = ?cfg.endpoint, "initializing uploads module");
        Self::with_storage(Arc::new(S3ObjectStorage::new(cfg)))
    }

    #[must_use]
    pub fn with_storage(storage: Arc<dyn ObjectStorage>) -> Self {
        Self {
            service: Arc::new(UploadService::new(storage)),
        }
    }

    /// Shared service, also handed to modules that store image paths.
    #[must_use]
    pub fn service(&self) -> Arc<UploadService> {
        self.service.clone()
    }
}

impl RestfulModule for UploadsModule {
    fn register_rest(&self, router: Router) -> Router {
        routes::register_routes(router, self.service.clone())
    }
}
