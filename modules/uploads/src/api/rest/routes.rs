use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::{Extension, Router};

use crate::domain::service::{MAX_IMAGE_BYTES, UploadService};

use super::handlers;

pub fn register_routes(router: Router, service: Arc<UploadService>) -> Router {
    let uploads = Router::new()
        .route("/api/uploads/images", post(handlers::upload_image))
        .route(
            "/api/uploads/images/{path}",
            post(handlers::upload_image_into_folder)
                .get(handlers::get_image_url)
                .delete(handlers::delete_image),
        )
        // Leave room above the ceiling so oversized files reach validation.
        .layer(DefaultBodyLimit::max(MAX_IMAGE_BYTES * 2))
        .layer(Extension(service));

    router.merge(uploads)
}
