use axum::Router;
use tower_http::services::ServeDir;

use crate::domain::value_objects::UploadRoot;

/// Serves stored images under the same `/uploads/` prefix `ImageInfo` URLs use.
pub fn static_routes(upload_root: &UploadRoot) -> Router {
    Router::new().nest_service("/uploads", ServeDir::new(upload_root.path()))
}
