use axum::{Router, routing::get};
use std::sync::Arc;

use crate::presentation::http::handlers::GalleryHandler;

pub fn gallery_routes(gallery_handler: Arc<GalleryHandler>) -> Router {
    Router::new()
        .route("/", get(GalleryHandler::index))
        .route("/api/v1/images", get(GalleryHandler::list_images))
        .with_state(gallery_handler)
}
