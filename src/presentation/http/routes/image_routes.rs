use axum::{Router, routing::post};
use std::sync::Arc;

use crate::presentation::http::handlers::ImageHandler;

pub fn image_routes(image_handler: Arc<ImageHandler>) -> Router {
    Router::new()
        .route("/api/v1/upload", post(ImageHandler::upload_image))
        .route("/api/v1/delete", post(ImageHandler::delete_image))
        .route("/api/v1/delete-batch", post(ImageHandler::delete_images))
        .with_state(image_handler)
}
