use axum::Router;
use axum::extract::DefaultBodyLimit;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::classify::ServerErrorsFailureClass;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use crate::domain::value_objects::UploadRoot;
use crate::infrastructure::config::AppConfig;
use crate::presentation::http::{
    handlers::{GalleryHandler, ImageHandler},
    routes::{gallery_routes, health_routes, image_routes, static_routes},
};

pub struct HttpServer {
    gallery_handler: Arc<GalleryHandler>,
    image_handler: Arc<ImageHandler>,
    upload_root: UploadRoot,
    bind_address: String,
    max_upload_bytes: usize,
}

impl HttpServer {
    pub fn new(
        gallery_handler: Arc<GalleryHandler>,
        image_handler: Arc<ImageHandler>,
        config: &AppConfig,
    ) -> Self {
        Self {
            gallery_handler,
            image_handler,
            upload_root: UploadRoot::new(config.upload_dir.clone()),
            bind_address: config.bind_address(),
            max_upload_bytes: config.max_upload_bytes,
        }
    }

    pub fn router(&self) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        Router::new()
            .merge(health_routes())
            .merge(gallery_routes(self.gallery_handler.clone()))
            .merge(image_routes(self.image_handler.clone()))
            .merge(static_routes(&self.upload_root))
            .layer(DefaultBodyLimit::disable())
            .layer(RequestBodyLimitLayer::new(self.max_upload_bytes))
            .layer(cors)
            .layer(
                TraceLayer::new_for_http()
                    .on_request(
                        |request: &axum::http::Request<axum::body::Body>, _span: &tracing::Span| {
                            tracing::info!(
                                "Received request: {} {}",
                                request.method(),
                                request.uri()
                            );
                        },
                    )
                    .on_response(
                        |response: &axum::http::Response<axum::body::Body>,
                         latency: std::time::Duration,
                         _span: &tracing::Span| {
                            tracing::info!(
                                "Response: {} (took {} ms)",
                                response.status(),
                                latency.as_millis()
                            );
                        },
                    )
                    .on_failure(
                        |error: ServerErrorsFailureClass,
                         latency: std::time::Duration,
                         _span: &tracing::Span| {
                            tracing::error!(
                                "Request failed: {:?} (took {} ms)",
                                error,
                                latency.as_millis()
                            );
                        },
                    ),
            )
    }

    pub async fn run(self) -> Result<(), Box<dyn std::error::Error>> {
        let app = self.router();

        let listener = TcpListener::bind(&self.bind_address).await?;
        tracing::info!(
            "Serving {} on {}",
            self.upload_root.path().display(),
            self.bind_address
        );
        axum::serve(listener, app).await?;

        Ok(())
    }
}
