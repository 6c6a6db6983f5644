use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use std::sync::Arc;

use crate::application::use_cases::{ListImagesUseCase, list_images::ListImagesRequest};
use crate::presentation::http::dto::{GalleryQueryDto, ImageListResponseDto};
use crate::presentation::http::errors::AppError;
use crate::presentation::http::views::{GalleryPage, GalleryView};

/// Raw query pairs in request order; an unparseable query string reads as empty.
fn gallery_query(query: Result<Query<Vec<(String, String)>>, QueryRejection>) -> GalleryQueryDto {
    query
        .map(|Query(pairs)| GalleryQueryDto::from(pairs))
        .unwrap_or_default()
}

pub struct GalleryHandler {
    list_images_use_case: Arc<ListImagesUseCase>,
    view: Arc<GalleryView>,
    images_per_page: usize,
}

impl GalleryHandler {
    pub fn new(
        list_images_use_case: Arc<ListImagesUseCase>,
        view: Arc<GalleryView>,
        images_per_page: usize,
    ) -> Self {
        Self {
            list_images_use_case,
            view,
            images_per_page,
        }
    }

    pub async fn index(
        State(handler): State<Arc<GalleryHandler>>,
        query: Result<Query<Vec<(String, String)>>, QueryRejection>,
    ) -> Result<Response, AppError> {
        let query = gallery_query(query);
        let request = ListImagesRequest {
            page: query.page_number(),
            per_page: handler.images_per_page,
        };

        let (status, page) = match handler.list_images_use_case.execute(request).await {
            Ok(response) => (StatusCode::OK, GalleryPage::from(response)),
            Err(e) => {
                tracing::error!("Failed to list images: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    GalleryPage::failed("Failed to load images"),
                )
            }
        };

        let html = handler.view.render_index(&page).map_err(|e| {
            tracing::error!("Failed to render gallery: {}", e);
            AppError::Internal("Failed to render page".to_string())
        })?;

        Ok((status, Html(html)).into_response())
    }

    pub async fn list_images(
        State(handler): State<Arc<GalleryHandler>>,
        query: Result<Query<Vec<(String, String)>>, QueryRejection>,
    ) -> Result<impl IntoResponse, AppError> {
        let query = gallery_query(query);
        let request = ListImagesRequest {
            page: query.page_number(),
            per_page: query.per_page_or(handler.images_per_page),
        };

        match handler.list_images_use_case.execute(request).await {
            Ok(response) => Ok((StatusCode::OK, Json(ImageListResponseDto::from(response)))),
            Err(e) => {
                tracing::error!("Failed to list images: {}", e);
                Err(AppError::Internal("Failed to load images".to_string()))
            }
        }
    }
}
