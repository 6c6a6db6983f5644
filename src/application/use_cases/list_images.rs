use std::cmp::Reverse;
use std::sync::Arc;

use crate::application::ports::{ImageStorage, image_storage::ImageStorageError};
use crate::domain::entities::ImageInfo;
use crate::domain::value_objects::PageWindow;

#[derive(Debug)]
pub enum ListImagesError {
    DirectoryUnavailable(String),
    ValidationError(String),
}

impl std::fmt::Display for ListImagesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListImagesError::DirectoryUnavailable(msg) => {
                write!(f, "Directory unavailable: {}", msg)
            }
            ListImagesError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
        }
    }
}

impl std::error::Error for ListImagesError {}

impl From<ImageStorageError> for ListImagesError {
    fn from(error: ImageStorageError) -> Self {
        ListImagesError::DirectoryUnavailable(error.to_string())
    }
}

#[derive(Debug, Clone)]
pub struct ListImagesRequest {
    pub page: i64,
    pub per_page: usize,
}

#[derive(Debug, Clone)]
pub struct ListImagesResponse {
    pub images: Vec<ImageInfo>,
    /// Effective page after clamping.
    pub page: usize,
    pub per_page: usize,
    pub total_pages: usize,
    pub total_count: usize,
}

pub struct ListImagesUseCase {
    image_storage: Arc<dyn ImageStorage>,
}

impl ListImagesUseCase {
    pub fn new(image_storage: Arc<dyn ImageStorage>) -> Self {
        Self { image_storage }
    }

    pub async fn execute(
        &self,
        request: ListImagesRequest,
    ) -> Result<ListImagesResponse, ListImagesError> {
        if request.per_page == 0 {
            return Err(ListImagesError::ValidationError(
                "Images per page must be positive".to_string(),
            ));
        }

        let mut images = self.image_storage.scan_images().await?;
        images.sort_by_key(|image| Reverse(image.modified_at()));

        let total_count = images.len();
        let window = PageWindow::new(total_count, request.page, request.per_page);

        tracing::debug!(
            total = total_count,
            requested_page = request.page,
            page = window.page(),
            total_pages = window.total_pages(),
            start = window.start(),
            end = window.end(),
            "paginated image listing"
        );

        let images = window
            .slice(images)
            .into_iter()
            .map(ImageInfo::from)
            .collect();

        Ok(ListImagesResponse {
            images,
            page: window.page(),
            per_page: request.per_page,
            total_pages: window.total_pages(),
            total_count,
        })
    }
}
