use std::path::Path;
use std::sync::Arc;

use crate::application::ports::{ImageStorage, image_storage::ImageStorageError};
use crate::domain::value_objects::ImageExtension;

#[derive(Debug)]
pub enum UploadImageError {
    StorageError(String),
    ValidationError(String),
}

impl std::fmt::Display for UploadImageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UploadImageError::StorageError(msg) => write!(f, "Storage error: {}", msg),
            UploadImageError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
        }
    }
}

impl std::error::Error for UploadImageError {}

impl From<ImageStorageError> for UploadImageError {
    fn from(error: ImageStorageError) -> Self {
        UploadImageError::StorageError(error.to_string())
    }
}

#[derive(Debug, Clone)]
pub struct UploadImageRequest {
    pub original_file_name: String,
    pub file_data: Vec<u8>,
}

#[derive(Debug, Clone)]
pub struct UploadImageResponse {
    pub stored_file_name: String,
}

pub struct UploadImageUseCase {
    image_storage: Arc<dyn ImageStorage>,
}

impl UploadImageUseCase {
    pub fn new(image_storage: Arc<dyn ImageStorage>) -> Self {
        Self { image_storage }
    }

    pub async fn execute(
        &self,
        request: UploadImageRequest,
    ) -> Result<UploadImageResponse, UploadImageError> {
        if request.file_data.is_empty() {
            return Err(UploadImageError::ValidationError(
                "File data cannot be empty".to_string(),
            ));
        }

        // The original extension is kept verbatim, case included.
        let extension = Path::new(&request.original_file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .filter(|ext| ImageExtension::parse(ext).is_some())
            .ok_or_else(|| {
                UploadImageError::ValidationError(format!(
                    "Unsupported image type: {}",
                    request.original_file_name
                ))
            })?;

        let stored_file_name = self
            .image_storage
            .store_image(&format!(".{}", extension), &request.file_data)
            .await?;

        tracing::debug!(
            original = %request.original_file_name,
            stored = %stored_file_name,
            bytes = request.file_data.len(),
            "image stored"
        );

        Ok(UploadImageResponse { stored_file_name })
    }
}
