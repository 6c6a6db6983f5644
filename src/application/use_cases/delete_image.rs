use serde::Serialize;
use std::sync::Arc;

use crate::application::ports::{ImageStorage, image_storage::ImageStorageError};
use crate::domain::value_objects::UploadRoot;

#[derive(Debug)]
pub enum DeleteImageError {
    InvalidFilename(String),
    NotFound(String),
    DeleteFailed(String),
}

impl std::fmt::Display for DeleteImageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeleteImageError::InvalidFilename(name) => write!(f, "Invalid filename: {}", name),
            DeleteImageError::NotFound(name) => write!(f, "File not found: {}", name),
            DeleteImageError::DeleteFailed(msg) => write!(f, "Delete failed: {}", msg),
        }
    }
}

impl std::error::Error for DeleteImageError {}

impl DeleteImageError {
    pub fn reason(&self) -> DeleteFailureReason {
        match self {
            DeleteImageError::InvalidFilename(_) => DeleteFailureReason::InvalidFilename,
            DeleteImageError::NotFound(_) => DeleteFailureReason::NotFound,
            DeleteImageError::DeleteFailed(_) => DeleteFailureReason::DeleteFailed,
        }
    }
}

/// Per-file outcome reported by batch deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DeleteFailureReason {
    #[serde(rename = "invalid filename")]
    InvalidFilename,
    #[serde(rename = "not found")]
    NotFound,
    #[serde(rename = "delete failed")]
    DeleteFailed,
}

impl DeleteFailureReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeleteFailureReason::InvalidFilename => "invalid filename",
            DeleteFailureReason::NotFound => "not found",
            DeleteFailureReason::DeleteFailed => "delete failed",
        }
    }
}

impl std::fmt::Display for DeleteFailureReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct DeleteImageRequest {
    pub file_name: String,
}

#[derive(Debug, Clone)]
pub struct DeleteImageResponse {
    pub file_name: String,
}

pub struct DeleteImageUseCase {
    image_storage: Arc<dyn ImageStorage>,
    upload_root: UploadRoot,
}

impl DeleteImageUseCase {
    pub fn new(image_storage: Arc<dyn ImageStorage>, upload_root: UploadRoot) -> Self {
        Self {
            image_storage,
            upload_root,
        }
    }

    pub async fn execute(
        &self,
        request: DeleteImageRequest,
    ) -> Result<DeleteImageResponse, DeleteImageError> {
        let target = self
            .upload_root
            .resolve(&request.file_name)
            .ok_or_else(|| DeleteImageError::InvalidFilename(request.file_name.clone()))?;

        self.image_storage
            .remove_image(&target)
            .await
            .map_err(|e| match e {
                ImageStorageError::NotFound(_) => {
                    DeleteImageError::NotFound(request.file_name.clone())
                }
                other => DeleteImageError::DeleteFailed(other.to_string()),
            })?;

        tracing::debug!(file_name = %request.file_name, "image deleted");

        Ok(DeleteImageResponse {
            file_name: request.file_name,
        })
    }
}
