use async_trait::async_trait;
use std::path::Path;

use crate::domain::entities::StoredImage;

#[derive(Debug)]
pub enum ImageStorageError {
    DirectoryUnavailable(String),
    NotFound(String),
    DeleteFailed(String),
    WriteFailed(String),
}

impl std::fmt::Display for ImageStorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImageStorageError::DirectoryUnavailable(msg) => {
                write!(f, "Upload directory unavailable: {}", msg)
            }
            ImageStorageError::NotFound(path) => write!(f, "File not found: {}", path),
            ImageStorageError::DeleteFailed(msg) => write!(f, "Delete failed: {}", msg),
            ImageStorageError::WriteFailed(msg) => write!(f, "Write failed: {}", msg),
        }
    }
}

impl std::error::Error for ImageStorageError {}

#[async_trait]
pub trait ImageStorage: Send + Sync {
    /// Every regular file with an allowed image extension. Entries that
    /// cannot be stat'ed are skipped; only an unreadable directory fails.
    async fn scan_images(&self) -> Result<Vec<StoredImage>, ImageStorageError>;

    async fn remove_image(&self, path: &Path) -> Result<(), ImageStorageError>;

    /// Persists `data` under a fresh timestamp-derived name ending in
    /// `extension` (including its leading dot) and returns that name.
    async fn store_image(&self, extension: &str, data: &[u8]) -> Result<String, ImageStorageError>;
}
