use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::fs::Metadata;
use std::io::ErrorKind;
use std::path::Path;
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;

use crate::application::ports::image_storage::{ImageStorage, ImageStorageError};
use crate::domain::entities::StoredImage;
use crate::domain::value_objects::UploadRoot;
use crate::domain::value_objects::image_extension::is_allowed_image;

/// Upper bound on name bumps when a timestamp token is already taken.
const MAX_NAME_ATTEMPTS: i128 = 64;

pub struct LocalImageStorage {
    root: UploadRoot,
}

impl LocalImageStorage {
    pub fn new(root: UploadRoot) -> Self {
        Self { root }
    }

    pub async fn ensure_directory_exists(&self) -> Result<(), ImageStorageError> {
        fs::create_dir_all(self.root.path())
            .await
            .map_err(|e| ImageStorageError::WriteFailed(e.to_string()))
    }

    fn unavailable(&self, error: std::io::Error) -> ImageStorageError {
        ImageStorageError::DirectoryUnavailable(format!(
            "{}: {}",
            self.root.path().display(),
            error
        ))
    }

    async fn write_new_file(&self, path: &Path, data: &[u8]) -> Result<bool, ImageStorageError> {
        let mut file = match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .await
        {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => return Ok(false),
            Err(e) => return Err(ImageStorageError::WriteFailed(e.to_string())),
        };

        let written = async {
            file.write_all(data).await?;
            file.flush().await
        }
        .await;

        if let Err(e) = written {
            drop(file);
            if let Err(cleanup) = fs::remove_file(path).await {
                tracing::warn!(path = %path.display(), error = %cleanup, "failed to remove partial upload");
            }
            return Err(ImageStorageError::WriteFailed(e.to_string()));
        }

        Ok(true)
    }

    /// Writes under `<token><extension>`, bumping the token past taken names.
    async fn store_with_token(
        &self,
        token: i128,
        extension: &str,
        data: &[u8],
    ) -> Result<String, ImageStorageError> {
        for bump in 0..MAX_NAME_ATTEMPTS {
            let file_name = format!("{}{}", token + bump, extension);
            let path = self.root.path().join(&file_name);

            if self.write_new_file(&path, data).await? {
                return Ok(file_name);
            }
        }

        Err(ImageStorageError::WriteFailed(format!(
            "no free file name near token {}",
            token
        )))
    }
}

/// Entries whose metadata or mtime cannot be read are left out of the listing.
fn stored_image(name: String, metadata: std::io::Result<Metadata>) -> Option<StoredImage> {
    let metadata = metadata.ok()?;
    let modified = metadata.modified().ok()?;
    Some(StoredImage::new(
        name,
        metadata.len(),
        DateTime::<Utc>::from(modified),
    ))
}

fn timestamp_token(now: DateTime<Utc>) -> i128 {
    now.timestamp() as i128 * 1_000_000_000 + now.timestamp_subsec_nanos() as i128
}

#[async_trait]
impl ImageStorage for LocalImageStorage {
    async fn scan_images(&self) -> Result<Vec<StoredImage>, ImageStorageError> {
        let mut entries = fs::read_dir(self.root.path())
            .await
            .map_err(|e| self.unavailable(e))?;

        let mut images = Vec::new();

        while let Some(entry) = entries.next_entry().await.map_err(|e| self.unavailable(e))? {
            let is_dir = match entry.file_type().await {
                Ok(file_type) => file_type.is_dir(),
                Err(_) => continue,
            };
            if is_dir {
                continue;
            }

            let Ok(name) = entry.file_name().into_string() else {
                continue;
            };
            if !is_allowed_image(&name) {
                continue;
            }

            if let Some(image) = stored_image(name, entry.metadata().await) {
                images.push(image);
            }
        }

        tracing::debug!(
            directory = %self.root.path().display(),
            found = images.len(),
            "scanned upload directory"
        );

        Ok(images)
    }

    async fn remove_image(&self, path: &Path) -> Result<(), ImageStorageError> {
        fs::remove_file(path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => ImageStorageError::NotFound(path.display().to_string()),
            _ => ImageStorageError::DeleteFailed(e.to_string()),
        })
    }

    async fn store_image(&self, extension: &str, data: &[u8]) -> Result<String, ImageStorageError> {
        self.ensure_directory_exists().await?;
        self.store_with_token(timestamp_token(Utc::now()), extension, data)
            .await
    }
}
