use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use std::collections::HashSet;
use std::path::Path;
use std::sync::Mutex;

use crate::application::ports::image_storage::{ImageStorage, ImageStorageError};
use crate::domain::entities::StoredImage;

/// `ImageStorage` double keyed by file name.
#[derive(Default)]
pub struct InMemoryImageStorage {
    images: Mutex<Vec<StoredImage>>,
    failing_removals: HashSet<String>,
    unavailable: bool,
    next_token: Mutex<i64>,
}

impl InMemoryImageStorage {
    pub fn new() -> Self {
        Self {
            next_token: Mutex::new(1_700_000_000_000_000_000),
            ..Default::default()
        }
    }

    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::new()
        }
    }

    pub fn with_image(self, name: &str, size_bytes: u64, modified_at: DateTime<Utc>) -> Self {
        self.images
            .lock()
            .unwrap()
            .push(StoredImage::new(name.to_string(), size_bytes, modified_at));
        self
    }

    pub fn with_failing_removal(mut self, name: &str) -> Self {
        self.failing_removals.insert(name.to_string());
        self
    }

    pub fn names(&self) -> Vec<String> {
        self.images
            .lock()
            .unwrap()
            .iter()
            .map(|image| image.name().to_string())
            .collect()
    }
}

pub fn at_second(second: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(1_700_000_000 + second, 0).unwrap()
}

#[async_trait]
impl ImageStorage for InMemoryImageStorage {
    async fn scan_images(&self) -> Result<Vec<StoredImage>, ImageStorageError> {
        if self.unavailable {
            return Err(ImageStorageError::DirectoryUnavailable(
                "no such directory".to_string(),
            ));
        }
        Ok(self.images.lock().unwrap().clone())
    }

    async fn remove_image(&self, path: &Path) -> Result<(), ImageStorageError> {
        let name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default()
            .to_string();

        if self.failing_removals.contains(&name) {
            return Err(ImageStorageError::DeleteFailed("permission denied".to_string()));
        }

        let mut images = self.images.lock().unwrap();
        let before = images.len();
        images.retain(|image| image.name() != name);
        if images.len() == before {
            return Err(ImageStorageError::NotFound(path.display().to_string()));
        }
        Ok(())
    }

    async fn store_image(&self, extension: &str, data: &[u8]) -> Result<String, ImageStorageError> {
        let mut token = self.next_token.lock().unwrap();
        *token += 1;
        let name = format!("{}{}", token, extension);
        self.images.lock().unwrap().push(StoredImage::new(
            name.clone(),
            data.len() as u64,
            Utc::now(),
        ));
        Ok(name)
    }
}
