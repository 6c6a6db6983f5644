use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::StoredImage;
use crate::domain::value_objects::{FileSize, UploadRoot};

/// A gallery entry. Rebuilt from the filesystem on every listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageInfo {
    name: String,
    size: FileSize,
    created_at: DateTime<Utc>,
    url: String,
}

impl ImageInfo {
    pub fn new(name: String, size: FileSize, created_at: DateTime<Utc>) -> Self {
        let url = UploadRoot::public_url(&name);
        Self {
            name,
            size,
            created_at,
            url,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> FileSize {
        self.size
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl From<StoredImage> for ImageInfo {
    fn from(stored: StoredImage) -> Self {
        Self::new(
            stored.name().to_string(),
            FileSize::from_bytes(stored.size_bytes()),
            stored.modified_at(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_image_info_from_stored_image() {
        let modified = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let info = ImageInfo::from(StoredImage::new("cat.png".to_string(), 2048, modified));

        assert_eq!(info.name(), "cat.png");
        assert_eq!(info.size().to_string(), "2.00 KB");
        assert_eq!(info.created_at(), modified);
        assert_eq!(info.url(), "/uploads/cat.png");
    }
}
