use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::application::use_cases::{
    delete_image::{DeleteFailureReason, DeleteImageResponse},
    delete_images_batch::DeleteImagesBatchResponse,
    list_images::ListImagesResponse,
    upload_image::UploadImageResponse,
};
use crate::domain::entities::ImageInfo;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ImageDto {
    pub name: String,
    pub size: String,
    pub created_at: String,
    pub url: String,
}

impl From<ImageInfo> for ImageDto {
    fn from(image: ImageInfo) -> Self {
        Self {
            name: image.name().to_string(),
            size: image.size().to_string(),
            created_at: image.created_at().to_rfc3339(),
            url: image.url().to_string(),
        }
    }
}

/// Query parameters are taken as raw strings so a malformed `page` falls
/// back to the first page instead of rejecting the request. A repeated key
/// keeps its first value.
#[derive(Debug, Default)]
pub struct GalleryQueryDto {
    pub page: Option<String>,
    pub per_page: Option<String>,
}

impl From<Vec<(String, String)>> for GalleryQueryDto {
    fn from(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "page" => &mut query.page,
                "per_page" => &mut query.per_page,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query
    }
}

impl GalleryQueryDto {
    pub fn page_number(&self) -> i64 {
        self.page
            .as_deref()
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .filter(|page| *page >= 1)
            .unwrap_or(1)
    }

    pub fn per_page_or(&self, default: usize) -> usize {
        self.per_page
            .as_deref()
            .and_then(|raw| raw.trim().parse::<usize>().ok())
            .filter(|per_page| *per_page > 0)
            .unwrap_or(default)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ImageListResponseDto {
    pub images: Vec<ImageDto>,
    pub page: usize,
    pub per_page: usize,
    pub total_pages: usize,
    pub total: usize,
}

impl From<ListImagesResponse> for ImageListResponseDto {
    fn from(response: ListImagesResponse) -> Self {
        Self {
            images: response.images.into_iter().map(ImageDto::from).collect(),
            page: response.page,
            per_page: response.per_page,
            total_pages: response.total_pages,
            total: response.total_count,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UploadResponseDto {
    pub message: String,
    pub filename: String,
}

impl From<UploadImageResponse> for UploadResponseDto {
    fn from(response: UploadImageResponse) -> Self {
        Self {
            message: "Image uploaded successfully".to_string(),
            filename: response.stored_file_name,
        }
    }
}

/// A missing or `null` filename reads as empty and fails validation.
#[derive(Debug, Deserialize)]
pub struct DeleteImageRequestDto {
    #[serde(default)]
    pub filename: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteImageResponseDto {
    pub message: String,
    pub filename: String,
}

impl From<DeleteImageResponse> for DeleteImageResponseDto {
    fn from(response: DeleteImageResponse) -> Self {
        Self {
            message: "Image deleted successfully".to_string(),
            filename: response.file_name,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct DeleteBatchRequestDto {
    #[serde(default)]
    pub filenames: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
pub struct DeleteBatchResponseDto {
    pub deleted: Vec<String>,
    pub failed: BTreeMap<String, DeleteFailureReason>,
}

impl From<DeleteImagesBatchResponse> for DeleteBatchResponseDto {
    fn from(response: DeleteImagesBatchResponse) -> Self {
        Self {
            deleted: response.deleted,
            failed: response.failed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(page: Option<&str>, per_page: Option<&str>) -> GalleryQueryDto {
        GalleryQueryDto {
            page: page.map(str::to_string),
            per_page: per_page.map(str::to_string),
        }
    }

    #[test]
    fn test_page_number_falls_back_to_first_page() {
        assert_eq!(query(None, None).page_number(), 1);
        assert_eq!(query(Some("abc"), None).page_number(), 1);
        assert_eq!(query(Some("0"), None).page_number(), 1);
        assert_eq!(query(Some("-3"), None).page_number(), 1);
        assert_eq!(query(Some("4"), None).page_number(), 4);
    }

    #[test]
    fn test_repeated_keys_keep_first_value() {
        let pairs = vec![
            ("page".to_string(), "1".to_string()),
            ("sort".to_string(), "name".to_string()),
            ("page".to_string(), "2".to_string()),
            ("per_page".to_string(), "5".to_string()),
            ("per_page".to_string(), "9".to_string()),
        ];
        let query = GalleryQueryDto::from(pairs);
        assert_eq!(query.page.as_deref(), Some("1"));
        assert_eq!(query.per_page.as_deref(), Some("5"));
    }

    #[test]
    fn test_null_filenames_read_as_absent() {
        let single: DeleteImageRequestDto = serde_json::from_str(r#"{"filename": null}"#).unwrap();
        assert_eq!(single.filename, None);

        let batch: DeleteBatchRequestDto = serde_json::from_str(r#"{"filenames": null}"#).unwrap();
        assert_eq!(batch.filenames, None);

        let empty: DeleteBatchRequestDto = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.filenames, None);
    }

    #[test]
    fn test_per_page_uses_default_when_unusable() {
        assert_eq!(query(None, None).per_page_or(20), 20);
        assert_eq!(query(None, Some("0")).per_page_or(20), 20);
        assert_eq!(query(None, Some("x")).per_page_or(20), 20);
        assert_eq!(query(None, Some("5")).per_page_or(20), 5);
    }
}
