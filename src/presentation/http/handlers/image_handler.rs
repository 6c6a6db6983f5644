use axum::{
    Json,
    extract::{Multipart, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use std::sync::Arc;

use crate::application::use_cases::{
    DeleteImageUseCase, DeleteImagesBatchUseCase, UploadImageUseCase,
    delete_image::{DeleteImageError, DeleteImageRequest},
    delete_images_batch::{DeleteImagesBatchError, DeleteImagesBatchRequest},
    upload_image::{UploadImageError, UploadImageRequest},
};
use crate::presentation::http::dto::{
    DeleteBatchRequestDto, DeleteBatchResponseDto, DeleteImageRequestDto, DeleteImageResponseDto,
    UploadResponseDto,
};
use crate::presentation::http::errors::AppError;

/// Multipart field carrying the uploaded file.
const IMAGE_FIELD: &str = "image";

pub struct ImageHandler {
    upload_use_case: Arc<UploadImageUseCase>,
    delete_use_case: Arc<DeleteImageUseCase>,
    delete_batch_use_case: Arc<DeleteImagesBatchUseCase>,
}

impl ImageHandler {
    pub fn new(
        upload_use_case: Arc<UploadImageUseCase>,
        delete_use_case: Arc<DeleteImageUseCase>,
        delete_batch_use_case: Arc<DeleteImagesBatchUseCase>,
    ) -> Self {
        Self {
            upload_use_case,
            delete_use_case,
            delete_batch_use_case,
        }
    }

    pub async fn upload_image(
        State(handler): State<Arc<ImageHandler>>,
        mut multipart: Multipart,
    ) -> Result<impl IntoResponse, AppError> {
        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|_| AppError::BadRequest("No image is received".to_string()))?
        {
            if field.name() != Some(IMAGE_FIELD) {
                continue;
            }

            // A part without a filename is a plain form value, not a file.
            let Some(original_file_name) = field.file_name().map(str::to_string) else {
                continue;
            };
            let file_data = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(format!("Failed to read image data: {}", e)))?
                .to_vec();

            let request = UploadImageRequest {
                original_file_name,
                file_data,
            };

            return match handler.upload_use_case.execute(request).await {
                Ok(response) => Ok((StatusCode::OK, Json(UploadResponseDto::from(response)))),
                Err(UploadImageError::ValidationError(msg)) => Err(AppError::BadRequest(msg)),
                Err(e @ UploadImageError::StorageError(_)) => {
                    tracing::error!("Failed to store upload: {}", e);
                    Err(AppError::Internal("Unable to save the image".to_string()))
                }
            };
        }

        Err(AppError::BadRequest("No image is received".to_string()))
    }

    pub async fn delete_image(
        State(handler): State<Arc<ImageHandler>>,
        payload: Result<Json<DeleteImageRequestDto>, JsonRejection>,
    ) -> Result<impl IntoResponse, AppError> {
        let Json(body) =
            payload.map_err(|_| AppError::BadRequest("Invalid request body".to_string()))?;

        let request = DeleteImageRequest {
            file_name: body.filename.unwrap_or_default(),
        };

        match handler.delete_use_case.execute(request).await {
            Ok(response) => Ok((StatusCode::OK, Json(DeleteImageResponseDto::from(response)))),
            Err(DeleteImageError::InvalidFilename(_)) => {
                Err(AppError::BadRequest("Invalid filename".to_string()))
            }
            Err(DeleteImageError::NotFound(_)) => {
                Err(AppError::NotFound("File not found".to_string()))
            }
            Err(e @ DeleteImageError::DeleteFailed(_)) => {
                tracing::error!("Failed to delete image: {}", e);
                Err(AppError::Internal("Failed to delete file".to_string()))
            }
        }
    }

    pub async fn delete_images(
        State(handler): State<Arc<ImageHandler>>,
        payload: Result<Json<DeleteBatchRequestDto>, JsonRejection>,
    ) -> Result<impl IntoResponse, AppError> {
        let Json(body) =
            payload.map_err(|_| AppError::BadRequest("Invalid request body".to_string()))?;

        let request = DeleteImagesBatchRequest {
            file_names: body.filenames.unwrap_or_default(),
        };

        match handler.delete_batch_use_case.execute(request).await {
            Ok(response) => Ok((StatusCode::OK, Json(DeleteBatchResponseDto::from(response)))),
            Err(DeleteImagesBatchError::ValidationError(msg)) => Err(AppError::BadRequest(msg)),
        }
    }
}
