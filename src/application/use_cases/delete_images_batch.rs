use std::collections::BTreeMap;
use std::sync::Arc;

use crate::application::use_cases::delete_image::{
    DeleteFailureReason, DeleteImageRequest, DeleteImageUseCase,
};

#[derive(Debug)]
pub enum DeleteImagesBatchError {
    ValidationError(String),
}

impl std::fmt::Display for DeleteImagesBatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeleteImagesBatchError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
        }
    }
}

impl std::error::Error for DeleteImagesBatchError {}

#[derive(Debug, Clone)]
pub struct DeleteImagesBatchRequest {
    pub file_names: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct DeleteImagesBatchResponse {
    /// Successfully removed names, in request order.
    pub deleted: Vec<String>,
    pub failed: BTreeMap<String, DeleteFailureReason>,
}

/// Deletes each file independently. Failures are recorded, never fatal, and
/// nothing is rolled back.
pub struct DeleteImagesBatchUseCase {
    delete_image_use_case: Arc<DeleteImageUseCase>,
}

impl DeleteImagesBatchUseCase {
    pub fn new(delete_image_use_case: Arc<DeleteImageUseCase>) -> Self {
        Self {
            delete_image_use_case,
        }
    }

    pub async fn execute(
        &self,
        request: DeleteImagesBatchRequest,
    ) -> Result<DeleteImagesBatchResponse, DeleteImagesBatchError> {
        if request.file_names.is_empty() {
            return Err(DeleteImagesBatchError::ValidationError(
                "No filenames provided".to_string(),
            ));
        }

        let mut response = DeleteImagesBatchResponse {
            deleted: Vec::with_capacity(request.file_names.len()),
            failed: BTreeMap::new(),
        };

        for file_name in request.file_names {
            let outcome = self
                .delete_image_use_case
                .execute(DeleteImageRequest {
                    file_name: file_name.clone(),
                })
                .await;

            match outcome {
                Ok(deleted) => response.deleted.push(deleted.file_name),
                Err(e) => {
                    tracing::debug!(file_name = %file_name, error = %e, "batch entry not deleted");
                    response.failed.insert(file_name, e.reason());
                }
            }
        }

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::testing::{InMemoryImageStorage, at_second};
    use crate::domain::value_objects::UploadRoot;

    fn batch_use_case(storage: InMemoryImageStorage) -> DeleteImagesBatchUseCase {
        let single = DeleteImageUseCase::new(Arc::new(storage), UploadRoot::new("/uploads"));
        DeleteImagesBatchUseCase::new(Arc::new(single))
    }

    fn names(names: &[&str]) -> DeleteImagesBatchRequest {
        DeleteImagesBatchRequest {
            file_names: names.iter().map(|n| n.to_string()).collect(),
        }
    }

    #[tokio::test]
    async fn test_mixed_outcomes() {
        let use_case =
            batch_use_case(InMemoryImageStorage::new().with_image("a.png", 1, at_second(0)));

        let response = use_case
            .execute(names(&["a.png", "b.png", "../c.png"]))
            .await
            .unwrap();

        assert_eq!(response.deleted, vec!["a.png"]);
        assert_eq!(response.failed.len(), 2);
        assert_eq!(response.failed["b.png"], DeleteFailureReason::NotFound);
        assert_eq!(
            response.failed["../c.png"],
            DeleteFailureReason::InvalidFilename
        );
    }

    #[tokio::test]
    async fn test_failure_does_not_stop_batch() {
        let use_case = batch_use_case(
            InMemoryImageStorage::new()
                .with_image("locked.png", 1, at_second(0))
                .with_image("later.jpg", 1, at_second(1))
                .with_failing_removal("locked.png"),
        );

        let response = use_case
            .execute(names(&["locked.png", "notes.txt", "later.jpg"]))
            .await
            .unwrap();

        assert_eq!(response.deleted, vec!["later.jpg"]);
        assert_eq!(response.failed["locked.png"], DeleteFailureReason::DeleteFailed);
        assert_eq!(response.failed["notes.txt"], DeleteFailureReason::InvalidFilename);
    }

    #[tokio::test]
    async fn test_repeated_name_reports_second_attempt() {
        let use_case =
            batch_use_case(InMemoryImageStorage::new().with_image("a.png", 1, at_second(0)));

        let response = use_case.execute(names(&["a.png", "a.png"])).await.unwrap();
        assert_eq!(response.deleted, vec!["a.png"]);
        assert_eq!(response.failed["a.png"], DeleteFailureReason::NotFound);
    }

    #[tokio::test]
    async fn test_empty_batch_is_rejected() {
        let use_case = batch_use_case(InMemoryImageStorage::new());

        let result = use_case.execute(names(&[])).await;
        assert!(matches!(
            result,
            Err(DeleteImagesBatchError::ValidationError(_))
        ));
    }
}
