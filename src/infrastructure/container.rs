use std::sync::Arc;

use crate::{
    application::{
        ports::ImageStorage,
        use_cases::{
            DeleteImageUseCase, DeleteImagesBatchUseCase, ListImagesUseCase, UploadImageUseCase,
        },
    },
    domain::value_objects::UploadRoot,
    infrastructure::{config::AppConfig, file_system::LocalImageStorage},
    presentation::http::{
        handlers::{GalleryHandler, ImageHandler},
        views::GalleryView,
    },
};

pub struct AppContainer {
    // HTTP Handlers
    pub gallery_handler: Arc<GalleryHandler>,
    pub image_handler: Arc<ImageHandler>,
}

impl AppContainer {
    pub async fn new(config: &AppConfig) -> Result<Self, Box<dyn std::error::Error>> {
        let upload_root = UploadRoot::new(config.upload_dir.clone());

        // Create storage and make sure the upload directory exists up front
        let local_storage = LocalImageStorage::new(upload_root.clone());
        local_storage
            .ensure_directory_exists()
            .await
            .map_err(|e| format!("Failed to create upload directory: {}", e))?;
        let image_storage: Arc<dyn ImageStorage> = Arc::new(local_storage);

        // Create use cases
        let list_images_use_case = Arc::new(ListImagesUseCase::new(image_storage.clone()));
        let upload_image_use_case = Arc::new(UploadImageUseCase::new(image_storage.clone()));
        let delete_image_use_case = Arc::new(DeleteImageUseCase::new(
            image_storage.clone(),
            upload_root,
        ));
        let delete_images_batch_use_case = Arc::new(DeleteImagesBatchUseCase::new(
            delete_image_use_case.clone(),
        ));

        // Create HTTP handlers
        let view = Arc::new(
            GalleryView::new().map_err(|e| format!("Failed to load templates: {}", e))?,
        );

        let gallery_handler = Arc::new(GalleryHandler::new(
            list_images_use_case,
            view,
            config.images_per_page,
        ));

        let image_handler = Arc::new(ImageHandler::new(
            upload_image_use_case,
            delete_image_use_case,
            delete_images_batch_use_case,
        ));

        Ok(Self {
            gallery_handler,
            image_handler,
        })
    }
}
