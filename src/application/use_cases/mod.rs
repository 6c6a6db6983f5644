pub mod delete_image;
pub mod delete_images_batch;
pub mod list_images;
pub mod upload_image;

pub use delete_image::DeleteImageUseCase;
pub use delete_images_batch::DeleteImagesBatchUseCase;
pub use list_images::ListImagesUseCase;
pub use upload_image::UploadImageUseCase;
