pub mod image_info;
pub mod stored_image;

pub use image_info::ImageInfo;
pub use stored_image::StoredImage;
