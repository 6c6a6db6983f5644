pub mod gallery_handler;
pub mod image_handler;

pub use gallery_handler::GalleryHandler;
pub use image_handler::ImageHandler;
