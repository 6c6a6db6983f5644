pub mod file_size;
pub mod image_extension;
pub mod page_window;
pub mod upload_root;

pub use file_size::FileSize;
pub use image_extension::ImageExtension;
pub use page_window::PageWindow;
pub use upload_root::UploadRoot;
