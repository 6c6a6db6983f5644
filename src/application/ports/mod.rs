pub mod image_storage;

pub use image_storage::ImageStorage;

#[cfg(test)]
pub mod testing;
