pub mod local_image_storage;

pub use local_image_storage::LocalImageStorage;
