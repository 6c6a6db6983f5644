pub mod image_dto;
pub mod response_dto;

pub use image_dto::*;
pub use response_dto::*;
