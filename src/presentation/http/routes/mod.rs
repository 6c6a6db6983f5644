pub mod gallery_routes;
pub mod health_routes;
pub mod image_routes;
pub mod static_routes;

pub use gallery_routes::*;
pub use health_routes::*;
pub use image_routes::*;
pub use static_routes::*;
