pub mod config;
pub mod container;
pub mod file_system;

// Re-export commonly used items
pub use config::AppConfig;
