use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponseDto {
    pub error: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponseDto {
    pub status: String,
    pub version: String,
}
