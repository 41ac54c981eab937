use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Generic error body returned for unexpected server failures.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Body returned when a write reached the store but did not take effect.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    pub message: String,
}
