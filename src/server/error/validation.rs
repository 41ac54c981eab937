use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Message returned to the client for any rejected student payload.
pub const INVALID_STUDENT_DATA: &str = "Invalid Student Data";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// The request carried no parseable student record.
    #[error("Student record is missing or malformed: {0}")]
    MissingBody(String),

    /// Student name is empty.
    #[error("Student name must not be empty")]
    EmptyName,

    /// Student age is below zero.
    #[error("Student age must not be negative, got {0}")]
    NegativeAge(i32),

    /// Student grade is outside of `0..=100`.
    #[error("Student grade must be between 0 and 100, got {0}")]
    GradeOutOfRange(i32),
}

/// Converts validation errors into HTTP responses.
///
/// Every variant maps to 400 Bad Request with the same plain text message. The
/// specific reason is logged at debug level only.
impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        tracing::debug!("Rejected student data: {}", self);

        (StatusCode::BAD_REQUEST, INVALID_STUDENT_DATA).into_response()
    }
}
