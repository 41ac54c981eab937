use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Flat transfer record for a single student.
///
/// The `id` is ignored on create and defaults to `0` when omitted from a request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StudentDto {
    #[serde(default)]
    pub id: i32,
    pub name: String,
    pub age: i32,
    pub grade: i32,
}
