//! Transfer shapes shared across the HTTP boundary.

pub mod api;
pub mod student;
