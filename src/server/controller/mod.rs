//! HTTP request handlers.

pub mod student;
