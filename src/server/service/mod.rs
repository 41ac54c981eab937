//! Service layer for business logic and orchestration.
//!
//! This module sits between the controller (API) layer and the data (repository) layer.
//! Services work with domain models rather than DTOs or entity models and own the
//! lifecycle rules of those models.

pub mod student;
