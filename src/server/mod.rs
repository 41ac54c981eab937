//! Server-side API backend and business logic.
//!
//! This module contains the complete backend implementation for the student records
//! service. The backend uses Axum as the web framework and SeaORM for database
//! operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, validation, and DTO conversion
//! - **Service Layer** (`service/`) - Student lifecycle (add-new vs. update) and delegation to the data layer
//! - **Data Layer** (`data/`) - One parameterized statement per store operation
//! - **Model Layer** (`model/`) - Domain entity and validated parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (the database connection pool)
//! - **Startup** (`startup`) - Database connection and schema bootstrap
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to the student controller
//! 2. **Controller** validates the ID or payload, builds or locates a `Student`, calls the service
//! 3. **Service** decides between insert and update, calls the repository
//! 4. **Data** runs a single statement against the store and maps rows
//! 5. **Controller** converts the outcome to a status code and DTO

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
