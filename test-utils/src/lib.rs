//! Student Records Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the student
//! records service. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases and factories for seeding student rows.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Helpers for inserting rows with sensible defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_student_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_student_tables().build().await?;
//!
//!     let db = test.db.as_ref().unwrap();
//!     let student = factory::create_student(db).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
