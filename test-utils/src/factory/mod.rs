//! Factory methods for creating test data.
//!
//! This module provides factory methods for inserting student rows with sensible defaults,
//! reducing boilerplate in tests.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let student = factory::create_student(&db).await?;
//!
//!     // Create with a specific grade
//!     let failing = factory::create_student_with_grade(&db, 20).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let student = factory::student::StudentFactory::new(&db)
//!     .name("Ann")
//!     .age(20)
//!     .grade(85)
//!     .build()
//!     .await?;
//! ```

pub mod helpers;
pub mod student;

pub use student::{create_student, create_student_with_grade};
