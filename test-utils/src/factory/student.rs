//! Student factory for creating test student rows.
//!
//! This module provides factory methods for inserting student rows with sensible
//! defaults. The factory supports customization through a builder pattern.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test students with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::student::StudentFactory;
///
/// let student = StudentFactory::new(&db)
///     .name("Ann")
///     .age(20)
///     .grade(85)
///     .build()
///     .await?;
/// ```
pub struct StudentFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    age: i32,
    grade: i32,
}

impl<'a> StudentFactory<'a> {
    /// Creates a new StudentFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Student {id}"` where id is auto-incremented
    /// - age: `20`
    /// - grade: `75`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the row
    ///
    /// # Returns
    /// - `StudentFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Student {}", id),
            age: 20,
            grade: 75,
        }
    }

    /// Sets the name for the student.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the age for the student.
    pub fn age(mut self, age: i32) -> Self {
        self.age = age;
        self
    }

    /// Sets the grade for the student.
    pub fn grade(mut self, grade: i32) -> Self {
        self.grade = grade;
        self
    }

    /// Builds and inserts the student row into the database.
    ///
    /// # Returns
    /// - `Ok(entity::student::Model)` - Created student row with its assigned ID
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::student::Model, DbErr> {
        entity::student::ActiveModel {
            name: ActiveValue::Set(self.name),
            age: ActiveValue::Set(self.age),
            grade: ActiveValue::Set(self.grade),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a student with default values.
///
/// Shorthand for `StudentFactory::new(db).build().await`.
pub async fn create_student(db: &DatabaseConnection) -> Result<entity::student::Model, DbErr> {
    StudentFactory::new(db).build().await
}

/// Creates a student with a specific grade.
///
/// Shorthand for `StudentFactory::new(db).grade(grade).build().await`.
///
/// # Example
///
/// ```rust,ignore
/// let failing = create_student_with_grade(db, 20).await?;
/// ```
pub async fn create_student_with_grade(
    db: &DatabaseConnection,
    grade: i32,
) -> Result<entity::student::Model, DbErr> {
    StudentFactory::new(db).grade(grade).build().await
}
