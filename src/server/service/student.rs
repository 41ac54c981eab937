//! Business logic for student records.
//!
//! The `StudentService` owns the `AddNew`/`Update` lifecycle of a `Student` entity and
//! otherwise delegates straight to the `StudentRepository`.

use sea_orm::DatabaseConnection;

use crate::{
    model::student::StudentDto,
    server::{
        data::student::StudentRepository,
        error::AppError,
        model::student::{dto_from_entity, Student, StudentMode},
    },
};

pub struct StudentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every student as a transfer record
    pub async fn get_all(&self) -> Result<Vec<StudentDto>, AppError> {
        let students = StudentRepository::new(self.db).get_all().await?;

        Ok(students.into_iter().map(dto_from_entity).collect())
    }

    /// Gets every student with a passing grade as a transfer record
    pub async fn get_passed(&self) -> Result<Vec<StudentDto>, AppError> {
        let students = StudentRepository::new(self.db).get_passed().await?;

        Ok(students.into_iter().map(dto_from_entity).collect())
    }

    /// Gets the average grade, `0.0` when no students exist
    pub async fn average_grade(&self) -> Result<f64, AppError> {
        Ok(StudentRepository::new(self.db).get_average_grade().await?)
    }

    /// Locates a student by ID
    ///
    /// Returns None if no student has this ID, otherwise an entity in update mode.
    pub async fn find(&self, id: i32) -> Result<Option<Student>, AppError> {
        let student = StudentRepository::new(self.db).find_by_id(id).await?;

        Ok(student.map(Student::from_entity))
    }

    /// Persists the student according to its mode
    ///
    /// A new student is inserted; on success it takes the assigned ID and moves to
    /// update mode, on failure it stays in add-new mode. A student in update mode is
    /// updated in place.
    ///
    /// Returns true if the store accepted the write.
    pub async fn save(&self, student: &mut Student) -> Result<bool, AppError> {
        let repo = StudentRepository::new(self.db);

        match student.mode() {
            StudentMode::AddNew => match repo.insert(student.to_param()).await? {
                Some(id) => {
                    student.mark_persisted(id);
                    Ok(true)
                }
                None => Ok(false),
            },
            StudentMode::Update => Ok(repo.update(student.id, student.to_param()).await?),
        }
    }

    /// Deletes a student by ID
    ///
    /// Returns true if a row was deleted, false if no student had this ID.
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(StudentRepository::new(self.db).delete(id).await?)
    }
}
