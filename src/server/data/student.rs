//! Student data repository for database operations
//!
//! Provides the `StudentRepository`, the persistence gateway for student records. Each
//! method stands in for one of the store procedures the service is specified against
//! (`GetAllStudents`, `GetPassedStudents`, `GetAverageGrade`, `GetStudentById`,
//! `AddStudent`, `UpdateStudent`, `DeleteStudent`) and issues exactly one parameterized
//! statement. Connections are checked out of the pool per statement and returned on
//! every exit path.

use sea_orm::{
    sea_query::{Expr, Func},
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

use crate::server::model::student::{StudentParam, PASSING_GRADE};

/// Repository providing database operations for student records.
///
/// Holds a reference to the injected database connection pool and nothing else.
pub struct StudentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudentRepository<'a> {
    /// Creates a new StudentRepository instance
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `StudentRepository` - new repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every stored student (`GetAllStudents`)
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - All students ordered by ID, empty if there are none
    /// - `Err(DbErr)` - Database error during select
    pub async fn get_all(&self) -> Result<Vec<entity::student::Model>, DbErr> {
        entity::prelude::Student::find()
            .order_by_asc(entity::student::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets students with a passing grade (`GetPassedStudents`)
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - Students whose grade is at least `PASSING_GRADE`, ordered by ID
    /// - `Err(DbErr)` - Database error during select
    pub async fn get_passed(&self) -> Result<Vec<entity::student::Model>, DbErr> {
        entity::prelude::Student::find()
            .filter(entity::student::Column::Grade.gte(PASSING_GRADE))
            .order_by_asc(entity::student::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets the average grade across all students (`GetAverageGrade`)
    ///
    /// The store yields `NULL` for an empty table, which is reported as `0.0`.
    ///
    /// # Returns
    /// - `Ok(f64)` - Average grade, `0.0` when no students exist
    /// - `Err(DbErr)` - Database error during select
    pub async fn get_average_grade(&self) -> Result<f64, DbErr> {
        let average: Option<Option<f64>> = entity::prelude::Student::find()
            .select_only()
            .column_as(
                sea_orm::sea_query::SimpleExpr::from(Func::avg(Expr::col(entity::student::Column::Grade))),
                "average_grade",
            )
            .into_tuple()
            .one(self.db)
            .await?;

        Ok(average.flatten().unwrap_or(0.0))
    }

    /// Finds a student by ID (`GetStudentById`)
    ///
    /// # Arguments
    /// - `id` - ID of the student to retrieve
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The requested student if found
    /// - `Ok(None)` - No student has this ID
    /// - `Err(DbErr)` - Database error during select
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::student::Model>, DbErr> {
        entity::prelude::Student::find_by_id(id).one(self.db).await
    }

    /// Inserts a new student (`AddStudent`) and returns the store-assigned ID
    ///
    /// The ID carried by `param` is ignored.
    ///
    /// # Arguments
    /// - `param` - Validated student fields
    ///
    /// # Returns
    /// - `Ok(Some(id))` - The ID assigned to the new row
    /// - `Ok(None)` - The store did not produce an ID; the insert must be treated as failed
    /// - `Err(DbErr)` - Database error during insert
    pub async fn insert(&self, param: StudentParam) -> Result<Option<i32>, DbErr> {
        let student = entity::student::ActiveModel {
            name: ActiveValue::Set(param.name),
            age: ActiveValue::Set(param.age),
            grade: ActiveValue::Set(param.grade),
            ..Default::default()
        };

        match entity::prelude::Student::insert(student).exec(self.db).await {
            Ok(result) if result.last_insert_id > 0 => Ok(Some(result.last_insert_id)),
            Ok(_) | Err(DbErr::RecordNotInserted) => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Updates the student of the provided ID (`UpdateStudent`)
    ///
    /// # Arguments
    /// - `id` - ID of the student to update
    /// - `param` - New values for name, age & grade
    ///
    /// # Returns
    /// - `Ok(true)` - Exactly one row was updated
    /// - `Ok(false)` - No row (or, unexpectedly, more than one) was affected
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, id: i32, param: StudentParam) -> Result<bool, DbErr> {
        let result = entity::prelude::Student::update_many()
            .set(entity::student::ActiveModel {
                name: ActiveValue::Set(param.name),
                age: ActiveValue::Set(param.age),
                grade: ActiveValue::Set(param.grade),
                ..Default::default()
            })
            .filter(entity::student::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Deletes the student of the provided ID (`DeleteStudent`)
    ///
    /// # Arguments
    /// - `id` - ID of the student to delete
    ///
    /// # Returns
    /// - `Ok(true)` - Exactly one row was deleted
    /// - `Ok(false)` - No student had this ID
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Student::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }
}
