//! Domain & parameter models for student operations
//!
//! Defines the student domain entity with its persistence mode, the validated
//! parameter model used for writes, and conversions from entity models and into DTOs.

use crate::{model::student::StudentDto, server::error::validation::ValidationError};

/// Lowest grade counted as a pass by the store's passed-students query.
pub const PASSING_GRADE: i32 = 50;

/// Persistence mode of a student entity.
///
/// A student starts in `AddNew` and moves to `Update` once the store has assigned
/// it an identifier. The transition only ever goes one way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudentMode {
    AddNew,
    Update,
}

/// The student domain entity
///
/// Wraps the persisted student fields together with the mode that decides whether
/// saving inserts a new row or updates the existing one.
#[derive(Debug, Clone)]
pub struct Student {
    pub id: i32,
    pub name: String,
    pub age: i32,
    pub grade: i32,
    mode: StudentMode,
}

impl Student {
    /// Creates a student that has not been persisted yet
    ///
    /// The identifier is taken from the parameters but is ignored by the store on
    /// insert and replaced with the assigned one once saved.
    ///
    /// # Arguments
    /// - `param` - Validated student fields
    ///
    /// # Returns
    /// - `Student` - New entity in `StudentMode::AddNew`
    pub fn new(param: StudentParam) -> Self {
        Self {
            id: param.id,
            name: param.name,
            age: param.age,
            grade: param.grade,
            mode: StudentMode::AddNew,
        }
    }

    /// Converts a located entity model to the student domain model
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Student` - Domain entity in `StudentMode::Update`
    pub fn from_entity(entity: entity::student::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            age: entity.age,
            grade: entity.grade,
            mode: StudentMode::Update,
        }
    }

    pub fn mode(&self) -> StudentMode {
        self.mode
    }

    /// Replaces the editable fields with the provided parameters, keeping ID & mode.
    pub fn apply(&mut self, param: StudentParam) {
        self.name = param.name;
        self.age = param.age;
        self.grade = param.grade;
    }

    /// Records the identifier assigned by the store and switches to update mode.
    pub(crate) fn mark_persisted(&mut self, id: i32) {
        self.id = id;
        self.mode = StudentMode::Update;
    }

    /// Builds the parameter model sent to the data layer for this entity.
    pub fn to_param(&self) -> StudentParam {
        StudentParam {
            id: self.id,
            name: self.name.clone(),
            age: self.age,
            grade: self.grade,
        }
    }

    pub fn into_dto(self) -> StudentDto {
        StudentDto {
            id: self.id,
            name: self.name,
            age: self.age,
            grade: self.grade,
        }
    }
}

/// Converts a student row straight into its transfer record
///
/// Used by list endpoints which never need a domain entity.
pub fn dto_from_entity(entity: entity::student::Model) -> StudentDto {
    StudentDto {
        id: entity.id,
        name: entity.name,
        age: entity.age,
        grade: entity.grade,
    }
}

/// Validated parameters for creating or updating a student
///
/// Can only be obtained through `TryFrom<StudentDto>`, so holding one guarantees the
/// name is non-empty, the age is not negative and the grade is within `0..=100`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentParam {
    pub id: i32,
    pub name: String,
    pub age: i32,
    pub grade: i32,
}

impl TryFrom<StudentDto> for StudentParam {
    type Error = ValidationError;

    fn try_from(dto: StudentDto) -> Result<Self, Self::Error> {
        if dto.name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if dto.age < 0 {
            return Err(ValidationError::NegativeAge(dto.age));
        }
        if !(0..=100).contains(&dto.grade) {
            return Err(ValidationError::GradeOutOfRange(dto.grade));
        }

        Ok(Self {
            id: dto.id,
            name: dto.name,
            age: dto.age,
            grade: dto.grade,
        })
    }
}
