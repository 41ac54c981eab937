use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        student::StudentDto,
    },
    server::{
        error::{validation::ValidationError, AppError},
        model::student::{Student, StudentParam},
        service::student::StudentService,
        state::AppState,
    },
};

/// Tag for grouping student endpoints in OpenAPI documentation
pub static STUDENT_TAG: &str = "student";

/// Base path of the students resource collection
pub static STUDENTS_PATH: &str = "/api/Students";

static NO_STUDENTS_FOUND: &str = "No Students Found!";

/// Rejects identifiers that can never belong to a stored student.
fn require_valid_id(id: i32) -> Result<(), AppError> {
    if id < 1 {
        return Err(AppError::BadRequest(format!("Invalid ID {}", id)));
    }

    Ok(())
}

/// Unwraps and validates a student request body.
///
/// A missing or malformed body is rejected the same way as invalid field values.
fn validated_param(
    payload: Result<Json<StudentDto>, JsonRejection>,
) -> Result<StudentParam, ValidationError> {
    let Json(dto) = payload.map_err(|rejection| ValidationError::MissingBody(rejection.body_text()))?;

    StudentParam::try_from(dto)
}

/// Get all students.
///
/// # Returns
/// - `200 OK` - List of every student
/// - `404 Not Found` - No students exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/Students/All",
    tag = STUDENT_TAG,
    responses(
        (status = 200, description = "Successfully retrieved students", body = Vec<StudentDto>),
        (status = 404, description = "No students exist", body = String, content_type = "text/plain"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_students(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let students = StudentService::new(&state.db).get_all().await?;

    if students.is_empty() {
        return Err(AppError::NotFound(NO_STUDENTS_FOUND.to_string()));
    }

    Ok((StatusCode::OK, Json(students)))
}

/// Get all students with a passing grade.
///
/// # Returns
/// - `200 OK` - List of passed students
/// - `404 Not Found` - No student has passed
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/Students/Passed",
    tag = STUDENT_TAG,
    responses(
        (status = 200, description = "Successfully retrieved passed students", body = Vec<StudentDto>),
        (status = 404, description = "No student has passed", body = String, content_type = "text/plain"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_passed_students(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let students = StudentService::new(&state.db).get_passed().await?;

    if students.is_empty() {
        return Err(AppError::NotFound(NO_STUDENTS_FOUND.to_string()));
    }

    Ok((StatusCode::OK, Json(students)))
}

/// Get the average grade of all students.
///
/// An empty store averages to `0.0` rather than an error.
#[utoipa::path(
    get,
    path = "/api/Students/AverageGrade",
    tag = STUDENT_TAG,
    responses(
        (status = 200, description = "Average grade of all students", body = f64),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_average_grade(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let average = StudentService::new(&state.db).average_grade().await?;

    Ok((StatusCode::OK, Json(average)))
}

/// Get a student by ID.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - ID of the student to retrieve
///
/// # Returns
/// - `200 OK` - The requested student
/// - `400 Bad Request` - ID is below 1
/// - `404 Not Found` - No student has this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/Students/{id}",
    tag = STUDENT_TAG,
    params(
        ("id" = i32, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved student", body = StudentDto),
        (status = 400, description = "Invalid student ID", body = String, content_type = "text/plain"),
        (status = 404, description = "Student not found", body = String, content_type = "text/plain"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_student_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    require_valid_id(id)?;

    let student = StudentService::new(&state.db)
        .find(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Student with ID {} not found!", id)))?;

    Ok((StatusCode::OK, Json(student.into_dto())))
}

/// Create a new student.
///
/// The store assigns the ID; any ID in the payload is ignored. The response
/// carries a `Location` header pointing at the new student.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Student data (name, age & grade)
///
/// # Returns
/// - `201 Created` - Successfully created student with its assigned ID
/// - `400 Bad Request` - Missing body, empty name, negative age or grade outside 0-100
/// - `500 Internal Server Error` - The store did not assign an ID, or database error
#[utoipa::path(
    post,
    path = "/api/Students",
    tag = STUDENT_TAG,
    request_body = StudentDto,
    responses(
        (status = 201, description = "Successfully created student", body = StudentDto),
        (status = 400, description = "Invalid student data", body = String, content_type = "text/plain"),
        (status = 500, description = "Student could not be added", body = MessageDto)
    ),
)]
pub async fn add_new_student(
    State(state): State<AppState>,
    payload: Result<Json<StudentDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let param = validated_param(payload)?;

    let mut student = Student::new(param);

    if !StudentService::new(&state.db).save(&mut student).await? {
        return Err(AppError::PersistenceFailure(
            "Error Adding Student".to_string(),
        ));
    }

    tracing::info!("Created student {} ({})", student.id, student.name);

    let location = format!("{}/{}", STUDENTS_PATH, student.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(student.into_dto()),
    ))
}

/// Update an existing student.
///
/// The payload is validated before the student is looked up.
/// IDs below 1 are not rejected up front; they are never located and end in 404.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - ID of the student to update
/// - `payload` - New student data (name, age & grade)
///
/// # Returns
/// - `200 OK` - Successfully updated student
/// - `400 Bad Request` - Missing body, empty name, negative age or grade outside 0-100
/// - `404 Not Found` - No student has this ID
/// - `500 Internal Server Error` - The update affected no rows, or database error
#[utoipa::path(
    put,
    path = "/api/Students/{id}",
    tag = STUDENT_TAG,
    params(
        ("id" = i32, Path, description = "Student ID")
    ),
    request_body = StudentDto,
    responses(
        (status = 200, description = "Successfully updated student", body = StudentDto),
        (status = 400, description = "Invalid student data", body = String, content_type = "text/plain"),
        (status = 404, description = "Student not found", body = String, content_type = "text/plain"),
        (status = 500, description = "Student could not be updated", body = MessageDto)
    ),
)]
pub async fn update_student(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    payload: Result<Json<StudentDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let param = validated_param(payload)?;

    let service = StudentService::new(&state.db);

    let mut student = service
        .find(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Student with ID {} Not Found!", id)))?;

    student.apply(param);

    if !service.save(&mut student).await? {
        return Err(AppError::PersistenceFailure(
            "Error Updating Student".to_string(),
        ));
    }

    Ok((StatusCode::OK, Json(student.into_dto())))
}

/// Delete a student by ID.
///
/// # Returns
/// - `200 OK` - Confirmation message
/// - `400 Bad Request` - ID is below 1
/// - `404 Not Found` - No row was deleted
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/Students/{id}",
    tag = STUDENT_TAG,
    params(
        ("id" = i32, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted student", body = String, content_type = "text/plain"),
        (status = 400, description = "Invalid student ID", body = String, content_type = "text/plain"),
        (status = 404, description = "Student not found", body = String, content_type = "text/plain"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    require_valid_id(id)?;

    if !StudentService::new(&state.db).delete(id).await? {
        return Err(AppError::NotFound(format!(
            "Student with ID {} not found. No rows deleted!",
            id
        )));
    }

    tracing::info!("Deleted student {}", id);

    Ok((
        StatusCode::OK,
        format!("Student with ID {} has been deleted.", id),
    ))
}
