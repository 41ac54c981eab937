use axum::{
    routing::{get, post},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        student::StudentDto,
    },
    server::{
        controller::student::{
            add_new_student, delete_student, get_all_students, get_average_grade,
            get_passed_students, get_student_by_id, update_student,
        },
        state::AppState,
    },
};

/// OpenAPI document for the students API, served through Swagger UI at `/api/docs`.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Student records API",
        description = "Create, read, update and delete student records."
    ),
    paths(
        crate::server::controller::student::get_all_students,
        crate::server::controller::student::get_passed_students,
        crate::server::controller::student::get_average_grade,
        crate::server::controller::student::get_student_by_id,
        crate::server::controller::student::add_new_student,
        crate::server::controller::student::update_student,
        crate::server::controller::student::delete_student,
    ),
    components(schemas(StudentDto, ErrorDto, MessageDto)),
    tags(
        (name = "student", description = "Student record management")
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/Students/All", get(get_all_students))
        .route("/api/Students/Passed", get(get_passed_students))
        .route("/api/Students/AverageGrade", get(get_average_grade))
        .route("/api/Students", post(add_new_student))
        .route(
            "/api/Students/{id}",
            get(get_student_by_id)
                .put(update_student)
                .delete(delete_student),
        )
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
}
