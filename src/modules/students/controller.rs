use crate::extract::{JsonBody, RecordId};
use crate::state::AppState;
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use classbook_core::errors::ErrorResponse;
use classbook_core::{AppError, Model, Paginated, PaginationParams};
use classbook_models::{Student, StudentInput, StudentPatch};
use classbook_observability::{track_record_created, track_record_deleted, track_record_updated};
use tracing::instrument;
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/api/students",
    params(PaginationParams),
    responses(
        (status = 200, description = "Paginated list of students", body = Paginated<Student>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn list_students(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<Paginated<Student>>, AppError> {
    let page = state.students.list(&params).await?;
    Ok(Json(page))
}

#[utoipa::path(
    post,
    path = "/api/students",
    request_body = StudentInput,
    responses(
        (status = 201, description = "Student created", body = Student),
        (status = 400, description = "Invalid payload or duplicate email", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Students"
)]
#[instrument(skip(state, input))]
pub async fn create_student(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<StudentInput>,
) -> Result<(StatusCode, Json<Student>), AppError> {
    let student = state.students.create(input).await?;
    track_record_created(Student::NAME);
    Ok((StatusCode::CREATED, Json(student)))
}

#[utoipa::path(
    get,
    path = "/api/students/{id}",
    params(("id" = Uuid, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Student found", body = Student),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 404, description = "Student not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn get_student(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> Result<Json<Student>, AppError> {
    let student = state.students.retrieve(id).await?;
    Ok(Json(student))
}

#[utoipa::path(
    put,
    path = "/api/students/{id}",
    params(("id" = Uuid, Path, description = "Student ID")),
    request_body = StudentInput,
    responses(
        (status = 200, description = "Student replaced", body = Student),
        (status = 400, description = "Invalid payload or duplicate email", body = ErrorResponse),
        (status = 404, description = "Student not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Students"
)]
#[instrument(skip(state, input))]
pub async fn update_student(
    State(state): State<AppState>,
    RecordId(id): RecordId,
    JsonBody(input): JsonBody<StudentInput>,
) -> Result<Json<Student>, AppError> {
    let student = state.students.update(id, input).await?;
    track_record_updated(Student::NAME);
    Ok(Json(student))
}

#[utoipa::path(
    patch,
    path = "/api/students/{id}",
    params(("id" = Uuid, Path, description = "Student ID")),
    request_body = StudentPatch,
    responses(
        (status = 200, description = "Student updated", body = Student),
        (status = 400, description = "Invalid payload or duplicate email", body = ErrorResponse),
        (status = 404, description = "Student not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Students"
)]
#[instrument(skip(state, patch))]
pub async fn partial_update_student(
    State(state): State<AppState>,
    RecordId(id): RecordId,
    JsonBody(patch): JsonBody<StudentPatch>,
) -> Result<Json<Student>, AppError> {
    let student = state.students.partial_update(id, patch).await?;
    track_record_updated(Student::NAME);
    Ok(Json(student))
}

#[utoipa::path(
    delete,
    path = "/api/students/{id}",
    params(("id" = Uuid, Path, description = "Student ID")),
    responses(
        (status = 204, description = "Student deleted"),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 404, description = "Student not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn delete_student(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> Result<StatusCode, AppError> {
    state.students.destroy(id).await?;
    track_record_deleted(Student::NAME);
    Ok(StatusCode::NO_CONTENT)
}
