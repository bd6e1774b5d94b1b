use crate::extract::{JsonBody, RecordId};
use crate::state::AppState;
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use classbook_core::errors::ErrorResponse;
use classbook_core::{AppError, Model, Paginated, PaginationParams};
use classbook_models::{Teacher, TeacherInput, TeacherPatch};
use classbook_observability::{track_record_created, track_record_deleted, track_record_updated};
use tracing::instrument;
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/api/teachers",
    params(PaginationParams),
    responses(
        (status = 200, description = "Paginated list of teachers", body = Paginated<Teacher>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Teachers"
)]
#[instrument(skip(state))]
pub async fn list_teachers(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<Paginated<Teacher>>, AppError> {
    let page = state.teachers.list(&params).await?;
    Ok(Json(page))
}

#[utoipa::path(
    post,
    path = "/api/teachers",
    request_body = TeacherInput,
    responses(
        (status = 201, description = "Teacher created", body = Teacher),
        (status = 400, description = "Invalid payload or duplicate email", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Teachers"
)]
#[instrument(skip(state, input))]
pub async fn create_teacher(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<TeacherInput>,
) -> Result<(StatusCode, Json<Teacher>), AppError> {
    let teacher = state.teachers.create(input).await?;
    track_record_created(Teacher::NAME);
    Ok((StatusCode::CREATED, Json(teacher)))
}

#[utoipa::path(
    get,
    path = "/api/teachers/{id}",
    params(("id" = Uuid, Path, description = "Teacher ID")),
    responses(
        (status = 200, description = "Teacher found", body = Teacher),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 404, description = "Teacher not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Teachers"
)]
#[instrument(skip(state))]
pub async fn get_teacher(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> Result<Json<Teacher>, AppError> {
    let teacher = state.teachers.retrieve(id).await?;
    Ok(Json(teacher))
}

#[utoipa::path(
    put,
    path = "/api/teachers/{id}",
    params(("id" = Uuid, Path, description = "Teacher ID")),
    request_body = TeacherInput,
    responses(
        (status = 200, description = "Teacher replaced", body = Teacher),
        (status = 400, description = "Invalid payload or duplicate email", body = ErrorResponse),
        (status = 404, description = "Teacher not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Teachers"
)]
#[instrument(skip(state, input))]
pub async fn update_teacher(
    State(state): State<AppState>,
    RecordId(id): RecordId,
    JsonBody(input): JsonBody<TeacherInput>,
) -> Result<Json<Teacher>, AppError> {
    let teacher = state.teachers.update(id, input).await?;
    track_record_updated(Teacher::NAME);
    Ok(Json(teacher))
}

#[utoipa::path(
    patch,
    path = "/api/teachers/{id}",
    params(("id" = Uuid, Path, description = "Teacher ID")),
    request_body = TeacherPatch,
    responses(
        (status = 200, description = "Teacher updated", body = Teacher),
        (status = 400, description = "Invalid payload or duplicate email", body = ErrorResponse),
        (status = 404, description = "Teacher not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Teachers"
)]
#[instrument(skip(state, patch))]
pub async fn partial_update_teacher(
    State(state): State<AppState>,
    RecordId(id): RecordId,
    JsonBody(patch): JsonBody<TeacherPatch>,
) -> Result<Json<Teacher>, AppError> {
    let teacher = state.teachers.partial_update(id, patch).await?;
    track_record_updated(Teacher::NAME);
    Ok(Json(teacher))
}

#[utoipa::path(
    delete,
    path = "/api/teachers/{id}",
    params(("id" = Uuid, Path, description = "Teacher ID")),
    responses(
        (status = 204, description = "Teacher deleted"),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 404, description = "Teacher not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Teachers"
)]
#[instrument(skip(state))]
pub async fn delete_teacher(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> Result<StatusCode, AppError> {
    state.teachers.destroy(id).await?;
    track_record_deleted(Teacher::NAME);
    Ok(StatusCode::NO_CONTENT)
}
