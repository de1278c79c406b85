use crate::{
    dtos::schedule::{CreateScheduleRequest, ScheduleResponse},
    error::db_error,
    state::AppState,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use database::services::{
    catalog::DbCatalog, recommendation::RecommendationService, schedule::ScheduleService,
    student::StudentService,
};

/// Generate a schedule from the current recommendation and store it
#[utoipa::path(
    post,
    path = "/students/{student_id}/schedules",
    params(
        ("student_id" = String, Path, description = "University-issued student id")
    ),
    request_body = CreateScheduleRequest,
    responses(
        (status = 201, description = "Schedule stored", body = ScheduleResponse),
        (status = 400, description = "Blank semester"),
        (status = 404, description = "Student not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Schedules"
)]
pub async fn create_schedule(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
    Json(request): Json<CreateScheduleRequest>,
) -> Result<(StatusCode, Json<ScheduleResponse>), StatusCode> {
    let semester = request.semester.trim();
    if semester.is_empty() {
        return Err(StatusCode::BAD_REQUEST);
    }

    let student = StudentService::find_by_student_id(&state.db, &student_id)
        .await
        .map_err(db_error)?
        .ok_or(StatusCode::NOT_FOUND)?;

    let recommendation =
        RecommendationService::recommend(&DbCatalog::new(&state.db), &student, request.max_credits)
            .await
            .map_err(db_error)?;

    let schedule =
        ScheduleService::save_recommendation(&state.db, &student, semester, &recommendation)
            .await
            .map_err(db_error)?;

    Ok((StatusCode::CREATED, Json(schedule.into())))
}

/// List a student's stored schedules, newest first
#[utoipa::path(
    get,
    path = "/students/{student_id}/schedules",
    params(
        ("student_id" = String, Path, description = "University-issued student id")
    ),
    responses(
        (status = 200, description = "Schedules of the student", body = Vec<ScheduleResponse>),
        (status = 404, description = "Student not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Schedules"
)]
pub async fn list_schedules(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
) -> Result<Json<Vec<ScheduleResponse>>, StatusCode> {
    let student = StudentService::find_by_student_id(&state.db, &student_id)
        .await
        .map_err(db_error)?
        .ok_or(StatusCode::NOT_FOUND)?;

    let schedules = ScheduleService::list_for_student(&state.db, student.id)
        .await
        .map_err(db_error)?;

    Ok(Json(schedules.into_iter().map(Into::into).collect()))
}
