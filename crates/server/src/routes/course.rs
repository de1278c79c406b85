use crate::{
    dtos::course::{CourseDetailResponse, CourseResponse},
    error::db_error,
    state::AppState,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use database::services::catalog::{find_course_by_code, find_prerequisite_courses};
use models::course_code::CourseCode;

/// Get a course and its direct prerequisites
#[utoipa::path(
    get,
    path = "/courses/{code}",
    params(
        ("code" = String, Path, description = "Course code, e.g. CSC3280")
    ),
    responses(
        (status = 200, description = "Course found", body = CourseDetailResponse),
        (status = 400, description = "Malformed course code"),
        (status = 404, description = "Course not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Courses"
)]
pub async fn get_course(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<CourseDetailResponse>, StatusCode> {
    let code: CourseCode = code.parse().map_err(|_| StatusCode::BAD_REQUEST)?;

    let course = find_course_by_code(&state.db, &code)
        .await
        .map_err(db_error)?
        .ok_or(StatusCode::NOT_FOUND)?;

    let prerequisites = find_prerequisite_courses(&state.db, course.id)
        .await
        .map_err(db_error)?;

    Ok(Json(CourseDetailResponse {
        course: course.into(),
        prerequisites: prerequisites.into_iter().map(CourseResponse::from).collect(),
    }))
}
