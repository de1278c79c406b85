use crate::{
    dtos::recommendation::{EligibilityResponse, RecommendationParams, RecommendationResponse},
    error::db_error,
    state::AppState,
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use database::services::recommendation::RecommendationService;
use models::course_code::CourseCode;

/// Recommend next-semester courses for a student
///
/// Only REQUIRED courses of the student's major whose direct prerequisites
/// are all completed are considered. Courses are packed in code order and
/// skipped when they would exceed the credit cap.
#[utoipa::path(
    get,
    path = "/students/{student_id}/recommendations",
    params(
        ("student_id" = String, Path, description = "University-issued student id"),
        RecommendationParams
    ),
    responses(
        (status = 200, description = "Recommendation computed", body = RecommendationResponse),
        (status = 404, description = "Student not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Recommendations"
)]
pub async fn get_recommendations(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
    Query(params): Query<RecommendationParams>,
) -> Result<Json<RecommendationResponse>, StatusCode> {
    let (student, recommendation) =
        RecommendationService::recommend_for_student(&state.db, &student_id, params.max_credits)
            .await
            .map_err(db_error)?
            .ok_or(StatusCode::NOT_FOUND)?;

    Ok(Json(RecommendationResponse::new(
        &student,
        params.max_credits,
        recommendation,
    )))
}

/// Check whether a student has met a course's direct prerequisites
#[utoipa::path(
    get,
    path = "/students/{student_id}/courses/{code}/eligibility",
    params(
        ("student_id" = String, Path, description = "University-issued student id"),
        ("code" = String, Path, description = "Course code, e.g. CSC3380")
    ),
    responses(
        (status = 200, description = "Eligibility computed", body = EligibilityResponse),
        (status = 400, description = "Malformed course code"),
        (status = 404, description = "Student or course not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Recommendations"
)]
pub async fn get_eligibility(
    State(state): State<AppState>,
    Path((student_id, code)): Path<(String, String)>,
) -> Result<Json<EligibilityResponse>, StatusCode> {
    let code: CourseCode = code.parse().map_err(|_| StatusCode::BAD_REQUEST)?;

    let eligibility = RecommendationService::course_eligibility(&state.db, &student_id, &code)
        .await
        .map_err(db_error)?
        .ok_or(StatusCode::NOT_FOUND)?;

    Ok(Json(eligibility.into()))
}
