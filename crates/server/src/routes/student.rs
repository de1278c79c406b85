use crate::{
    dtos::student::{
        CompletedCourseRequest, CompletedCourseResponse, CreateStudentRequest, StudentResponse,
    },
    error::db_error,
    state::AppState,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use database::services::{
    catalog::find_course_by_code,
    student::{NewCompletedCourse, StudentService},
};
use log::warn;
use models::{course_code::CourseCode, grade::Grade};

/// Register a student
#[utoipa::path(
    post,
    path = "/students",
    request_body = CreateStudentRequest,
    responses(
        (status = 201, description = "Student created", body = StudentResponse),
        (status = 400, description = "A required field is blank"),
        (status = 409, description = "Student id or email already in use"),
        (status = 422, description = "Unknown major or minor"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Students"
)]
pub async fn create_student(
    State(state): State<AppState>,
    Json(request): Json<CreateStudentRequest>,
) -> Result<(StatusCode, Json<StudentResponse>), StatusCode> {
    let new_student = request.into_new_student().ok_or(StatusCode::BAD_REQUEST)?;

    let student = StudentService::create_student(&state.db, new_student)
        .await
        .map_err(db_error)?;

    Ok((StatusCode::CREATED, Json(student.into())))
}

/// Get a student by their university-issued id
#[utoipa::path(
    get,
    path = "/students/{student_id}",
    params(
        ("student_id" = String, Path, description = "University-issued student id, e.g. TEST001")
    ),
    responses(
        (status = 200, description = "Student found", body = StudentResponse),
        (status = 404, description = "Student not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Students"
)]
pub async fn get_student(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
) -> Result<Json<StudentResponse>, StatusCode> {
    let student = StudentService::find_by_student_id(&state.db, &student_id)
        .await
        .map_err(db_error)?
        .ok_or(StatusCode::NOT_FOUND)?;

    Ok(Json(student.into()))
}

/// Record a course the student has completed
#[utoipa::path(
    post,
    path = "/students/{student_id}/completed-courses",
    params(
        ("student_id" = String, Path, description = "University-issued student id")
    ),
    request_body = CompletedCourseRequest,
    responses(
        (status = 201, description = "Completion recorded", body = CompletedCourseResponse),
        (status = 400, description = "Malformed course code or grade"),
        (status = 404, description = "Student not found"),
        (status = 409, description = "Course already recorded for this student"),
        (status = 422, description = "Unknown course"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Students"
)]
pub async fn record_completed_course(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
    Json(request): Json<CompletedCourseRequest>,
) -> Result<(StatusCode, Json<CompletedCourseResponse>), StatusCode> {
    let code: CourseCode = request
        .course_code
        .parse()
        .map_err(|_| StatusCode::BAD_REQUEST)?;
    let grade: Grade = request
        .grade
        .trim()
        .to_uppercase()
        .parse()
        .map_err(|_| StatusCode::BAD_REQUEST)?;

    let student = StudentService::find_by_student_id(&state.db, &student_id)
        .await
        .map_err(db_error)?
        .ok_or(StatusCode::NOT_FOUND)?;

    let Some(course) = find_course_by_code(&state.db, &code)
        .await
        .map_err(db_error)?
    else {
        warn!("Student {student_id} reported unknown course {code}");
        return Err(StatusCode::UNPROCESSABLE_ENTITY);
    };

    let record = StudentService::record_completed_course(
        &state.db,
        NewCompletedCourse {
            student_id: student.id,
            course_id: course.id,
            semester: request.semester,
            grade,
            date_completed: request.date_completed,
        },
    )
    .await
    .map_err(db_error)?;

    Ok((StatusCode::CREATED, Json((record, course).into())))
}
