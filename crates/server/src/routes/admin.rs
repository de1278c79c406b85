use crate::{
    dtos::{
        admin::{
            CompletedCourseAdminResponse, CompletedCourseListParams, CourseListParams,
            PrerequisiteResponse, ProgramResponse, RequirementListParams, RequirementResponse,
            ScheduleAdminResponse, ScheduleCourseAdminResponse, ScheduleListParams,
            StudentListParams,
        },
        common::{PaginatedResponse, SearchParams},
        course::CourseResponse,
        student::StudentResponse,
    },
    error::db_error,
    state::AppState,
};
use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    routing::get,
};
use database::services::admin::AdminService;

type AdminResult<T> = Result<Json<PaginatedResponse<T>>, StatusCode>;

/// Read-only listings over every stored table
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/courses", get(list_courses))
        .route("/prerequisites", get(list_prerequisites))
        .route("/majors", get(list_majors))
        .route("/minors", get(list_minors))
        .route("/requirements", get(list_requirements))
        .route("/students", get(list_students))
        .route("/completed-courses", get(list_completed_courses))
        .route("/schedules", get(list_schedules))
        .route("/schedule-courses", get(list_schedule_courses))
}

/// List courses
#[utoipa::path(
    get,
    path = "/admin/courses",
    params(CourseListParams),
    responses(
        (status = 200, description = "Page of courses", body = PaginatedResponse<CourseResponse>),
        (status = 401, description = "Unauthorized - invalid or missing JWT"),
        (status = 500, description = "Internal server error")
    ),
    security(("jwt" = [])),
    tag = "Admin"
)]
pub async fn list_courses(
    State(state): State<AppState>,
    Query(params): Query<CourseListParams>,
) -> AdminResult<CourseResponse> {
    let (filter, page) = params.into_filter();
    let (rows, total) = AdminService::list_courses(&state.db, &filter, page)
        .await
        .map_err(db_error)?;

    Ok(Json(PaginatedResponse::new(rows, total, page)))
}

/// List prerequisite edges
#[utoipa::path(
    get,
    path = "/admin/prerequisites",
    params(SearchParams),
    responses(
        (status = 200, description = "Page of prerequisite edges", body = PaginatedResponse<PrerequisiteResponse>),
        (status = 401, description = "Unauthorized - invalid or missing JWT"),
        (status = 500, description = "Internal server error")
    ),
    security(("jwt" = [])),
    tag = "Admin"
)]
pub async fn list_prerequisites(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AdminResult<PrerequisiteResponse> {
    let page = params.page();
    let (rows, total) =
        AdminService::list_prerequisites(&state.db, params.search.as_deref(), page)
            .await
            .map_err(db_error)?;

    Ok(Json(PaginatedResponse::new(rows, total, page)))
}

/// List majors
#[utoipa::path(
    get,
    path = "/admin/majors",
    params(SearchParams),
    responses(
        (status = 200, description = "Page of majors", body = PaginatedResponse<ProgramResponse>),
        (status = 401, description = "Unauthorized - invalid or missing JWT"),
        (status = 500, description = "Internal server error")
    ),
    security(("jwt" = [])),
    tag = "Admin"
)]
pub async fn list_majors(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AdminResult<ProgramResponse> {
    let page = params.page();
    let (rows, total) = AdminService::list_majors(&state.db, params.search.as_deref(), page)
        .await
        .map_err(db_error)?;

    Ok(Json(PaginatedResponse::new(rows, total, page)))
}

/// List minors
#[utoipa::path(
    get,
    path = "/admin/minors",
    params(SearchParams),
    responses(
        (status = 200, description = "Page of minors", body = PaginatedResponse<ProgramResponse>),
        (status = 401, description = "Unauthorized - invalid or missing JWT"),
        (status = 500, description = "Internal server error")
    ),
    security(("jwt" = [])),
    tag = "Admin"
)]
pub async fn list_minors(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AdminResult<ProgramResponse> {
    let page = params.page();
    let (rows, total) = AdminService::list_minors(&state.db, params.search.as_deref(), page)
        .await
        .map_err(db_error)?;

    Ok(Json(PaginatedResponse::new(rows, total, page)))
}

/// List degree requirements
#[utoipa::path(
    get,
    path = "/admin/requirements",
    params(RequirementListParams),
    responses(
        (status = 200, description = "Page of degree requirements", body = PaginatedResponse<RequirementResponse>),
        (status = 400, description = "Unknown requirement type"),
        (status = 401, description = "Unauthorized - invalid or missing JWT"),
        (status = 500, description = "Internal server error")
    ),
    security(("jwt" = [])),
    tag = "Admin"
)]
pub async fn list_requirements(
    State(state): State<AppState>,
    Query(params): Query<RequirementListParams>,
) -> AdminResult<RequirementResponse> {
    let (filter, page) = params.into_filter()?;
    let (rows, total) = AdminService::list_requirements(&state.db, &filter, page)
        .await
        .map_err(db_error)?;

    Ok(Json(PaginatedResponse::new(rows, total, page)))
}

/// List students
#[utoipa::path(
    get,
    path = "/admin/students",
    params(StudentListParams),
    responses(
        (status = 200, description = "Page of students", body = PaginatedResponse<StudentResponse>),
        (status = 401, description = "Unauthorized - invalid or missing JWT"),
        (status = 500, description = "Internal server error")
    ),
    security(("jwt" = [])),
    tag = "Admin"
)]
pub async fn list_students(
    State(state): State<AppState>,
    Query(params): Query<StudentListParams>,
) -> AdminResult<StudentResponse> {
    let (filter, page) = params.into_filter();
    let (rows, total) = AdminService::list_students(&state.db, &filter, page)
        .await
        .map_err(db_error)?;

    Ok(Json(PaginatedResponse::new(rows, total, page)))
}

/// List completed-course records
#[utoipa::path(
    get,
    path = "/admin/completed-courses",
    params(CompletedCourseListParams),
    responses(
        (status = 200, description = "Page of completed courses", body = PaginatedResponse<CompletedCourseAdminResponse>),
        (status = 400, description = "Unknown grade"),
        (status = 401, description = "Unauthorized - invalid or missing JWT"),
        (status = 500, description = "Internal server error")
    ),
    security(("jwt" = [])),
    tag = "Admin"
)]
pub async fn list_completed_courses(
    State(state): State<AppState>,
    Query(params): Query<CompletedCourseListParams>,
) -> AdminResult<CompletedCourseAdminResponse> {
    let (filter, page) = params.into_filter()?;
    let (rows, total) = AdminService::list_completed_courses(&state.db, &filter, page)
        .await
        .map_err(db_error)?;

    Ok(Json(PaginatedResponse::new(rows, total, page)))
}

/// List stored schedules
#[utoipa::path(
    get,
    path = "/admin/schedules",
    params(ScheduleListParams),
    responses(
        (status = 200, description = "Page of schedules", body = PaginatedResponse<ScheduleAdminResponse>),
        (status = 401, description = "Unauthorized - invalid or missing JWT"),
        (status = 500, description = "Internal server error")
    ),
    security(("jwt" = [])),
    tag = "Admin"
)]
pub async fn list_schedules(
    State(state): State<AppState>,
    Query(params): Query<ScheduleListParams>,
) -> AdminResult<ScheduleAdminResponse> {
    let (filter, page) = params.into_filter();
    let (rows, total) = AdminService::list_schedules(&state.db, &filter, page)
        .await
        .map_err(db_error)?;

    Ok(Json(PaginatedResponse::new(rows, total, page)))
}

/// List scheduled courses
#[utoipa::path(
    get,
    path = "/admin/schedule-courses",
    params(SearchParams),
    responses(
        (status = 200, description = "Page of scheduled courses", body = PaginatedResponse<ScheduleCourseAdminResponse>),
        (status = 401, description = "Unauthorized - invalid or missing JWT"),
        (status = 500, description = "Internal server error")
    ),
    security(("jwt" = [])),
    tag = "Admin"
)]
pub async fn list_schedule_courses(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AdminResult<ScheduleCourseAdminResponse> {
    let page = params.page();
    let (rows, total) =
        AdminService::list_schedule_courses(&state.db, params.search.as_deref(), page)
            .await
            .map_err(db_error)?;

    Ok(Json(PaginatedResponse::new(rows, total, page)))
}
