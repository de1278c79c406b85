use crate::routes::{admin, course, health, recommendation, root, schedule, student};
use utoipa::{
    Modify, OpenApi,
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "jwt",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        root::root,
        health::health,
        course::get_course,
        student::create_student,
        student::get_student,
        student::record_completed_course,
        recommendation::get_recommendations,
        recommendation::get_eligibility,
        schedule::create_schedule,
        schedule::list_schedules,
        admin::list_courses,
        admin::list_prerequisites,
        admin::list_majors,
        admin::list_minors,
        admin::list_requirements,
        admin::list_students,
        admin::list_completed_courses,
        admin::list_schedules,
        admin::list_schedule_courses
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Liveness endpoints"),
        (name = "Courses", description = "Course catalog endpoints"),
        (name = "Students", description = "Student records and completed courses"),
        (name = "Recommendations", description = "Next-semester course recommendations"),
        (name = "Schedules", description = "Stored semester schedules"),
        (name = "Admin", description = "Read-only listings over every table"),
    ),
    info(
        title = "Degree Planner API",
        version = "1.0.0",
        description = "Degree requirements, student progress and course recommendations",
        license(
            name = "MIT OR Apache-2.0",
        )
    )
)]
pub struct ApiDoc;
