use database::entities::courses;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct CourseResponse {
    pub id: String,
    pub code: String,
    pub name: String,
    pub credits: i32,
    pub description: Option<String>,
    pub department: String,
}

impl From<courses::Model> for CourseResponse {
    fn from(course: courses::Model) -> Self {
        Self {
            id: course.id.to_string(),
            code: course.code,
            name: course.name,
            credits: course.credits,
            description: course.description,
            department: course.department,
        }
    }
}

/// A course along with its direct prerequisites
#[derive(Debug, Serialize, ToSchema)]
pub struct CourseDetailResponse {
    pub course: CourseResponse,
    pub prerequisites: Vec<CourseResponse>,
}
