use crate::dtos::course::CourseResponse;
use database::{entities::students, services::recommendation::CourseEligibility};
use models::recommendation::{CatalogCourse, DEFAULT_MAX_CREDITS, Recommendation};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
pub struct RecommendationParams {
    /// Credit cap for the semester
    #[serde(default = "default_max_credits")]
    pub max_credits: u32,
}

pub fn default_max_credits() -> u32 {
    DEFAULT_MAX_CREDITS
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RecommendedCourseResponse {
    pub id: String,
    pub code: String,
    pub name: String,
    pub credits: u32,
}

impl From<CatalogCourse> for RecommendedCourseResponse {
    fn from(course: CatalogCourse) -> Self {
        Self {
            id: course.id.to_string(),
            code: course.code.into(),
            name: course.name,
            credits: course.credits,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RecommendationResponse {
    pub student_id: String,
    pub student_name: String,
    pub max_credits: u32,
    pub recommended: Vec<RecommendedCourseResponse>,
    pub total_credits: u32,
    /// Required courses still outstanding once the recommendation is taken
    pub remaining_to_complete: usize,
}

impl RecommendationResponse {
    pub fn new(student: &students::Model, max_credits: u32, recommendation: Recommendation) -> Self {
        Self {
            student_id: student.student_id.clone(),
            student_name: student.full_name(),
            max_credits,
            recommended: recommendation
                .recommended
                .into_iter()
                .map(Into::into)
                .collect(),
            total_credits: recommendation.total_credits,
            remaining_to_complete: recommendation.remaining_to_complete,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct EligibilityResponse {
    pub course: CourseResponse,
    pub prerequisites: Vec<CourseResponse>,
    pub prerequisites_met: bool,
}

impl From<CourseEligibility> for EligibilityResponse {
    fn from(eligibility: CourseEligibility) -> Self {
        Self {
            course: eligibility.course.into(),
            prerequisites: eligibility
                .prerequisites
                .into_iter()
                .map(Into::into)
                .collect(),
            prerequisites_met: eligibility.prerequisites_met,
        }
    }
}
