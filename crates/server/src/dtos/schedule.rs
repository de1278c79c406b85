use crate::dtos::recommendation::default_max_credits;
use chrono::NaiveDateTime;
use database::entities::{courses, schedule_courses, schedules};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateScheduleRequest {
    /// e.g. "Spring 2026"
    pub semester: String,
    #[serde(default = "default_max_credits")]
    pub max_credits: u32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ScheduledCourseResponse {
    pub code: String,
    pub name: String,
    pub credits: i32,
    pub reason: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ScheduleResponse {
    pub id: String,
    pub semester: String,
    pub created_at: NaiveDateTime,
    pub is_optimal: bool,
    pub total_credits: i32,
    pub courses: Vec<ScheduledCourseResponse>,
}

impl From<(schedules::Model, Vec<(schedule_courses::Model, courses::Model)>)>
    for ScheduleResponse
{
    fn from(
        (schedule, entries): (schedules::Model, Vec<(schedule_courses::Model, courses::Model)>),
    ) -> Self {
        let courses: Vec<ScheduledCourseResponse> = entries
            .into_iter()
            .map(|(entry, course)| ScheduledCourseResponse {
                code: course.code,
                name: course.name,
                credits: course.credits,
                reason: entry.reason,
            })
            .collect();

        Self {
            id: schedule.id.to_string(),
            semester: schedule.semester,
            created_at: schedule.created_at,
            is_optimal: schedule.is_optimal,
            total_credits: courses.iter().map(|c| c.credits).sum(),
            courses,
        }
    }
}
