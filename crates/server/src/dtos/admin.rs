use crate::dtos::common::{clamp_page, default_page, default_per_page};
use axum::http::StatusCode;
use chrono::{NaiveDate, NaiveDateTime};
use database::{
    entities::{majors, minors},
    services::admin::{
        CompletedCourseFilter, CompletedCourseRow, CourseFilter, Page, PrerequisiteRow,
        RequirementFilter, RequirementRow, ScheduleCourseRow, ScheduleFilter, ScheduleRow,
        StudentFilter,
    },
};
use models::{grade::Grade, requirement_type::RequirementType};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
pub struct CourseListParams {
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_per_page")]
    pub per_page: u64,
    /// Matches course code or name
    pub search: Option<String>,
    pub department: Option<String>,
    pub credits: Option<i32>,
}

impl CourseListParams {
    pub fn into_filter(self) -> (CourseFilter, Page) {
        let page = clamp_page(self.page, self.per_page);
        let filter = CourseFilter {
            search: self.search,
            department: self.department,
            credits: self.credits,
        };
        (filter, page)
    }
}

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
pub struct RequirementListParams {
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_per_page")]
    pub per_page: u64,
    /// Matches major or minor name
    pub search: Option<String>,
    /// REQUIRED, ELECTIVE, CORE or OPTION
    pub requirement_type: Option<String>,
    pub major_id: Option<Uuid>,
    pub minor_id: Option<Uuid>,
}

impl RequirementListParams {
    pub fn into_filter(self) -> Result<(RequirementFilter, Page), StatusCode> {
        let page = clamp_page(self.page, self.per_page);
        let requirement_type = self
            .requirement_type
            .map(|t| t.trim().to_uppercase().parse::<RequirementType>())
            .transpose()
            .map_err(|_| StatusCode::BAD_REQUEST)?;

        let filter = RequirementFilter {
            search: self.search,
            requirement_type,
            major_id: self.major_id,
            minor_id: self.minor_id,
        };
        Ok((filter, page))
    }
}

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
pub struct StudentListParams {
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_per_page")]
    pub per_page: u64,
    /// Matches student id, first or last name, or email
    pub search: Option<String>,
    pub major_id: Option<Uuid>,
    pub minor_id: Option<Uuid>,
}

impl StudentListParams {
    pub fn into_filter(self) -> (StudentFilter, Page) {
        let page = clamp_page(self.page, self.per_page);
        let filter = StudentFilter {
            search: self.search,
            major_id: self.major_id,
            minor_id: self.minor_id,
        };
        (filter, page)
    }
}

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
pub struct CompletedCourseListParams {
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_per_page")]
    pub per_page: u64,
    /// Matches student id or course code
    pub search: Option<String>,
    pub semester: Option<String>,
    /// A, B, C, D, F, P or NP
    pub grade: Option<String>,
}

impl CompletedCourseListParams {
    pub fn into_filter(self) -> Result<(CompletedCourseFilter, Page), StatusCode> {
        let page = clamp_page(self.page, self.per_page);
        let grade = self
            .grade
            .map(|g| g.trim().to_uppercase().parse::<Grade>())
            .transpose()
            .map_err(|_| StatusCode::BAD_REQUEST)?;

        let filter = CompletedCourseFilter {
            search: self.search,
            semester: self.semester,
            grade,
        };
        Ok((filter, page))
    }
}

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
pub struct ScheduleListParams {
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_per_page")]
    pub per_page: u64,
    /// Matches student id or semester
    pub search: Option<String>,
    pub semester: Option<String>,
    pub is_optimal: Option<bool>,
}

impl ScheduleListParams {
    pub fn into_filter(self) -> (ScheduleFilter, Page) {
        let page = clamp_page(self.page, self.per_page);
        let filter = ScheduleFilter {
            search: self.search,
            semester: self.semester,
            is_optimal: self.is_optimal,
        };
        (filter, page)
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PrerequisiteResponse {
    pub id: String,
    pub course_code: String,
    pub course_name: String,
    pub prerequisite_code: String,
    pub prerequisite_name: String,
}

impl From<PrerequisiteRow> for PrerequisiteResponse {
    fn from(row: PrerequisiteRow) -> Self {
        Self {
            id: row.id.to_string(),
            course_code: row.course.code,
            course_name: row.course.name,
            prerequisite_code: row.prerequisite.code,
            prerequisite_name: row.prerequisite.name,
        }
    }
}

/// A major or a minor
#[derive(Debug, Serialize, ToSchema)]
pub struct ProgramResponse {
    pub id: String,
    pub name: String,
    pub code: String,
    pub description: Option<String>,
    pub total_credits_required: i32,
}

impl From<majors::Model> for ProgramResponse {
    fn from(major: majors::Model) -> Self {
        Self {
            id: major.id.to_string(),
            name: major.name,
            code: major.code,
            description: major.description,
            total_credits_required: major.total_credits_required,
        }
    }
}

impl From<minors::Model> for ProgramResponse {
    fn from(minor: minors::Model) -> Self {
        Self {
            id: minor.id.to_string(),
            name: minor.name,
            code: minor.code,
            description: minor.description,
            total_credits_required: minor.total_credits_required,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RequirementResponse {
    pub id: String,
    pub requirement_type: String,
    pub requirement_label: String,
    pub major: Option<String>,
    pub minor: Option<String>,
    pub course_code: Option<String>,
    pub credits_required: i32,
}

impl From<RequirementRow> for RequirementResponse {
    fn from(row: RequirementRow) -> Self {
        let kind = row.requirement.requirement_type;
        Self {
            id: row.requirement.id.to_string(),
            requirement_type: kind.to_string(),
            requirement_label: kind.label().to_string(),
            major: row.major.map(|m| m.name),
            minor: row.minor.map(|m| m.name),
            course_code: row.course.map(|c| c.code),
            credits_required: row.requirement.credits_required,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CompletedCourseAdminResponse {
    pub id: String,
    pub student_id: String,
    pub student_name: String,
    pub course_code: String,
    pub semester: String,
    pub grade: String,
    pub date_completed: NaiveDate,
}

impl From<CompletedCourseRow> for CompletedCourseAdminResponse {
    fn from(row: CompletedCourseRow) -> Self {
        Self {
            id: row.record.id.to_string(),
            student_name: row.student.full_name(),
            student_id: row.student.student_id,
            course_code: row.course.code,
            semester: row.record.semester,
            grade: row.record.grade.to_string(),
            date_completed: row.record.date_completed,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ScheduleAdminResponse {
    pub id: String,
    pub student_id: String,
    pub student_name: String,
    pub semester: String,
    pub created_at: NaiveDateTime,
    pub is_optimal: bool,
}

impl From<ScheduleRow> for ScheduleAdminResponse {
    fn from(row: ScheduleRow) -> Self {
        Self {
            id: row.schedule.id.to_string(),
            student_name: row.student.full_name(),
            student_id: row.student.student_id,
            semester: row.schedule.semester,
            created_at: row.schedule.created_at,
            is_optimal: row.schedule.is_optimal,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ScheduleCourseAdminResponse {
    pub id: String,
    pub student_id: String,
    pub semester: String,
    pub course_code: String,
    pub course_name: String,
    pub reason: String,
}

impl From<ScheduleCourseRow> for ScheduleCourseAdminResponse {
    fn from(row: ScheduleCourseRow) -> Self {
        Self {
            id: row.entry.id.to_string(),
            student_id: row.student.student_id,
            semester: row.schedule.semester,
            course_code: row.course.code,
            course_name: row.course.name,
            reason: row.entry.reason,
        }
    }
}
