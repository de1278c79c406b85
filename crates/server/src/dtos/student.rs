use chrono::NaiveDate;
use database::{
    entities::{completed_courses, courses, students},
    services::student::NewStudent,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateStudentRequest {
    pub student_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub major_id: Option<Uuid>,
    pub minor_id: Option<Uuid>,
    pub expected_graduation: Option<NaiveDate>,
}

impl CreateStudentRequest {
    /// Trims every text field; `None` when a required one is left blank
    pub fn into_new_student(self) -> Option<NewStudent> {
        let required = |value: String| {
            let value = value.trim().to_string();
            (!value.is_empty()).then_some(value)
        };

        Some(NewStudent {
            student_id: required(self.student_id)?,
            first_name: required(self.first_name)?,
            last_name: required(self.last_name)?,
            email: required(self.email)?,
            major_id: self.major_id,
            minor_id: self.minor_id,
            expected_graduation: self.expected_graduation,
        })
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StudentResponse {
    pub id: String,
    pub student_id: String,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub email: String,
    pub major_id: Option<String>,
    pub minor_id: Option<String>,
    pub expected_graduation: Option<NaiveDate>,
}

impl From<students::Model> for StudentResponse {
    fn from(student: students::Model) -> Self {
        Self {
            id: student.id.to_string(),
            full_name: student.full_name(),
            student_id: student.student_id,
            first_name: student.first_name,
            last_name: student.last_name,
            email: student.email,
            major_id: student.major_id.map(|id| id.to_string()),
            minor_id: student.minor_id.map(|id| id.to_string()),
            expected_graduation: student.expected_graduation,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CompletedCourseRequest {
    pub course_code: String,
    /// e.g. "Fall 2025"
    pub semester: String,
    /// One of A, B, C, D, F, P, NP
    pub grade: String,
    pub date_completed: NaiveDate,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CompletedCourseResponse {
    pub id: String,
    pub course_code: String,
    pub course_name: String,
    pub semester: String,
    pub grade: String,
    pub date_completed: NaiveDate,
}

impl From<(completed_courses::Model, courses::Model)> for CompletedCourseResponse {
    fn from((record, course): (completed_courses::Model, courses::Model)) -> Self {
        Self {
            id: record.id.to_string(),
            course_code: course.code,
            course_name: course.name,
            semester: record.semester,
            grade: record.grade.to_string(),
            date_completed: record.date_completed,
        }
    }
}
