use chrono::NaiveDate;
use database::{
    entities::{majors, students},
    services::{
        catalog::{DbCatalog, find_course_by_code},
        recommendation::RecommendationService,
        student::{NewCompletedCourse, NewStudent, StudentService},
    },
};
use log::info;
use models::{
    course_code::CourseCode,
    grade::Grade,
    recommendation::{DEFAULT_MAX_CREDITS, Recommendation},
    seed_catalog::CSC_MAJOR,
};
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};
use std::fmt;

pub const TEST_STUDENT_ID: &str = "TEST001";
pub const COMPLETED_CODES: [&str; 3] = ["CSC1980", "CSC2280", "CSC2290"];
const COMPLETED_SEMESTER: &str = "Fall 2025";

/// Everything the end-to-end check observed
#[derive(Debug, Clone)]
pub struct SmokeReport {
    pub student: students::Model,
    pub student_created: bool,
    pub major_name: String,
    /// Course code and whether its completion record was created
    pub completions: Vec<(String, bool)>,
    pub completed_count: usize,
    pub recommendation: Recommendation,
}

/// Ensures the test student exists with three completed courses, then asks
/// the recommender for the next semester
///
/// Fails with `RecordNotFound` when the CSC catalog has not been seeded.
pub async fn run(db: &DatabaseConnection) -> Result<SmokeReport, DbErr> {
    let major = majors::Entity::find()
        .filter(majors::Column::Code.eq(CSC_MAJOR.code))
        .one(db)
        .await?
        .ok_or_else(|| {
            DbErr::RecordNotFound(format!(
                "Major {} is missing, run populate_db first",
                CSC_MAJOR.code
            ))
        })?;

    let (student, student_created) = StudentService::get_or_create_student(
        db,
        NewStudent {
            student_id: TEST_STUDENT_ID.to_string(),
            first_name: "Test".to_string(),
            last_name: "Student".to_string(),
            email: "test@fsc.edu".to_string(),
            major_id: Some(major.id),
            minor_id: None,
            expected_graduation: NaiveDate::from_ymd_opt(2026, 5, 15),
        },
    )
    .await?;
    info!(
        "Student {} (created={student_created})",
        student.full_name()
    );

    let date_completed = NaiveDate::from_ymd_opt(2025, 12, 15)
        .ok_or_else(|| DbErr::Custom("Invalid completion date".to_string()))?;

    let mut completions = Vec::with_capacity(COMPLETED_CODES.len());
    for code in COMPLETED_CODES {
        let code: CourseCode = code
            .parse()
            .map_err(|e| DbErr::Custom(format!("Invalid course code {code}: {e}")))?;
        let course = find_course_by_code(db, &code)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Course {code} is missing")))?;

        let (_, created) = StudentService::get_or_record_completed_course(
            db,
            NewCompletedCourse {
                student_id: student.id,
                course_id: course.id,
                semester: COMPLETED_SEMESTER.to_string(),
                grade: Grade::A,
                date_completed,
            },
        )
        .await?;
        completions.push((code.to_string(), created));
    }

    let recommender =
        RecommendationService::build_recommender(&DbCatalog::new(db), &student).await?;
    let recommendation = recommender.recommend(DEFAULT_MAX_CREDITS);

    Ok(SmokeReport {
        student,
        student_created,
        major_name: major.name,
        completions,
        completed_count: recommender.completed().len(),
        recommendation,
    })
}

impl fmt::Display for SmokeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(60);

        writeln!(
            f,
            "Student: {} (created={})",
            self.student.full_name(),
            self.student_created
        )?;
        for (code, created) in &self.completions {
            writeln!(f, "  Completed: {code} (created={created})")?;
        }

        writeln!(f, "\n{rule}")?;
        writeln!(f, "TESTING RECOMMENDER ENGINE")?;
        writeln!(f, "{rule}")?;

        writeln!(
            f,
            "\nStudent: {} - {}",
            self.student.student_id,
            self.student.full_name()
        )?;
        writeln!(f, "Major: {}", self.major_name)?;
        writeln!(f, "Completed courses: {}", self.completed_count)?;

        writeln!(f, "\nRECOMMENDED COURSES FOR NEXT SEMESTER:")?;
        writeln!(f, "Total Credits: {}", self.recommendation.total_credits)?;
        writeln!(
            f,
            "Remaining courses after this: {}\n",
            self.recommendation.remaining_to_complete
        )?;

        for (i, course) in self.recommendation.recommended.iter().enumerate() {
            writeln!(
                f,
                "{}. {} - {} ({} credits)",
                i + 1,
                course.code,
                course.name,
                course.credits
            )?;
        }

        write!(f, "\n{rule}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::recommendation::CatalogCourse;
    use uuid::Uuid;

    #[test]
    fn test_report_lists_recommended_courses() {
        let report = SmokeReport {
            student: students::Model {
                id: Uuid::new_v4(),
                student_id: TEST_STUDENT_ID.to_string(),
                first_name: "Test".to_string(),
                last_name: "Student".to_string(),
                email: "test@fsc.edu".to_string(),
                major_id: None,
                minor_id: None,
                expected_graduation: None,
            },
            student_created: false,
            major_name: CSC_MAJOR.name.to_string(),
            completions: COMPLETED_CODES
                .iter()
                .map(|code| (code.to_string(), false))
                .collect(),
            completed_count: 3,
            recommendation: Recommendation {
                recommended: vec![
                    CatalogCourse {
                        id: Uuid::new_v4(),
                        code: "CSC3280".parse().unwrap(),
                        name: "Data Structures".to_string(),
                        credits: 4,
                    },
                    CatalogCourse {
                        id: Uuid::new_v4(),
                        code: "CSC3310".parse().unwrap(),
                        name: "Computer Organization and Architecture".to_string(),
                        credits: 4,
                    },
                ],
                total_credits: 8,
                remaining_to_complete: 4,
            },
        };

        let output = report.to_string();

        assert!(output.contains("Student: TEST001 - Test Student"));
        assert!(output.contains("  Completed: CSC2290 (created=false)"));
        assert!(output.contains("Total Credits: 8"));
        assert!(output.contains("Remaining courses after this: 4"));
        assert!(output.contains("1. CSC3280 - Data Structures (4 credits)"));
        assert!(output.contains("2. CSC3310 - Computer Organization and Architecture (4 credits)"));
    }
}
