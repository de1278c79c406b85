use crate::entities::{completed_courses, students};
use chrono::NaiveDate;
use log::info;
use models::grade::Grade;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};
use uuid::Uuid;

/// Fields needed to register a student
#[derive(Debug, Clone)]
pub struct NewStudent {
    pub student_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub major_id: Option<Uuid>,
    pub minor_id: Option<Uuid>,
    pub expected_graduation: Option<NaiveDate>,
}

/// Fields needed to mark a course as completed
#[derive(Debug, Clone)]
pub struct NewCompletedCourse {
    pub student_id: Uuid,
    pub course_id: Uuid,
    pub semester: String,
    pub grade: Grade,
    pub date_completed: NaiveDate,
}

pub struct StudentService;

impl StudentService {
    /// Finds a student by their university-issued id
    pub async fn find_by_student_id(
        db: &DatabaseConnection,
        student_id: &str,
    ) -> Result<Option<students::Model>, DbErr> {
        students::Entity::find()
            .filter(students::Column::StudentId.eq(student_id))
            .one(db)
            .await
    }

    /// Inserts a new student
    ///
    /// Duplicate student ids or emails surface as unique constraint errors.
    pub async fn create_student(
        db: &DatabaseConnection,
        new_student: NewStudent,
    ) -> Result<students::Model, DbErr> {
        let student = students::ActiveModel {
            id: Set(Uuid::new_v4()),
            student_id: Set(new_student.student_id),
            first_name: Set(new_student.first_name),
            last_name: Set(new_student.last_name),
            email: Set(new_student.email),
            major_id: Set(new_student.major_id),
            minor_id: Set(new_student.minor_id),
            expected_graduation: Set(new_student.expected_graduation),
        }
        .insert(db)
        .await?;

        info!("Created student {}", student.student_id);
        Ok(student)
    }

    /// Returns the existing student with the same id, or creates one
    ///
    /// The boolean is true when the student was created.
    pub async fn get_or_create_student(
        db: &DatabaseConnection,
        new_student: NewStudent,
    ) -> Result<(students::Model, bool), DbErr> {
        match Self::find_by_student_id(db, &new_student.student_id).await? {
            Some(student) => Ok((student, false)),
            None => Ok((Self::create_student(db, new_student).await?, true)),
        }
    }

    /// Records a completed course
    ///
    /// A second record for the same (student, course) pair violates the
    /// unique constraint.
    pub async fn record_completed_course(
        db: &DatabaseConnection,
        completed: NewCompletedCourse,
    ) -> Result<completed_courses::Model, DbErr> {
        let record = completed_courses::ActiveModel {
            id: Set(Uuid::new_v4()),
            student_id: Set(completed.student_id),
            course_id: Set(completed.course_id),
            semester: Set(completed.semester),
            grade: Set(completed.grade),
            date_completed: Set(completed.date_completed),
        }
        .insert(db)
        .await?;

        info!(
            "Recorded course {} as completed by student {}",
            record.course_id, record.student_id
        );
        Ok(record)
    }

    /// Returns the existing record for the (student, course) pair, or creates one
    pub async fn get_or_record_completed_course(
        db: &DatabaseConnection,
        completed: NewCompletedCourse,
    ) -> Result<(completed_courses::Model, bool), DbErr> {
        let existing = completed_courses::Entity::find()
            .filter(completed_courses::Column::StudentId.eq(completed.student_id))
            .filter(completed_courses::Column::CourseId.eq(completed.course_id))
            .one(db)
            .await?;

        match existing {
            Some(record) => Ok((record, false)),
            None => Ok((Self::record_completed_course(db, completed).await?, true)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn new_student() -> NewStudent {
        NewStudent {
            student_id: "TEST001".to_string(),
            first_name: "Test".to_string(),
            last_name: "Student".to_string(),
            email: "test@fsc.edu".to_string(),
            major_id: None,
            minor_id: None,
            expected_graduation: NaiveDate::from_ymd_opt(2026, 5, 15),
        }
    }

    fn stored(new_student: &NewStudent) -> students::Model {
        students::Model {
            id: Uuid::new_v4(),
            student_id: new_student.student_id.clone(),
            first_name: new_student.first_name.clone(),
            last_name: new_student.last_name.clone(),
            email: new_student.email.clone(),
            major_id: new_student.major_id,
            minor_id: new_student.minor_id,
            expected_graduation: new_student.expected_graduation,
        }
    }

    #[tokio::test]
    async fn test_get_or_create_returns_existing_student() {
        let existing = stored(&new_student());
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![existing.clone()]])
            .into_connection();

        let (student, created) = StudentService::get_or_create_student(&db, new_student())
            .await
            .unwrap();

        assert!(!created);
        assert_eq!(student, existing);
        assert_eq!(student.full_name(), "Test Student");
    }

    #[tokio::test]
    async fn test_get_or_create_inserts_missing_student() {
        let inserted = stored(&new_student());
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<students::Model>::new()])
            .append_query_results([vec![inserted.clone()]])
            .into_connection();

        let (student, created) = StudentService::get_or_create_student(&db, new_student())
            .await
            .unwrap();

        assert!(created);
        assert_eq!(student.student_id, "TEST001");
        assert_eq!(student.expected_graduation, NaiveDate::from_ymd_opt(2026, 5, 15));
    }
}
