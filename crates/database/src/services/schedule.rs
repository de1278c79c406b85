use crate::entities::{courses, schedule_courses, schedules, students};
use chrono::Utc;
use log::info;
use models::recommendation::Recommendation;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, TransactionTrait,
};
use std::collections::HashMap;
use uuid::Uuid;

/// Reason attached to every course placed by the recommender
pub const MAJOR_REQUIREMENT_REASON: &str = "Fulfills major requirement";

type ScheduleWithCourses = (schedules::Model, Vec<(schedule_courses::Model, courses::Model)>);

pub struct ScheduleService;

impl ScheduleService {
    /// Stores a recommendation as the student's schedule for `semester`
    ///
    /// The schedule is never marked optimal since the packing is greedy.
    pub async fn save_recommendation(
        db: &DatabaseConnection,
        student: &students::Model,
        semester: &str,
        recommendation: &Recommendation,
    ) -> Result<ScheduleWithCourses, DbErr> {
        let course_ids: Vec<Uuid> = recommendation
            .recommended
            .iter()
            .map(|course| course.id)
            .collect();

        let txn = db.begin().await?;

        let mut course_by_id: HashMap<Uuid, courses::Model> = courses::Entity::find()
            .filter(courses::Column::Id.is_in(course_ids.clone()))
            .all(&txn)
            .await?
            .into_iter()
            .map(|course| (course.id, course))
            .collect();

        let schedule = schedules::ActiveModel {
            id: Set(Uuid::new_v4()),
            student_id: Set(student.id),
            semester: Set(semester.to_owned()),
            created_at: Set(Utc::now().naive_utc()),
            is_optimal: Set(false),
        }
        .insert(&txn)
        .await?;

        let mut entries = Vec::with_capacity(course_ids.len());
        for course_id in course_ids {
            let course = course_by_id.remove(&course_id).ok_or_else(|| {
                DbErr::RecordNotFound(format!("Course {course_id} does not exist"))
            })?;

            let entry = schedule_courses::ActiveModel {
                id: Set(Uuid::new_v4()),
                schedule_id: Set(schedule.id),
                course_id: Set(course.id),
                reason: Set(MAJOR_REQUIREMENT_REASON.to_string()),
            }
            .insert(&txn)
            .await?;

            entries.push((entry, course));
        }

        txn.commit().await?;

        info!(
            "Saved {semester} schedule with {} courses for student {}",
            entries.len(),
            student.student_id
        );

        Ok((schedule, entries))
    }

    /// All schedules of a student with their courses, newest first
    pub async fn list_for_student(
        db: &DatabaseConnection,
        student_id: Uuid,
    ) -> Result<Vec<ScheduleWithCourses>, DbErr> {
        let schedules = schedules::Entity::find()
            .filter(schedules::Column::StudentId.eq(student_id))
            .order_by_desc(schedules::Column::CreatedAt)
            .all(db)
            .await?;

        if schedules.is_empty() {
            return Ok(vec![]);
        }

        let schedule_ids: Vec<Uuid> = schedules.iter().map(|s| s.id).collect();

        // Batch fetch all entries with their courses
        let entries: Vec<(schedule_courses::Model, courses::Model)> =
            schedule_courses::Entity::find()
                .filter(schedule_courses::Column::ScheduleId.is_in(schedule_ids))
                .find_also_related(courses::Entity)
                .order_by_asc(courses::Column::Code)
                .all(db)
                .await?
                .into_iter()
                .filter_map(|(entry, course)| course.map(|c| (entry, c)))
                .collect();

        let mut entries_by_schedule: HashMap<Uuid, Vec<(schedule_courses::Model, courses::Model)>> =
            HashMap::new();
        for (entry, course) in entries {
            entries_by_schedule
                .entry(entry.schedule_id)
                .or_default()
                .push((entry, course));
        }

        Ok(schedules
            .into_iter()
            .map(|schedule| {
                let entries = entries_by_schedule.remove(&schedule.id).unwrap_or_default();
                (schedule, entries)
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::recommendation::CatalogCourse;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn student() -> students::Model {
        students::Model {
            id: Uuid::new_v4(),
            student_id: "TEST001".to_string(),
            first_name: "Test".to_string(),
            last_name: "Student".to_string(),
            email: "test@fsc.edu".to_string(),
            major_id: None,
            minor_id: None,
            expected_graduation: None,
        }
    }

    fn course(code: &str) -> courses::Model {
        courses::Model {
            id: Uuid::new_v4(),
            code: code.to_string(),
            name: format!("Course {code}"),
            credits: 4,
            description: None,
            department: "Computer Science".to_string(),
        }
    }

    #[tokio::test]
    async fn test_save_recommendation_links_each_course() {
        let student = student();
        let data_structures = course("CSC3280");
        let schedule = schedules::Model {
            id: Uuid::new_v4(),
            student_id: student.id,
            semester: "Spring 2026".to_string(),
            created_at: Utc::now().naive_utc(),
            is_optimal: false,
        };
        let entry = schedule_courses::Model {
            id: Uuid::new_v4(),
            schedule_id: schedule.id,
            course_id: data_structures.id,
            reason: MAJOR_REQUIREMENT_REASON.to_string(),
        };

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![data_structures.clone()]])
            .append_query_results([vec![schedule.clone()]])
            .append_query_results([vec![entry.clone()]])
            .into_connection();

        let recommendation = Recommendation {
            recommended: vec![CatalogCourse {
                id: data_structures.id,
                code: "CSC3280".parse().unwrap(),
                name: data_structures.name.clone(),
                credits: 4,
            }],
            total_credits: 4,
            remaining_to_complete: 5,
        };

        let (saved, entries) =
            ScheduleService::save_recommendation(&db, &student, "Spring 2026", &recommendation)
                .await
                .unwrap();

        assert_eq!(saved, schedule);
        assert!(!saved.is_optimal);
        assert_eq!(entries, vec![(entry, data_structures)]);
    }

    #[tokio::test]
    async fn test_save_recommendation_rejects_unknown_course() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<courses::Model>::new()])
            .append_query_results([vec![schedules::Model {
                id: Uuid::new_v4(),
                student_id: Uuid::new_v4(),
                semester: "Spring 2026".to_string(),
                created_at: Utc::now().naive_utc(),
                is_optimal: false,
            }]])
            .into_connection();

        let recommendation = Recommendation {
            recommended: vec![CatalogCourse {
                id: Uuid::new_v4(),
                code: "CSC9999".parse().unwrap(),
                name: "Missing".to_string(),
                credits: 3,
            }],
            total_credits: 3,
            remaining_to_complete: 0,
        };

        let result =
            ScheduleService::save_recommendation(&db, &student(), "Spring 2026", &recommendation)
                .await;

        assert!(matches!(result, Err(DbErr::RecordNotFound(_))));
    }
}
