use crate::m20251016_create_degree_tables::{
    CompletedCourses, Courses, DegreeRequirements, Prerequisites, ScheduleCourses, Schedules,
    Students,
};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Admin listings filter by department
        manager
            .create_index(
                Index::create()
                    .name("idx_courses_department")
                    .table(Courses::Table)
                    .col(Courses::Department)
                    .to_owned(),
            )
            .await?;

        // Reverse lookups of "what does this course unlock"
        manager
            .create_index(
                Index::create()
                    .name("idx_prerequisites_prerequisite_course_id")
                    .table(Prerequisites::Table)
                    .col(Prerequisites::PrerequisiteCourseId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_degree_requirements_major_id")
                    .table(DegreeRequirements::Table)
                    .col(DegreeRequirements::MajorId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_degree_requirements_minor_id")
                    .table(DegreeRequirements::Table)
                    .col(DegreeRequirements::MinorId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_students_major_id")
                    .table(Students::Table)
                    .col(Students::MajorId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_completed_courses_course_id")
                    .table(CompletedCourses::Table)
                    .col(CompletedCourses::CourseId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_schedules_student_id_created_at")
                    .table(Schedules::Table)
                    .col(Schedules::StudentId)
                    .col(Schedules::CreatedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_schedule_courses_schedule_id")
                    .table(ScheduleCourses::Table)
                    .col(ScheduleCourses::ScheduleId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop indexes in reverse order
        for name in [
            "idx_schedule_courses_schedule_id",
            "idx_schedules_student_id_created_at",
            "idx_completed_courses_course_id",
            "idx_students_major_id",
            "idx_degree_requirements_minor_id",
            "idx_degree_requirements_major_id",
            "idx_prerequisites_prerequisite_course_id",
            "idx_courses_department",
        ] {
            manager
                .drop_index(Index::drop().name(name).to_owned())
                .await?;
        }

        Ok(())
    }
}
