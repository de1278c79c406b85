use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create courses table
        manager
            .create_table(
                Table::create()
                    .table(Courses::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Courses::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(Courses::Code)
                            .string_len(20)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Courses::Name).string_len(200).not_null())
                    .col(
                        ColumnDef::new(Courses::Credits)
                            .integer()
                            .not_null()
                            .check(Expr::col(Courses::Credits).gt(0)),
                    )
                    .col(ColumnDef::new(Courses::Description).text())
                    .col(ColumnDef::new(Courses::Department).string_len(100).not_null())
                    .to_owned(),
            )
            .await?;

        // Create prerequisites table (directed edges between courses)
        manager
            .create_table(
                Table::create()
                    .table(Prerequisites::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Prerequisites::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Prerequisites::CourseId).uuid().not_null())
                    .col(
                        ColumnDef::new(Prerequisites::PrerequisiteCourseId)
                            .uuid()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-prerequisites-course_id")
                            .from(Prerequisites::Table, Prerequisites::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-prerequisites-prerequisite_course_id")
                            .from(Prerequisites::Table, Prerequisites::PrerequisiteCourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_prerequisites_course_prerequisite")
                    .table(Prerequisites::Table)
                    .col(Prerequisites::CourseId)
                    .col(Prerequisites::PrerequisiteCourseId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Create majors and minors tables
        manager
            .create_table(
                Table::create()
                    .table(Majors::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Majors::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(Majors::Name)
                            .string_len(200)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Majors::Code)
                            .string_len(20)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Majors::Description).text())
                    .col(
                        ColumnDef::new(Majors::TotalCreditsRequired)
                            .integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Minors::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Minors::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(Minors::Name)
                            .string_len(200)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Minors::Code)
                            .string_len(20)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Minors::Description).text())
                    .col(
                        ColumnDef::new(Minors::TotalCreditsRequired)
                            .integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Create degree_requirements table
        manager
            .create_table(
                Table::create()
                    .table(DegreeRequirements::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DegreeRequirements::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(DegreeRequirements::MajorId).uuid())
                    .col(ColumnDef::new(DegreeRequirements::MinorId).uuid())
                    .col(ColumnDef::new(DegreeRequirements::CourseId).uuid())
                    .col(
                        ColumnDef::new(DegreeRequirements::RequirementType)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DegreeRequirements::CreditsRequired)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-degree_requirements-major_id")
                            .from(DegreeRequirements::Table, DegreeRequirements::MajorId)
                            .to(Majors::Table, Majors::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-degree_requirements-minor_id")
                            .from(DegreeRequirements::Table, DegreeRequirements::MinorId)
                            .to(Minors::Table, Minors::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-degree_requirements-course_id")
                            .from(DegreeRequirements::Table, DegreeRequirements::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create students table; losing a program leaves the student undeclared
        manager
            .create_table(
                Table::create()
                    .table(Students::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Students::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(Students::StudentId)
                            .string_len(20)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Students::FirstName).string_len(100).not_null())
                    .col(ColumnDef::new(Students::LastName).string_len(100).not_null())
                    .col(
                        ColumnDef::new(Students::Email)
                            .string_len(254)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Students::MajorId).uuid())
                    .col(ColumnDef::new(Students::MinorId).uuid())
                    .col(ColumnDef::new(Students::ExpectedGraduation).date())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-students-major_id")
                            .from(Students::Table, Students::MajorId)
                            .to(Majors::Table, Majors::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-students-minor_id")
                            .from(Students::Table, Students::MinorId)
                            .to(Minors::Table, Minors::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // Create completed_courses table
        manager
            .create_table(
                Table::create()
                    .table(CompletedCourses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CompletedCourses::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CompletedCourses::StudentId).uuid().not_null())
                    .col(ColumnDef::new(CompletedCourses::CourseId).uuid().not_null())
                    .col(
                        ColumnDef::new(CompletedCourses::Semester)
                            .string_len(20)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CompletedCourses::Grade)
                            .string_len(2)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CompletedCourses::DateCompleted)
                            .date()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-completed_courses-student_id")
                            .from(CompletedCourses::Table, CompletedCourses::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-completed_courses-course_id")
                            .from(CompletedCourses::Table, CompletedCourses::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_completed_courses_student_course")
                    .table(CompletedCourses::Table)
                    .col(CompletedCourses::StudentId)
                    .col(CompletedCourses::CourseId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Create schedules table
        manager
            .create_table(
                Table::create()
                    .table(Schedules::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Schedules::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Schedules::StudentId).uuid().not_null())
                    .col(ColumnDef::new(Schedules::Semester).string_len(20).not_null())
                    .col(ColumnDef::new(Schedules::CreatedAt).timestamp().not_null())
                    .col(
                        ColumnDef::new(Schedules::IsOptimal)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-schedules-student_id")
                            .from(Schedules::Table, Schedules::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create schedule_courses junction table (many-to-many)
        manager
            .create_table(
                Table::create()
                    .table(ScheduleCourses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ScheduleCourses::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ScheduleCourses::ScheduleId).uuid().not_null())
                    .col(ColumnDef::new(ScheduleCourses::CourseId).uuid().not_null())
                    .col(
                        ColumnDef::new(ScheduleCourses::Reason)
                            .string_len(200)
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-schedule_courses-schedule_id")
                            .from(ScheduleCourses::Table, ScheduleCourses::ScheduleId)
                            .to(Schedules::Table, Schedules::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-schedule_courses-course_id")
                            .from(ScheduleCourses::Table, ScheduleCourses::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop tables in reverse order due to foreign key constraints
        manager
            .drop_table(Table::drop().table(ScheduleCourses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Schedules::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CompletedCourses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Students::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(DegreeRequirements::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Minors::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Majors::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Prerequisites::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Courses::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
pub(crate) enum Courses {
    Table,
    Id,
    Code,
    Name,
    Credits,
    Description,
    Department,
}

#[derive(Iden)]
pub(crate) enum Prerequisites {
    Table,
    Id,
    CourseId,
    PrerequisiteCourseId,
}

#[derive(Iden)]
pub(crate) enum Majors {
    Table,
    Id,
    Name,
    Code,
    Description,
    TotalCreditsRequired,
}

#[derive(Iden)]
pub(crate) enum Minors {
    Table,
    Id,
    Name,
    Code,
    Description,
    TotalCreditsRequired,
}

#[derive(Iden)]
pub(crate) enum DegreeRequirements {
    Table,
    Id,
    MajorId,
    MinorId,
    CourseId,
    RequirementType,
    CreditsRequired,
}

#[derive(Iden)]
pub(crate) enum Students {
    Table,
    Id,
    StudentId,
    FirstName,
    LastName,
    Email,
    MajorId,
    MinorId,
    ExpectedGraduation,
}

#[derive(Iden)]
pub(crate) enum CompletedCourses {
    Table,
    Id,
    StudentId,
    CourseId,
    Semester,
    Grade,
    DateCompleted,
}

#[derive(Iden)]
pub(crate) enum Schedules {
    Table,
    Id,
    StudentId,
    Semester,
    CreatedAt,
    IsOptimal,
}

#[derive(Iden)]
pub(crate) enum ScheduleCourses {
    Table,
    Id,
    ScheduleId,
    CourseId,
    Reason,
}
