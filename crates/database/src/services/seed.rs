use crate::entities::{courses, degree_requirements, majors, prerequisites};
use log::info;
use models::{
    requirement_type::RequirementType,
    seed_catalog::{
        CSC_COURSES, CSC_DEPARTMENT, CSC_MAJOR, CSC_PREREQUISITES, CourseSeed, PrerequisiteSeed,
        ProgramSeed,
    },
};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DatabaseTransaction,
    DbErr, EntityTrait, QueryFilter, TransactionTrait,
};
use std::collections::HashMap;
use uuid::Uuid;

/// What a seeding run created; everything else already existed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub major_created: bool,
    pub courses_created: usize,
    pub requirements_created: usize,
    pub prerequisites_created: usize,
}

pub struct SeedService;

impl SeedService {
    /// Loads the fixed Computer Science catalog
    pub async fn seed_csc_catalog(db: &DatabaseConnection) -> Result<SeedSummary, DbErr> {
        Self::seed_catalog(
            db,
            &CSC_MAJOR,
            CSC_DEPARTMENT,
            &CSC_COURSES,
            &CSC_PREREQUISITES,
        )
        .await
    }

    /// Creates a major, its courses as REQUIRED requirements, and the
    /// prerequisite edges between them
    ///
    /// Existing rows are matched by code (and by pair for edges and
    /// requirements) and left untouched, so running twice is harmless.
    pub async fn seed_catalog(
        db: &DatabaseConnection,
        major: &ProgramSeed,
        department: &str,
        courses: &[CourseSeed],
        edges: &[PrerequisiteSeed],
    ) -> Result<SeedSummary, DbErr> {
        let txn = db.begin().await?;
        let mut summary = SeedSummary::default();

        let (major, created) = get_or_create_major(&txn, major).await?;
        summary.major_created = created;
        info!("Major {} (created={created})", major.name);

        let mut course_ids: HashMap<&str, Uuid> = HashMap::new();
        for seed in courses {
            let (course, created) = get_or_create_course(&txn, seed, department).await?;
            summary.courses_created += usize::from(created);
            info!("  {}: {} (created={created})", course.code, course.name);

            if ensure_required(&txn, major.id, &course).await? {
                summary.requirements_created += 1;
            }

            course_ids.insert(seed.code, course.id);
        }

        for edge in edges {
            let course_id = lookup_seeded(&course_ids, edge.course)?;
            let prerequisite_id = lookup_seeded(&course_ids, edge.prerequisite)?;

            if ensure_prerequisite(&txn, course_id, prerequisite_id).await? {
                summary.prerequisites_created += 1;
            }
            info!("  {} is prerequisite for {}", edge.prerequisite, edge.course);
        }

        txn.commit().await?;
        Ok(summary)
    }
}

fn lookup_seeded(course_ids: &HashMap<&str, Uuid>, code: &str) -> Result<Uuid, DbErr> {
    course_ids
        .get(code)
        .copied()
        .ok_or_else(|| DbErr::RecordNotFound(format!("Course {code} is not part of the seed")))
}

async fn get_or_create_major(
    txn: &DatabaseTransaction,
    seed: &ProgramSeed,
) -> Result<(majors::Model, bool), DbErr> {
    let existing = majors::Entity::find()
        .filter(majors::Column::Code.eq(seed.code))
        .one(txn)
        .await?;

    if let Some(major) = existing {
        return Ok((major, false));
    }

    let major = majors::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(seed.name.to_string()),
        code: Set(seed.code.to_string()),
        description: Set(Some(seed.description.to_string())),
        total_credits_required: Set(seed.total_credits_required),
    }
    .insert(txn)
    .await?;

    Ok((major, true))
}

async fn get_or_create_course(
    txn: &DatabaseTransaction,
    seed: &CourseSeed,
    department: &str,
) -> Result<(courses::Model, bool), DbErr> {
    let existing = courses::Entity::find()
        .filter(courses::Column::Code.eq(seed.code))
        .one(txn)
        .await?;

    if let Some(course) = existing {
        return Ok((course, false));
    }

    let course = courses::ActiveModel {
        id: Set(Uuid::new_v4()),
        code: Set(seed.code.to_string()),
        name: Set(seed.name.to_string()),
        credits: Set(seed.credits),
        description: Set(Some(seed.description.to_string())),
        department: Set(department.to_string()),
    }
    .insert(txn)
    .await?;

    Ok((course, true))
}

/// Links `course` to the major as REQUIRED unless any requirement already
/// ties the two together
async fn ensure_required(
    txn: &DatabaseTransaction,
    major_id: Uuid,
    course: &courses::Model,
) -> Result<bool, DbErr> {
    let existing = degree_requirements::Entity::find()
        .filter(degree_requirements::Column::MajorId.eq(major_id))
        .filter(degree_requirements::Column::CourseId.eq(course.id))
        .one(txn)
        .await?;

    if existing.is_some() {
        return Ok(false);
    }

    degree_requirements::ActiveModel {
        id: Set(Uuid::new_v4()),
        major_id: Set(Some(major_id)),
        minor_id: Set(None),
        course_id: Set(Some(course.id)),
        requirement_type: Set(RequirementType::Required),
        credits_required: Set(course.credits),
    }
    .insert(txn)
    .await?;

    Ok(true)
}

async fn ensure_prerequisite(
    txn: &DatabaseTransaction,
    course_id: Uuid,
    prerequisite_course_id: Uuid,
) -> Result<bool, DbErr> {
    let existing = prerequisites::Entity::find()
        .filter(prerequisites::Column::CourseId.eq(course_id))
        .filter(prerequisites::Column::PrerequisiteCourseId.eq(prerequisite_course_id))
        .one(txn)
        .await?;

    if existing.is_some() {
        return Ok(false);
    }

    prerequisites::ActiveModel {
        id: Set(Uuid::new_v4()),
        course_id: Set(course_id),
        prerequisite_course_id: Set(prerequisite_course_id),
    }
    .insert(txn)
    .await?;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn major() -> majors::Model {
        majors::Model {
            id: Uuid::new_v4(),
            name: CSC_MAJOR.name.to_string(),
            code: CSC_MAJOR.code.to_string(),
            description: Some(CSC_MAJOR.description.to_string()),
            total_credits_required: CSC_MAJOR.total_credits_required,
        }
    }

    #[tokio::test]
    async fn test_seed_creates_missing_rows() {
        let major = major();
        let seed = CSC_COURSES[0];
        let course = courses::Model {
            id: Uuid::new_v4(),
            code: seed.code.to_string(),
            name: seed.name.to_string(),
            credits: seed.credits,
            description: Some(seed.description.to_string()),
            department: CSC_DEPARTMENT.to_string(),
        };
        let requirement = degree_requirements::Model {
            id: Uuid::new_v4(),
            major_id: Some(major.id),
            minor_id: None,
            course_id: Some(course.id),
            requirement_type: RequirementType::Required,
            credits_required: course.credits,
        };

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<majors::Model>::new()])
            .append_query_results([vec![major]])
            .append_query_results([Vec::<courses::Model>::new()])
            .append_query_results([vec![course]])
            .append_query_results([Vec::<degree_requirements::Model>::new()])
            .append_query_results([vec![requirement]])
            .into_connection();

        let summary = SeedService::seed_catalog(&db, &CSC_MAJOR, CSC_DEPARTMENT, &[seed], &[])
            .await
            .unwrap();

        assert_eq!(
            summary,
            SeedSummary {
                major_created: true,
                courses_created: 1,
                requirements_created: 1,
                prerequisites_created: 0,
            }
        );
    }

    #[tokio::test]
    async fn test_edge_to_unknown_course_fails() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![major()]])
            .into_connection();

        let edge = PrerequisiteSeed {
            course: "CSC2290",
            prerequisite: "CSC2280",
        };
        let result =
            SeedService::seed_catalog(&db, &CSC_MAJOR, CSC_DEPARTMENT, &[], &[edge]).await;

        assert!(matches!(result, Err(DbErr::RecordNotFound(_))));
    }
}
