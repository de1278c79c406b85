use crate::entities::{completed_courses, courses, degree_requirements, prerequisites};
use async_trait::async_trait;
use log::debug;
use models::{
    course_code::CourseCode, recommendation::CatalogCourse, requirement_type::RequirementType,
};
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, JoinType, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait,
};
use std::collections::HashSet;
use uuid::Uuid;

/// Read-only lookups the recommender needs from the store
#[async_trait]
pub trait DegreeCatalog {
    /// Codes of every course the student has completed
    async fn lookup_completed(&self, student_id: Uuid) -> Result<HashSet<CourseCode>, DbErr>;

    /// Codes of the direct prerequisites of the course with `course_id`;
    /// empty for unknown courses
    async fn lookup_prerequisites(&self, course_id: Uuid) -> Result<HashSet<CourseCode>, DbErr>;

    /// Courses the major lists as REQUIRED, distinct and ordered by code
    async fn lookup_required(&self, major_id: Uuid) -> Result<Vec<CatalogCourse>, DbErr>;
}

/// [`DegreeCatalog`] backed by the relational store
pub struct DbCatalog<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DbCatalog<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DegreeCatalog for DbCatalog<'_> {
    async fn lookup_completed(&self, student_id: Uuid) -> Result<HashSet<CourseCode>, DbErr> {
        let completed = courses::Entity::find()
            .join(
                JoinType::InnerJoin,
                completed_courses::Relation::Course.def().rev(),
            )
            .filter(completed_courses::Column::StudentId.eq(student_id))
            .all(self.db)
            .await?;

        debug!("Student {student_id} has completed {} courses", completed.len());

        completed
            .into_iter()
            .map(|course| parse_code(&course.code))
            .collect()
    }

    async fn lookup_prerequisites(&self, course_id: Uuid) -> Result<HashSet<CourseCode>, DbErr> {
        find_prerequisite_courses(self.db, course_id)
            .await?
            .into_iter()
            .map(|prereq| parse_code(&prereq.code))
            .collect()
    }

    async fn lookup_required(&self, major_id: Uuid) -> Result<Vec<CatalogCourse>, DbErr> {
        let required = courses::Entity::find()
            .join(
                JoinType::InnerJoin,
                degree_requirements::Relation::Course.def().rev(),
            )
            .filter(degree_requirements::Column::MajorId.eq(major_id))
            .filter(degree_requirements::Column::RequirementType.eq(RequirementType::Required))
            .distinct()
            .order_by_asc(courses::Column::Code)
            .all(self.db)
            .await?;

        debug!("Major {major_id} lists {} required courses", required.len());

        let mut seen = HashSet::new();
        required
            .into_iter()
            .filter(|course| seen.insert(course.id))
            .map(to_catalog_course)
            .collect()
    }
}

/// Looks up a single course by its code
pub async fn find_course_by_code(
    db: &DatabaseConnection,
    code: &CourseCode,
) -> Result<Option<courses::Model>, DbErr> {
    courses::Entity::find()
        .filter(courses::Column::Code.eq(code.as_str()))
        .one(db)
        .await
}

/// Direct prerequisite courses of the course with `course_id`, ordered by code
pub async fn find_prerequisite_courses(
    db: &DatabaseConnection,
    course_id: Uuid,
) -> Result<Vec<courses::Model>, DbErr> {
    courses::Entity::find()
        .join(
            JoinType::InnerJoin,
            prerequisites::Relation::PrerequisiteCourse.def().rev(),
        )
        .filter(prerequisites::Column::CourseId.eq(course_id))
        .order_by_asc(courses::Column::Code)
        .all(db)
        .await
}

/// Converts a stored course into the shape the recommender works with
pub fn to_catalog_course(course: courses::Model) -> Result<CatalogCourse, DbErr> {
    let credits = u32::try_from(course.credits).map_err(|_| {
        DbErr::Type(format!(
            "Course {} has invalid credit count {}",
            course.code, course.credits
        ))
    })?;

    Ok(CatalogCourse {
        id: course.id,
        code: parse_code(&course.code)?,
        name: course.name,
        credits,
    })
}

fn parse_code(code: &str) -> Result<CourseCode, DbErr> {
    code.parse()
        .map_err(|e| DbErr::Type(format!("Stored course code is invalid: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn course(code: &str, credits: i32) -> courses::Model {
        courses::Model {
            id: Uuid::new_v4(),
            code: code.to_string(),
            name: format!("Course {code}"),
            credits,
            description: None,
            department: "Computer Science".to_string(),
        }
    }

    #[tokio::test]
    async fn test_lookup_completed_collects_codes() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![course("CSC1980", 1), course("CSC2280", 4)]])
            .into_connection();

        let completed = DbCatalog::new(&db)
            .lookup_completed(Uuid::new_v4())
            .await
            .unwrap();

        let expected: HashSet<CourseCode> =
            ["CSC1980", "CSC2280"].iter().map(|c| c.parse().unwrap()).collect();
        assert_eq!(completed, expected);
    }

    #[tokio::test]
    async fn test_lookup_prerequisites_of_unknown_course_is_empty() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<courses::Model>::new()])
            .into_connection();

        let prereqs = DbCatalog::new(&db)
            .lookup_prerequisites(Uuid::new_v4())
            .await
            .unwrap();

        assert!(prereqs.is_empty());
    }

    #[tokio::test]
    async fn test_lookup_prerequisites_by_course_id() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![course("CSC2290", 4)]])
            .into_connection();

        let prereqs = DbCatalog::new(&db)
            .lookup_prerequisites(Uuid::new_v4())
            .await
            .unwrap();

        assert_eq!(prereqs.len(), 1);
        assert!(prereqs.contains("CSC2290"));
    }

    #[tokio::test]
    async fn test_stored_codes_are_kept_verbatim() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![course("CSC-101", 3), course("csc3380", 4)]])
            .append_query_results([vec![course("csc3280", 4)]])
            .into_connection();
        let catalog = DbCatalog::new(&db);

        let completed = catalog.lookup_completed(Uuid::new_v4()).await.unwrap();
        assert!(completed.contains("CSC-101"));
        assert!(completed.contains("csc3380"));

        let required = catalog.lookup_required(Uuid::new_v4()).await.unwrap();
        let codes: Vec<&str> = required.iter().map(|c| c.code.as_str()).collect();
        assert_eq!(codes, ["csc3280"]);
    }

    #[tokio::test]
    async fn test_lookup_required_drops_duplicate_rows() {
        let data_structures = course("CSC3280", 4);
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![
                course("CSC1980", 1),
                data_structures.clone(),
                data_structures,
            ]])
            .into_connection();

        let required = DbCatalog::new(&db)
            .lookup_required(Uuid::new_v4())
            .await
            .unwrap();

        let codes: Vec<&str> = required.iter().map(|c| c.code.as_str()).collect();
        assert_eq!(codes, ["CSC1980", "CSC3280"]);
        assert_eq!(required[0].credits, 1);
    }

    #[test]
    fn test_negative_credits_are_rejected() {
        assert!(to_catalog_course(course("CSC1000", -3)).is_err());
    }
}
