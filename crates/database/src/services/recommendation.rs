use crate::{
    entities::{courses, students},
    services::{
        catalog::{DbCatalog, DegreeCatalog, find_course_by_code, find_prerequisite_courses},
        student::StudentService,
    },
};
use futures::future::try_join_all;
use log::{debug, info};
use models::{
    course_code::CourseCode,
    recommendation::{Recommendation, Recommender},
};
use sea_orm::{DatabaseConnection, DbErr};
use uuid::Uuid;

/// A course together with the prerequisite records behind its eligibility
#[derive(Debug, Clone, PartialEq)]
pub struct CourseEligibility {
    pub course: courses::Model,
    pub prerequisites: Vec<courses::Model>,
    pub prerequisites_met: bool,
}

pub struct RecommendationService;

impl RecommendationService {
    /// Loads everything the recommender needs for `student`
    ///
    /// A student without a major gets an empty required list. Prerequisites
    /// are only fetched for courses that are still outstanding.
    pub async fn build_recommender<C>(
        catalog: &C,
        student: &students::Model,
    ) -> Result<Recommender, DbErr>
    where
        C: DegreeCatalog + Sync,
    {
        let completed = catalog.lookup_completed(student.id).await?;

        let required = match student.major_id {
            Some(major_id) => catalog.lookup_required(major_id).await?,
            None => {
                debug!("Student {} has no major", student.student_id);
                Vec::new()
            }
        };

        let mut recommender = Recommender::new(completed, required);

        let remaining: Vec<(Uuid, CourseCode)> = recommender
            .remaining_courses()
            .into_iter()
            .map(|course| (course.id, course.code.clone()))
            .collect();

        let prereqs = try_join_all(
            remaining
                .iter()
                .map(|(id, _)| catalog.lookup_prerequisites(*id)),
        )
        .await?;
        for ((_, code), prereqs) in remaining.into_iter().zip(prereqs) {
            recommender.set_prerequisites(code, prereqs);
        }

        Ok(recommender)
    }

    /// Recommends next-semester courses for an already loaded student
    pub async fn recommend<C>(
        catalog: &C,
        student: &students::Model,
        max_credits: u32,
    ) -> Result<Recommendation, DbErr>
    where
        C: DegreeCatalog + Sync,
    {
        let recommender = Self::build_recommender(catalog, student).await?;
        let recommendation = recommender.recommend(max_credits);

        info!(
            "Recommended {} courses ({} credits, cap {max_credits}) for student {}",
            recommendation.recommended.len(),
            recommendation.total_credits,
            student.student_id
        );

        Ok(recommendation)
    }

    /// Looks up the student by their public id and recommends courses
    ///
    /// Returns `None` when no such student exists.
    pub async fn recommend_for_student(
        db: &DatabaseConnection,
        student_id: &str,
        max_credits: u32,
    ) -> Result<Option<(students::Model, Recommendation)>, DbErr> {
        let Some(student) = StudentService::find_by_student_id(db, student_id).await? else {
            return Ok(None);
        };

        let recommendation = Self::recommend(&DbCatalog::new(db), &student, max_credits).await?;

        Ok(Some((student, recommendation)))
    }

    /// Whether `student_id` may take `code`, with its direct prerequisites
    ///
    /// Returns `None` when either the student or the course is unknown.
    pub async fn course_eligibility(
        db: &DatabaseConnection,
        student_id: &str,
        code: &CourseCode,
    ) -> Result<Option<CourseEligibility>, DbErr> {
        let Some(student) = StudentService::find_by_student_id(db, student_id).await? else {
            return Ok(None);
        };
        let Some(course) = find_course_by_code(db, code).await? else {
            return Ok(None);
        };

        let completed = DbCatalog::new(db).lookup_completed(student.id).await?;
        let prerequisites = find_prerequisite_courses(db, course.id).await?;

        let prereq_codes = prerequisites
            .iter()
            .map(|prereq| prereq.code.parse::<CourseCode>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| DbErr::Type(format!("Stored course code is invalid: {e}")))?;

        let details = Recommender::new(completed, Vec::new())
            .with_prerequisites(code.clone(), prereq_codes)
            .course_details(code);

        Ok(Some(CourseEligibility {
            course,
            prerequisites,
            prerequisites_met: details.prerequisites_met,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use models::{
        recommendation::{CatalogCourse, DEFAULT_MAX_CREDITS},
        seed_catalog::{CSC_COURSES, CSC_PREREQUISITES},
    };
    use sea_orm::{DatabaseBackend, MockDatabase};
    use std::{
        collections::{HashMap, HashSet},
        sync::Mutex,
    };

    /// The seeded CSC catalog held in memory
    struct InMemoryCatalog {
        major_id: Uuid,
        courses: Vec<CatalogCourse>,
        completed: HashMap<Uuid, HashSet<CourseCode>>,
        prerequisite_lookups: Mutex<Vec<CourseCode>>,
    }

    impl InMemoryCatalog {
        fn new(major_id: Uuid) -> Self {
            let courses = CSC_COURSES
                .iter()
                .map(|c| CatalogCourse {
                    id: Uuid::new_v4(),
                    code: c.code.parse().unwrap(),
                    name: c.name.to_string(),
                    credits: c.credits as u32,
                })
                .collect();

            Self {
                major_id,
                courses,
                completed: HashMap::new(),
                prerequisite_lookups: Mutex::new(Vec::new()),
            }
        }

        fn complete(mut self, student: Uuid, codes: &[&str]) -> Self {
            self.completed
                .entry(student)
                .or_default()
                .extend(codes.iter().map(|c| c.parse::<CourseCode>().unwrap()));
            self
        }
    }

    #[async_trait]
    impl DegreeCatalog for InMemoryCatalog {
        async fn lookup_completed(&self, student_id: Uuid) -> Result<HashSet<CourseCode>, DbErr> {
            Ok(self.completed.get(&student_id).cloned().unwrap_or_default())
        }

        async fn lookup_prerequisites(&self, course_id: Uuid) -> Result<HashSet<CourseCode>, DbErr> {
            let Some(course) = self.courses.iter().find(|c| c.id == course_id) else {
                return Ok(HashSet::new());
            };
            self.prerequisite_lookups
                .lock()
                .unwrap()
                .push(course.code.clone());

            Ok(CSC_PREREQUISITES
                .iter()
                .filter(|edge| edge.course == course.code.as_str())
                .map(|edge| edge.prerequisite.parse().unwrap())
                .collect())
        }

        async fn lookup_required(&self, major_id: Uuid) -> Result<Vec<CatalogCourse>, DbErr> {
            if major_id != self.major_id {
                return Ok(Vec::new());
            }

            Ok(self.courses.clone())
        }
    }

    fn student(major_id: Option<Uuid>) -> students::Model {
        students::Model {
            id: Uuid::new_v4(),
            student_id: "TEST001".to_string(),
            first_name: "Test".to_string(),
            last_name: "Student".to_string(),
            email: "test@fsc.edu".to_string(),
            major_id,
            minor_id: None,
            expected_graduation: None,
        }
    }

    fn codes(recommendation: &Recommendation) -> Vec<&str> {
        recommendation
            .recommended
            .iter()
            .map(|c| c.code.as_str())
            .collect()
    }

    #[tokio::test]
    async fn test_recommend_for_csc_student() {
        let major = Uuid::new_v4();
        let student = student(Some(major));
        let catalog =
            InMemoryCatalog::new(major).complete(student.id, &["CSC1980", "CSC2280", "CSC2290"]);

        let recommendation =
            RecommendationService::recommend(&catalog, &student, DEFAULT_MAX_CREDITS)
                .await
                .unwrap();

        assert_eq!(codes(&recommendation), ["CSC3280", "CSC3310"]);
        assert_eq!(recommendation.total_credits, 8);
        assert_eq!(recommendation.remaining_to_complete, 4);

        let again = RecommendationService::recommend(&catalog, &student, DEFAULT_MAX_CREDITS)
            .await
            .unwrap();
        assert_eq!(recommendation, again);
    }

    #[tokio::test]
    async fn test_recommend_with_four_credit_cap() {
        let major = Uuid::new_v4();
        let student = student(Some(major));
        let catalog =
            InMemoryCatalog::new(major).complete(student.id, &["CSC1980", "CSC2280", "CSC2290"]);

        let recommendation = RecommendationService::recommend(&catalog, &student, 4)
            .await
            .unwrap();

        assert_eq!(codes(&recommendation), ["CSC3280"]);
        assert_eq!(recommendation.total_credits, 4);
    }

    #[tokio::test]
    async fn test_student_without_major_gets_nothing() {
        let student = student(None);
        let catalog = InMemoryCatalog::new(Uuid::new_v4()).complete(student.id, &["CSC2280"]);

        let recommendation =
            RecommendationService::recommend(&catalog, &student, DEFAULT_MAX_CREDITS)
                .await
                .unwrap();

        assert!(recommendation.recommended.is_empty());
        assert_eq!(recommendation.total_credits, 0);
        assert_eq!(recommendation.remaining_to_complete, 0);
        assert!(catalog.prerequisite_lookups.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_prerequisites_only_loaded_for_remaining_courses() {
        let major = Uuid::new_v4();
        let student = student(Some(major));
        let catalog =
            InMemoryCatalog::new(major).complete(student.id, &["CSC1980", "CSC2280", "CSC2290"]);

        RecommendationService::build_recommender(&catalog, &student)
            .await
            .unwrap();

        let looked_up = catalog.prerequisite_lookups.lock().unwrap();
        assert_eq!(looked_up.len(), CSC_COURSES.len() - 3);
        assert!(!looked_up.iter().any(|c| c.as_str() == "CSC2290"));
    }

    #[tokio::test]
    async fn test_unknown_student_yields_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<students::Model>::new()])
            .into_connection();

        let result = RecommendationService::recommend_for_student(&db, "NOPE001", 18)
            .await
            .unwrap();

        assert!(result.is_none());
    }

    fn stored_course(code: &str, credits: i32) -> courses::Model {
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
    async fn test_lower_case_stored_codes_keep_their_prerequisites() {
        let major = Uuid::new_v4();
        let student = student(Some(major));

        // completed, required, then the prerequisites of csc3380
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<courses::Model>::new()])
            .append_query_results([vec![stored_course("csc3380", 4)]])
            .append_query_results([vec![stored_course("csc3280", 4)]])
            .into_connection();

        let recommender = RecommendationService::build_recommender(&DbCatalog::new(&db), &student)
            .await
            .unwrap();

        let details = recommender.course_details(&"csc3380".parse().unwrap());
        assert_eq!(details.prerequisites.len(), 1);
        assert_eq!(details.prerequisites[0].as_str(), "csc3280");
        assert!(!details.prerequisites_met);

        let recommendation = recommender.recommend(DEFAULT_MAX_CREDITS);
        assert!(recommendation.recommended.is_empty());
        assert_eq!(recommendation.remaining_to_complete, 1);
    }
}
