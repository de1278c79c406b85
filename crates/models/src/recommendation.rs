use crate::course_code::CourseCode;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use uuid::Uuid;

/// Credit cap used when the caller does not provide one
pub const DEFAULT_MAX_CREDITS: u32 = 18;

/// The parts of a catalog course the recommender needs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogCourse {
    /// Row id, used for every follow-up lookup in the store
    pub id: Uuid,
    pub code: CourseCode,
    pub name: String,
    pub credits: u32,
}

/// Courses picked for the next semester
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    /// Recommended courses in the order they were chosen
    pub recommended: Vec<CatalogCourse>,
    pub total_credits: u32,
    /// Required courses still outstanding after taking the recommended ones
    pub remaining_to_complete: usize,
}

/// Prerequisite status of a single course
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseDetails {
    pub course: CourseCode,
    /// Direct prerequisites, sorted by code
    pub prerequisites: Vec<CourseCode>,
    pub prerequisites_met: bool,
}

/// Picks next-semester courses for one student
///
/// Built from explicit collections so it can run without a store:
/// - the codes the student has completed
/// - the REQUIRED courses of the student's major (empty without a major)
/// - the direct prerequisites of any course that will be checked
///
/// Only direct prerequisites are checked. A course whose prerequisite has
/// itself an unmet prerequisite is still eligible once the direct one is
/// completed.
#[derive(Debug, Clone, Default)]
pub struct Recommender {
    completed: HashSet<CourseCode>,
    required: Vec<CatalogCourse>,
    prerequisites: HashMap<CourseCode, HashSet<CourseCode>>,
}

impl Recommender {
    /// Starts with no prerequisites recorded
    pub fn new(completed: HashSet<CourseCode>, required: Vec<CatalogCourse>) -> Self {
        Self {
            completed,
            required,
            prerequisites: HashMap::new(),
        }
    }

    /// Records the direct prerequisites of `course`, replacing any previous set
    pub fn set_prerequisites<I>(&mut self, course: CourseCode, prerequisites: I)
    where
        I: IntoIterator<Item = CourseCode>,
    {
        self.prerequisites
            .insert(course, prerequisites.into_iter().collect());
    }

    /// Builder form of [`Recommender::set_prerequisites`]
    pub fn with_prerequisites<I>(mut self, course: CourseCode, prerequisites: I) -> Self
    where
        I: IntoIterator<Item = CourseCode>,
    {
        self.set_prerequisites(course, prerequisites);
        self
    }

    pub fn completed(&self) -> &HashSet<CourseCode> {
        &self.completed
    }

    /// Whether every direct prerequisite of `course` has been completed
    ///
    /// Courses without recorded prerequisites are always eligible.
    pub fn has_prerequisites(&self, course: &CourseCode) -> bool {
        self.prerequisites
            .get(course)
            .is_none_or(|prereqs| prereqs.is_subset(&self.completed))
    }

    /// Required courses not yet completed, without duplicates
    pub fn remaining_courses(&self) -> Vec<&CatalogCourse> {
        let mut seen = HashSet::new();

        self.required
            .iter()
            .filter(|course| !self.completed.contains(&course.code))
            .filter(|course| seen.insert(&course.code))
            .collect()
    }

    /// Greedily fills the semester up to `max_credits`
    ///
    /// Eligible courses are taken in course code order. A course that would
    /// overflow the cap is skipped and later courses are still tried.
    pub fn recommend(&self, max_credits: u32) -> Recommendation {
        let remaining = self.remaining_courses();

        let mut eligible: Vec<&CatalogCourse> = remaining
            .iter()
            .copied()
            .filter(|course| self.has_prerequisites(&course.code))
            .collect();
        eligible.sort_by(|a, b| a.code.cmp(&b.code));

        let mut recommended = Vec::new();
        let mut total_credits = 0u32;

        for course in eligible {
            if let Some(total) = total_credits.checked_add(course.credits)
                && total <= max_credits
            {
                recommended.push(course.clone());
                total_credits = total;
            }
        }

        Recommendation {
            remaining_to_complete: remaining.len() - recommended.len(),
            recommended,
            total_credits,
        }
    }

    /// Direct prerequisites of `course` and whether they are satisfied
    pub fn course_details(&self, course: &CourseCode) -> CourseDetails {
        let mut prerequisites: Vec<CourseCode> = self
            .prerequisites
            .get(course)
            .map(|prereqs| prereqs.iter().cloned().collect())
            .unwrap_or_default();
        prerequisites.sort();

        CourseDetails {
            course: course.clone(),
            prerequisites,
            prerequisites_met: self.has_prerequisites(course),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed_catalog::{CSC_COURSES, CSC_PREREQUISITES};

    fn code(s: &str) -> CourseCode {
        s.parse().unwrap()
    }

    fn codes(list: &[&str]) -> HashSet<CourseCode> {
        list.iter().map(|s| code(s)).collect()
    }

    fn course(c: &str, credits: u32) -> CatalogCourse {
        CatalogCourse {
            id: Uuid::new_v4(),
            code: code(c),
            name: format!("Course {c}"),
            credits,
        }
    }

    /// The seeded CSC major with its prerequisite graph
    fn csc_recommender(completed: &[&str]) -> Recommender {
        let required = CSC_COURSES
            .iter()
            .map(|c| course(c.code, c.credits as u32))
            .collect();
        let mut recommender = Recommender::new(codes(completed), required);

        for edge in CSC_PREREQUISITES {
            let mut prereqs: Vec<CourseCode> = recommender
                .course_details(&code(edge.course))
                .prerequisites;
            prereqs.push(code(edge.prerequisite));
            recommender.set_prerequisites(code(edge.course), prereqs);
        }

        recommender
    }

    fn recommended_codes(recommendation: &Recommendation) -> Vec<&str> {
        recommendation
            .recommended
            .iter()
            .map(|c| c.code.as_str())
            .collect()
    }

    #[test]
    fn test_csc_student_after_intro_sequence() {
        let recommender = csc_recommender(&["CSC1980", "CSC2280", "CSC2290"]);
        let recommendation = recommender.recommend(DEFAULT_MAX_CREDITS);

        assert_eq!(recommended_codes(&recommendation), ["CSC3280", "CSC3310"]);
        assert_eq!(recommendation.total_credits, 8);
        assert_eq!(recommendation.remaining_to_complete, 4);
    }

    #[test]
    fn test_small_cap_takes_first_course_by_code() {
        let recommender = csc_recommender(&["CSC1980", "CSC2280", "CSC2290"]);
        let recommendation = recommender.recommend(4);

        assert_eq!(recommended_codes(&recommendation), ["CSC3280"]);
        assert_eq!(recommendation.total_credits, 4);
        assert_eq!(recommendation.remaining_to_complete, 5);
    }

    #[test]
    fn test_new_student_only_gets_courses_without_prerequisites() {
        let recommender = csc_recommender(&[]);
        let recommendation = recommender.recommend(DEFAULT_MAX_CREDITS);

        assert_eq!(recommended_codes(&recommendation), ["CSC1980", "CSC2280"]);
        for course in &recommendation.recommended {
            assert!(recommender.course_details(&course.code).prerequisites.is_empty());
        }
    }

    #[test]
    fn test_no_major_is_vacuous() {
        let recommender = Recommender::new(codes(&["CSC2280"]), Vec::new());
        let recommendation = recommender.recommend(DEFAULT_MAX_CREDITS);

        assert!(recommendation.recommended.is_empty());
        assert_eq!(recommendation.total_credits, 0);
        assert_eq!(recommendation.remaining_to_complete, 0);
    }

    #[test]
    fn test_skipped_course_does_not_stop_packing() {
        let required = vec![course("MAT1000", 3), course("MAT2000", 5), course("MAT3000", 1)];
        let recommender = Recommender::new(HashSet::new(), required);

        let recommendation = recommender.recommend(5);

        assert_eq!(recommended_codes(&recommendation), ["MAT1000", "MAT3000"]);
        assert_eq!(recommendation.total_credits, 4);
        assert_eq!(recommendation.remaining_to_complete, 1);
    }

    #[test]
    fn test_zero_cap_recommends_nothing() {
        let recommender = csc_recommender(&[]);
        let recommendation = recommender.recommend(0);

        assert!(recommendation.recommended.is_empty());
        assert_eq!(recommendation.remaining_to_complete, CSC_COURSES.len());
    }

    #[test]
    fn test_only_direct_prerequisites_are_checked() {
        // CSC3380 needs CSC3280, which in turn needs CSC2290
        let recommender = csc_recommender(&["CSC3280"]);

        assert!(recommender.has_prerequisites(&code("CSC3380")));
        assert!(!recommender.has_prerequisites(&code("CSC2290")));
        assert!(recommended_codes(&recommender.recommend(18)).contains(&"CSC3380"));
    }

    #[test]
    fn test_duplicate_required_entries_count_once() {
        let required = vec![course("BIO1000", 3), course("BIO1000", 3), course("BIO2000", 3)];
        let recommender = Recommender::new(HashSet::new(), required);

        assert_eq!(recommender.remaining_courses().len(), 2);

        let recommendation = recommender.recommend(3);
        assert_eq!(recommended_codes(&recommendation), ["BIO1000"]);
        assert_eq!(recommendation.remaining_to_complete, 1);
    }

    #[test]
    fn test_invariants_hold_for_every_cap() {
        let recommender = csc_recommender(&["CSC1980", "CSC2280"]);

        for cap in 0..=40 {
            let recommendation = recommender.recommend(cap);
            assert!(recommendation.total_credits <= cap);

            let sum: u32 = recommendation.recommended.iter().map(|c| c.credits).sum();
            assert_eq!(sum, recommendation.total_credits);

            for course in &recommendation.recommended {
                let details = recommender.course_details(&course.code);
                assert!(details.prerequisites_met);
                assert!(
                    details
                        .prerequisites
                        .iter()
                        .all(|p| recommender.completed().contains(p))
                );
                assert!(!recommender.completed().contains(&course.code));
            }
        }
    }

    #[test]
    fn test_recommendation_is_deterministic() {
        let recommender = csc_recommender(&["CSC1980", "CSC2280", "CSC2290"]);
        assert_eq!(recommender.recommend(18), recommender.recommend(18));
    }

    #[test]
    fn test_course_details() {
        let recommender = csc_recommender(&["CSC2280"])
            .with_prerequisites(code("CSC5000"), [code("CSC4899"), code("CSC4410")]);

        let details = recommender.course_details(&code("CSC2290"));
        assert_eq!(details.prerequisites, vec![code("CSC2280")]);
        assert!(details.prerequisites_met);

        let details = recommender.course_details(&code("CSC5000"));
        assert_eq!(details.prerequisites, vec![code("CSC4410"), code("CSC4899")]);
        assert!(!details.prerequisites_met);

        let details = recommender.course_details(&code("CSC1980"));
        assert!(details.prerequisites.is_empty());
        assert!(details.prerequisites_met);
    }
}
