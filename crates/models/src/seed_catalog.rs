//! The fixed Computer Science catalog loaded by the seeding tool.

/// A major or minor to create
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgramSeed {
    pub code: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub total_credits_required: i32,
}

/// A course to create and link to the seeded major as a REQUIRED course
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CourseSeed {
    pub code: &'static str,
    pub name: &'static str,
    pub credits: i32,
    pub description: &'static str,
}

/// A prerequisite edge, `course` requires `prerequisite`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrerequisiteSeed {
    pub course: &'static str,
    pub prerequisite: &'static str,
}

pub const CSC_DEPARTMENT: &str = "Computer Science";

pub const CSC_MAJOR: ProgramSeed = ProgramSeed {
    code: "CSC",
    name: "Computer Science",
    description: "Bachelor of Science in Computer Science",
    total_credits_required: 124,
};

pub const CSC_COURSES: [CourseSeed; 9] = [
    CourseSeed {
        code: "CSC1980",
        name: "Exploring Computer Science",
        credits: 1,
        description: "Foundational course introducing computer science concepts",
    },
    CourseSeed {
        code: "CSC2280",
        name: "Introduction to Computer Science",
        credits: 4,
        description: "Introduction to computer science principles and programming",
    },
    CourseSeed {
        code: "CSC2290",
        name: "Object-Oriented Programming",
        credits: 4,
        description: "Programming using object-oriented principles",
    },
    CourseSeed {
        code: "CSC3280",
        name: "Data Structures",
        credits: 4,
        description: "Study of data structures including lists, stacks, queues, trees",
    },
    CourseSeed {
        code: "CSC3310",
        name: "Computer Organization and Architecture",
        credits: 4,
        description: "Computer hardware organization and architecture",
    },
    CourseSeed {
        code: "CSC3380",
        name: "Algorithms",
        credits: 4,
        description: "Algorithm design and analysis",
    },
    CourseSeed {
        code: "CSC3400",
        name: "Software Engineering",
        credits: 4,
        description: "Software engineering principles and practices",
    },
    CourseSeed {
        code: "CSC4410",
        name: "Operating Systems & Concurrency",
        credits: 4,
        description: "Operating systems and concurrent programming",
    },
    CourseSeed {
        code: "CSC4899",
        name: "Senior Project",
        credits: 4,
        description: "Capstone senior project",
    },
];

pub const CSC_PREREQUISITES: [PrerequisiteSeed; 7] = [
    PrerequisiteSeed { course: "CSC2290", prerequisite: "CSC2280" },
    PrerequisiteSeed { course: "CSC3280", prerequisite: "CSC2290" },
    PrerequisiteSeed { course: "CSC3310", prerequisite: "CSC2290" },
    PrerequisiteSeed { course: "CSC3380", prerequisite: "CSC3280" },
    PrerequisiteSeed { course: "CSC3400", prerequisite: "CSC3280" },
    PrerequisiteSeed { course: "CSC4410", prerequisite: "CSC3280" },
    PrerequisiteSeed { course: "CSC4899", prerequisite: "CSC3400" },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_prerequisites_reference_seeded_courses() {
        let codes: HashSet<&str> = CSC_COURSES.iter().map(|c| c.code).collect();

        for edge in CSC_PREREQUISITES {
            assert!(codes.contains(edge.course), "unknown course {}", edge.course);
            assert!(
                codes.contains(edge.prerequisite),
                "unknown prerequisite {}",
                edge.prerequisite
            );
            assert_ne!(edge.course, edge.prerequisite);
        }
    }

    #[test]
    fn test_course_codes_are_valid() {
        for course in CSC_COURSES {
            let code: crate::course_code::CourseCode = course.code.parse().unwrap();
            assert_eq!(code.as_str(), course.code);
            assert!(course.credits > 0);
        }
    }
}
