pub mod completed_courses;
pub mod courses;
pub mod degree_requirements;
pub mod majors;
pub mod minors;
pub mod prerequisites;
pub mod schedule_courses;
pub mod schedules;
pub mod students;
