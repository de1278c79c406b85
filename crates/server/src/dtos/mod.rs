pub mod admin;
pub mod common;
pub mod course;
pub mod recommendation;
pub mod schedule;
pub mod student;
