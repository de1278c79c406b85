pub mod admin;
pub mod course;
pub mod health;
pub mod recommendation;
pub mod root;
pub mod schedule;
pub mod student;
