pub mod admin;
pub mod catalog;
pub mod recommendation;
pub mod schedule;
pub mod seed;
pub mod student;
