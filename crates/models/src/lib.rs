pub mod course_code;
#[cfg(feature = "database")]
mod db_value;
pub mod grade;
pub mod recommendation;
pub mod requirement_type;
pub mod seed_catalog;
