use database::{db::create_connection, services::seed::SeedService};
use models::seed_catalog::{CSC_COURSES, CSC_PREREQUISITES};
use sea_orm::DbErr;

/// Loads the Computer Science major, its courses and prerequisite edges
#[tokio::main]
async fn main() -> Result<(), DbErr> {
    env_logger::init();

    let db = create_connection().await?;
    let summary = SeedService::seed_csc_catalog(&db).await?;

    println!("\nDatabase populated successfully!");
    println!(
        "Major: {}",
        if summary.major_created { "created" } else { "already present" }
    );
    println!(
        "Courses: {} ({} new)",
        CSC_COURSES.len(),
        summary.courses_created
    );
    println!("Requirements: {} new", summary.requirements_created);
    println!(
        "Prerequisites: {} ({} new)",
        CSC_PREREQUISITES.len(),
        summary.prerequisites_created
    );

    Ok(())
}
