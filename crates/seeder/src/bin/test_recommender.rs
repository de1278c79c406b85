use database::db::create_connection;
use sea_orm::DbErr;
use seeder::smoke;

/// Runs the recommender end to end for the TEST001 student
#[tokio::main]
async fn main() -> Result<(), DbErr> {
    env_logger::init();

    let db = create_connection().await?;
    let report = smoke::run(&db).await?;

    println!("{report}");
    Ok(())
}
