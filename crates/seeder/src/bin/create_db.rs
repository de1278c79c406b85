use database::db::{create_connection, database_url, ensure_database};
use log::info;
use migration::{Migrator, MigratorTrait};
use sea_orm::DbErr;

/// Creates the database when missing and applies every pending migration
#[tokio::main]
async fn main() -> Result<(), DbErr> {
    env_logger::init();

    let url = database_url()?;
    if ensure_database(&url).await? {
        println!("Database created successfully!");
    } else {
        println!("Database already exists");
    }

    let db = create_connection().await?;
    Migrator::up(&db, None).await?;
    info!("Migrations applied");

    println!("Schema is up to date");
    Ok(())
}
