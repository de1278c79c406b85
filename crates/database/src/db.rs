use log::{debug, info};
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbBackend, DbErr, Statement};

/// Environment variable holding the connection string
pub const DATABASE_URL_VAR: &str = "DATABASE_URL";

/// Database that always exists on a PostgreSQL server
const MAINTENANCE_DATABASE: &str = "postgres";

/// Reads the connection string, loading `.env` first when present
pub fn database_url() -> Result<String, DbErr> {
    dotenvy::dotenv().ok();

    std::env::var(DATABASE_URL_VAR)
        .map_err(|e| DbErr::Custom(format!("{DATABASE_URL_VAR} is not usable: {e}")))
}

/// Creates a database connection
pub async fn create_connection() -> Result<DatabaseConnection, DbErr> {
    let url = database_url()?;
    Database::connect(url).await
}

/// Creates the database named in `url` if the server does not have it yet
///
/// Returns whether the database had to be created.
pub async fn ensure_database(url: &str) -> Result<bool, DbErr> {
    let (server_url, name) = split_database_url(url)
        .ok_or_else(|| DbErr::Custom(format!("No database name in {DATABASE_URL_VAR}")))?;

    if !is_valid_database_name(name) {
        return Err(DbErr::Custom(format!("Invalid database name `{name}`")));
    }

    let server = Database::connect(format!("{server_url}/{MAINTENANCE_DATABASE}")).await?;

    let existing = server
        .query_one(Statement::from_sql_and_values(
            DbBackend::Postgres,
            "SELECT 1 FROM pg_database WHERE datname = $1",
            [name.into()],
        ))
        .await?;

    if existing.is_some() {
        debug!("Database {name} already exists");
        return Ok(false);
    }

    server
        .execute_unprepared(&format!("CREATE DATABASE \"{name}\""))
        .await?;
    info!("Created database {name}");

    Ok(true)
}

/// Splits `postgres://user@host:5432/name?opts` into the server part and `name`
fn split_database_url(url: &str) -> Option<(&str, &str)> {
    let without_query = url.split(['?', '#']).next().unwrap_or(url);
    let (_, after_scheme) = without_query.split_once("://")?;
    let (_, name) = after_scheme.split_once('/')?;

    if name.is_empty() || name.contains('/') {
        return None;
    }

    let server_len = without_query.len() - name.len() - 1;
    Some((&without_query[..server_len], name))
}

/// Only plain identifiers are accepted since the name is spliced into DDL
fn is_valid_database_name(name: &str) -> bool {
    !name.is_empty()
        && name.len() <= 63
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_database_url() {
        assert_eq!(
            split_database_url("postgres://root:pw@localhost:5432/course_recommendation"),
            Some(("postgres://root:pw@localhost:5432", "course_recommendation"))
        );
        assert_eq!(
            split_database_url("postgres://localhost/degrees?sslmode=disable"),
            Some(("postgres://localhost", "degrees"))
        );
    }

    #[test]
    fn test_split_database_url_without_name() {
        assert_eq!(split_database_url("postgres://localhost:5432"), None);
        assert_eq!(split_database_url("postgres://localhost:5432/"), None);
        assert_eq!(split_database_url("localhost/degrees"), None);
    }

    #[test]
    fn test_database_name_validation() {
        assert!(is_valid_database_name("course_recommendation"));
        assert!(!is_valid_database_name("bad\"name"));
        assert!(!is_valid_database_name("drop table; --"));
        assert!(!is_valid_database_name(""));
    }
}
