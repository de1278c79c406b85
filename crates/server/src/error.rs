use axum::http::StatusCode;
use log::error;
use sea_orm::{DbErr, SqlErr};

/// Maps a store failure onto the status code reported to the client
pub fn db_error(err: DbErr) -> StatusCode {
    let status = match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => StatusCode::CONFLICT,
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => StatusCode::UNPROCESSABLE_ENTITY,
        _ if matches!(err, DbErr::RecordNotFound(_)) => StatusCode::NOT_FOUND,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };

    error!("Request failed with {status}: {err}");
    status
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_record_is_not_found() {
        assert_eq!(
            db_error(DbErr::RecordNotFound("Course CSC9999".to_string())),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_other_errors_are_internal() {
        assert_eq!(
            db_error(DbErr::Custom("connection reset".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
