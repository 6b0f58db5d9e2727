//! API error taxonomy
//!
//! Four classes of failure leave this server: missing request fields (400),
//! duplicate-key violations from the store (400), lookups that match no row
//! (404), and everything else the store reports (500). The 500 body is the
//! fixed string the frontend expects; details stay in the server log.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use sqlx::mysql::MySqlDatabaseError;
use thiserror::Error;
use tracing::{error, warn};

/// MySQL `ER_DUP_ENTRY`: a UNIQUE index rejected the write.
const ER_DUP_ENTRY: u16 = 1062;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Required request fields absent or empty.
    #[error("{0}")]
    MissingFields(&'static str),

    /// Unique constraint violation (duplicate contact number or email).
    #[error("A patient with this contact number or email already exists")]
    Duplicate,

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("Database error")]
    Database(#[source] sqlx::Error),

    #[error("Database error")]
    Internal(#[source] anyhow::Error),
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        // Only ER_DUP_ENTRY is a client error. Other integrity failures
        // (e.g. foreign keys, errno 1452) share SQLSTATE 23000 and stay 500s.
        if let sqlx::Error::Database(db_err) = &err {
            if let Some(mysql_err) = db_err.try_downcast_ref::<MySqlDatabaseError>() {
                if mysql_err.number() == ER_DUP_ENTRY {
                    return ApiError::Duplicate;
                }
            }
        }
        ApiError::Database(err)
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Internal(err)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingFields(_) | ApiError::Duplicate => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Database(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::Database(source) => error!(error = %source, "store error"),
            ApiError::Internal(source) => error!(error = %source, "internal error"),
            _ => warn!("request rejected: {}", self),
        }
        HttpResponse::build(self.status_code()).json(json!({ "error": self.to_string() }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[test]
    fn status_codes_follow_the_taxonomy() {
        assert_eq!(
            ApiError::MissingFields("x").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::Duplicate.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::NotFound("Patient").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Database(sqlx::Error::RowNotFound).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn store_errors_keep_the_fixed_message() {
        let err = ApiError::from(sqlx::Error::PoolTimedOut);
        assert!(matches!(err, ApiError::Database(_)));
        assert_eq!(err.to_string(), "Database error");
    }

    #[actix_rt::test]
    async fn body_is_an_error_object() {
        let response = ApiError::NotFound("Test").error_response();
        let body = to_bytes(response.into_body()).await.unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(parsed["error"], "Test not found");
    }
}
