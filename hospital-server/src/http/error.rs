//! API error types with IntoResponse
//!
//! Errors are converted to `{"error": ...}` JSON bodies. Driver errors are
//! logged and replaced with a fixed message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::DbError;
use crate::models::ValidationError;

/// Message returned for every failed query
pub const DATABASE_ERROR_MESSAGE: &str = "Database query error";

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Required path parameter missing (400)
    Validation(ValidationError),

    /// Query failed (500, logged)
    Database(DbError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::Validation(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            Self::Database(e) => {
                tracing::error!("Error querying the database: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    DATABASE_ERROR_MESSAGE.to_owned(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        Self::Database(e)
    }
}
