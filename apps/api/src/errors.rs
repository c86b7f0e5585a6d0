use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::parttime::validation::ValidationError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                json!({ "error": { "code": "NOT_FOUND", "message": msg } }),
            ),
            AppError::Validation(err) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": {
                        "code": err.kind.code(),
                        "message": err.message,
                        "field": err.field
                    }
                }),
            ),
            AppError::InvalidBody(rejection) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": {
                        "code": "INVALID_BODY",
                        "message": rejection.body_text()
                    }
                }),
            ),
            AppError::Database(e) => {
                tracing::error!("Database error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": {
                            "code": "DATABASE_ERROR",
                            "message": "A database error occurred"
                        }
                    }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
