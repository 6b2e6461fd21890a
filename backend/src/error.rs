//! Error handling for the Inventory Management API
//!
//! Every business-rule failure is scoped to the request field that caused
//! it and rendered as `{"error": {"<field>": "<message>"}}` with HTTP 400.
//! Missing rows on mutation routes are 400 as well; 404 is never used.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// A request field failed schema validation
    #[error("validation failed on {field}: {message}")]
    Validation { field: String, message: String },

    /// A referenced or addressed row does not exist
    #[error("{field}: {message}")]
    NotFound { field: String, message: String },

    /// A uniqueness rule was violated
    #[error("{field}: {message}")]
    Duplicate { field: String, message: String },

    /// Unexpected database failure
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Password hashing failure
    #[error("bcrypt error: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),

    /// Any other unexpected failure
    #[error("internal server error")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        AppError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn not_found(field: impl Into<String>, message: impl Into<String>) -> Self {
        AppError::NotFound {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn duplicate(field: impl Into<String>, message: impl Into<String>) -> Self {
        AppError::Duplicate {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Map a unique-constraint violation to the same field-scoped 400 the
/// explicit pre-insert check produces. The check-then-insert sequence is
/// not atomic, so a concurrent writer can still trip the constraint; this
/// keeps the response contract identical in that case.
pub fn unique_violation(err: sqlx::Error, field: &str, message: &str) -> AppError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            AppError::duplicate(field, message)
        }
        _ => AppError::Database(err),
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation { field, message }
            | AppError::NotFound { field, message }
            | AppError::Duplicate { field, message } => {
                let body = Json(json!({ "error": { field: message } }));
                (StatusCode::BAD_REQUEST, body).into_response()
            }
            ref e => {
                tracing::error!("Internal error: {:?}", e);
                let body = Json(json!({
                    "error": { "server": "An unexpected error occurred" }
                }));
                (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
            }
        }
    }
}

/// Result type alias for handlers and services
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::{json, Value};

    async fn render(err: AppError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn validation_renders_field_scoped_400() {
        let (status, body) = render(AppError::validation("expirationDate", "must be a valid date")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": { "expirationDate": "must be a valid date" } }));
    }

    #[tokio::test]
    async fn not_found_renders_field_scoped_400() {
        let (status, body) = render(AppError::not_found("id", "Product not found")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": { "id": "Product not found" } }));
    }

    #[tokio::test]
    async fn duplicate_renders_field_scoped_400() {
        let (status, body) = render(AppError::duplicate("description", "Category already exists")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": { "description": "Category already exists" } }));
    }

    #[tokio::test]
    async fn database_error_renders_opaque_500() {
        let (status, body) = render(AppError::Database(sqlx::Error::RowNotFound)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": { "server": "An unexpected error occurred" } }));
    }

    #[tokio::test]
    async fn internal_error_renders_opaque_500() {
        let (status, body) = render(AppError::Internal(anyhow::anyhow!("boom"))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": { "server": "An unexpected error occurred" } }));
    }

    #[test]
    fn unique_violation_passes_other_errors_through() {
        let err = unique_violation(sqlx::Error::RowNotFound, "name", "Deposit already exists");
        assert!(matches!(err, AppError::Database(_)));
    }
}
