// src/errors.rs
// DOCUMENTATION: Custom error types and HTTP responses
// PURPOSE: Centralized error handling for entire application

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;
use thiserror::Error;

/// Application-specific error types
/// DOCUMENTATION: Every variant maps to a stable HTTP status and error code.
/// Database variants keep the operator-facing cause for logging only; the
/// response message for them is always generic.
#[derive(Error, Debug)]
pub enum ListingsError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Conflicting write: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl ListingsError {
    /// Classify a failed write: integrity violations become `Conflict`,
    /// everything else is a plain `DatabaseError`.
    pub fn from_write(context: &str, err: sqlx::Error) -> Self {
        log::error!("{} failed: {}", context, err);

        if let Some(db_err) = err.as_database_error() {
            if db_err.is_foreign_key_violation() {
                return ListingsError::Conflict(format!(
                    "{}: referenced record missing or still in use",
                    context
                ));
            }
            if db_err.is_unique_violation() {
                return ListingsError::Conflict(format!("{}: record already exists", context));
            }
        }

        ListingsError::DatabaseError(format!("{}: {}", context, err))
    }

    /// Wrap a failed read with context
    pub fn from_read(context: &str, err: sqlx::Error) -> Self {
        log::error!("{} failed: {}", context, err);
        ListingsError::DatabaseError(format!("{}: {}", context, err))
    }

    fn error_code(&self) -> &'static str {
        match self {
            ListingsError::NotFound(_) => "NOT_FOUND",
            ListingsError::InvalidInput(_) => "INVALID_INPUT",
            ListingsError::ValidationError(_) => "VALIDATION_ERROR",
            ListingsError::Conflict(_) => "CONFLICT",
            ListingsError::DatabaseError(_) => "DATABASE_ERROR",
        }
    }

    /// Message safe to show to API callers
    pub fn public_message(&self) -> String {
        match self {
            ListingsError::DatabaseError(_) => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }
}

/// Convert ListingsError to HTTP response
/// DOCUMENTATION: Maps error types to HTTP status codes and JSON responses
impl ResponseError for ListingsError {
    fn error_response(&self) -> HttpResponse {
        let body = json!({
            "success": false,
            "error": {
                "code": self.error_code(),
                "message": self.public_message(),
                "timestamp": chrono::Utc::now().to_rfc3339()
            }
        });

        HttpResponse::build(self.status_code()).json(body)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            ListingsError::NotFound(_) => StatusCode::NOT_FOUND,
            ListingsError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ListingsError::ValidationError(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ListingsError::Conflict(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ListingsError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<validator::ValidationErrors> for ListingsError {
    fn from(errors: validator::ValidationErrors) -> Self {
        ListingsError::ValidationError(errors.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ListingsError::NotFound("x".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ListingsError::InvalidInput("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ListingsError::ValidationError("x".into()).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ListingsError::Conflict("x".into()).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ListingsError::DatabaseError("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[actix_web::test]
    async fn test_database_cause_is_not_exposed() {
        let err = ListingsError::DatabaseError("relation \"venues\" does not exist".into());
        let resp = err.error_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(resp.into_body()).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(value["success"], false);
        assert_eq!(value["error"]["code"], "DATABASE_ERROR");
        assert_eq!(value["error"]["message"], "Internal server error");
        assert!(!String::from_utf8_lossy(&body).contains("relation"));
    }

    #[test]
    fn test_read_errors_are_database_errors() {
        let err = ListingsError::from_read("Fetch venues", sqlx::Error::RowNotFound);
        assert!(matches!(err, ListingsError::DatabaseError(_)));

        let err = ListingsError::from_write("Insert show", sqlx::Error::PoolTimedOut);
        assert!(matches!(err, ListingsError::DatabaseError(_)));
    }
}
