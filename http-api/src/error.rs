//! Error handling for the HTTP API
//!
//! Maps internal task errors onto HTTP responses. A failed request is
//! answered with a JSON fault body and never takes the process down.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use task_core::TaskError;
use thiserror::Error;

/// HTTP-facing errors
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Task not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<TaskError> for ApiError {
    fn from(err: TaskError) -> Self {
        match err {
            TaskError::NotFound(msg) => ApiError::NotFound(msg),
            TaskError::Database(msg) => ApiError::Database(msg),
            TaskError::Configuration(msg) => {
                ApiError::Internal(format!("Configuration error: {msg}"))
            }
            TaskError::Internal(msg) => ApiError::Internal(msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        tracing::error!(error = %self, status = status.as_u16(), "Request failed");

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::NotFound("abc".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Database("conn failed".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::Internal("bug".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_task_error_conversion() {
        let err = ApiError::from(TaskError::Database("disk full".to_string()));
        assert!(matches!(err, ApiError::Database(_)));

        let err = ApiError::from(TaskError::not_found_id("abc"));
        assert!(matches!(err, ApiError::NotFound(_)));

        let err = ApiError::from(TaskError::Configuration("bad url".to_string()));
        assert!(matches!(err, ApiError::Internal(_)));
    }
}
