use thiserror::Error;

/// Result type alias for task operations
pub type Result<T> = std::result::Result<T, TaskError>;

/// Error types for the task service.
///
/// These errors cover the failure modes of task operations, from missing
/// records to database faults. Each error type maps to an appropriate HTTP
/// status code for API responses. Note that id-scoped lookups signal absence
/// through `Ok(None)` rather than an error; `NotFound` exists for callers
/// that need to promote absence into a failure.
///
/// # Examples
///
/// ```rust
/// use task_core::error::TaskError;
///
/// let not_found = TaskError::not_found_id("abc");
/// assert!(not_found.is_not_found());
/// assert_eq!(not_found.status_code(), 404);
///
/// let database = TaskError::Database("connection refused".to_string());
/// assert_eq!(database.status_code(), 500);
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TaskError {
    /// Task not found by the given identifier
    #[error("Task not found: {0}")]
    NotFound(String),

    /// Database operation error
    #[error("Database error: {0}")]
    Database(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal system error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl TaskError {
    /// Create a not found error for a task id
    pub fn not_found_id(id: &str) -> Self {
        Self::NotFound(format!("Task with id '{id}' not found"))
    }

    /// Check if this error indicates a not found condition
    pub fn is_not_found(&self) -> bool {
        matches!(self, TaskError::NotFound(_))
    }

    /// Check if this error indicates a database problem
    pub fn is_database(&self) -> bool {
        matches!(self, TaskError::Database(_))
    }

    /// Convert to appropriate HTTP status code equivalent
    pub fn status_code(&self) -> u16 {
        match self {
            TaskError::NotFound(_) => 404,
            TaskError::Database(_) => 500,
            TaskError::Configuration(_) => 500,
            TaskError::Internal(_) => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let error = TaskError::not_found_id("abc");
        assert_eq!(
            error,
            TaskError::NotFound("Task with id 'abc' not found".to_string())
        );
        assert!(error.is_not_found());
        assert_eq!(error.status_code(), 404);

        let error = TaskError::Database("disk I/O error".to_string());
        assert!(error.is_database());
        assert_eq!(error.status_code(), 500);
    }

    #[test]
    fn test_error_display() {
        let error = TaskError::NotFound("Task with id 'abc' not found".to_string());
        assert_eq!(
            format!("{error}"),
            "Task not found: Task with id 'abc' not found"
        );

        let error = TaskError::Database("connection refused".to_string());
        assert_eq!(format!("{error}"), "Database error: connection refused");

        let error = TaskError::Configuration("bad url".to_string());
        assert_eq!(format!("{error}"), "Configuration error: bad url");
    }

    #[test]
    fn test_error_predicates() {
        assert!(TaskError::NotFound("test".to_string()).is_not_found());
        assert!(!TaskError::Database("test".to_string()).is_not_found());

        assert!(TaskError::Database("test".to_string()).is_database());
        assert!(!TaskError::Internal("test".to_string()).is_database());
    }
}
