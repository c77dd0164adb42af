use sqlx::{sqlite::SqliteRow, Row};
use task_core::{
    error::{Result, TaskError},
    models::Task,
};

/// Decode a collection row into a Task.
///
/// The `body` column carries the full JSON document, id included; the id
/// column exists only for keyed lookups.
pub fn row_to_task(row: &SqliteRow) -> Result<Task> {
    let body: String = row.get("body");
    serde_json::from_str(&body)
        .map_err(|e| TaskError::Database(format!("Malformed task document: {e}")))
}

/// Serialize a Task into its stored document form.
pub fn task_to_body(task: &Task) -> Result<String> {
    serde_json::to_string(task)
        .map_err(|e| TaskError::Internal(format!("Failed to serialize task document: {e}")))
}

/// Convert SQLx error to TaskError
pub fn sqlx_error_to_task_error(err: sqlx::Error) -> TaskError {
    match &err {
        sqlx::Error::Database(db_err) => {
            TaskError::Database(format!("Database constraint error: {}", db_err.message()))
        }
        sqlx::Error::PoolTimedOut => TaskError::Database("Connection pool timeout".to_string()),
        sqlx::Error::Io(io_err) => TaskError::Database(format!("Database I/O error: {io_err}")),
        _ => TaskError::Database(format!("Database operation failed: {err}")),
    }
}
