use crate::{
    error::Result,
    models::{NewTask, Task, UpdateTask},
};
use async_trait::async_trait;

/// Repository trait for task persistence and retrieval operations
///
/// This trait defines the interface for all task data operations.
/// Implementations must be thread-safe and support concurrent access.
/// Concurrent writes to the same record are last-write-wins; the trait makes
/// no ordering guarantee beyond what the backing store provides.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Create a new task
    ///
    /// # Arguments
    /// * `task` - The new task data to create
    ///
    /// # Returns
    /// * `Ok(Task)` - The created task with its generated id
    /// * `Err(TaskError::Database)` - If the database operation fails
    async fn create(&self, task: NewTask) -> Result<Task>;

    /// Get a task by its id
    ///
    /// # Arguments
    /// * `id` - The task id to find
    ///
    /// # Returns
    /// * `Ok(Some(Task))` - The task if found
    /// * `Ok(None)` - If no task exists with that id
    /// * `Err(TaskError::Database)` - If the database operation fails
    async fn find_by_id(&self, id: &str) -> Result<Option<Task>>;

    /// List every task in the collection
    ///
    /// No ordering guarantee and no pagination.
    ///
    /// # Returns
    /// * `Ok(Vec<Task>)` - All stored tasks (may be empty)
    /// * `Err(TaskError::Database)` - If the database operation fails
    async fn find_all(&self) -> Result<Vec<Task>>;

    /// Update an existing task
    ///
    /// # Arguments
    /// * `id` - The task id to update
    /// * `updates` - The fields to merge (only non-None fields are applied)
    ///
    /// # Returns
    /// * `Ok(Some(Task))` - The post-update task
    /// * `Ok(None)` - If no task exists with that id
    /// * `Err(TaskError::Database)` - If the database operation fails
    async fn update_by_id(&self, id: &str, updates: UpdateTask) -> Result<Option<Task>>;

    /// Delete a task by its id
    ///
    /// Deleting a missing id is not an error.
    ///
    /// # Arguments
    /// * `id` - The task id to delete
    ///
    /// # Returns
    /// * `Ok(true)` - A record was removed
    /// * `Ok(false)` - No record matched the id
    /// * `Err(TaskError::Database)` - If the database operation fails
    async fn delete_by_id(&self, id: &str) -> Result<bool>;

    /// Get repository health status for monitoring
    ///
    /// # Returns
    /// * `Ok(())` - Repository is healthy and connected
    /// * `Err(TaskError::Database)` - Repository is unhealthy
    async fn health_check(&self) -> Result<()>;
}
