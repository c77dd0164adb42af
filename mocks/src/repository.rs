//! Mock implementation of TaskRepository trait
//!
//! Provides a thread-safe mock repository with:
//! - Error injection capabilities
//! - Call tracking for verification
//! - Realistic behavior simulation

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use task_core::{NewTask, Result, Task, TaskError, TaskRepository, UpdateTask};

/// Mock implementation of TaskRepository for testing
///
/// Features:
/// - Thread-safe concurrent access
/// - Error injection for failure testing
/// - Call history tracking for verification
pub struct MockTaskRepository {
    tasks: Arc<Mutex<HashMap<String, Task>>>,
    error_injection: Arc<Mutex<Option<TaskError>>>,
    call_history: Arc<Mutex<Vec<String>>>,
}

impl Default for MockTaskRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl MockTaskRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self {
            tasks: Arc::new(Mutex::new(HashMap::new())),
            error_injection: Arc::new(Mutex::new(None)),
            call_history: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create mock repository with pre-populated tasks
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        let task_map = tasks.into_iter().map(|t| (t.id.clone(), t)).collect();

        Self {
            tasks: Arc::new(Mutex::new(task_map)),
            error_injection: Arc::new(Mutex::new(None)),
            call_history: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Inject error for next operation
    pub fn inject_error(&self, error: TaskError) {
        *self.error_injection.lock() = Some(error);
    }

    /// Clear error injection
    pub fn clear_error(&self) {
        *self.error_injection.lock() = None;
    }

    /// Get history of called methods
    pub fn call_history(&self) -> Vec<String> {
        self.call_history.lock().clone()
    }

    /// Clear call history
    pub fn clear_history(&self) {
        self.call_history.lock().clear();
    }

    /// Assert method was called
    pub fn assert_called(&self, method: &str) {
        let history = self.call_history.lock();
        assert!(
            history.iter().any(|call| call.contains(method)),
            "Method '{}' was not called. Call history: {:?}",
            method,
            *history
        );
    }

    /// Check if an error should be injected, consuming it if so
    fn check_error_injection(&self) -> Result<()> {
        let mut error_opt = self.error_injection.lock();
        if let Some(error) = error_opt.take() {
            return Err(error);
        }
        Ok(())
    }

    /// Record method call in history
    fn record_call(&self, method: &str) {
        self.call_history.lock().push(format!("{method}()"));
    }

    /// Record method call with parameters in history
    fn record_call_with_params(&self, method: &str, params: &str) {
        self.call_history.lock().push(format!("{method}({params})"));
    }
}

#[async_trait]
impl TaskRepository for MockTaskRepository {
    async fn create(&self, task: NewTask) -> Result<Task> {
        self.record_call_with_params("create", &format!("text={}", task.text));

        self.check_error_injection()?;

        let new_task = Task::new_from(task);
        self.tasks
            .lock()
            .insert(new_task.id.clone(), new_task.clone());

        Ok(new_task)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Task>> {
        self.record_call_with_params("find_by_id", &format!("id={id}"));

        self.check_error_injection()?;

        let tasks = self.tasks.lock();
        Ok(tasks.get(id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Task>> {
        self.record_call("find_all");

        self.check_error_injection()?;

        let tasks = self.tasks.lock();
        Ok(tasks.values().cloned().collect())
    }

    async fn update_by_id(&self, id: &str, updates: UpdateTask) -> Result<Option<Task>> {
        self.record_call_with_params("update_by_id", &format!("id={id}"));

        self.check_error_injection()?;

        let mut tasks = self.tasks.lock();
        let task = match tasks.get_mut(id) {
            Some(task) => task,
            None => return Ok(None),
        };

        task.apply(updates);

        Ok(Some(task.clone()))
    }

    async fn delete_by_id(&self, id: &str) -> Result<bool> {
        self.record_call_with_params("delete_by_id", &format!("id={id}"));

        self.check_error_injection()?;

        Ok(self.tasks.lock().remove(id).is_some())
    }

    async fn health_check(&self) -> Result<()> {
        self.record_call("health_check");

        self.check_error_injection()?;

        // Mock always reports healthy
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_crud_round_trip() {
        let repo = MockTaskRepository::new();

        let created = repo
            .create(NewTask {
                text: "Clean Our Room".to_string(),
                is_complete: false,
            })
            .await
            .unwrap();
        assert!(!created.id.is_empty());

        let found = repo.find_by_id(&created.id).await.unwrap();
        assert_eq!(found, Some(created.clone()));

        let updated = repo
            .update_by_id(
                &created.id,
                UpdateTask {
                    text: None,
                    is_complete: Some(true),
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.text, "Clean Our Room");
        assert!(updated.is_complete);

        assert!(repo.delete_by_id(&created.id).await.unwrap());
        assert!(repo.find_by_id(&created.id).await.unwrap().is_none());
        assert!(!repo.delete_by_id(&created.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_error_injection_consumed_by_next_call() {
        let repo = MockTaskRepository::new();

        repo.inject_error(TaskError::Database("boom".to_string()));
        let err = repo.find_all().await.unwrap_err();
        assert!(err.is_database());

        // Injection is one-shot
        assert!(repo.find_all().await.is_ok());
    }

    #[tokio::test]
    async fn test_call_history_tracking() {
        let repo = MockTaskRepository::new();

        repo.find_by_id("abc").await.unwrap();
        repo.health_check().await.unwrap();

        repo.assert_called("find_by_id");
        repo.assert_called("health_check");
        assert_eq!(repo.call_history().len(), 2);

        repo.clear_history();
        assert!(repo.call_history().is_empty());
    }
}
