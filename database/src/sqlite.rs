use crate::common::{row_to_task, sqlx_error_to_task_error, task_to_body};
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::time::Duration;
use task_core::{
    error::Result,
    models::{NewTask, Task, UpdateTask},
    repository::TaskRepository,
};

/// SQLite implementation of the TaskRepository trait
///
/// Tasks are stored as JSON documents in a single `tasks` collection table.
/// The pool opens connections lazily, so constructing a repository never
/// fails; an unreachable database surfaces on each individual operation and
/// through [`TaskRepository::health_check`].
#[derive(Debug, Clone)]
pub struct SqliteTaskRepository {
    pool: SqlitePool,
}

impl SqliteTaskRepository {
    /// Create a repository over the given database URL without connecting.
    ///
    /// # Arguments
    /// * `database_url` - SQLite database URL (`sqlite://` URI, bare file
    ///   path, or `:memory:`)
    /// * `max_connections` - Pool size for file-backed databases
    ///
    /// # Examples
    /// ```rust,no_run
    /// use database::SqliteTaskRepository;
    ///
    /// // In-memory collection for testing
    /// let repo = SqliteTaskRepository::connect_lazy(":memory:", 1);
    ///
    /// // File-based collection
    /// let repo = SqliteTaskRepository::connect_lazy("sqlite:///tmp/tasks.db", 5);
    /// ```
    pub fn connect_lazy(database_url: &str, max_connections: u32) -> Self {
        let path = database_url
            .strip_prefix("sqlite://")
            .unwrap_or(database_url);

        if path.starts_with(":memory:") {
            // An in-memory database lives inside its connection, so the pool
            // must never hold more than one.
            let options = SqliteConnectOptions::new()
                .in_memory(true)
                .busy_timeout(Duration::from_secs(5));
            let pool = SqlitePoolOptions::new()
                .max_connections(1)
                .connect_lazy_with(options);
            return Self { pool };
        }

        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5));

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_lazy_with(options);

        Self { pool }
    }

    /// Run database migrations
    ///
    /// Applies all pending migrations to bring the collection schema up to
    /// date. Call this once after constructing a repository.
    ///
    /// # Returns
    /// * `Ok(())` - Migrations completed successfully
    /// * `Err(TaskError::Database)` - If migration fails
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| task_core::TaskError::Database(format!("Migration failed: {e}")))?;

        tracing::info!("Database migrations completed successfully");
        Ok(())
    }

    /// Get access to the underlying database pool for custom operations
    ///
    /// Primarily intended for testing scenarios where direct SQL execution
    /// is needed.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl TaskRepository for SqliteTaskRepository {
    async fn create(&self, new_task: NewTask) -> Result<Task> {
        let task = Task::new_from(new_task);
        let body = task_to_body(&task)?;

        sqlx::query("INSERT INTO tasks (id, body) VALUES (?, ?)")
            .bind(&task.id)
            .bind(&body)
            .execute(&self.pool)
            .await
            .map_err(sqlx_error_to_task_error)?;

        Ok(task)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Task>> {
        let result = sqlx::query("SELECT body FROM tasks WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(sqlx_error_to_task_error)?;

        match result {
            Some(row) => Ok(Some(row_to_task(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_all(&self) -> Result<Vec<Task>> {
        let rows = sqlx::query("SELECT body FROM tasks")
            .fetch_all(&self.pool)
            .await
            .map_err(sqlx_error_to_task_error)?;

        let mut tasks = Vec::with_capacity(rows.len());
        for row in &rows {
            tasks.push(row_to_task(row)?);
        }

        Ok(tasks)
    }

    async fn update_by_id(&self, id: &str, updates: UpdateTask) -> Result<Option<Task>> {
        // Read-merge-write; concurrent writers are last-write-wins.
        let mut task = match self.find_by_id(id).await? {
            Some(task) => task,
            None => return Ok(None),
        };

        if updates.is_empty() {
            return Ok(Some(task));
        }

        task.apply(updates);
        let body = task_to_body(&task)?;

        sqlx::query("UPDATE tasks SET body = ? WHERE id = ?")
            .bind(&body)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(sqlx_error_to_task_error)?;

        Ok(Some(task))
    }

    async fn delete_by_id(&self, id: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(sqlx_error_to_task_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn health_check(&self) -> Result<()> {
        // Simple query to verify database connectivity
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map_err(sqlx_error_to_task_error)?;

        Ok(())
    }
}
