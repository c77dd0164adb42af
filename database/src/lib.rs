//! Database crate for the task service
//!
//! This crate provides the SQLite implementation of the TaskRepository trait.
//! Tasks are stored as JSON documents in a single collection table, keeping
//! the schemaless shape of the records while using connection pooling and
//! migrations underneath.
//!
//! # Features
//!
//! - Lazy connection pooling: constructing a repository never fails, a broken
//!   database surfaces on individual operations instead
//! - Database migrations with proper schema management
//! - JSON document storage with field-merge updates
//! - Error mapping into the core error taxonomy
//!
//! # Usage
//!
//! ```rust
//! use database::SqliteTaskRepository;
//! use task_core::repository::TaskRepository;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // In-memory collection for testing
//!     let repo = SqliteTaskRepository::connect_lazy(":memory:", 1);
//!
//!     // Run migrations
//!     repo.migrate().await?;
//!
//!     // Repository is ready to use
//!     repo.health_check().await?;
//!
//!     Ok(())
//! }
//! ```

mod common;
mod sqlite;

pub use sqlite::SqliteTaskRepository;

// Re-export commonly used types from task-core for convenience
pub use task_core::{
    error::{Result, TaskError},
    models::{NewTask, Task, UpdateTask},
    repository::TaskRepository,
};
