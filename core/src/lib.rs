//! Task Core Library
//!
//! This crate provides the domain model, error taxonomy, and trait interfaces
//! for the task service. All other crates depend on the types and interfaces
//! defined here.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - [`models`] - Core domain models (Task, NewTask, UpdateTask)
//! - [`error`] - Error types and result handling
//! - [`repository`] - Repository trait for data persistence
//!
//! # Example
//!
//! ```rust
//! use task_core::models::{NewTask, Task};
//!
//! let new_task = NewTask {
//!     text: "Clean Our Room".to_string(),
//!     is_complete: false,
//! };
//!
//! let task = Task::new_from(new_task);
//! assert!(!task.id.is_empty());
//! ```

pub mod error;
pub mod models;
pub mod repository;

// Re-export commonly used types at the crate root for convenience
pub use error::{Result, TaskError};
pub use models::{NewTask, Task, UpdateTask};
pub use repository::TaskRepository;

/// Current version of the core crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Current crate name
pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
