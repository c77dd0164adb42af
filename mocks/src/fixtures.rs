//! Standard test fixtures for consistent testing

use task_core::{NewTask, Task};

/// Create a basic test task with sensible defaults
pub fn create_test_task() -> Task {
    Task::new_from(NewTask {
        text: "Clean Our Room".to_string(),
        is_complete: false,
    })
}

/// Create a test task with specific text
pub fn create_test_task_with_text(text: &str) -> Task {
    Task::new_from(NewTask {
        text: text.to_string(),
        is_complete: false,
    })
}

/// Create multiple unique tasks
pub fn create_test_tasks(count: usize) -> Vec<Task> {
    (1..=count)
        .map(|i| {
            Task::new_from(NewTask {
                text: format!("Test Task {i}"),
                is_complete: i % 2 == 0,
            })
        })
        .collect()
}
