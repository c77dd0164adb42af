use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored task record.
///
/// Tasks are flat documents: a generated identifier, free-form text, and a
/// completion flag. The serialized representation is camelCase, which is also
/// the wire format the HTTP API speaks.
///
/// # Examples
///
/// ```rust
/// use task_core::models::{NewTask, Task};
///
/// let task = Task::new_from(NewTask {
///     text: "Clean Our Room".to_string(),
///     is_complete: false,
/// });
///
/// assert!(!task.id.is_empty());
/// assert_eq!(task.text, "Clean Our Room");
/// assert!(!task.is_complete);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Generated unique identifier, immutable after creation
    pub id: String,
    /// Free-form task description; may be empty
    #[serde(default)]
    pub text: String,
    /// Completion flag
    #[serde(default)]
    pub is_complete: bool,
}

impl Task {
    /// Build a persisted-shape task from a create payload, assigning a fresh id.
    pub fn new_from(new_task: NewTask) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text: new_task.text,
            is_complete: new_task.is_complete,
        }
    }

    /// Merge the supplied fields of an update payload into this task.
    ///
    /// Fields left as `None` are untouched; the id never changes. Both the
    /// database repository and the mock apply updates through this method so
    /// merge semantics cannot drift between implementations.
    pub fn apply(&mut self, updates: UpdateTask) {
        if let Some(text) = updates.text {
            self.text = text;
        }
        if let Some(is_complete) = updates.is_complete {
            self.is_complete = is_complete;
        }
    }
}

/// Data transfer object for creating new tasks.
///
/// Both fields default when absent from the payload, so a bare `{}` creates
/// an empty, incomplete task.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    /// Task description
    #[serde(default)]
    pub text: String,
    /// Completion flag
    #[serde(default)]
    pub is_complete: bool,
}

/// Data transfer object for partial task updates.
///
/// Only non-`None` fields are merged into the stored record.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTask {
    /// Optional new task text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Optional new completion flag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_complete: Option<bool>,
}

impl UpdateTask {
    /// Whether this update carries no fields at all.
    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.is_complete.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_from_assigns_unique_ids() {
        let a = Task::new_from(NewTask::default());
        let b = Task::new_from(NewTask::default());

        assert!(!a.id.is_empty());
        assert!(!b.id.is_empty());
        assert_ne!(a.id, b.id);
        assert_eq!(a.text, "");
        assert!(!a.is_complete);
    }

    #[test]
    fn test_apply_merges_only_supplied_fields() {
        let mut task = Task::new_from(NewTask {
            text: "Clean Our Room".to_string(),
            is_complete: false,
        });
        let id = task.id.clone();

        task.apply(UpdateTask {
            text: None,
            is_complete: Some(true),
        });

        assert_eq!(task.id, id);
        assert_eq!(task.text, "Clean Our Room");
        assert!(task.is_complete);

        task.apply(UpdateTask {
            text: Some("Walk the dog".to_string()),
            is_complete: None,
        });

        assert_eq!(task.id, id);
        assert_eq!(task.text, "Walk the dog");
        assert!(task.is_complete);
    }

    #[test]
    fn test_apply_with_empty_update_is_a_no_op() {
        let mut task = Task::new_from(NewTask {
            text: "unchanged".to_string(),
            is_complete: true,
        });
        let before = task.clone();

        let updates = UpdateTask::default();
        assert!(updates.is_empty());
        task.apply(updates);

        assert_eq!(task, before);
    }

    #[test]
    fn test_wire_format_is_camel_case() {
        let task = Task {
            id: "abc".to_string(),
            text: "Clean Our Room".to_string(),
            is_complete: true,
        };

        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["id"], "abc");
        assert_eq!(json["text"], "Clean Our Room");
        assert_eq!(json["isComplete"], true);
        assert!(json.get("is_complete").is_none());
    }

    #[test]
    fn test_new_task_defaults_when_fields_absent() {
        let new_task: NewTask = serde_json::from_str("{}").unwrap();
        assert_eq!(new_task.text, "");
        assert!(!new_task.is_complete);

        let new_task: NewTask =
            serde_json::from_str(r#"{"text":"Clean Our Room","isComplete":true}"#).unwrap();
        assert_eq!(new_task.text, "Clean Our Room");
        assert!(new_task.is_complete);
    }

    #[test]
    fn test_update_task_distinguishes_absent_from_set() {
        let updates: UpdateTask = serde_json::from_str(r#"{"isComplete":true}"#).unwrap();
        assert!(updates.text.is_none());
        assert_eq!(updates.is_complete, Some(true));
        assert!(!updates.is_empty());

        // Absent fields must not serialize back as nulls
        let json = serde_json::to_value(&updates).unwrap();
        assert!(json.get("text").is_none());
        assert_eq!(json["isComplete"], true);
    }
}
