//! Follow-up task domain model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::id::RecordId;

/// A free-form follow-up reminder scoped to a fair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique identifier within the fair's document
    pub id: RecordId,

    /// Owning fair
    #[serde(default)]
    pub fair_id: String,

    pub description: String,

    /// Completed flag is the only mutable field
    #[serde(default)]
    pub completed: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
}

impl Task {
    /// Creates an incomplete task
    pub fn new(id: RecordId, fair_id: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            fair_id: fair_id.into(),
            description: description.into(),
            completed: false,
            due_date: None,
        }
    }

    /// Flips the completed flag
    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    use crate::domain::RecordKind;

    fn make_task(description: &str) -> Task {
        let id = RecordId::generate(RecordKind::Task, description, Utc::now());
        Task::new(id, "mwc-24", description)
    }

    #[test]
    fn new_task_is_incomplete() {
        let task = make_task("send brochure");
        assert!(!task.completed);
    }

    #[test]
    fn toggle_flips_both_ways() {
        let mut task = make_task("send brochure");

        task.toggle();
        assert!(task.completed);

        task.toggle();
        assert!(!task.completed);
    }

    #[test]
    fn serde_roundtrip_with_due_date() {
        let mut task = make_task("send brochure");
        task.due_date = NaiveDate::from_ymd_opt(2024, 3, 15);

        let json = serde_json::to_string(&task).unwrap();
        assert!(json.contains("\"dueDate\":\"2024-03-15\""));

        let parsed: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, task);
    }

    #[test]
    fn due_date_is_optional_on_the_wire() {
        let json = r#"{"id":"t1","fairId":"mwc-24","description":"call back"}"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert!(task.due_date.is_none());
        assert!(!task.completed);
    }
}
