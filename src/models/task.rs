use chrono::Local;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Timestamp format used for `added_on` / `completed_on`.
pub const STAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

fn now_stamp() -> String {
    Local::now().format(STAMP_FORMAT).to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    #[default]
    Pending,
    Completed,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
        }
    }

    /// Anything that is not exactly "completed" reads as pending, so one
    /// bad status value cannot fail the whole file.
    pub fn parse(s: &str) -> Self {
        match s {
            "completed" => Self::Completed,
            _ => Self::Pending,
        }
    }
}

fn status_lenient<'de, D: Deserializer<'de>>(deserializer: D) -> Result<TaskStatus, D::Error> {
    let s = String::deserialize(deserializer)?;
    Ok(TaskStatus::parse(&s))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Records written before ids existed get a fresh one on load.
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub description: String,
    #[serde(default, deserialize_with = "status_lenient")]
    pub status: TaskStatus,
    #[serde(default)]
    pub added_on: String,
    #[serde(default)]
    pub completed_on: Option<String>,
}

impl Task {
    pub fn new(description: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            description,
            status: TaskStatus::Pending,
            added_on: now_stamp(),
            completed_on: None,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status == TaskStatus::Completed
    }

    pub fn complete(&mut self) {
        self.status = TaskStatus::Completed;
        self.completed_on = Some(now_stamp());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_task_is_pending() {
        let task = Task::new("Water the plants".to_string());
        assert_eq!(task.status, TaskStatus::Pending);
        assert!(!task.is_completed());
        assert!(task.completed_on.is_none());
        assert!(!task.added_on.is_empty());
    }

    #[test]
    fn test_complete_sets_stamp() {
        let mut task = Task::new("Test".to_string());
        task.complete();
        assert!(task.is_completed());
        assert!(task.completed_on.is_some());
    }

    #[test]
    fn test_status_parse() {
        assert_eq!(TaskStatus::parse("pending"), TaskStatus::Pending);
        assert_eq!(TaskStatus::parse("completed"), TaskStatus::Completed);
        assert_eq!(TaskStatus::parse("unknown"), TaskStatus::Pending);
    }

    #[test]
    fn test_status_round_trips_lowercase() {
        let json = serde_json::to_string(&TaskStatus::Completed).unwrap();
        assert_eq!(json, "\"completed\"");
        let status: TaskStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(status, TaskStatus::Completed);
    }

    #[test]
    fn test_unknown_status_reads_as_pending() {
        let task: Task =
            serde_json::from_str(r#"{"description": "x", "status": "archived"}"#).unwrap();
        assert_eq!(task.status, TaskStatus::Pending);
    }

    #[test]
    fn test_sparse_record_gets_defaults() {
        // Records from older files may carry only a description.
        let task: Task = serde_json::from_str(r#"{"description": "Call the bank"}"#).unwrap();
        assert_eq!(task.description, "Call the bank");
        assert_eq!(task.status, TaskStatus::Pending);
        assert_eq!(task.added_on, "");
        assert!(task.completed_on.is_none());
    }
}
