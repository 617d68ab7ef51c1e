use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Task priority level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    /// Sort rank: high sorts before medium sorts before low
    pub fn rank(self) -> u8 {
        match self {
            Priority::High => 0,
            Priority::Medium => 1,
            Priority::Low => 2,
        }
    }

    /// Display label, capitalized
    pub fn label(self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

/// A single to-do item.
///
/// Field names on the wire are camelCase so that exported JSON matches the
/// documented interchange format exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Opaque unique ID, assigned at creation and never changed
    pub id: String,
    /// Task title (non-empty after trimming)
    pub title: String,
    /// Free-form description, may be empty
    #[serde(default)]
    pub description: String,
    /// Optional due date; `None` means no due date
    #[serde(default, with = "due_date_serde", skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub priority: Priority,
    /// ID of the project this task belongs to. Not checked against the
    /// project collection; dangling references get a fallback display.
    #[serde(default)]
    pub project: String,
    pub completed: bool,
    /// Creation timestamp (RFC 3339), set once and preserved across edits
    #[serde(default = "now_timestamp")]
    pub created_at: String,
}

impl Task {
    /// Create a new incomplete task with a fresh creation timestamp.
    pub fn new(id: String, title: String, project: String) -> Self {
        Task {
            id,
            title,
            description: String::new(),
            due_date: None,
            priority: Priority::Medium,
            project,
            completed: false,
            created_at: now_timestamp(),
        }
    }
}

fn now_timestamp() -> String {
    Utc::now().to_rfc3339()
}

/// Due dates travel as `YYYY-MM-DD` strings; the empty string (a cleared
/// date field in some exports) reads back as "no due date".
mod due_date_serde {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &Option<NaiveDate>, ser: S) -> Result<S::Ok, S::Error> {
        match date {
            Some(d) => ser.serialize_str(&d.format("%Y-%m-%d").to_string()),
            None => ser.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<Option<NaiveDate>, D::Error> {
        let raw: Option<String> = Option::deserialize(de)?;
        match raw.as_deref() {
            None | Some("") => Ok(None),
            Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .map(Some)
                .map_err(serde::de::Error::custom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_uses_camel_case_field_names() {
        let mut task = Task::new("t1".into(), "Write report".into(), "work".into());
        task.due_date = NaiveDate::from_ymd_opt(2024, 3, 15);
        task.created_at = "2024-03-01T09:00:00+00:00".into();

        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["dueDate"], "2024-03-15");
        assert_eq!(json["createdAt"], "2024-03-01T09:00:00+00:00");
        assert_eq!(json["priority"], "medium");
        assert_eq!(json["completed"], false);
    }

    #[test]
    fn missing_optional_fields_use_defaults() {
        let task: Task =
            serde_json::from_str(r#"{"id":"1","title":"x","completed":false}"#).unwrap();
        assert_eq!(task.description, "");
        assert_eq!(task.due_date, None);
        assert_eq!(task.priority, Priority::Medium);
        assert_eq!(task.project, "");
        assert!(!task.created_at.is_empty());
    }

    #[test]
    fn empty_due_date_string_reads_as_none() {
        let task: Task =
            serde_json::from_str(r#"{"id":"1","title":"x","completed":false,"dueDate":""}"#)
                .unwrap();
        assert_eq!(task.due_date, None);
    }

    #[test]
    fn absent_due_date_is_not_serialized() {
        let task = Task::new("t1".into(), "x".into(), "personal".into());
        let json = serde_json::to_value(&task).unwrap();
        assert!(json.get("dueDate").is_none());
    }

    #[test]
    fn priority_rank_orders_high_first() {
        assert!(Priority::High.rank() < Priority::Medium.rank());
        assert!(Priority::Medium.rank() < Priority::Low.rank());
    }
}
