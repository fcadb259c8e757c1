//! Bug data model
//!
//! The wire format keeps the field names clients see (`statusHistory`,
//! `oldStatus`, `createdAt`) while the Rust side stays snake_case.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Bug priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Priority {
    #[default]
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }

    /// Parse from the exact wire/database string
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Low" => Some(Priority::Low),
            "Medium" => Some(Priority::Medium),
            "High" => Some(Priority::High),
            _ => None,
        }
    }
}

/// Bug workflow status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Status {
    #[default]
    Open,
    #[serde(rename = "In Progress")]
    InProgress,
    Closed,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Open => "Open",
            Status::InProgress => "In Progress",
            Status::Closed => "Closed",
        }
    }

    /// Parse from the exact wire/database string
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Open" => Some(Status::Open),
            "In Progress" => Some(Status::InProgress),
            "Closed" => Some(Status::Closed),
            _ => None,
        }
    }
}

/// One entry in a bug's status change log
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusChange {
    pub old_status: Status,
    pub new_status: Status,
    pub changed_at: DateTime<Utc>,
}

/// A comment on a bug. Comments are append-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub text: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
}

/// A bug report
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bug {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub status: Status,
    /// Relative path of the uploaded image, served under `/uploads`
    pub image: Option<String>,
    pub status_history: Vec<StatusChange>,
    pub comments: Vec<Comment>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Bug {
    /// Apply a status change, logging it in the history.
    ///
    /// A history entry is appended only when `new_status` differs from the
    /// current status. The entry captures the old value before the new
    /// status is assigned.
    pub fn apply_status(&mut self, new_status: Status, changed_at: DateTime<Utc>) {
        if self.status == new_status {
            return;
        }
        self.status_history.push(StatusChange {
            old_status: self.status,
            new_status,
            changed_at,
        });
        self.status = new_status;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parses_exact_strings_only() {
        assert_eq!(Status::from_str("Open"), Some(Status::Open));
        assert_eq!(Status::from_str("In Progress"), Some(Status::InProgress));
        assert_eq!(Status::from_str("Closed"), Some(Status::Closed));
        assert_eq!(Status::from_str("open"), None);
        assert_eq!(Status::from_str("InProgress"), None);
        assert_eq!(Status::from_str(""), None);
    }

    #[test]
    fn test_priority_rejects_unknown_values() {
        assert_eq!(Priority::from_str("High"), Some(Priority::High));
        assert_eq!(Priority::from_str("Urgent"), None);
    }

    #[test]
    fn test_status_wire_format() {
        assert_eq!(
            serde_json::to_value(Status::InProgress).unwrap(),
            serde_json::json!("In Progress")
        );
        assert_eq!(
            serde_json::from_value::<Status>(serde_json::json!("In Progress")).unwrap(),
            Status::InProgress
        );
    }

    fn sample_bug() -> Bug {
        let now = Utc::now();
        Bug {
            id: Uuid::new_v4(),
            title: "Crash on save".to_string(),
            description: "The editor crashes when saving".to_string(),
            priority: Priority::High,
            status: Status::Open,
            image: None,
            status_history: Vec::new(),
            comments: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_apply_status_records_transition() {
        let mut bug = sample_bug();
        let now = Utc::now();

        bug.apply_status(Status::InProgress, now);

        assert_eq!(bug.status, Status::InProgress);
        assert_eq!(bug.status_history.len(), 1);
        assert_eq!(bug.status_history[0].old_status, Status::Open);
        assert_eq!(bug.status_history[0].new_status, Status::InProgress);
        assert_eq!(bug.status_history[0].changed_at, now);
    }

    #[test]
    fn test_apply_same_status_records_nothing() {
        let mut bug = sample_bug();

        bug.apply_status(Status::Open, Utc::now());

        assert_eq!(bug.status, Status::Open);
        assert!(bug.status_history.is_empty());
    }

    #[test]
    fn test_bug_serializes_camel_case() {
        let bug = sample_bug();
        let value = serde_json::to_value(&bug).unwrap();

        assert!(value.get("statusHistory").is_some());
        assert!(value.get("createdAt").is_some());
        assert!(value.get("status_history").is_none());
    }
}
