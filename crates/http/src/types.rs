//! Request and response types of the Taskdeck API

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value as JsonValue;
use std::fmt;

/// Workflow state of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    Pending,
    InProgress,
    Done,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 3] = [TaskStatus::Pending, TaskStatus::InProgress, TaskStatus::Done];

    /// Wire value, also used for the rendered state class
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Done => "done",
        }
    }

    /// Human readable label
    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Done => "Done",
        }
    }

    /// Parse a wire value, as found in a `<select>` option
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == value)
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A task as owned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub created_at: DateTime<Utc>,
}

/// Timestamps come as RFC 3339, or without an offset when the backend's
/// database drops it; offset-less values are UTC.
fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {raw}")))
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|naive| naive.and_utc())
}

impl Task {
    /// Description, if there is anything to show
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.trim().is_empty())
    }

    /// Creation date formatted for display, e.g. `Jan 5, 2024, 02:30 PM`
    pub fn created_display(&self) -> String {
        self.created_at.format("%b %-d, %Y, %I:%M %p").to_string()
    }
}

/// `GET /api/tasks` response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskListResponse {
    pub tasks: Vec<Task>,
}

/// A single task, either bare or wrapped in `{"task": ...}`
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TaskEnvelope {
    Wrapped { task: Task },
    Bare(Task),
}

impl From<TaskEnvelope> for Task {
    fn from(envelope: TaskEnvelope) -> Self {
        match envelope {
            TaskEnvelope::Wrapped { task } | TaskEnvelope::Bare(task) => task,
        }
    }
}

/// `POST /api/tasks` body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateTaskRequest {
    pub title: String,
    pub description: String,
}

/// `PUT /api/tasks/{id}` body; absent fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UpdateTaskRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
}

/// `POST /api/auth/login` body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// `POST /api/auth/register` body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password1: String,
    pub password2: String,
}

/// Token pair issued on login and registration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPairResponse {
    pub access_token: String,
    pub refresh_token: String,
}

/// `POST /api/auth/refresh` response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshResponse {
    pub access_token: String,
}

/// Error body returned by the backend
///
/// Handlers answer `{"error": "..."}`; schema validation answers
/// `{"errors": {"field": ["..."]}}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub errors: Option<JsonValue>,
}

impl ErrorResponse {
    /// The message to show, if the body carried one
    pub fn message(&self) -> Option<String> {
        if let Some(error) = self.error.as_ref().filter(|e| !e.is_empty()) {
            return Some(error.clone());
        }

        let mut messages = Vec::new();
        if let Some(errors) = &self.errors {
            collect_messages(None, errors, &mut messages);
        }
        (!messages.is_empty()).then(|| messages.join("; "))
    }
}

fn collect_messages(field: Option<&str>, value: &JsonValue, out: &mut Vec<String>) {
    match value {
        JsonValue::String(message) => match field {
            Some(field) => out.push(format!("{field}: {message}")),
            None => out.push(message.clone()),
        },
        JsonValue::Array(items) => {
            for item in items {
                collect_messages(field, item, out);
            }
        }
        JsonValue::Object(map) => {
            for (key, item) in map {
                collect_messages(Some(key), item, out);
            }
        }
        _ => {}
    }
}
