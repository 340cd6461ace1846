//! ToDo domain models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// ToDo item as stored. Priority and status are kept as strings in the row;
/// CHECK constraints and the typed request DTOs keep them inside the enums.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Todo {
    pub id: i64,
    pub owner_id: Uuid,
    pub content: String,
    pub priority: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Priority enumeration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

impl From<Priority> for String {
    fn from(priority: Priority) -> Self {
        priority.as_str().to_string()
    }
}

/// Status enumeration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    NotStarted,
    InProgress,
    Completed,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::NotStarted => "not_started",
            Status::InProgress => "in_progress",
            Status::Completed => "completed",
        }
    }
}

impl From<Status> for String {
    fn from(status: Status) -> Self {
        status.as_str().to_string()
    }
}

/// Create request. Enum fields are typed, so out-of-enum values are rejected
/// at deserialization with a field-naming error.
#[derive(Debug, Deserialize, validator::Validate)]
pub struct CreateTodoRequest {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub content: String,
    pub priority: Priority,
    pub status: Status,
}

/// Partial update request; omitted fields are left unchanged
#[derive(Debug, Default, Deserialize)]
pub struct UpdateTodoRequest {
    pub content: Option<String>,
    pub priority: Option<Priority>,
    pub status: Option<Status>,
}

/// Query parameters for the list endpoint
#[derive(Debug, Default, Deserialize)]
pub struct ListTodosQuery {
    pub status: Option<Status>,
    pub priority: Option<Priority>,
    #[serde(default)]
    pub completed: bool,
}

/// ToDo response (without owner id)
#[derive(Debug, Serialize)]
pub struct TodoResponse {
    pub id: i64,
    pub content: String,
    pub priority: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<Todo> for TodoResponse {
    fn from(todo: Todo) -> Self {
        Self {
            id: todo.id,
            content: todo.content,
            priority: todo.priority,
            status: todo.status,
            created_at: todo.created_at,
        }
    }
}
