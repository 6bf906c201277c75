//! Todo models and DTOs.

use chrono::NaiveDateTime;
use devsite_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Format produced by an HTML `datetime-local` input.
const DUE_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M";

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `todos` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Todo {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub priority: TodoPriority,
    pub status: TodoStatus,
    pub due_date: Option<NaiveDateTime>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Todo priority, stored as the `todo_priority` Postgres enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "todo_priority", rename_all = "snake_case")]
pub enum TodoPriority {
    Low,
    #[default]
    Medium,
    High,
}

/// Todo lifecycle status, stored as the `todo_status` Postgres enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "todo_status", rename_all = "snake_case")]
pub enum TodoStatus {
    #[default]
    Pending,
    InProgress,
    Done,
}

// ---------------------------------------------------------------------------
// DTOs (form payloads)
// ---------------------------------------------------------------------------

/// Form payload for creating a todo.
///
/// `due_date` arrives as the raw `datetime-local` string; use
/// [`CreateTodoForm::due_date`] for the parsed value.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTodoForm {
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    pub priority: TodoPriority,
    #[serde(default)]
    pub status: TodoStatus,
    pub due_date: Option<String>,
}

impl CreateTodoForm {
    /// Parsed due date. Unparsable or empty values are treated as absent
    /// rather than rejected.
    pub fn due_date(&self) -> Option<NaiveDateTime> {
        parse_due_date(self.due_date.as_deref())
    }

    /// Description with empty submissions folded to `NULL`.
    pub fn description(&self) -> Option<&str> {
        normalize_description(self.description.as_deref())
    }
}

/// Form payload for updating a todo. The edit form posts every field, so
/// all columns are written (last writer wins).
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTodoForm {
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    pub priority: TodoPriority,
    #[serde(default)]
    pub status: TodoStatus,
    pub due_date: Option<String>,
}

impl UpdateTodoForm {
    /// Parsed due date; see [`CreateTodoForm::due_date`].
    pub fn due_date(&self) -> Option<NaiveDateTime> {
        parse_due_date(self.due_date.as_deref())
    }

    /// Description with empty submissions folded to `NULL`.
    pub fn description(&self) -> Option<&str> {
        normalize_description(self.description.as_deref())
    }
}

/// Parse a `datetime-local` form value (`YYYY-MM-DDTHH:MM`).
fn parse_due_date(raw: Option<&str>) -> Option<NaiveDateTime> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    NaiveDateTime::parse_from_str(raw, DUE_DATE_FORMAT).ok()
}

fn normalize_description(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|s| !s.is_empty())
}
