//! Repository for the `todos` table.
//!
//! Plain single-user CRUD. Updates write every column (the edit form
//! posts all fields), so the last writer wins.

use chrono::NaiveDateTime;
use devsite_core::types::DbId;
use sqlx::PgPool;

use crate::models::todo::{Todo, TodoPriority, TodoStatus};

/// Column list for `todos` queries.
const TODO_COLUMNS: &str = "\
    id, title, description, priority, status, due_date, \
    created_at, updated_at";

/// Provides CRUD operations for todos.
pub struct TodoRepo;

impl TodoRepo {
    /// Insert a new todo and return the stored row.
    pub async fn create(
        pool: &PgPool,
        title: &str,
        description: Option<&str>,
        priority: TodoPriority,
        status: TodoStatus,
        due_date: Option<NaiveDateTime>,
    ) -> Result<Todo, sqlx::Error> {
        let query = format!(
            "INSERT INTO todos (title, description, priority, status, due_date) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {TODO_COLUMNS}"
        );
        sqlx::query_as::<_, Todo>(&query)
            .bind(title)
            .bind(description)
            .bind(priority)
            .bind(status)
            .bind(due_date)
            .fetch_one(pool)
            .await
    }

    /// Find a todo by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Todo>, sqlx::Error> {
        let query = format!("SELECT {TODO_COLUMNS} FROM todos WHERE id = $1");
        sqlx::query_as::<_, Todo>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all todos, newest first.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Todo>, sqlx::Error> {
        let query = format!("SELECT {TODO_COLUMNS} FROM todos ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Todo>(&query).fetch_all(pool).await
    }

    /// Overwrite a todo with the submitted form values.
    ///
    /// Returns `None` if no todo with the given ID exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        title: &str,
        description: Option<&str>,
        priority: TodoPriority,
        status: TodoStatus,
        due_date: Option<NaiveDateTime>,
    ) -> Result<Option<Todo>, sqlx::Error> {
        let query = format!(
            "UPDATE todos SET \
                 title = $2, \
                 description = $3, \
                 priority = $4, \
                 status = $5, \
                 due_date = $6, \
                 updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {TODO_COLUMNS}"
        );
        sqlx::query_as::<_, Todo>(&query)
            .bind(id)
            .bind(title)
            .bind(description)
            .bind(priority)
            .bind(status)
            .bind(due_date)
            .fetch_optional(pool)
            .await
    }

    /// Delete a todo by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM todos WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
