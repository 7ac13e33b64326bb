//! SQLite-backed task store.
//!
//! Owns the task collection on behalf of the engine's callers: the classifier
//! and the aggregator never touch persistence themselves, they receive data
//! and return values. `completed` changes only through [`toggle_task`].

use crate::error::AppError;
use crate::models::{Task, TaskDraft};
use chrono::Utc;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

/// Opens (creating if missing) the database at `db_url` and applies the schema.
pub async fn init_db(db_url: &str) -> Result<SqlitePool, AppError> {
    info!("Initializing task store at: {}", db_url);

    let options = SqliteConnectOptions::from_str(db_url)
        .map_err(|e| AppError::Config(format!("Invalid database URL: {}", e)))?
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
        .map_err(AppError::Database)?;

    ensure_schema(&pool).await?;

    info!("Task store initialized");
    Ok(pool)
}

/// Creates the tasks table if it does not exist yet.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), AppError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS tasks (
            id TEXT PRIMARY KEY,
            title TEXT NOT NULL,
            description TEXT,
            category TEXT NOT NULL,
            priority TEXT NOT NULL,
            due_date DATETIME NOT NULL,
            completed INTEGER NOT NULL DEFAULT 0,
            created_at DATETIME NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// Inserts a new task from a validated draft.
///
/// The draft carries the classification already (the caller runs the
/// [`Classifier`](crate::Classifier) first); `id` and `created_at` are
/// assigned here and never change afterwards.
pub async fn create_task(pool: &SqlitePool, draft: TaskDraft) -> Result<Task, AppError> {
    draft.validate()?;

    let id = Uuid::new_v4().to_string();
    let created_at = Utc::now();

    let task = sqlx::query_as::<_, Task>(
        r#"
        INSERT INTO tasks (id, title, description, category, priority, due_date, completed, created_at)
        VALUES (?, ?, ?, ?, ?, ?, 0, ?)
        RETURNING id, title, description, category, priority, due_date, completed, created_at
        "#,
    )
    .bind(&id)
    .bind(&draft.title)
    .bind(&draft.description)
    .bind(draft.category)
    .bind(draft.priority)
    .bind(draft.due_date)
    .bind(created_at)
    .fetch_one(pool)
    .await?;

    Ok(task)
}

/// Fetches a single task by id.
pub async fn get_task(pool: &SqlitePool, id: &str) -> Result<Task, AppError> {
    let task = sqlx::query_as::<_, Task>(
        r#"
        SELECT id, title, description, category, priority, due_date, completed, created_at
        FROM tasks
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_one(pool)
    .await?;

    Ok(task)
}

/// Returns the full task collection, newest first.
pub async fn list_tasks(pool: &SqlitePool) -> Result<Vec<Task>, AppError> {
    let tasks = sqlx::query_as::<_, Task>(
        r#"
        SELECT id, title, description, category, priority, due_date, completed, created_at
        FROM tasks
        ORDER BY created_at DESC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(tasks)
}

/// Flips the completion flag of a task and returns the updated row.
pub async fn toggle_task(pool: &SqlitePool, id: &str) -> Result<Task, AppError> {
    let task = sqlx::query_as::<_, Task>(
        r#"
        UPDATE tasks
        SET completed = NOT completed
        WHERE id = ?
        RETURNING id, title, description, category, priority, due_date, completed, created_at
        "#,
    )
    .bind(id)
    .fetch_one(pool)
    .await?;

    Ok(task)
}

/// Deletes a task by id.
pub async fn delete_task(pool: &SqlitePool, id: &str) -> Result<(), AppError> {
    sqlx::query("DELETE FROM tasks WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}
