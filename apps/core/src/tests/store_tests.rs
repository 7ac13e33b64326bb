//! Task Store Tests
//!
//! CRUD coverage for the SQLite task store: creation with validation,
//! listing, completion toggling, and deletion.

use crate::error::AppError;
use crate::models::{Category, Priority, TaskDraft};
use crate::store;
use chrono::{Duration, Utc};
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

/// Single-connection in-memory database with the schema applied.
async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create test pool");

    store::ensure_schema(&pool).await.expect("Failed to apply schema");
    pool
}

fn draft(title: &str, category: Category, priority: Priority) -> TaskDraft {
    TaskDraft {
        title: title.to_string(),
        description: None,
        category,
        priority,
        due_date: Utc::now() + Duration::days(1),
    }
}

#[tokio::test]
async fn test_create_task_assigns_id_and_timestamps() {
    let pool = create_test_pool().await;

    let task = store::create_task(&pool, draft("Prepare report", Category::Work, Priority::High))
        .await
        .expect("Failed to create task");

    assert!(!task.id.is_empty());
    assert_eq!(task.title, "Prepare report");
    assert_eq!(task.category, Category::Work);
    assert_eq!(task.priority, Priority::High);
    assert!(!task.completed);
}

#[tokio::test]
async fn test_create_task_rejects_empty_title() {
    let pool = create_test_pool().await;

    let result = store::create_task(&pool, draft("", Category::Personal, Priority::Medium)).await;
    assert!(matches!(result, Err(AppError::Validation(_))));
}

#[tokio::test]
async fn test_get_task_round_trips_fields() {
    let pool = create_test_pool().await;

    let mut payload = draft("Buy groceries", Category::Errands, Priority::Low);
    payload.description = Some("milk, eggs, bread".to_string());
    let created = store::create_task(&pool, payload).await.expect("Failed to create task");

    let fetched = store::get_task(&pool, &created.id).await.expect("Failed to get task");

    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.description.as_deref(), Some("milk, eggs, bread"));
    assert_eq!(fetched.category, Category::Errands);
    assert_eq!(fetched.priority, Priority::Low);
    assert_eq!(fetched.due_date, created.due_date);
    assert_eq!(fetched.created_at, created.created_at);
}

#[tokio::test]
async fn test_list_tasks_returns_all() {
    let pool = create_test_pool().await;

    for i in 0..3 {
        store::create_task(
            &pool,
            draft(&format!("Task {}", i), Category::Personal, Priority::Medium),
        )
        .await
        .expect("Failed to create task");
    }

    let tasks = store::list_tasks(&pool).await.expect("Failed to list tasks");
    assert_eq!(tasks.len(), 3);
}

#[tokio::test]
async fn test_toggle_task_flips_only_completed() {
    let pool = create_test_pool().await;

    let created = store::create_task(&pool, draft("Call the bank", Category::Errands, Priority::Medium))
        .await
        .expect("Failed to create task");

    let toggled = store::toggle_task(&pool, &created.id).await.expect("Failed to toggle");
    assert!(toggled.completed);
    assert_eq!(toggled.id, created.id);
    assert_eq!(toggled.title, created.title);
    assert_eq!(toggled.created_at, created.created_at);

    let toggled_back = store::toggle_task(&pool, &created.id).await.expect("Failed to toggle");
    assert!(!toggled_back.completed);
}

#[tokio::test]
async fn test_toggle_unknown_task_is_a_database_error() {
    let pool = create_test_pool().await;

    let result = store::toggle_task(&pool, "no-such-id").await;
    assert!(matches!(result, Err(AppError::Database(_))));
}

#[tokio::test]
async fn test_delete_task_removes_row() {
    let pool = create_test_pool().await;

    let created = store::create_task(&pool, draft("Throwaway", Category::Personal, Priority::Low))
        .await
        .expect("Failed to create task");

    store::delete_task(&pool, &created.id).await.expect("Failed to delete");

    let tasks = store::list_tasks(&pool).await.expect("Failed to list tasks");
    assert!(tasks.is_empty());
}

#[tokio::test]
async fn test_init_db_creates_file_backed_store() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let db_path = dir.path().join("taskmind.sqlite");
    let db_url = format!("sqlite://{}", db_path.display());

    let pool = store::init_db(&db_url).await.expect("Failed to init db");

    store::create_task(&pool, draft("Persisted", Category::Work, Priority::Medium))
        .await
        .expect("Failed to create task");

    let tasks = store::list_tasks(&pool).await.expect("Failed to list tasks");
    assert_eq!(tasks.len(), 1);
    assert!(db_path.exists());
}
