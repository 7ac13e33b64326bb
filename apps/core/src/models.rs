use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use validator::Validate;

/// The category a task belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum Category {
    Work,
    Personal,
    Errands,
}

impl Category {
    /// Returns the lowercase wire label for the category.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Work => "work",
            Category::Personal => "personal",
            Category::Errands => "errands",
        }
    }

    /// Parses a lowercase label, as produced by the remote service.
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "work" => Some(Category::Work),
            "personal" => Some(Category::Personal),
            "errands" => Some(Category::Errands),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The urgency assigned to a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// Returns the lowercase wire label for the priority.
    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    /// Parses a lowercase label, as produced by the remote service.
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "low" => Some(Priority::Low),
            "medium" => Some(Priority::Medium),
            "high" => Some(Priority::High),
            _ => None,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The `(category, priority)` pair produced for a task's text content.
///
/// Ephemeral: produced fresh on every classification request, never cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub category: Category,
    pub priority: Priority,
}

impl Default for ClassificationResult {
    fn default() -> Self {
        Self {
            category: Category::Personal,
            priority: Priority::Medium,
        }
    }
}

/// Represents a single task in the user's list.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Task {
    /// The unique identifier for the task (UUID), immutable once assigned.
    pub id: String,
    /// The user-provided title, never empty.
    pub title: String,
    /// Optional free-text description.
    #[serde(default)]
    pub description: Option<String>,
    /// The category assigned at creation.
    pub category: Category,
    /// The priority assigned at creation.
    pub priority: Priority,
    /// When the task is due.
    pub due_date: DateTime<Utc>,
    /// Whether the task has been completed. Toggled only via the store.
    #[serde(default)]
    pub completed: bool,
    /// When the task was created, immutable.
    pub created_at: DateTime<Utc>,
}

/// The creation payload supplied by the user-facing layer.
///
/// Category and priority come from the [`Classifier`](crate::Classifier)
/// unless the user picked them by hand.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TaskDraft {
    /// The title of the new task.
    #[validate(length(min = 1))]
    pub title: String,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
    /// The category for the new task.
    pub category: Category,
    /// The priority for the new task.
    pub priority: Priority,
    /// When the task is due.
    pub due_date: DateTime<Utc>,
}
