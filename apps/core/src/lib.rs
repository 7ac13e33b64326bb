//! # TaskMind Core
//!
//! Backend engine for the TaskMind personal task assistant.
//! The frontend owns presentation; this crate owns the logic:
//!
//! ## Components
//! - `classify`: category/priority assignment for free-text task content,
//!   remote AI first, deterministic keyword rules as fallback
//! - `analytics`: completion, category-distribution and weekly-progress
//!   aggregation over the task collection
//! - `store`: SQLite-backed task persistence
//! - `models`: shared task entities and enumerations

pub mod analytics;
pub mod classify;
pub mod config;
pub mod error;
pub mod models;
pub mod rate_limiter;
pub mod store;
pub mod telemetry;

pub use analytics::{aggregate, AnalyticsSnapshot};
pub use classify::engine::{Classifier, ClassifyObserver};
pub use classify::rules::RuleClassifier;
pub use config::RemoteConfig;
pub use error::{AppError, RemoteError};
pub use models::{Category, ClassificationResult, Priority, Task, TaskDraft};

#[cfg(test)]
mod tests;
