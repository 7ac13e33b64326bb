//! Analytics aggregation.
//!
//! Derives display-ready statistics from the full task collection. Pure and
//! deterministic: everything is recomputed per call from the tasks and the
//! injected clock, nothing is cached or mutated.

use crate::models::{Category, Task};
use chrono::{DateTime, Datelike, Duration, Utc};
use serde::Serialize;
use std::collections::HashMap;

/// Aggregate statistics over the task collection, recomputed in full on every
/// request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsSnapshot {
    /// Number of tasks with `completed = true`.
    pub completed_count: usize,
    /// Number of tasks not yet completed.
    pub pending_count: usize,
    /// Task count per category; categories with zero tasks are omitted.
    pub category_counts: HashMap<Category, usize>,
    /// First instant of the calendar week containing `now`.
    pub week_start: DateTime<Utc>,
    /// Last instant of that week (inclusive).
    pub week_end: DateTime<Utc>,
    /// Tasks due within `[week_start, week_end]`, inclusive on both ends.
    pub week_due_count: usize,
    /// Of the week-due tasks, how many are completed.
    pub week_completed_count: usize,
}

impl AnalyticsSnapshot {
    /// Completion percentage for the current week, defined as `0.0` when no
    /// tasks are due this week.
    pub fn week_completion_percent(&self) -> f64 {
        if self.week_due_count == 0 {
            0.0
        } else {
            self.week_completed_count as f64 / self.week_due_count as f64 * 100.0
        }
    }
}

/// Computes the calendar-week window containing `now`.
///
/// Week convention: Sunday-start, matching the frontend's display. The end
/// bound is the last millisecond of Saturday, so both bounds are inclusive.
pub fn week_window(now: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
    let days_into_week = now.weekday().num_days_from_sunday() as i64;
    let start_date = now.date_naive() - Duration::days(days_into_week);
    let week_start = start_date
        .and_hms_opt(0, 0, 0)
        .expect("midnight is a valid time")
        .and_utc();
    let week_end = week_start + Duration::days(7) - Duration::milliseconds(1);
    (week_start, week_end)
}

/// Aggregates the task collection into an [`AnalyticsSnapshot`].
///
/// The clock is injected rather than read ambiently so the weekly window is
/// deterministic under test.
pub fn aggregate(tasks: &[Task], now: DateTime<Utc>) -> AnalyticsSnapshot {
    let completed_count = tasks.iter().filter(|t| t.completed).count();
    let pending_count = tasks.len() - completed_count;

    let mut category_counts: HashMap<Category, usize> = HashMap::new();
    for task in tasks {
        *category_counts.entry(task.category).or_insert(0) += 1;
    }

    let (week_start, week_end) = week_window(now);
    let week_due = tasks
        .iter()
        .filter(|t| t.due_date >= week_start && t.due_date <= week_end);

    let mut week_due_count = 0;
    let mut week_completed_count = 0;
    for task in week_due {
        week_due_count += 1;
        if task.completed {
            week_completed_count += 1;
        }
    }

    AnalyticsSnapshot {
        completed_count,
        pending_count,
        category_counts,
        week_start,
        week_end,
        week_due_count,
        week_completed_count,
    }
}
