//! Task model
//!
//! A task is a single scheduled or completed tutoring session, logged by a
//! teacher against a calendar date and a wall-clock time range.

use crate::core::week;
use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Weekday names indexed by days-from-Sunday.
pub const DAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Minimum allowed session length at creation time, in hours.
const MIN_DURATION_HOURS: f64 = 0.25;

/// Weekday name (Sunday-based) for a calendar date.
#[must_use]
pub fn day_name(date: NaiveDate) -> &'static str {
    DAY_NAMES[date.weekday().num_days_from_sunday() as usize]
}

/// A tutoring session belonging to exactly one teacher.
///
/// Serialized with camelCase field names to stay compatible with the JSON
/// arrays the store holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique task id
    pub id: String,

    /// Short session title
    pub title: String,

    /// Longer description of the session
    pub description: String,

    /// Calendar date of the session
    pub date: NaiveDate,

    /// Weekday name derived from `date` (Sunday-based)
    pub day: String,

    /// Start time of day, 24-hour "HH:MM"
    pub start_time: String,

    /// End time of day, 24-hour "HH:MM"
    pub end_time: String,

    /// Whether the session has been completed
    pub completed: bool,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Optional link to a subject by name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject_name: Option<String>,
}

impl Task {
    /// Create a new pending task. The weekday name is derived from `date`.
    #[must_use]
    pub fn new(
        title: String,
        description: String,
        date: NaiveDate,
        start_time: String,
        end_time: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title,
            description,
            date,
            day: day_name(date).to_string(),
            start_time,
            end_time,
            completed: false,
            created_at: Utc::now(),
            subject_name: None,
        }
    }

    /// Link this task to a subject by name.
    pub fn set_subject(&mut self, subject_name: String) {
        self.subject_name = Some(subject_name);
    }

    /// Validate creation-time constraints: non-blank title and description,
    /// parseable times, start before end, and at least a 15-minute duration.
    ///
    /// These rules gate task creation only; the weekly aggregator accepts any
    /// stored task as-is.
    ///
    /// # Errors
    ///
    /// Returns a description of the first violated constraint.
    pub fn validate(&self) -> Result<(), String> {
        let title = self.title.trim();
        if title.len() < 3 || title.len() > 100 {
            return Err("Title must be between 3 and 100 characters".to_string());
        }
        let description = self.description.trim();
        if description.len() < 10 || description.len() > 500 {
            return Err("Description must be between 10 and 500 characters".to_string());
        }

        let duration = week::task_duration_hours(&self.start_time, &self.end_time)
            .map_err(|e| e.to_string())?;
        if duration <= 0.0 {
            return Err("End time must be after start time".to_string());
        }
        if duration < MIN_DURATION_HOURS {
            return Err("Session must be at least 15 minutes long".to_string());
        }
        Ok(())
    }

    /// Whether the task is still pending.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        !self.completed
    }
}
