//! Weekly earnings aggregation
//!
//! Pure functions that turn a teacher's task list and subject pay table into
//! a Sunday-to-Saturday report of lecture counts, hours, and earnings. The
//! aggregator holds no state and performs no I/O; callers supply the task
//! list, the subject table, and the week's starting Sunday, and get back a
//! freshly built summary every time.

use crate::core::models::task::DAY_NAMES;
use crate::core::models::{Subject, Task};
use crate::warn;
use chrono::{Datelike, Days, NaiveDate};
use std::error::Error;
use std::fmt;

/// Error for time-of-day strings that cannot be parsed as 24-hour `HH:MM`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidTimeFormat {
    /// The rejected input
    pub input: String,
}

impl fmt::Display for InvalidTimeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid time of day '{}': expected HH:MM with hour 0-23 and minute 0-59",
            self.input
        )
    }
}

impl Error for InvalidTimeFormat {}

/// Earnings and hours for a single day of the week.
///
/// Derived data: rebuilt from the source tasks and subjects on every call,
/// never persisted and never mutated in place.
#[derive(Debug, Clone, PartialEq)]
pub struct DailySummary {
    /// Weekday name (Sunday-based)
    pub day: &'static str,
    /// Calendar date of this bucket
    pub date: NaiveDate,
    /// Number of tutoring sessions on this day
    pub lectures: usize,
    /// Summed session hours
    pub hours: f64,
    /// Summed earnings (`hours x pay rate` per session)
    pub earnings: f64,
    /// The tasks that fell into this bucket
    pub tasks: Vec<Task>,
}

/// A full Sunday-to-Saturday report for one teacher and one week.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekSummary {
    /// The Sunday this week starts on
    pub week_start: NaiveDate,
    /// Per-day summaries, always 7 entries in Sunday-to-Saturday order
    pub days: Vec<DailySummary>,
    /// Total session count across the week
    pub total_lectures: usize,
    /// Total hours across the week
    pub total_hours: f64,
    /// Total earnings across the week
    pub total_earnings: f64,
}

impl WeekSummary {
    /// The Saturday this week ends on.
    #[must_use]
    pub fn week_end(&self) -> NaiveDate {
        self.week_start + Days::new(6)
    }
}

/// Parse a wall-clock time in 24-hour `HH:MM` form.
///
/// # Errors
///
/// Returns [`InvalidTimeFormat`] when the string is not two `:`-separated
/// numbers, or when the hour exceeds 23 or the minute exceeds 59.
pub fn parse_time_of_day(value: &str) -> Result<(u32, u32), InvalidTimeFormat> {
    let reject = || InvalidTimeFormat {
        input: value.to_string(),
    };

    let (hour_part, minute_part) = value.split_once(':').ok_or_else(reject)?;
    let hour: u32 = hour_part.trim().parse().map_err(|_| reject())?;
    let minute: u32 = minute_part.trim().parse().map_err(|_| reject())?;
    if hour > 23 || minute > 59 {
        return Err(reject());
    }
    Ok((hour, minute))
}

/// Duration between two times of day, in fractional hours.
///
/// Computed as `(eh + em/60) - (sh + sm/60)`. The result is negative when
/// the end precedes the start; that is passed through unvalidated, matching
/// the historical behavior. Validation belongs to task creation, not here.
///
/// # Errors
///
/// Returns [`InvalidTimeFormat`] when either time string fails to parse.
pub fn task_duration_hours(start: &str, end: &str) -> Result<f64, InvalidTimeFormat> {
    let (sh, sm) = parse_time_of_day(start)?;
    let (eh, em) = parse_time_of_day(end)?;
    Ok((f64::from(eh) + f64::from(em) / 60.0) - (f64::from(sh) + f64::from(sm) / 60.0))
}

/// The most recent Sunday at or before `reference`.
///
/// Identity for a Sunday; a Saturday maps to the Sunday six days earlier.
/// Total over all valid dates.
#[must_use]
pub fn week_start(reference: NaiveDate) -> NaiveDate {
    let offset = u64::from(reference.weekday().num_days_from_sunday());
    reference - Days::new(offset)
}

/// Resolve the hourly pay rate that applies to a task.
///
/// A case-sensitive match of the task's subject name wins. An unmatched or
/// unset subject falls back to the first defined subject, logged at warning
/// level whenever it triggers. With no subjects at all the rate is 0
/// (degraded mode, not an error).
#[must_use]
pub fn resolve_pay_rate(task: &Task, subjects: &[Subject]) -> f64 {
    if let Some(name) = &task.subject_name {
        if let Some(subject) = subjects.iter().find(|s| s.subject_name == *name) {
            return subject.pay_per_hour;
        }
    }
    match subjects.first() {
        Some(first) => {
            warn!(
                "Task {} has no matching subject; falling back to rate of '{}'",
                task.id, first.subject_name
            );
            first.pay_per_hour
        }
        None => 0.0,
    }
}

/// Build the weekly report for the 7-day window starting at `week_start`.
///
/// Tasks are partitioned into 7 buckets by exact calendar-date equality with
/// `week_start + i` days, Sunday through Saturday. Per bucket, the lecture
/// count is the number of tasks, hours are summed durations, and earnings
/// are summed `duration x rate` contributions. Week totals are sums over
/// the buckets.
///
/// A task whose time strings fail to parse still counts as a lecture but
/// contributes 0 hours and 0 earnings; the offending task id is logged at
/// warning level so a bad record cannot corrupt the rest of the week.
#[must_use]
pub fn summarize_week(tasks: &[Task], subjects: &[Subject], week_start: NaiveDate) -> WeekSummary {
    let mut days = Vec::with_capacity(7);

    for i in 0..7u64 {
        let date = week_start + Days::new(i);
        let bucket: Vec<Task> = tasks.iter().filter(|t| t.date == date).cloned().collect();

        let mut hours = 0.0;
        let mut earnings = 0.0;
        for task in &bucket {
            match task_duration_hours(&task.start_time, &task.end_time) {
                Ok(duration) => {
                    hours += duration;
                    earnings += duration * resolve_pay_rate(task, subjects);
                }
                Err(e) => {
                    warn!("Dropping hours for task {}: {e}", task.id);
                }
            }
        }

        days.push(DailySummary {
            day: DAY_NAMES[i as usize],
            date,
            lectures: bucket.len(),
            hours,
            earnings,
            tasks: bucket,
        });
    }

    let total_lectures = days.iter().map(|d| d.lectures).sum();
    let total_hours = days.iter().map(|d| d.hours).sum();
    let total_earnings = days.iter().map(|d| d.earnings).sum();

    WeekSummary {
        week_start,
        days,
        total_lectures,
        total_hours,
        total_earnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn task_on(date: NaiveDate, start: &str, end: &str) -> Task {
        Task::new(
            "Session".to_string(),
            "A tutoring session for testing".to_string(),
            date,
            start.to_string(),
            end.to_string(),
        )
    }

    fn subjects() -> Vec<Subject> {
        vec![
            Subject::new("Math".to_string(), 500.0),
            Subject::new("Physics".to_string(), 550.0),
        ]
    }

    // Sunday of the test week
    fn sunday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 23).unwrap()
    }

    #[test]
    fn computes_durations_in_fractional_hours() {
        assert!((task_duration_hours("09:00", "10:30").unwrap() - 1.5).abs() < EPS);
        assert!((task_duration_hours("14:15", "14:45").unwrap() - 0.5).abs() < EPS);
    }

    #[test]
    fn negative_duration_passes_through() {
        assert!((task_duration_hours("10:00", "09:00").unwrap() + 1.0).abs() < EPS);
    }

    #[test]
    fn rejects_malformed_times() {
        assert!(parse_time_of_day("nine").is_err());
        assert!(parse_time_of_day("24:00").is_err());
        assert!(parse_time_of_day("12:60").is_err());
        assert!(parse_time_of_day("12").is_err());
        assert!(task_duration_hours("12:00", "late").is_err());
    }

    #[test]
    fn week_start_is_identity_for_sunday() {
        assert_eq!(week_start(sunday()), sunday());
    }

    #[test]
    fn week_start_rounds_saturday_down_six_days() {
        // 2026-08-29 is the Saturday of the same week
        let saturday = NaiveDate::from_ymd_opt(2026, 8, 29).unwrap();
        assert_eq!(week_start(saturday), sunday());
    }

    #[test]
    fn matched_subject_wins_rate_resolution() {
        let mut task = task_on(sunday(), "09:00", "10:00");
        task.set_subject("Physics".to_string());

        assert!((resolve_pay_rate(&task, &subjects()) - 550.0).abs() < EPS);
    }

    #[test]
    fn unmatched_subject_falls_back_to_first() {
        let mut task = task_on(sunday(), "09:00", "10:00");
        task.set_subject("Chemistry".to_string());

        assert!((resolve_pay_rate(&task, &subjects()) - 500.0).abs() < EPS);
    }

    #[test]
    fn unset_subject_falls_back_to_first() {
        let task = task_on(sunday(), "09:00", "10:00");

        assert!((resolve_pay_rate(&task, &subjects()) - 500.0).abs() < EPS);
    }

    #[test]
    fn no_subjects_resolves_to_zero() {
        let mut task = task_on(sunday(), "09:00", "10:00");
        task.set_subject("Math".to_string());

        assert!(resolve_pay_rate(&task, &[]).abs() < EPS);
    }

    #[test]
    fn summarizes_a_week_with_two_monday_sessions() {
        let monday = NaiveDate::from_ymd_opt(2026, 8, 24).unwrap();
        let tasks = vec![
            task_on(monday, "09:00", "10:00"),
            task_on(monday, "13:00", "14:30"),
        ];
        let subjects = vec![Subject::new("Math".to_string(), 500.0)];

        let summary = summarize_week(&tasks, &subjects, sunday());

        let monday_summary = &summary.days[1];
        assert_eq!(monday_summary.day, "Monday");
        assert_eq!(monday_summary.lectures, 2);
        assert!((monday_summary.hours - 2.5).abs() < EPS);
        assert!((monday_summary.earnings - 1250.0).abs() < EPS);

        for (i, day) in summary.days.iter().enumerate() {
            if i != 1 {
                assert_eq!(day.lectures, 0);
                assert!(day.hours.abs() < EPS);
                assert!(day.earnings.abs() < EPS);
                assert!(day.tasks.is_empty());
            }
        }

        assert_eq!(summary.total_lectures, 2);
        assert!((summary.total_hours - 2.5).abs() < EPS);
        assert!((summary.total_earnings - 1250.0).abs() < EPS);
        assert_eq!(summary.week_end(), NaiveDate::from_ymd_opt(2026, 8, 29).unwrap());
    }

    #[test]
    fn partition_covers_exactly_the_week_window() {
        let mut tasks = Vec::new();
        for offset in 0..7u64 {
            tasks.push(task_on(sunday() + Days::new(offset), "08:00", "09:00"));
        }
        // Outside the window on both sides
        tasks.push(task_on(sunday() - Days::new(1), "08:00", "09:00"));
        tasks.push(task_on(sunday() + Days::new(7), "08:00", "09:00"));

        let summary = summarize_week(&tasks, &subjects(), sunday());

        let bucketed: usize = summary.days.iter().map(|d| d.lectures).sum();
        assert_eq!(bucketed, summary.total_lectures);
        assert_eq!(summary.total_lectures, 7);
        for day in &summary.days {
            assert_eq!(day.lectures, 1);
        }
    }

    #[test]
    fn malformed_time_contributes_zero_without_corrupting_totals() {
        let monday = NaiveDate::from_ymd_opt(2026, 8, 24).unwrap();
        let good = task_on(monday, "09:00", "10:00");
        let bad = task_on(monday, "9am", "10:00");

        let summary = summarize_week(&[good, bad], &subjects(), sunday());

        // The bad record still counts as a lecture, but adds no hours/earnings.
        assert_eq!(summary.days[1].lectures, 2);
        assert!((summary.total_hours - 1.0).abs() < EPS);
        assert!((summary.total_earnings - 500.0).abs() < EPS);
        assert!(summary.total_hours.is_finite());
        assert!(summary.total_earnings.is_finite());
    }

    #[test]
    fn summaries_are_idempotent() {
        let monday = NaiveDate::from_ymd_opt(2026, 8, 24).unwrap();
        let tasks = vec![task_on(monday, "09:00", "11:00")];
        let subjects = subjects();

        let first = summarize_week(&tasks, &subjects, sunday());
        let second = summarize_week(&tasks, &subjects, sunday());

        assert_eq!(first, second);
    }
}
