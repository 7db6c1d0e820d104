//! Report generation for weekly summaries
//!
//! Renders a teacher's weekly summary to a file in Markdown or HTML, using
//! embedded templates with placeholder substitution.

use crate::core::models::Teacher;
use crate::core::week::WeekSummary;
use std::error::Error;
use std::path::Path;

pub mod formats;

pub use formats::{HtmlReporter, MarkdownReporter, ReportFormat};

/// Data context for report generation
///
/// Aggregates everything a template needs to render one teacher's week.
#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    /// Teacher the report is about
    pub teacher: &'a Teacher,
    /// The computed weekly summary
    pub summary: &'a WeekSummary,
}

impl<'a> ReportContext<'a> {
    /// Create a new report context
    #[must_use]
    pub const fn new(teacher: &'a Teacher, summary: &'a WeekSummary) -> Self {
        Self { teacher, summary }
    }

    /// Human-readable week range, e.g. "2026-08-23 to 2026-08-29"
    #[must_use]
    pub fn week_range(&self) -> String {
        format!(
            "{} to {}",
            self.summary.week_start,
            self.summary.week_end()
        )
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if report generation or file writing fails
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>>;

    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if report generation fails
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>>;
}
