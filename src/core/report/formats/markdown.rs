//! Markdown report generator
//!
//! Generates weekly summary reports in Markdown format. These reports render
//! well in GitHub, GitLab, and VS Code.

use crate::core::report::{ReportContext, ReportGenerator};
use std::error::Error;
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Embedded Markdown report template
const MARKDOWN_TEMPLATE: &str = include_str!("../templates/report.md");

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &ReportContext) -> String {
        let mut output = MARKDOWN_TEMPLATE.to_string();

        output = output.replace("{{teacher_name}}", &ctx.teacher.name);
        output = output.replace("{{teacher_id}}", &ctx.teacher.id);
        output = output.replace("{{teacher_email}}", &ctx.teacher.email);
        output = output.replace("{{week_range}}", &ctx.week_range());

        output = output.replace(
            "{{total_lectures}}",
            &ctx.summary.total_lectures.to_string(),
        );
        output = output.replace("{{total_hours}}", &format!("{:.2}", ctx.summary.total_hours));
        output = output.replace(
            "{{total_earnings}}",
            &format!("{:.2}", ctx.summary.total_earnings),
        );

        output = output.replace("{{daily_table}}", &Self::generate_daily_table(ctx));
        output = output.replace("{{session_table}}", &Self::generate_session_table(ctx));

        output
    }

    /// Generate the day-by-day summary table
    fn generate_daily_table(ctx: &ReportContext) -> String {
        let mut table = String::new();
        table.push_str("| Day | Date | Lectures | Hours | Earnings |\n");
        table.push_str("|---|---|---|---|---|\n");

        for day in &ctx.summary.days {
            let _ = writeln!(
                table,
                "| {} | {} | {} | {:.2} | {:.2} |",
                day.day, day.date, day.lectures, day.hours, day.earnings
            );
        }

        table
    }

    /// Generate the per-session table, or a placeholder for an empty week
    fn generate_session_table(ctx: &ReportContext) -> String {
        let has_sessions = ctx.summary.days.iter().any(|d| !d.tasks.is_empty());
        if !has_sessions {
            return "_No sessions this week._\n".to_string();
        }

        let mut table = String::new();
        table.push_str("| Date | Title | Subject | Time | Status |\n");
        table.push_str("|---|---|---|---|---|\n");

        for day in &ctx.summary.days {
            for task in &day.tasks {
                let subject = task.subject_name.as_deref().unwrap_or("-");
                let status = if task.completed { "done" } else { "pending" };
                let _ = writeln!(
                    table,
                    "| {} | {} | {} | {}-{} | {} |",
                    task.date, task.title, subject, task.start_time, task.end_time, status
                );
            }
        }

        table
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let report_content = self.render(ctx)?;
        fs::write(output_path, report_content)?;
        Ok(())
    }

    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(self.render_template(ctx))
    }
}
