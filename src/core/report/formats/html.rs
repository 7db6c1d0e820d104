//! HTML report generator
//!
//! Generates self-contained HTML reports that open in any browser with no
//! external assets.

use crate::core::report::{ReportContext, ReportGenerator};
use std::error::Error;
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Embedded HTML report template
const HTML_TEMPLATE: &str = include_str!("../templates/report.html");

/// HTML report generator
pub struct HtmlReporter;

impl HtmlReporter {
    /// Create a new HTML reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Escape HTML special characters in user-provided values
    fn escape(value: &str) -> String {
        value
            .replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &ReportContext) -> String {
        let mut output = HTML_TEMPLATE.to_string();

        output = output.replace("{{teacher_name}}", &Self::escape(&ctx.teacher.name));
        output = output.replace("{{teacher_id}}", &Self::escape(&ctx.teacher.id));
        output = output.replace("{{teacher_email}}", &Self::escape(&ctx.teacher.email));
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

        output = output.replace("{{daily_rows}}", &Self::generate_daily_rows(ctx));
        output = output.replace("{{session_section}}", &Self::generate_session_section(ctx));

        output
    }

    /// Generate `<tr>` rows for the day-by-day table
    fn generate_daily_rows(ctx: &ReportContext) -> String {
        let mut rows = String::new();
        for day in &ctx.summary.days {
            let _ = writeln!(
                rows,
                "    <tr><td>{}</td><td>{}</td><td>{}</td><td>{:.2}</td><td>{:.2}</td></tr>",
                day.day, day.date, day.lectures, day.hours, day.earnings
            );
        }
        rows
    }

    /// Generate the session table, or a placeholder paragraph
    fn generate_session_section(ctx: &ReportContext) -> String {
        let has_sessions = ctx.summary.days.iter().any(|d| !d.tasks.is_empty());
        if !has_sessions {
            return "<p><em>No sessions this week.</em></p>".to_string();
        }

        let mut section = String::new();
        section.push_str("<table>\n");
        section.push_str(
            "    <tr><th>Date</th><th>Title</th><th>Subject</th><th>Time</th><th>Status</th></tr>\n",
        );
        for day in &ctx.summary.days {
            for task in &day.tasks {
                let subject = task.subject_name.as_deref().unwrap_or("-");
                let status = if task.completed { "done" } else { "pending" };
                let _ = writeln!(
                    section,
                    "    <tr><td>{}</td><td>{}</td><td>{}</td><td>{}-{}</td><td>{}</td></tr>",
                    task.date,
                    Self::escape(&task.title),
                    Self::escape(subject),
                    task.start_time,
                    task.end_time,
                    status
                );
            }
        }
        section.push_str("  </table>");
        section
    }
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for HtmlReporter {
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let report_content = self.render(ctx)?;
        fs::write(output_path, report_content)?;
        Ok(())
    }

    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(self.render_template(ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{Subject, Teacher};
    use crate::core::week::summarize_week;
    use chrono::NaiveDate;

    #[test]
    fn render_escapes_markup_in_names() {
        let teacher = Teacher::new(
            "TCH123456001".to_string(),
            "Ada <Lovelace>".to_string(),
            "ada@example.com".to_string(),
            "555-0100".to_string(),
            "12 Analytical Way".to_string(),
            vec![Subject::new("Math".to_string(), 500.0)],
            "s3cret!@".to_string(),
            "admin@example.com".to_string(),
        );
        let sunday = NaiveDate::from_ymd_opt(2026, 8, 23).unwrap();
        let summary = summarize_week(&[], &[], sunday);
        let ctx = ReportContext::new(&teacher, &summary);

        let rendered = HtmlReporter::new().render(&ctx).unwrap();
        assert!(rendered.contains("Ada &lt;Lovelace&gt;"));
        assert!(rendered.contains("<em>No sessions this week.</em>"));
        assert!(!rendered.contains("{{"));
    }
}
