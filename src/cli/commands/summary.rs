//! Weekly summary command handler

use crate::args::SessionArgs;
use chrono::{NaiveDate, Utc};
use std::path::PathBuf;
use tutor_track::config::Config;
use tutor_track::core::auth::{login, resolve_teacher, Role};
use tutor_track::core::report::{
    HtmlReporter, MarkdownReporter, ReportContext, ReportFormat, ReportGenerator,
};
use tutor_track::core::store::Database;
use tutor_track::core::week::{summarize_week, week_start};
use tutor_track::debug;

/// Handle the summary subcommand
#[allow(clippy::needless_pass_by_value)]
pub fn run(
    db: &Database,
    config: &Config,
    session_args: &SessionArgs,
    teacher_key: Option<String>,
    date: Option<NaiveDate>,
    report: Option<String>,
    output: Option<PathBuf>,
) {
    let session = match login(db, &session_args.email, &session_args.password) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("✗ Login failed: {e}");
            std::process::exit(1);
        }
    };

    // Teachers always see their own week; admins pick a teacher explicitly
    let target = match (session.role, teacher_key) {
        (Role::Teacher, None) => session.email.clone(),
        (Role::Teacher, Some(key)) if key == session.email => key,
        (Role::Teacher, Some(_)) => {
            eprintln!("✗ Teachers can only view their own summary");
            std::process::exit(1);
        }
        (Role::Admin, Some(key)) => key,
        (Role::Admin, None) => {
            eprintln!("✗ Pass --teacher to choose whose week to summarize");
            std::process::exit(1);
        }
    };

    let teacher = match resolve_teacher(db, &target) {
        Ok(teacher) => teacher,
        Err(e) => {
            eprintln!("✗ {e}");
            std::process::exit(1);
        }
    };
    // Rates resolve against the teacher's own subject list, not the global table
    let subjects = match db.get_subjects_for_teacher(&teacher.id) {
        Ok(subjects) => subjects,
        Err(e) => {
            eprintln!("✗ Failed to read subjects: {e}");
            std::process::exit(1);
        }
    };

    let reference = date.unwrap_or_else(|| Utc::now().date_naive());
    let start = week_start(reference);
    debug!("Summarizing week of {start} for teacher {}", teacher.id);

    let summary = summarize_week(&teacher.tasks, &subjects, start);

    println!(
        "\nWeekly summary for {} ({} to {})\n",
        teacher.name,
        summary.week_start,
        summary.week_end()
    );
    println!(
        "{:<10} {:<12} {:>9} {:>8} {:>10}",
        "Day", "Date", "Lectures", "Hours", "Earnings"
    );
    for day in &summary.days {
        println!(
            "{:<10} {:<12} {:>9} {:>8.2} {:>10.2}",
            day.day,
            day.date.to_string(),
            day.lectures,
            day.hours,
            day.earnings
        );
    }
    println!(
        "{:<10} {:<12} {:>9} {:>8.2} {:>10.2}",
        "Total", "", summary.total_lectures, summary.total_hours, summary.total_earnings
    );

    if let Some(format_str) = report {
        let format: ReportFormat = match format_str.parse() {
            Ok(format) => format,
            Err(e) => {
                eprintln!("✗ {e}");
                std::process::exit(1);
            }
        };

        let output_path = output.unwrap_or_else(|| {
            PathBuf::from(&config.paths.reports_dir).join(format!(
                "summary-{}-{}.{}",
                teacher.id,
                summary.week_start,
                format.extension()
            ))
        });
        if let Some(parent) = output_path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                eprintln!("✗ Failed to create reports directory: {}", parent.display());
                std::process::exit(1);
            }
        }

        let ctx = ReportContext::new(&teacher, &summary);
        let result = match format {
            ReportFormat::Markdown => MarkdownReporter::new().generate(&ctx, &output_path),
            ReportFormat::Html => HtmlReporter::new().generate(&ctx, &output_path),
        };
        match result {
            Ok(()) => println!("\n✓ Report generated: {}", output_path.display()),
            Err(e) => {
                eprintln!("✗ Failed to generate report: {e}");
                std::process::exit(1);
            }
        }
    }
}
