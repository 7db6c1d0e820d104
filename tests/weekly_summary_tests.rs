//! End-to-end tests covering the path from stored records to a weekly report

use chrono::NaiveDate;
use tempfile::TempDir;
use tutor_track::core::auth::{generate_password, generate_teacher_id, login, register, Role};
use tutor_track::core::models::{Subject, Task, Teacher};
use tutor_track::core::report::{MarkdownReporter, ReportContext, ReportGenerator};
use tutor_track::core::store::Database;
use tutor_track::core::week::{summarize_week, week_start};

const EPS: f64 = 1e-9;

fn setup() -> (TempDir, Database) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let db = Database::open(dir.path()).expect("Failed to open database");
    (dir, db)
}

fn create_teacher(db: &Database, admin_email: &str) -> Teacher {
    let teacher = Teacher::new(
        generate_teacher_id(),
        "Ada Lovelace".to_string(),
        "ada@example.com".to_string(),
        "555-0100".to_string(),
        "12 Analytical Way".to_string(),
        vec![Subject::new("Math".to_string(), 500.0)],
        generate_password(),
        admin_email.to_string(),
    );
    db.add_teacher(teacher.clone()).expect("Failed to add teacher");
    teacher
}

fn math_session(title: &str, date: NaiveDate, start: &str, end: &str) -> Task {
    let mut task = Task::new(
        title.to_string(),
        "A tutoring session for testing".to_string(),
        date,
        start.to_string(),
        end.to_string(),
    );
    task.set_subject("Math".to_string());
    task
}

#[test]
fn full_week_from_store_to_totals() {
    let (_dir, db) = setup();

    register(&db, "admin@example.com", "hunter22").expect("Failed to register");
    db.add_subject("admin@example.com", Subject::new("Math".to_string(), 500.0))
        .expect("Failed to add subject");

    let teacher = create_teacher(&db, "admin@example.com");

    // Two Monday sessions: 1 hour and 1.5 hours at 500/hour
    let monday = NaiveDate::from_ymd_opt(2026, 8, 24).unwrap();
    db.add_task_for_teacher(&teacher.email, math_session("Algebra", monday, "09:00", "10:00"))
        .expect("Failed to add task");
    db.add_task_for_teacher(&teacher.email, math_session("Calculus", monday, "13:00", "14:30"))
        .expect("Failed to add task");

    let stored = db
        .find_teacher(&teacher.email)
        .expect("Failed to read teacher")
        .expect("Teacher missing");
    let subjects = db
        .get_subjects_for_teacher(&teacher.email)
        .expect("Failed to read subjects");

    let start = week_start(monday);
    assert_eq!(start, NaiveDate::from_ymd_opt(2026, 8, 23).unwrap());

    let summary = summarize_week(&stored.tasks, &subjects, start);

    assert_eq!(summary.total_lectures, 2);
    assert!((summary.total_hours - 2.5).abs() < EPS);
    assert!((summary.total_earnings - 1250.0).abs() < EPS);

    // Monday carries everything, the other six days are empty
    assert_eq!(summary.days[1].lectures, 2);
    for (i, day) in summary.days.iter().enumerate() {
        if i != 1 {
            assert_eq!(day.lectures, 0);
            assert!(day.earnings.abs() < EPS);
        }
    }
}

#[test]
fn rates_resolve_against_the_teachers_own_subject_table() {
    let (_dir, db) = setup();

    register(&db, "admin@example.com", "hunter22").expect("Failed to register");
    // Global table's first subject differs from the teacher's first subject
    db.add_subject("admin@example.com", Subject::new("Math".to_string(), 500.0))
        .expect("Failed to add subject");
    db.add_subject("admin@example.com", Subject::new("Physics".to_string(), 550.0))
        .expect("Failed to add subject");

    let teacher = Teacher::new(
        generate_teacher_id(),
        "Grace Hopper".to_string(),
        "grace@example.com".to_string(),
        "555-0101".to_string(),
        "7 Compiler Court".to_string(),
        vec![Subject::new("Physics".to_string(), 550.0)],
        generate_password(),
        "admin@example.com".to_string(),
    );
    db.add_teacher(teacher.clone()).expect("Failed to add teacher");

    // A subject-less 1-hour task resolves via the first-subject fallback
    let monday = NaiveDate::from_ymd_opt(2026, 8, 24).unwrap();
    let task = Task::new(
        "Mechanics".to_string(),
        "Kinematics review session".to_string(),
        monday,
        "09:00".to_string(),
        "10:00".to_string(),
    );
    db.add_task_for_teacher(&teacher.email, task)
        .expect("Failed to add task");

    let stored = db
        .find_teacher(&teacher.email)
        .expect("Failed to read teacher")
        .expect("Teacher missing");
    let subjects = db
        .get_subjects_for_teacher(&teacher.email)
        .expect("Failed to read subjects");

    let summary = summarize_week(&stored.tasks, &subjects, week_start(monday));

    // Physics at 550, not the global table's Math at 500
    assert!((summary.total_earnings - 550.0).abs() < EPS);
}

#[test]
fn roles_resolve_through_login() {
    let (_dir, db) = setup();

    register(&db, "admin@example.com", "hunter22").expect("Failed to register");
    let teacher = create_teacher(&db, "admin@example.com");

    let admin = login(&db, "admin@example.com", "hunter22").expect("Admin login failed");
    assert_eq!(admin.role, Role::Admin);

    let by_id = login(&db, &teacher.id, &teacher.password).expect("Teacher login failed");
    assert_eq!(by_id.role, Role::Teacher);
    assert_eq!(by_id.email, teacher.email);
}

#[test]
fn markdown_report_written_to_disk() {
    let (dir, db) = setup();

    register(&db, "admin@example.com", "hunter22").expect("Failed to register");
    db.add_subject("admin@example.com", Subject::new("Math".to_string(), 500.0))
        .expect("Failed to add subject");
    let teacher = create_teacher(&db, "admin@example.com");

    let monday = NaiveDate::from_ymd_opt(2026, 8, 24).unwrap();
    db.add_task_for_teacher(&teacher.email, math_session("Algebra", monday, "09:00", "10:00"))
        .expect("Failed to add task");

    let stored = db
        .find_teacher(&teacher.email)
        .expect("Failed to read teacher")
        .expect("Teacher missing");
    let subjects = db
        .get_subjects_for_teacher(&teacher.email)
        .expect("Failed to read subjects");
    let summary = summarize_week(&stored.tasks, &subjects, week_start(monday));

    let output = dir.path().join("report.md");
    let ctx = ReportContext::new(&stored, &summary);
    MarkdownReporter::new()
        .generate(&ctx, &output)
        .expect("Failed to generate report");

    let content = std::fs::read_to_string(&output).expect("Failed to read report");
    assert!(content.contains("Ada Lovelace"));
    assert!(content.contains("Algebra"));
    assert!(!content.contains("{{"));
}

#[test]
fn stored_json_uses_camel_case_field_names() {
    let (dir, db) = setup();

    let teacher = create_teacher(&db, "admin@example.com");
    let monday = NaiveDate::from_ymd_opt(2026, 8, 24).unwrap();
    db.add_task_for_teacher(&teacher.email, math_session("Algebra", monday, "09:00", "10:00"))
        .expect("Failed to add task");

    let raw = std::fs::read_to_string(dir.path().join("teachers.json"))
        .expect("Failed to read teachers file");
    assert!(raw.contains("\"isActive\""));
    assert!(raw.contains("\"createdBy\""));
    assert!(raw.contains("\"startTime\""));
    assert!(raw.contains("\"subjectName\""));
    assert!(!raw.contains("\"start_time\""));
}
