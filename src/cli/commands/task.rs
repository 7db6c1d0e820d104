//! Task command handlers

use crate::args::{TaskCommand, TaskFilter};
use crate::commands::require_teacher;
use tutor_track::core::auth::resolve_teacher;
use tutor_track::core::models::Task;
use tutor_track::core::store::Database;

/// Dispatch task subcommands
pub fn run(db: &Database, subcommand: TaskCommand) {
    match subcommand {
        TaskCommand::Add {
            title,
            description,
            date,
            start_time,
            end_time,
            subject,
            auth,
        } => {
            let session = require_teacher(db, &auth);

            let mut task = Task::new(title, description, date, start_time, end_time);
            if let Some(name) = subject {
                // Sessions can only be logged against subjects the teacher teaches
                let teacher = match resolve_teacher(db, &session.email) {
                    Ok(teacher) => teacher,
                    Err(e) => {
                        eprintln!("✗ {e}");
                        std::process::exit(1);
                    }
                };
                if teacher.find_subject(&name).is_none() {
                    eprintln!("✗ '{name}' is not one of this teacher's subjects");
                    std::process::exit(1);
                }
                task.set_subject(name);
            }
            if let Err(e) = task.validate() {
                eprintln!("✗ Invalid task: {e}");
                std::process::exit(1);
            }

            match db.add_task_for_teacher(&session.email, task.clone()) {
                Ok(()) => println!("✓ Logged session '{}' ({})", task.title, task.id),
                Err(e) => {
                    eprintln!("✗ Failed to log session: {e}");
                    std::process::exit(1);
                }
            }
        }
        TaskCommand::List { filter, auth } => {
            let session = require_teacher(db, &auth);
            match db.get_tasks_for_teacher(&session.email) {
                Ok(tasks) => {
                    let shown: Vec<&Task> = tasks
                        .iter()
                        .filter(|t| match filter {
                            TaskFilter::All => true,
                            TaskFilter::Pending => t.is_pending(),
                            TaskFilter::Done => t.completed,
                        })
                        .collect();
                    if shown.is_empty() {
                        println!("No matching sessions");
                        return;
                    }
                    println!(
                        "{:<38} {:<20} {:<12} {:<12} {:<8}",
                        "Id", "Title", "Date", "Time", "Status"
                    );
                    for task in shown {
                        println!(
                            "{:<38} {:<20} {:<12} {:<12} {:<8}",
                            task.id,
                            task.title,
                            task.date,
                            format!("{}-{}", task.start_time, task.end_time),
                            if task.completed { "done" } else { "pending" }
                        );
                    }
                }
                Err(e) => {
                    eprintln!("✗ Failed to list sessions: {e}");
                    std::process::exit(1);
                }
            }
        }
        TaskCommand::Done { id, auth } => {
            let session = require_teacher(db, &auth);
            let tasks = match db.get_tasks_for_teacher(&session.email) {
                Ok(tasks) => tasks,
                Err(e) => {
                    eprintln!("✗ Failed to read sessions: {e}");
                    std::process::exit(1);
                }
            };
            let Some(mut task) = tasks.into_iter().find(|t| t.id == id) else {
                eprintln!("✗ No session with id '{id}'");
                std::process::exit(1);
            };
            task.completed = true;
            match db.update_task_for_teacher(&session.email, &task) {
                Ok(()) => println!("✓ Marked '{}' as done", task.title),
                Err(e) => {
                    eprintln!("✗ Failed to update session: {e}");
                    std::process::exit(1);
                }
            }
        }
        TaskCommand::Remove { id, auth } => {
            let session = require_teacher(db, &auth);
            match db.remove_task_for_teacher(&session.email, &id) {
                Ok(()) => println!("✓ Removed session '{id}'"),
                Err(e) => {
                    eprintln!("✗ Failed to remove session: {e}");
                    std::process::exit(1);
                }
            }
        }
    }
}
