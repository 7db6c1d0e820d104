//! Teacher command handlers

use crate::args::TeacherCommand;
use crate::commands::require_admin;
use tutor_track::core::auth::{generate_password, generate_teacher_id};
use tutor_track::core::models::Teacher;
use tutor_track::core::store::Database;
use tutor_track::info;

/// Dispatch teacher subcommands
pub fn run(db: &Database, subcommand: TeacherCommand) {
    match subcommand {
        TeacherCommand::Add {
            name,
            email,
            phone,
            address,
            subjects,
            admin,
        } => {
            let session = require_admin(db, &admin);

            // Assigned subjects must exist in the pay table
            let table = match db.get_subjects() {
                Ok(table) => table,
                Err(e) => {
                    eprintln!("✗ Failed to read subjects: {e}");
                    std::process::exit(1);
                }
            };
            let mut assigned = Vec::with_capacity(subjects.len());
            for wanted in &subjects {
                match table.iter().find(|s| s.subject_name == *wanted) {
                    Some(subject) => assigned.push(subject.clone()),
                    None => {
                        eprintln!("✗ Unknown subject '{wanted}'; add it first");
                        std::process::exit(1);
                    }
                }
            }

            let id = generate_teacher_id();
            let password = generate_password();
            let teacher = Teacher::new(
                id.clone(),
                name.clone(),
                email,
                phone,
                address,
                assigned,
                password.clone(),
                session.email.clone(),
            );

            match db.add_teacher(teacher) {
                Ok(()) => {
                    info!("Teacher '{name}' ({id}) created by {}", session.email);
                    println!("✓ Created teacher '{name}'");
                    println!("  id:       {id}");
                    println!("  password: {password}");
                }
                Err(e) => {
                    eprintln!("✗ Failed to add teacher: {e}");
                    std::process::exit(1);
                }
            }
        }
        TeacherCommand::List { admin } => {
            require_admin(db, &admin);
            match db.get_teachers() {
                Ok(teachers) if teachers.is_empty() => println!("No teachers yet"),
                Ok(teachers) => {
                    println!(
                        "{:<14} {:<24} {:<28} {:>8}",
                        "Id", "Name", "Email", "Tasks"
                    );
                    for teacher in teachers {
                        println!(
                            "{:<14} {:<24} {:<28} {:>8}",
                            teacher.id,
                            teacher.name,
                            teacher.email,
                            teacher.tasks.len()
                        );
                    }
                }
                Err(e) => {
                    eprintln!("✗ Failed to list teachers: {e}");
                    std::process::exit(1);
                }
            }
        }
        TeacherCommand::Remove { key, admin } => {
            require_admin(db, &admin);
            match db.remove_teacher(&key) {
                Ok(()) => println!("✓ Removed teacher '{key}'"),
                Err(e) => {
                    eprintln!("✗ Failed to remove teacher: {e}");
                    std::process::exit(1);
                }
            }
        }
    }
}
