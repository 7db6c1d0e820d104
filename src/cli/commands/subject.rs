//! Subject command handlers

use crate::args::SubjectCommand;
use crate::commands::require_admin;
use tutor_track::core::models::Subject;
use tutor_track::core::store::Database;
use tutor_track::info;

/// Dispatch subject subcommands
pub fn run(db: &Database, subcommand: SubjectCommand) {
    match subcommand {
        SubjectCommand::Add { name, rate, admin } => {
            let session = require_admin(db, &admin);
            match db.add_subject(&session.email, Subject::new(name.clone(), rate)) {
                Ok(()) => {
                    info!("Subject '{name}' added at {rate}/hour by {}", session.email);
                    println!("✓ Added subject '{name}' at {rate:.2}/hour");
                }
                Err(e) => {
                    eprintln!("✗ Failed to add subject: {e}");
                    std::process::exit(1);
                }
            }
        }
        SubjectCommand::List => {
            match db.get_subjects() {
                Ok(subjects) if subjects.is_empty() => println!("No subjects defined yet"),
                Ok(subjects) => {
                    println!("{:<30} {:>12}", "Subject", "Rate/hour");
                    for subject in subjects {
                        println!(
                            "{:<30} {:>12.2}",
                            subject.subject_name, subject.pay_per_hour
                        );
                    }
                }
                Err(e) => {
                    eprintln!("✗ Failed to list subjects: {e}");
                    std::process::exit(1);
                }
            }
        }
        SubjectCommand::Remove { name, admin } => {
            let session = require_admin(db, &admin);
            match db.remove_subject(&session.email, &name) {
                Ok(()) => println!("✓ Removed subject '{name}'"),
                Err(e) => {
                    eprintln!("✗ Failed to remove subject: {e}");
                    std::process::exit(1);
                }
            }
        }
    }
}
