//! CLI command handlers for `TutorTrack`.
//!
//! Each command is implemented in its own submodule. The helpers here cover
//! the shared needs of every handler: opening the data store and resolving
//! credentials into a session with the right role.

pub mod auth;
pub mod config;
pub mod research;
pub mod subject;
pub mod summary;
pub mod task;
pub mod teacher;

use crate::args::{AdminArgs, TeacherAuthArgs};
use std::path::Path;
use tutor_track::core::auth::{login, Role, Session};
use tutor_track::core::store::Database;
use tutor_track::error;

/// Open the database in the configured data directory, exiting on failure.
pub fn open_database(data_dir: &str) -> Database {
    match Database::open(Path::new(data_dir)) {
        Ok(db) => db,
        Err(e) => {
            error!("Cannot open data store in '{data_dir}': {e}");
            eprintln!("✗ Cannot open data store: {e}");
            std::process::exit(1);
        }
    }
}

/// Authenticate admin credentials, exiting unless they resolve to an admin.
pub fn require_admin(db: &Database, admin: &AdminArgs) -> Session {
    match login(db, &admin.admin_email, &admin.admin_password) {
        Ok(session) if session.role == Role::Admin => session,
        Ok(_) => {
            eprintln!("✗ This command requires an administrator account");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("✗ Login failed: {e}");
            std::process::exit(1);
        }
    }
}

/// Authenticate teacher credentials, exiting unless they resolve to a teacher.
pub fn require_teacher(db: &Database, auth: &TeacherAuthArgs) -> Session {
    match login(db, &auth.teacher_email, &auth.teacher_password) {
        Ok(session) if session.role == Role::Teacher => session,
        Ok(_) => {
            eprintln!("✗ This command requires a teacher account");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("✗ Login failed: {e}");
            std::process::exit(1);
        }
    }
}
