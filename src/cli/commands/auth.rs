//! Register and login command handlers

use crate::args::SessionArgs;
use tutor_track::core::auth::{login, register};
use tutor_track::core::store::Database;

/// Handle the register subcommand
pub fn run_register(db: &Database, session: &SessionArgs) {
    match register(db, &session.email, &session.password) {
        Ok(()) => println!("✓ Registered account '{}'", session.email),
        Err(e) => {
            eprintln!("✗ Registration failed: {e}");
            std::process::exit(1);
        }
    }
}

/// Handle the login subcommand
pub fn run_login(db: &Database, session: &SessionArgs) {
    match login(db, &session.email, &session.password) {
        Ok(resolved) => println!("✓ Logged in as {} ({})", resolved.email, resolved.role),
        Err(e) => {
            eprintln!("✗ Login failed: {e}");
            std::process::exit(1);
        }
    }
}
