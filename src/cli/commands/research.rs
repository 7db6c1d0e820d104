//! Research assistant command handler

use crate::args::SessionArgs;
use tutor_track::config::Config;
use tutor_track::core::auth::login;
use tutor_track::core::research::ResearchClient;
use tutor_track::core::store::Database;

/// Handle the research subcommand
pub fn run(db: &Database, config: &Config, session_args: &SessionArgs, topic: &str) {
    if let Err(e) = login(db, &session_args.email, &session_args.password) {
        eprintln!("✗ Login failed: {e}");
        std::process::exit(1);
    }

    let client = match ResearchClient::new(&config.backend) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("✗ {e}");
            std::process::exit(1);
        }
    };

    match client.research(topic) {
        Ok(content) => println!("{content}"),
        Err(e) => {
            eprintln!("✗ {e}");
            std::process::exit(1);
        }
    }
}
