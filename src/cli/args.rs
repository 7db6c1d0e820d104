//! CLI argument definitions for `TutorTrack`

use chrono::NaiveDate;
use clap::{builder::BoolishValueParser, Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use tutor_track::config::ConfigOverrides;
use tutor_track::logger::Level;

/// CLI log level argument
///
/// Represents log levels that can be passed via CLI arguments. Converts to lowercase
/// strings for config storage and to `logger::Level` for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

/// Filter applied when listing tasks
#[derive(Copy, Clone, Debug, Default, ValueEnum, PartialEq, Eq)]
pub enum TaskFilter {
    /// All tasks
    #[default]
    All,
    /// Tasks not yet completed
    Pending,
    /// Completed tasks
    Done,
}

/// Credentials for signing in as either role
#[derive(Debug, Args)]
pub struct SessionArgs {
    /// Account email (or teacher id)
    #[arg(long, value_name = "EMAIL")]
    pub email: String,

    /// Account password
    #[arg(long, value_name = "PASSWORD")]
    pub password: String,
}

/// Administrator credentials for privileged commands
#[derive(Debug, Args)]
pub struct AdminArgs {
    /// Administrator email
    #[arg(long = "admin-email", value_name = "EMAIL")]
    pub admin_email: String,

    /// Administrator password
    #[arg(long = "admin-password", value_name = "PASSWORD")]
    pub admin_password: String,
}

/// Teacher credentials for task commands
#[derive(Debug, Args)]
pub struct TeacherAuthArgs {
    /// Teacher email or generated id
    #[arg(long = "teacher-email", value_name = "EMAIL_OR_ID")]
    pub teacher_email: String,

    /// Teacher password
    #[arg(long = "teacher-password", value_name = "PASSWORD")]
    pub teacher_password: String,
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `endpoint`, `data_dir`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum SubjectCommand {
    /// Add a subject with its hourly pay rate.
    Add {
        /// Subject name (case-sensitive)
        #[arg(value_name = "NAME")]
        name: String,

        /// Pay per hour for this subject
        #[arg(value_name = "RATE")]
        rate: f64,

        #[command(flatten)]
        admin: AdminArgs,
    },
    /// List all subjects and their pay rates.
    List,
    /// Remove a subject by name.
    Remove {
        /// Subject name to remove
        #[arg(value_name = "NAME")]
        name: String,

        #[command(flatten)]
        admin: AdminArgs,
    },
}

#[derive(Debug, Subcommand)]
pub enum TeacherCommand {
    /// Create a teacher account with generated id and password.
    Add {
        /// Teacher's full name
        #[arg(long, value_name = "NAME")]
        name: String,

        /// Teacher's email address
        #[arg(long, value_name = "EMAIL")]
        email: String,

        /// Teacher's phone number
        #[arg(long, value_name = "PHONE")]
        phone: String,

        /// Teacher's postal address
        #[arg(long, value_name = "ADDRESS")]
        address: String,

        /// Subjects this teacher can teach (must already exist)
        #[arg(long = "subject", value_name = "NAME", num_args = 1..)]
        subjects: Vec<String>,

        #[command(flatten)]
        admin: AdminArgs,
    },
    /// List all teacher accounts.
    List {
        #[command(flatten)]
        admin: AdminArgs,
    },
    /// Remove a teacher account by email or id.
    Remove {
        /// Teacher email or id
        #[arg(value_name = "EMAIL_OR_ID")]
        key: String,

        #[command(flatten)]
        admin: AdminArgs,
    },
}

#[derive(Debug, Subcommand)]
pub enum TaskCommand {
    /// Log a tutoring session.
    Add {
        /// Session title (3-100 characters)
        #[arg(long, value_name = "TITLE")]
        title: String,

        /// Session description (10-500 characters)
        #[arg(long, value_name = "TEXT")]
        description: String,

        /// Session date (YYYY-MM-DD)
        #[arg(long, value_name = "DATE")]
        date: NaiveDate,

        /// Start time (HH:MM, 24-hour)
        #[arg(long = "start", value_name = "TIME")]
        start_time: String,

        /// End time (HH:MM, 24-hour)
        #[arg(long = "end", value_name = "TIME")]
        end_time: String,

        /// Subject taught in this session
        #[arg(long, value_name = "NAME")]
        subject: Option<String>,

        #[command(flatten)]
        auth: TeacherAuthArgs,
    },
    /// List logged sessions.
    List {
        /// Which tasks to show
        #[arg(long, value_enum, default_value_t = TaskFilter::All)]
        filter: TaskFilter,

        #[command(flatten)]
        auth: TeacherAuthArgs,
    },
    /// Mark a session as completed.
    Done {
        /// Task id
        #[arg(value_name = "ID")]
        id: String,

        #[command(flatten)]
        auth: TeacherAuthArgs,
    },
    /// Remove a session by id.
    Remove {
        /// Task id
        #[arg(value_name = "ID")]
        id: String,

        #[command(flatten)]
        auth: TeacherAuthArgs,
    },
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Register a new administrator account.
    Register {
        #[command(flatten)]
        session: SessionArgs,
    },
    /// Verify credentials and show the resolved account role.
    Login {
        #[command(flatten)]
        session: SessionArgs,
    },
    /// Manage the subject pay table (admin only).
    Subject {
        #[command(subcommand)]
        subcommand: SubjectCommand,
    },
    /// Manage teacher accounts (admin only).
    Teacher {
        #[command(subcommand)]
        subcommand: TeacherCommand,
    },
    /// Manage tutoring sessions (teacher only).
    Task {
        #[command(subcommand)]
        subcommand: TaskCommand,
    },
    /// Show a weekly hours and earnings summary.
    ///
    /// Teachers see their own week; administrators pass --teacher to pick one.
    Summary {
        /// Teacher email or id (admin only; teachers see themselves)
        #[arg(long, value_name = "EMAIL_OR_ID")]
        teacher: Option<String>,

        /// Any date inside the week to summarize (defaults to today)
        #[arg(long, value_name = "DATE")]
        date: Option<NaiveDate>,

        /// Also write a report in the given format (markdown, html)
        #[arg(long, value_name = "FORMAT")]
        report: Option<String>,

        /// Report output path (defaults to the configured reports directory)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        #[command(flatten)]
        session: SessionArgs,
    },
    /// Ask the research assistant backend about a topic.
    Research {
        /// Topic to research
        #[arg(value_name = "TOPIC")]
        topic: String,

        #[command(flatten)]
        session: SessionArgs,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "tutortrack",
    about = "TutorTrack command-line interface",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level (stored in config file)
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config backend endpoint
    #[arg(long = "config-endpoint", value_name = "URL")]
    pub config_endpoint: Option<String>,

    /// Override config backend endpoint (short form)
    #[arg(long = "endpoint", value_name = "URL")]
    pub endpoint: Option<String>,

    /// Override config backend token
    #[arg(long = "config-token", value_name = "TOKEN")]
    pub config_token: Option<String>,

    /// Override config backend token (short form)
    #[arg(long = "token", value_name = "TOKEN")]
    pub token: Option<String>,

    /// Override config data directory
    #[arg(long = "config-data-dir", value_name = "DIR")]
    pub config_data_dir: Option<PathBuf>,

    /// Override config data directory (short form)
    #[arg(long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Override config reports directory
    #[arg(long = "config-reports-dir", value_name = "DIR")]
    pub config_reports_dir: Option<PathBuf>,

    /// Override config reports directory (short form)
    #[arg(long = "reports-dir", value_name = "DIR")]
    pub reports_dir: Option<PathBuf>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// Transforms CLI arguments into a `ConfigOverrides` struct that can be applied to
    /// the loaded configuration. Short-form flags (e.g., `--token`) take precedence
    /// over long-form flags (e.g., `--config-token`) when both are provided.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string().to_lowercase()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            endpoint: self
                .endpoint
                .clone()
                .or_else(|| self.config_endpoint.clone()),
            token: self.token.clone().or_else(|| self.config_token.clone()),
            data_dir: self
                .data_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string())
                .or_else(|| {
                    self.config_data_dir
                        .as_ref()
                        .map(|p| p.to_string_lossy().to_string())
                }),
            reports_dir: self
                .reports_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string())
                .or_else(|| {
                    self.config_reports_dir
                        .as_ref()
                        .map(|p| p.to_string_lossy().to_string())
                }),
        }
    }
}
