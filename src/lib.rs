//! Shared library for `TutorTrack`
//! Contains the tutoring-management core used by the CLI binary.

pub mod core;
pub mod logger;

pub use crate::core::config;

/// Returns the current version of the `TutorTrack` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
