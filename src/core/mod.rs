//! Core module for `TutorTrack`

pub mod auth;
pub mod config;
pub mod models;
pub mod report;
pub mod research;
pub mod store;
pub mod week;
