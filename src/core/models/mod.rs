//! Data models for `TutorTrack`

pub mod subject;
pub mod task;
pub mod teacher;
pub mod user;

pub use subject::Subject;
pub use task::Task;
pub use teacher::Teacher;
pub use user::RegisteredUser;
