//! Teacher model

use crate::core::models::{Subject, Task};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A teacher account created by an administrator. Owns an ordered list of
/// subjects it can teach and the tasks logged against it.
///
/// Serialized with camelCase field names to stay compatible with the JSON
/// arrays the store holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Teacher {
    /// Unique teacher id (e.g., "TCH123456789")
    pub id: String,

    /// Full name
    pub name: String,

    /// Email address; tasks are keyed by it
    pub email: String,

    /// Phone number
    pub phone: String,

    /// Postal address
    pub address: String,

    /// Subjects this teacher can teach, in the order they were assigned
    pub subjects: Vec<Subject>,

    /// Generated login password
    pub password: String,

    /// Whether the teacher is currently active
    pub is_active: bool,

    /// Email of the administrator who created this teacher
    pub created_by: String,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Accumulated earnings, if tracked
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_earnings: Option<f64>,

    /// Last successful login, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_login: Option<DateTime<Utc>>,

    /// Tasks logged by this teacher
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl Teacher {
    /// Create a new active teacher with generated credentials.
    #[must_use]
    pub fn new(
        id: String,
        name: String,
        email: String,
        phone: String,
        address: String,
        subjects: Vec<Subject>,
        password: String,
        created_by: String,
    ) -> Self {
        Self {
            id,
            name,
            email,
            phone,
            address,
            subjects,
            password,
            is_active: true,
            created_by,
            created_at: Utc::now(),
            total_earnings: Some(0.0),
            last_login: None,
            tasks: Vec::new(),
        }
    }

    /// Append a task to this teacher's list.
    pub fn add_task(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Replace a task in place by id. Returns false when no task matches.
    pub fn update_task(&mut self, task: &Task) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == task.id) {
            Some(existing) => {
                *existing = task.clone();
                true
            }
            None => false,
        }
    }

    /// Remove a task by id. Returns false when no task matches.
    pub fn remove_task(&mut self, task_id: &str) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != task_id);
        self.tasks.len() < before
    }

    /// Look up one of this teacher's subjects by exact name.
    #[must_use]
    pub fn find_subject(&self, subject_name: &str) -> Option<&Subject> {
        self.subjects
            .iter()
            .find(|s| s.subject_name == subject_name)
    }
}
