//! JSON-backed data store
//!
//! Persistence is a small key/value layer: each well-known key maps to one
//! JSON file in the data directory holding a whole array of records. Reads
//! load the full array, writes replace it. [`Database`] wraps the raw store
//! with the record-level operations the rest of the crate uses.

use crate::core::models::{RegisteredUser, Subject, Task, Teacher};
use crate::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::error::Error;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Storage key for registered admin users
pub const USERS_KEY: &str = "registeredUsers";
/// Storage key for teacher records (tasks live on each teacher)
pub const TEACHERS_KEY: &str = "teachers";
/// Storage key for the global subject pay table
pub const SUBJECTS_KEY: &str = "subjects";

/// Errors raised by the store and the [`Database`] facade.
#[derive(Debug)]
pub enum StoreError {
    /// Filesystem failure while reading or writing a key
    Io(std::io::Error),
    /// A key's file held malformed JSON
    Json(serde_json::Error),
    /// A record with the same identity already exists
    Conflict(String),
    /// The requested record does not exist
    NotFound(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "storage I/O error: {e}"),
            Self::Json(e) => write!(f, "storage data error: {e}"),
            Self::Conflict(msg) => write!(f, "conflict: {msg}"),
            Self::NotFound(msg) => write!(f, "not found: {msg}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::Conflict(_) | Self::NotFound(_) => None,
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

/// Key/value store where each key is one JSON file of records.
#[derive(Debug, Clone)]
pub struct Store {
    root: PathBuf,
}

impl Store {
    /// Open a store rooted at `dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the directory cannot be created.
    pub fn open(dir: &Path) -> Result<Self, StoreError> {
        fs::create_dir_all(dir)?;
        Ok(Self {
            root: dir.to_path_buf(),
        })
    }

    fn file_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }

    /// Read the full record array stored under `key`.
    ///
    /// A missing file is an empty collection, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] on read failure and [`StoreError::Json`]
    /// when the file contents do not deserialize.
    pub fn read_key<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>, StoreError> {
        let path = self.file_for(key);
        if !path.exists() {
            debug!("Store key '{key}' has no file yet, treating as empty");
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Replace the record array stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Json`] on serialization failure and
    /// [`StoreError::Io`] on write failure.
    pub fn write_key<T: Serialize>(&self, key: &str, records: &[T]) -> Result<(), StoreError> {
        let path = self.file_for(key);
        let json = serde_json::to_string_pretty(records)?;
        fs::write(&path, json)?;
        Ok(())
    }
}

/// Record-level operations over the three well-known keys.
#[derive(Debug, Clone)]
pub struct Database {
    store: Store,
}

impl Database {
    /// Open the database in `dir`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the data directory cannot be created.
    pub fn open(dir: &Path) -> Result<Self, StoreError> {
        Ok(Self {
            store: Store::open(dir)?,
        })
    }

    // --- users ---

    /// All registered admin users.
    ///
    /// # Errors
    ///
    /// Propagates store read failures.
    pub fn get_users(&self) -> Result<Vec<RegisteredUser>, StoreError> {
        self.store.read_key(USERS_KEY)
    }

    /// Append a registered user record.
    ///
    /// # Errors
    ///
    /// Propagates store failures.
    pub fn add_user(&self, user: RegisteredUser) -> Result<(), StoreError> {
        let mut users = self.get_users()?;
        users.push(user);
        self.store.write_key(USERS_KEY, &users)
    }

    // --- subjects ---

    /// The global subject pay table.
    ///
    /// # Errors
    ///
    /// Propagates store read failures.
    pub fn get_subjects(&self) -> Result<Vec<Subject>, StoreError> {
        self.store.read_key(SUBJECTS_KEY)
    }

    /// Add a subject to the global table and to the owning user's record.
    ///
    /// The subject is always added to the global table; the per-user copy is
    /// only written when a user with `email` exists.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Conflict`] when the global table already has a
    /// subject with the same name.
    pub fn add_subject(&self, email: &str, subject: Subject) -> Result<(), StoreError> {
        let mut subjects = self.get_subjects()?;
        if subjects
            .iter()
            .any(|s| s.subject_name.eq_ignore_ascii_case(&subject.subject_name))
        {
            return Err(StoreError::Conflict(format!(
                "subject '{}' already exists",
                subject.subject_name
            )));
        }
        subjects.push(subject.clone());
        self.store.write_key(SUBJECTS_KEY, &subjects)?;

        let mut users = self.get_users()?;
        if let Some(user) = users.iter_mut().find(|u| u.email == email) {
            user.subjects.push(subject);
            self.store.write_key(USERS_KEY, &users)?;
        }
        Ok(())
    }

    /// Remove a subject by name from the global table and the user's record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when no subject with `name` exists.
    pub fn remove_subject(&self, email: &str, name: &str) -> Result<(), StoreError> {
        let mut subjects = self.get_subjects()?;
        let before = subjects.len();
        subjects.retain(|s| s.subject_name != name);
        if subjects.len() == before {
            return Err(StoreError::NotFound(format!("subject '{name}'")));
        }
        self.store.write_key(SUBJECTS_KEY, &subjects)?;

        let mut users = self.get_users()?;
        if let Some(user) = users.iter_mut().find(|u| u.email == email) {
            user.subjects.retain(|s| s.subject_name != name);
            self.store.write_key(USERS_KEY, &users)?;
        }
        Ok(())
    }

    // --- teachers ---

    /// All teacher records.
    ///
    /// # Errors
    ///
    /// Propagates store read failures.
    pub fn get_teachers(&self) -> Result<Vec<Teacher>, StoreError> {
        self.store.read_key(TEACHERS_KEY)
    }

    /// Find a teacher by email or id.
    ///
    /// # Errors
    ///
    /// Propagates store read failures.
    pub fn find_teacher(&self, key: &str) -> Result<Option<Teacher>, StoreError> {
        Ok(self
            .get_teachers()?
            .into_iter()
            .find(|t| t.email == key || t.id == key))
    }

    /// Append a teacher record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Conflict`] when a teacher with the same email
    /// already exists.
    pub fn add_teacher(&self, teacher: Teacher) -> Result<(), StoreError> {
        let mut teachers = self.get_teachers()?;
        if teachers.iter().any(|t| t.email == teacher.email) {
            return Err(StoreError::Conflict(format!(
                "teacher with email '{}' already exists",
                teacher.email
            )));
        }
        teachers.push(teacher);
        self.store.write_key(TEACHERS_KEY, &teachers)
    }

    /// Replace the stored record for a teacher, matched by id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when no teacher with that id exists.
    pub fn update_teacher(&self, teacher: &Teacher) -> Result<(), StoreError> {
        let mut teachers = self.get_teachers()?;
        match teachers.iter_mut().find(|t| t.id == teacher.id) {
            Some(slot) => {
                *slot = teacher.clone();
                self.store.write_key(TEACHERS_KEY, &teachers)
            }
            None => Err(StoreError::NotFound(format!("teacher '{}'", teacher.id))),
        }
    }

    /// Remove a teacher by email or id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when no matching teacher exists.
    pub fn remove_teacher(&self, key: &str) -> Result<(), StoreError> {
        let mut teachers = self.get_teachers()?;
        let before = teachers.len();
        teachers.retain(|t| t.email != key && t.id != key);
        if teachers.len() == before {
            return Err(StoreError::NotFound(format!("teacher '{key}'")));
        }
        self.store.write_key(TEACHERS_KEY, &teachers)
    }

    // --- tasks (stored on the teacher record) ---

    /// Add a task to a teacher's list.
    ///
    /// Duplicate sessions are rejected: same title, date, and start time.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when the teacher does not exist and
    /// [`StoreError::Conflict`] for a duplicate task.
    pub fn add_task_for_teacher(&self, key: &str, task: Task) -> Result<(), StoreError> {
        let mut teachers = self.get_teachers()?;
        let teacher = teachers
            .iter_mut()
            .find(|t| t.email == key || t.id == key)
            .ok_or_else(|| StoreError::NotFound(format!("teacher '{key}'")))?;
        let duplicate = teacher.tasks.iter().any(|t| {
            t.title == task.title && t.date == task.date && t.start_time == task.start_time
        });
        if duplicate {
            return Err(StoreError::Conflict(format!(
                "task '{}' on {} at {} already exists",
                task.title, task.date, task.start_time
            )));
        }
        teacher.add_task(task);
        self.store.write_key(TEACHERS_KEY, &teachers)
    }

    /// Tasks for a teacher.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when the teacher does not exist.
    pub fn get_tasks_for_teacher(&self, key: &str) -> Result<Vec<Task>, StoreError> {
        self.find_teacher(key)?
            .map(|t| t.tasks)
            .ok_or_else(|| StoreError::NotFound(format!("teacher '{key}'")))
    }

    /// Replace a task on a teacher's list, matched by task id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when the teacher or task is missing.
    pub fn update_task_for_teacher(&self, key: &str, task: &Task) -> Result<(), StoreError> {
        let mut teachers = self.get_teachers()?;
        let teacher = teachers
            .iter_mut()
            .find(|t| t.email == key || t.id == key)
            .ok_or_else(|| StoreError::NotFound(format!("teacher '{key}'")))?;
        if !teacher.update_task(task) {
            return Err(StoreError::NotFound(format!("task '{}'", task.id)));
        }
        self.store.write_key(TEACHERS_KEY, &teachers)
    }

    /// Remove a task from a teacher's list by task id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when the teacher or task is missing.
    pub fn remove_task_for_teacher(&self, key: &str, task_id: &str) -> Result<(), StoreError> {
        let mut teachers = self.get_teachers()?;
        let teacher = teachers
            .iter_mut()
            .find(|t| t.email == key || t.id == key)
            .ok_or_else(|| StoreError::NotFound(format!("teacher '{key}'")))?;
        if !teacher.remove_task(task_id) {
            return Err(StoreError::NotFound(format!("task '{task_id}'")));
        }
        self.store.write_key(TEACHERS_KEY, &teachers)
    }

    /// Subjects assigned to a teacher, matched by email or id.
    ///
    /// This is the pay table weekly summaries resolve rates against; the
    /// global table only seeds it at teacher creation.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when the teacher does not exist.
    pub fn get_subjects_for_teacher(&self, key: &str) -> Result<Vec<Subject>, StoreError> {
        self.find_teacher(key)?
            .map(|t| t.subjects)
            .ok_or_else(|| StoreError::NotFound(format!("teacher '{key}'")))
    }
}
