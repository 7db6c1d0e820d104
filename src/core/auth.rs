//! Accounts and sign-in
//!
//! Administrators self-register with an email and password; teachers get a
//! generated id and password when an administrator creates them. A login
//! resolves to a [`Session`] naming who is acting and in which role, and
//! every privileged operation takes that session instead of consulting any
//! global logged-in state.

use crate::core::models::{RegisteredUser, Teacher};
use crate::core::store::{Database, StoreError};
use crate::info;
use chrono::Utc;
use rand::Rng;
use std::error::Error;
use std::fmt;

const MIN_PASSWORD_LEN: usize = 6;
const GENERATED_PASSWORD_LEN: usize = 8;
const PASSWORD_CHARSET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789@#$%";

/// Who a session is acting as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Administrator, may manage subjects, teachers, and view any summary
    Admin,
    /// Teacher, may manage their own tasks and view their own summary
    Teacher,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Admin => write!(f, "admin"),
            Self::Teacher => write!(f, "teacher"),
        }
    }
}

/// An authenticated identity for the duration of one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Email of the authenticated account
    pub email: String,
    /// Role the credentials resolved to
    pub role: Role,
}

/// Errors raised during registration and login.
#[derive(Debug)]
pub enum AuthError {
    /// An account with this email is already registered
    DuplicateEmail(String),
    /// Password shorter than the required minimum
    WeakPassword,
    /// No account matched the supplied credentials
    InvalidCredentials,
    /// Underlying storage failure
    Store(StoreError),
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateEmail(email) => {
                write!(f, "an account with email '{email}' already exists")
            }
            Self::WeakPassword => {
                write!(f, "password must be at least {MIN_PASSWORD_LEN} characters")
            }
            Self::InvalidCredentials => write!(f, "invalid email or password"),
            Self::Store(e) => write!(f, "{e}"),
        }
    }
}

impl Error for AuthError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(e) => Some(e),
            _ => None,
        }
    }
}

impl From<StoreError> for AuthError {
    fn from(e: StoreError) -> Self {
        Self::Store(e)
    }
}

/// Register a new administrator account.
///
/// # Errors
///
/// Returns [`AuthError::WeakPassword`] for passwords under 6 characters and
/// [`AuthError::DuplicateEmail`] when the email is already registered.
pub fn register(db: &Database, email: &str, password: &str) -> Result<(), AuthError> {
    if password.len() < MIN_PASSWORD_LEN {
        return Err(AuthError::WeakPassword);
    }
    let users = db.get_users()?;
    if users.iter().any(|u| u.email == email) {
        return Err(AuthError::DuplicateEmail(email.to_string()));
    }
    db.add_user(RegisteredUser::new(email.to_string(), password.to_string()))?;
    info!("Registered new admin account '{email}'");
    Ok(())
}

/// Authenticate against admin accounts first, then teacher accounts.
///
/// Teachers may sign in with either their email or their generated id. A
/// successful teacher login records the login time on the teacher record.
///
/// # Errors
///
/// Returns [`AuthError::InvalidCredentials`] when nothing matches.
pub fn login(db: &Database, key: &str, password: &str) -> Result<Session, AuthError> {
    let users = db.get_users()?;
    if users.iter().any(|u| u.email == key && u.password == password) {
        return Ok(Session {
            email: key.to_string(),
            role: Role::Admin,
        });
    }

    let teachers = db.get_teachers()?;
    let matched = teachers
        .iter()
        .find(|t| (t.email == key || t.id == key) && t.password == password);
    if let Some(teacher) = matched {
        let mut refreshed = teacher.clone();
        refreshed.last_login = Some(Utc::now());
        db.update_teacher(&refreshed)?;
        return Ok(Session {
            email: refreshed.email,
            role: Role::Teacher,
        });
    }

    Err(AuthError::InvalidCredentials)
}

/// Generate a teacher id of the form `TCH` + six timestamp digits + three
/// random digits.
#[must_use]
pub fn generate_teacher_id() -> String {
    let stamp = Utc::now().timestamp_millis().unsigned_abs() % 1_000_000;
    let salt: u32 = rand::thread_rng().gen_range(0..1000);
    format!("TCH{stamp:06}{salt:03}")
}

/// Generate an 8-character password from letters, digits, and `@#$%`.
#[must_use]
pub fn generate_password() -> String {
    let mut rng = rand::thread_rng();
    (0..GENERATED_PASSWORD_LEN)
        .map(|_| {
            let idx = rng.gen_range(0..PASSWORD_CHARSET.len());
            PASSWORD_CHARSET[idx] as char
        })
        .collect()
}

/// Resolve the teacher record a session or explicit target refers to.
///
/// # Errors
///
/// Returns [`AuthError::Store`] wrapping `NotFound` when the teacher does
/// not exist.
pub fn resolve_teacher(db: &Database, key: &str) -> Result<Teacher, AuthError> {
    db.find_teacher(key)?
        .ok_or_else(|| AuthError::Store(StoreError::NotFound(format!("teacher '{key}'"))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Subject;
    use tempfile::TempDir;

    fn new_db() -> (TempDir, Database) {
        let dir = TempDir::new().unwrap();
        let db = Database::open(dir.path()).unwrap();
        (dir, db)
    }

    fn add_teacher(db: &Database) -> Teacher {
        let teacher = Teacher::new(
            "TCH123456001".to_string(),
            "Ada Lovelace".to_string(),
            "ada@example.com".to_string(),
            "555-0100".to_string(),
            "12 Analytical Way".to_string(),
            vec![Subject::new("Math".to_string(), 500.0)],
            "s3cret!@".to_string(),
            "admin@example.com".to_string(),
        );
        db.add_teacher(teacher.clone()).unwrap();
        teacher
    }

    #[test]
    fn register_then_login_as_admin() {
        let (_dir, db) = new_db();
        register(&db, "admin@example.com", "hunter22").unwrap();

        let session = login(&db, "admin@example.com", "hunter22").unwrap();
        assert_eq!(session.role, Role::Admin);
        assert_eq!(session.email, "admin@example.com");
    }

    #[test]
    fn short_password_is_rejected() {
        let (_dir, db) = new_db();
        let err = register(&db, "admin@example.com", "tiny").unwrap_err();
        assert!(matches!(err, AuthError::WeakPassword));
    }

    #[test]
    fn duplicate_email_is_rejected() {
        let (_dir, db) = new_db();
        register(&db, "admin@example.com", "hunter22").unwrap();
        let err = register(&db, "admin@example.com", "another1").unwrap_err();
        assert!(matches!(err, AuthError::DuplicateEmail(_)));
    }

    #[test]
    fn teacher_logs_in_with_email_or_id() {
        let (_dir, db) = new_db();
        let teacher = add_teacher(&db);

        let by_email = login(&db, &teacher.email, &teacher.password).unwrap();
        assert_eq!(by_email.role, Role::Teacher);

        let by_id = login(&db, &teacher.id, &teacher.password).unwrap();
        assert_eq!(by_id.role, Role::Teacher);
        assert_eq!(by_id.email, teacher.email);
    }

    #[test]
    fn teacher_login_records_last_login() {
        let (_dir, db) = new_db();
        let teacher = add_teacher(&db);
        assert!(teacher.last_login.is_none());

        login(&db, &teacher.email, &teacher.password).unwrap();
        let stored = db.find_teacher(&teacher.id).unwrap().unwrap();
        assert!(stored.last_login.is_some());
    }

    #[test]
    fn wrong_password_is_invalid_credentials() {
        let (_dir, db) = new_db();
        add_teacher(&db);
        let err = login(&db, "ada@example.com", "wrong").unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
    }

    #[test]
    fn generated_ids_have_the_expected_shape() {
        let id = generate_teacher_id();
        assert!(id.starts_with("TCH"));
        assert_eq!(id.len(), 12);
        assert!(id[3..].chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn generated_passwords_use_the_charset() {
        let password = generate_password();
        assert_eq!(password.len(), 8);
        assert!(password
            .bytes()
            .all(|b| PASSWORD_CHARSET.contains(&b)));
    }
}
