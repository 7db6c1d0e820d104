//! Registered administrator account model

use crate::core::models::Subject;
use serde::{Deserialize, Serialize};

/// A registered administrator account. Administrators own the subject
/// catalog entries they create.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredUser {
    /// Login email; unique across registered users
    pub email: String,

    /// Login password (stored as provided; hardening is out of scope)
    pub password: String,

    /// Subjects this administrator has added to the catalog
    #[serde(default)]
    pub subjects: Vec<Subject>,
}

impl RegisteredUser {
    /// Create a new registered user with no subjects.
    #[must_use]
    pub const fn new(email: String, password: String) -> Self {
        Self {
            email,
            password,
            subjects: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_creation() {
        let user = RegisteredUser::new("admin@example.com".to_string(), "secret1".to_string());

        assert_eq!(user.email, "admin@example.com");
        assert!(user.subjects.is_empty());
    }

    #[test]
    fn test_user_parses_without_subjects_field() {
        let json = r#"{"email":"a@b.com","password":"secret1"}"#;
        let user: RegisteredUser = serde_json::from_str(json).expect("parse user");

        assert!(user.subjects.is_empty());
    }
}
