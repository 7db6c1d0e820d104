//! Subject model

use serde::{Deserialize, Serialize};

/// A named pay-rate category owned by an administrator's catalog or by a
/// teacher. Names are unique per owner; matching is case-sensitive at
/// aggregation time.
///
/// Serialized with camelCase field names to stay compatible with the JSON
/// arrays the store holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    /// Subject name (e.g., "Math")
    pub subject_name: String,

    /// Hourly pay rate; non-negative
    pub pay_per_hour: f64,
}

impl Subject {
    /// Create a new subject
    #[must_use]
    pub const fn new(subject_name: String, pay_per_hour: f64) -> Self {
        Self {
            subject_name,
            pay_per_hour,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subject_creation() {
        let subject = Subject::new("Math".to_string(), 500.0);

        assert_eq!(subject.subject_name, "Math");
        assert!((subject.pay_per_hour - 500.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_subject_json_uses_camel_case() {
        let subject = Subject::new("Physics".to_string(), 550.0);
        let json = serde_json::to_string(&subject).expect("serialize subject");

        assert!(json.contains("\"subjectName\""));
        assert!(json.contains("\"payPerHour\""));
    }

    #[test]
    fn test_subject_roundtrip_from_wire_format() {
        let json = r#"{"subjectName":"Chemistry","payPerHour":450}"#;
        let subject: Subject = serde_json::from_str(json).expect("parse subject");

        assert_eq!(subject.subject_name, "Chemistry");
        assert!((subject.pay_per_hour - 450.0).abs() < f64::EPSILON);
    }
}
