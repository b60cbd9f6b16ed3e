//! Error reports
//!
//! The body handed to the caller when a request is rejected.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::error::handlers::{BAD_REQUEST, VALIDATION_ERROR, error_code, handle_error};
use crate::error::types::InputError;
use crate::validation::{FieldViolation, sanitize_error_message};

/// Standard error report structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorReport {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<BTreeMap<String, String>>,
    pub status: u16,
}

impl ErrorReport {
    /// Builds a report from field violations. Only the first message of a
    /// field is kept.
    pub fn from_violations(violations: &[FieldViolation]) -> Self {
        let mut details = BTreeMap::new();
        for violation in violations {
            details
                .entry(violation.field.clone())
                .or_insert_with(|| sanitize_error_message(Some(&violation.message)));
        }

        Self {
            error: VALIDATION_ERROR.to_string(),
            message: "Invalid input provided".to_string(),
            details: Some(details),
            status: BAD_REQUEST,
        }
    }

    /// Builds a report from a rejected request parameter.
    pub fn from_input_error(err: &InputError) -> Self {
        handle_error(err);

        Self {
            error: error_code(err).to_string(),
            message: sanitize_error_message(Some(&err.to_string())),
            details: None,
            status: BAD_REQUEST,
        }
    }

    /// Message recorded for a field, if any.
    pub fn detail(&self, field: &str) -> Option<&str> {
        self.details.as_ref()?.get(field).map(String::as_str)
    }
}

impl From<&InputError> for ErrorReport {
    fn from(err: &InputError) -> Self {
        Self::from_input_error(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::Violation;

    #[test]
    fn test_keeps_first_violation_per_field() {
        let violations = vec![
            FieldViolation::new("word", Violation::new("Word must be between 1 and 15 characters")),
            FieldViolation::new("word", Violation::new("second message")),
            FieldViolation::new("difficulty", Violation::new("Difficulty\nmust be set")),
        ];
        let report = ErrorReport::from_violations(&violations);
        assert_eq!(report.error, "VALIDATION_ERROR");
        assert_eq!(report.message, "Invalid input provided");
        assert_eq!(report.status, 400);
        assert_eq!(
            report.detail("word"),
            Some("Word must be between 1 and 15 characters")
        );
        assert_eq!(report.detail("difficulty"), Some("Difficulty must be set"));
    }

    #[test]
    fn test_input_error_report() {
        let report = ErrorReport::from(&InputError::LengthMismatch);
        assert_eq!(report.error, "INVALID_ARGUMENT");
        assert_eq!(
            report.message,
            "Positions and special tiles lists must have the same length"
        );
        assert!(report.details.is_none());
    }

    #[test]
    fn test_serializes_without_empty_details() {
        let report = ErrorReport::from_input_error(&InputError::EmptyWord);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "error": "INVALID_ARGUMENT",
                "message": "Word cannot be empty",
                "status": 400
            })
        );
    }
}
