//! Validation result types
//!
//! Defines the values returned by validators and by the pipeline.

use serde::Serialize;
use std::fmt;

/// Outcome of validating a single value.
///
/// The message is only present when the value was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationOutcome {
    pub valid: bool,
    pub message: Option<String>,
}

impl ValidationOutcome {
    /// An accepted value.
    pub fn valid() -> Self {
        Self {
            valid: true,
            message: None,
        }
    }

    /// A rejected value with the message to show to the user.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: Some(message.into()),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl From<Result<(), Violation>> for ValidationOutcome {
    fn from(result: Result<(), Violation>) -> Self {
        match result {
            Ok(()) => Self::valid(),
            Err(violation) => Self::invalid(violation.message),
        }
    }
}

/// A failed validation rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    message: String,
}

impl Violation {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for Violation {}

/// A violation attached to the field it was raised for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, violation: Violation) -> Self {
        Self {
            field: field.into(),
            message: violation.message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_from_result() {
        let ok: ValidationOutcome = Ok(()).into();
        assert!(ok.is_valid());
        assert_eq!(ok.message(), None);

        let err: ValidationOutcome = Err(Violation::new("bad value")).into();
        assert!(!err.is_valid());
        assert_eq!(err.message(), Some("bad value"));
    }

    #[test]
    fn test_field_violation_takes_message() {
        let fv = FieldViolation::new("word", Violation::new("Word cannot be blank"));
        assert_eq!(fv.field, "word");
        assert_eq!(fv.message, "Word cannot be blank");
    }
}
