//! Companion field rules
//!
//! Required and length checks that the word rule defers blank values to.

use super::results::Violation;
use super::validator::Validator;
use super::word::is_blank;

/// Rejects empty or whitespace-only values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredValidator {
    message: String,
}

impl RequiredValidator {
    pub fn new() -> Self {
        Self::with_message("must not be blank")
    }

    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for RequiredValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator<str> for RequiredValidator {
    type Error = Violation;

    fn validate(&self, data: &str) -> Result<(), Self::Error> {
        if is_blank(data) {
            Err(Violation::new(self.message.clone()))
        } else {
            Ok(())
        }
    }
}

/// Bounds the character count of a value.
///
/// Blank values pass, like the word rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LengthValidator {
    min: usize,
    max: usize,
    message: String,
}

impl LengthValidator {
    pub fn new(min: usize, max: usize) -> Self {
        Self::with_message(
            min,
            max,
            format!("length must be between {min} and {max} characters"),
        )
    }

    pub fn with_message(min: usize, max: usize, message: impl Into<String>) -> Self {
        Self {
            min,
            max,
            message: message.into(),
        }
    }
}

impl Validator<str> for LengthValidator {
    type Error = Violation;

    fn validate(&self, data: &str) -> Result<(), Self::Error> {
        if is_blank(data) {
            return Ok(());
        }

        let len = data.chars().count();
        if len < self.min || len > self.max {
            return Err(Violation::new(self.message.clone()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required() {
        let rule = RequiredValidator::with_message("Word cannot be blank");
        assert!(rule.validate("cat").is_ok());
        assert_eq!(
            rule.validate("  ").unwrap_err().message(),
            "Word cannot be blank"
        );
        assert!(RequiredValidator::default().validate("").is_err());
    }

    #[test]
    fn test_length_bounds() {
        let rule = LengthValidator::new(2, 4);
        assert!(rule.validate("ab").is_ok());
        assert!(rule.validate("abcd").is_ok());
        assert!(rule.validate("a").is_err());
        assert_eq!(
            rule.validate("abcde").unwrap_err().message(),
            "length must be between 2 and 4 characters"
        );
        assert!(rule.validate("").is_ok());
    }

    #[test]
    fn test_length_counts_chars() {
        let rule = LengthValidator::new(1, 3);
        assert!(rule.validate("éèê").is_ok());
    }
}
