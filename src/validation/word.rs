//! Alphabetic word rule
//!
//! Accepts values made only of ASCII letters. Blank values are not this
//! rule's concern and pass; the required rule rejects them.

use log::debug;
use regex::Regex;
use std::sync::LazyLock;

use super::results::{ValidationOutcome, Violation};
use super::sanitize::sanitize_for_display;
use super::validator::Validator;

/// Pattern a non-blank word must match.
pub const VALID_WORD_PATTERN: &str = "^[A-Za-z]+$";

/// Default message of the word rule, used where the value is not echoed back.
pub const DEFAULT_MESSAGE: &str = "Word must contain only alphabetic characters (A-Z)";

/// Regex for a letters-only word.
pub(crate) static WORD_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(VALID_WORD_PATTERN).expect("fail to create the word pattern")
});

/// Returns `true` if the value is blank or consists only of ASCII letters.
pub fn is_alphabetic(value: &str) -> bool {
    is_blank(value) || WORD_PATTERN.is_match(value)
}

/// Validates a candidate word and builds the user-facing outcome.
pub fn validate(value: Option<&str>) -> ValidationOutcome {
    match value {
        None => ValidationOutcome::valid(),
        Some(value) => WordValidator.validate(value).into(),
    }
}

/// Builds the rejection message for an offending value.
pub fn rejection_message(value: &str) -> String {
    format!(
        "Word '{}' contains invalid characters. Only letters A-Z are allowed.",
        sanitize_for_display(Some(value))
    )
}

pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// A validator for words made of the letters A-Z, in either case.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WordValidator;

impl Validator<str> for WordValidator {
    type Error = Violation;

    fn validate(&self, data: &str) -> Result<(), Self::Error> {
        if is_alphabetic(data) {
            return Ok(());
        }

        debug!("Rejected word of {} chars", data.chars().count());
        Err(Violation::new(rejection_message(data)))
    }
}
