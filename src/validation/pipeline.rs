//! Validation pipeline
//!
//! Holds the rules registered for each field and runs them against incoming
//! values. Rules run in registration order and every failing rule reports a
//! violation.

use log::debug;
use std::fmt;

use super::results::{FieldViolation, Violation};
use super::rules::{LengthValidator, RequiredValidator};
use super::validator::Validator;
use super::word::WordValidator;

/// Maximum length of a word in a scoring request.
pub const MAX_REQUEST_WORD_LENGTH: usize = 15;

type Rule = Box<dyn Validator<str, Error = Violation> + Send + Sync>;

/// Field rules registered by name.
#[derive(Default)]
pub struct ValidationPipeline {
    rules: Vec<(String, Rule)>,
}

impl ValidationPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a rule for a field.
    pub fn register<V>(mut self, field: impl Into<String>, validator: V) -> Self
    where
        V: Validator<str, Error = Violation> + Send + Sync + 'static,
    {
        self.rules.push((field.into(), Box::new(validator)));
        self
    }

    /// Number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Runs every rule registered for `field`. An absent value is checked as
    /// an empty string.
    pub fn validate_field(&self, field: &str, value: Option<&str>) -> Vec<FieldViolation> {
        let value = value.unwrap_or_default();

        self.rules
            .iter()
            .filter(|(name, _)| name == field)
            .filter_map(|(name, rule)| rule.validate(value).err().map(|v| (name, v)))
            .map(|(name, violation)| {
                debug!("Field '{}' rejected", name);
                FieldViolation::new(name.as_str(), violation)
            })
            .collect()
    }

    /// Validates a set of field values. Fields without rules are ignored.
    pub fn validate<'a, I>(&self, values: I) -> Result<(), Vec<FieldViolation>>
    where
        I: IntoIterator<Item = (&'a str, Option<&'a str>)>,
    {
        let violations: Vec<FieldViolation> = values
            .into_iter()
            .flat_map(|(field, value)| self.validate_field(field, value))
            .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl fmt::Debug for ValidationPipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationPipeline")
            .field(
                "fields",
                &self.rules.iter().map(|(name, _)| name).collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// Rules for the `word` field of a scoring request.
pub fn word_pipeline() -> ValidationPipeline {
    ValidationPipeline::new()
        .register("word", RequiredValidator::with_message("Word cannot be blank"))
        .register(
            "word",
            LengthValidator::with_message(
                1,
                MAX_REQUEST_WORD_LENGTH,
                "Word must be between 1 and 15 characters",
            ),
        )
        .register("word", WordValidator)
}
