//! Field validation
//!
//! Validator trait, field rules, display sanitization and the pipeline that
//! runs registered rules per field.

pub mod pipeline;
pub mod results;
pub mod rules;
pub mod sanitize;
pub mod validator;
pub mod word;

pub use pipeline::{ValidationPipeline, word_pipeline};
pub use results::{FieldViolation, ValidationOutcome, Violation};
pub use rules::{LengthValidator, RequiredValidator};
pub use sanitize::{sanitize_error_message, sanitize_for_display, sanitize_input};
pub use validator::Validator;
pub use word::{WordValidator, is_alphabetic, validate};
