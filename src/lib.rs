pub mod config;
pub mod error;
pub mod input;
pub mod utils;
pub mod validation;

pub use config::GuardConfig;
pub use error::{ErrorReport, InputError};
pub use input::InputRules;
pub use validation::{
    ValidationOutcome, ValidationPipeline, is_alphabetic, sanitize_for_display, validate,
};
