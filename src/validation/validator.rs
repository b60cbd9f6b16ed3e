//! Validator trait
//!
//! Every field rule implements [`Validator`]. Rules are registered explicitly
//! on a [`ValidationPipeline`](super::ValidationPipeline) instead of being
//! discovered from field metadata.

/// A rule that checks a value of type `T`.
pub trait Validator<T: ?Sized> {
    /// The error produced when the value is rejected.
    type Error;

    /// Validates the data.
    fn validate(&self, data: &T) -> Result<(), Self::Error>;
}
