//! Error handlers
//!
//! Logs parameter errors and maps them to report codes.

use crate::error::types::InputError;
use log::warn;

/// Code reported for a rejected request parameter.
pub const INVALID_ARGUMENT: &str = "INVALID_ARGUMENT";

/// Code reported for field-level violations.
pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";

/// Status carried by every rejection report.
pub const BAD_REQUEST: u16 = 400;

/// Handle a parameter error
pub fn handle_error(err: &InputError) {
    warn!("Illegal argument error: {}", err);
}

/// Convert error to report code
pub fn error_code(err: &InputError) -> &'static str {
    match err {
        InputError::EmptyWord
        | InputError::WordTooLong { .. }
        | InputError::InvalidCharacters
        | InputError::TooManyPositions
        | InputError::InvalidPosition { .. }
        | InputError::TooManySpecialTiles
        | InputError::InvalidSpecialTile { .. }
        | InputError::UnknownSpecialTile
        | InputError::LengthMismatch
        | InputError::InvalidDifficulty => INVALID_ARGUMENT,
    }
}
