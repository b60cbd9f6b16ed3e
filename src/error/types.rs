//! Error types
//!
//! Defines the errors raised by the request parameter checks.

use std::fmt;

use crate::validation::word::DEFAULT_MESSAGE;

/// Parameter check errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    EmptyWord,
    WordTooLong { max: usize },
    InvalidCharacters,
    TooManyPositions,
    InvalidPosition { index: usize, max: usize },
    TooManySpecialTiles,
    InvalidSpecialTile { index: usize },
    UnknownSpecialTile,
    LengthMismatch,
    InvalidDifficulty,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::EmptyWord => write!(f, "Word cannot be empty"),
            InputError::WordTooLong { max } => {
                write!(f, "Word cannot exceed {} characters", max)
            }
            InputError::InvalidCharacters => f.write_str(DEFAULT_MESSAGE),
            InputError::TooManyPositions => write!(f, "Too many positions specified"),
            InputError::InvalidPosition { index, max } => write!(
                f,
                "Position {} is invalid. Must be between 0 and {}",
                index,
                max.saturating_sub(1)
            ),
            InputError::TooManySpecialTiles => write!(f, "Too many special tiles specified"),
            InputError::InvalidSpecialTile { index } => write!(
                f,
                "Special tile at position {} is invalid. Must be one of: normal, dl, tl, dw, tw",
                index
            ),
            InputError::UnknownSpecialTile => write!(
                f,
                "Special tile must be one of: normal, dl, tl, dw, tw"
            ),
            InputError::LengthMismatch => write!(
                f,
                "Positions and special tiles lists must have the same length"
            ),
            InputError::InvalidDifficulty => {
                write!(f, "Difficulty must be one of: easy, medium, hard")
            }
        }
    }
}

impl std::error::Error for InputError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            InputError::WordTooLong { max: 10 }.to_string(),
            "Word cannot exceed 10 characters"
        );
        assert_eq!(
            InputError::InvalidPosition { index: 3, max: 25 }.to_string(),
            "Position 3 is invalid. Must be between 0 and 24"
        );
        assert_eq!(
            InputError::InvalidSpecialTile { index: 0 }.to_string(),
            "Special tile at position 0 is invalid. Must be one of: normal, dl, tl, dw, tw"
        );
    }
}
