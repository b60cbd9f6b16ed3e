//! Request parameter checks
//!
//! Checks for parameters that are not covered by field rules: the bare word
//! parameter, board positions, special tiles and difficulty.

use crate::config::InputLimits;
use crate::error::InputError;
use crate::input::tiles::{Difficulty, SpecialTile};
use crate::validation::word::{WORD_PATTERN, is_blank};

/// Parameter checks bound to a set of limits.
#[derive(Debug, Clone, Default)]
pub struct InputRules {
    limits: InputLimits,
}

impl InputRules {
    pub fn new(limits: InputLimits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> &InputLimits {
        &self.limits
    }

    /// Validates a word parameter. The word is trimmed before the length and
    /// character checks.
    pub fn validate_word(&self, word: &str) -> Result<(), InputError> {
        if is_blank(word) {
            return Err(InputError::EmptyWord);
        }

        let trimmed = word.trim();
        if trimmed.chars().count() > self.limits.max_word_length {
            return Err(InputError::WordTooLong {
                max: self.limits.max_word_length,
            });
        }

        if !WORD_PATTERN.is_match(trimmed) {
            return Err(InputError::InvalidCharacters);
        }

        Ok(())
    }

    /// Validates board positions. Absent positions are allowed.
    pub fn validate_positions(&self, positions: Option<&[i64]>) -> Result<(), InputError> {
        let Some(positions) = positions else {
            return Ok(());
        };

        let max = self.limits.max_positions;
        if positions.len() > max {
            return Err(InputError::TooManyPositions);
        }

        match positions
            .iter()
            .position(|&pos| pos < 0 || pos >= max as i64)
        {
            Some(index) => Err(InputError::InvalidPosition { index, max }),
            None => Ok(()),
        }
    }

    /// Validates special tile codes. Absent entries are allowed.
    pub fn validate_special_tiles(
        &self,
        special_tiles: Option<&[Option<&str>]>,
    ) -> Result<(), InputError> {
        let Some(special_tiles) = special_tiles else {
            return Ok(());
        };

        if special_tiles.len() > self.limits.max_positions {
            return Err(InputError::TooManySpecialTiles);
        }

        for (index, tile) in special_tiles.iter().enumerate() {
            if let Some(code) = tile {
                code.parse::<SpecialTile>()
                    .map_err(|_| InputError::InvalidSpecialTile { index })?;
            }
        }

        Ok(())
    }

    /// Validates that positions and special tiles pair up one to one.
    pub fn validate_positions_and_tiles_match<P, T>(
        &self,
        positions: Option<&[P]>,
        special_tiles: Option<&[T]>,
    ) -> Result<(), InputError> {
        match (positions, special_tiles) {
            (Some(p), Some(t)) if p.len() != t.len() => Err(InputError::LengthMismatch),
            _ => Ok(()),
        }
    }

    /// Validates the scramble difficulty. Absent difficulty is allowed.
    pub fn validate_difficulty(&self, difficulty: Option<&str>) -> Result<(), InputError> {
        match difficulty {
            Some(value) => value.parse::<Difficulty>().map(|_| ()),
            None => Ok(()),
        }
    }
}
