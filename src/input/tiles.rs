//! Parameter value types
//!
//! Special tile codes and scramble difficulties accepted by the parameter
//! checks.

use std::fmt;
use std::str::FromStr;

use crate::error::InputError;

/// Bonus square under a letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecialTile {
    Normal,
    DoubleLetter,
    TripleLetter,
    DoubleWord,
    TripleWord,
}

impl SpecialTile {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpecialTile::Normal => "normal",
            SpecialTile::DoubleLetter => "dl",
            SpecialTile::TripleLetter => "tl",
            SpecialTile::DoubleWord => "dw",
            SpecialTile::TripleWord => "tw",
        }
    }
}

impl FromStr for SpecialTile {
    type Err = InputError;

    /// Codes are matched exactly; `DL` or ` dl` are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(SpecialTile::Normal),
            "dl" => Ok(SpecialTile::DoubleLetter),
            "tl" => Ok(SpecialTile::TripleLetter),
            "dw" => Ok(SpecialTile::DoubleWord),
            "tw" => Ok(SpecialTile::TripleWord),
            _ => Err(InputError::UnknownSpecialTile),
        }
    }
}

impl fmt::Display for SpecialTile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scramble game difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl FromStr for Difficulty {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(InputError::InvalidDifficulty),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_special_tile_codes() {
        for code in ["normal", "dl", "tl", "dw", "tw"] {
            let tile: SpecialTile = code.parse().unwrap();
            assert_eq!(tile.to_string(), code);
        }
        assert_eq!(
            "DL".parse::<SpecialTile>(),
            Err(InputError::UnknownSpecialTile)
        );
        assert!("double_letter".parse::<SpecialTile>().is_err());
        assert!("".parse::<SpecialTile>().is_err());
    }

    #[test]
    fn test_difficulty_is_case_insensitive() {
        assert_eq!(" Hard ".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert_eq!("EASY".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert_eq!(
            "extreme".parse::<Difficulty>(),
            Err(InputError::InvalidDifficulty)
        );
    }
}
