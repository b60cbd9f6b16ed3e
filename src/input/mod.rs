//! Request parameter checks
//!
//! Handles parameters that cannot go through field rules: bare words, board
//! positions, special tiles and difficulty.

pub mod operations;
pub mod tiles;

pub use operations::InputRules;
pub use tiles::{Difficulty, SpecialTile};
