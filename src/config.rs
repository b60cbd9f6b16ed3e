//! Configuration management for word-guard
//!
//! Only the parameter-check limits are configurable. The word pattern and the
//! display bound of rejected values are fixed.

use config::{Config, Environment, File, FileFormat, Map};
use log::info;
use serde::Deserialize;

use crate::input::InputRules;

/// Default maximum length of a bare word parameter.
pub const DEFAULT_MAX_WORD_LENGTH: usize = 10;

/// Default maximum number of board positions.
pub const DEFAULT_MAX_POSITIONS: usize = 25;

/// Complete guard configuration
#[derive(Debug, Deserialize, Clone, Default)]
pub struct GuardConfig {
    #[serde(flatten)]
    pub limits: InputLimits,
}

/// Limits applied by the parameter checks
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct InputLimits {
    /// Maximum word length, matches the score table's column width
    /// Environment: WORD_GUARD_MAX_WORD_LENGTH
    pub max_word_length: usize,

    /// Maximum number of positions and special tiles
    /// Environment: WORD_GUARD_MAX_POSITIONS
    pub max_positions: usize,
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            max_word_length: DEFAULT_MAX_WORD_LENGTH,
            max_positions: DEFAULT_MAX_POSITIONS,
        }
    }
}

impl GuardConfig {
    /// Load configuration from config.toml with environment overrides.
    ///
    /// A missing file is not an error; defaults apply.
    pub fn load() -> Result<Self, config::ConfigError> {
        let config_paths = [
            "word-guard/config", // packaged layout: ./word-guard/config.toml
            "config",            // local development: ./config.toml
        ];

        let mut builder = Config::builder();
        for config_path in config_paths {
            builder = builder.add_source(File::with_name(config_path).required(false));
        }

        let settings = builder.add_source(env_source(None)).build()?;

        let config: GuardConfig = settings.try_deserialize()?;
        config.validate()?;
        info!(
            "Loaded limits: max_word_length={}, max_positions={}",
            config.limits.max_word_length, config.limits.max_positions
        );
        Ok(config)
    }

    /// Parse configuration from TOML text, without environment overrides.
    pub fn from_toml_str(toml: &str) -> Result<Self, config::ConfigError> {
        let config: GuardConfig = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Parameter checks bound to these limits
    pub fn input_rules(&self) -> InputRules {
        InputRules::new(self.limits.clone())
    }

    /// Validation for all configuration values
    fn validate(&self) -> Result<(), config::ConfigError> {
        if self.limits.max_word_length == 0 {
            return Err(config::ConfigError::Message(
                "max_word_length must be greater than 0".into(),
            ));
        }

        if self.limits.max_positions == 0 {
            return Err(config::ConfigError::Message(
                "max_positions must be greater than 0".into(),
            ));
        }

        Ok(())
    }
}

/// `WORD_GUARD_*` overrides, read from the process environment unless a
/// variable map is given.
fn env_source(vars: Option<Map<String, String>>) -> Environment {
    Environment::with_prefix("WORD_GUARD")
        .try_parsing(true)
        .source(vars)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_env(vars: &[(&str, &str)]) -> Result<GuardConfig, config::ConfigError> {
        let vars: Map<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let config: GuardConfig = Config::builder()
            .add_source(File::from_str("max_positions = 20", FileFormat::Toml))
            .add_source(env_source(Some(vars)))
            .build()?
            .try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    #[test]
    fn test_env_overrides_file() {
        let config = from_env(&[("WORD_GUARD_MAX_WORD_LENGTH", "4")]).unwrap();
        assert_eq!(
            config.limits,
            InputLimits {
                max_word_length: 4,
                max_positions: 20,
            }
        );

        let config = from_env(&[("WORD_GUARD_MAX_POSITIONS", "9")]).unwrap();
        assert_eq!(config.limits.max_positions, 9);
        assert_eq!(config.limits.max_word_length, DEFAULT_MAX_WORD_LENGTH);
    }

    #[test]
    fn test_env_zero_rejected() {
        assert!(from_env(&[("WORD_GUARD_MAX_WORD_LENGTH", "0")]).is_err());
        assert!(from_env(&[("OTHER_MAX_WORD_LENGTH", "0")]).is_ok());
    }

    #[test]
    fn test_defaults_from_empty_source() {
        let config = GuardConfig::from_toml_str("").unwrap();
        assert_eq!(config.limits, InputLimits::default());
    }

    #[test]
    fn test_overrides_from_toml() {
        let config = GuardConfig::from_toml_str("max_word_length = 15\n").unwrap();
        assert_eq!(config.limits.max_word_length, 15);
        assert_eq!(config.limits.max_positions, DEFAULT_MAX_POSITIONS);
    }

    #[test]
    fn test_rejects_zero_limits() {
        assert!(GuardConfig::from_toml_str("max_positions = 0").is_err());
        assert!(GuardConfig::from_toml_str("max_word_length = 0").is_err());
    }

    #[test]
    fn test_input_rules_use_limits() {
        let config = GuardConfig::from_toml_str("max_word_length = 2").unwrap();
        assert!(config.input_rules().validate_word("abc").is_err());
    }
}
