//! Generator configuration.
//!
//! Loaded from defaults, from environment variables (CLI), or from an
//! optional JS object passed to the WASM exports.

use serde::{Deserialize, Serialize};
use std::env;

use crate::error::{ConfigError, ConfigResult};

/// Default attempt cap for one `(region, type)` search.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 100_000;

/// Settings for [`RandomValidNumberGenerator`](crate::generator::RandomValidNumberGenerator).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GeneratorConfig {
    /// Candidates tried before a search is reported as exhausted (default: 100000)
    pub max_attempts: u32,

    /// Seed for reproducible output; entropy-backed when unset
    pub seed: Option<u64>,
}

impl GeneratorConfig {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `GENERATOR_MAX_ATTEMPTS`: attempt cap per search (default: 100000)
    /// - `GENERATOR_SEED`: u64 seed for reproducible output
    pub fn from_env() -> ConfigResult<Self> {
        let max_attempts = Self::parse_env_u32("GENERATOR_MAX_ATTEMPTS", DEFAULT_MAX_ATTEMPTS)?;
        let seed = match env::var("GENERATOR_SEED") {
            Ok(val) => Some(val.trim().parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: "GENERATOR_SEED".to_string(),
                reason: format!("Must be an unsigned 64-bit integer, got: {}", val),
            })?),
            Err(_) => None,
        };

        let config = GeneratorConfig { max_attempts, seed };
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the generator cannot run with.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.max_attempts == 0 {
            return Err(ConfigError::InvalidValue {
                var: "max_attempts".to_string(),
                reason: "Must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Parse an environment variable as u32 with a default value.
    fn parse_env_u32(var_name: &str, default: u32) -> ConfigResult<u32> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GeneratorConfig::default();
        assert_eq!(config.max_attempts, DEFAULT_MAX_ATTEMPTS);
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_attempts_rejected() {
        let config = GeneratorConfig {
            max_attempts: 0,
            seed: None,
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { ref var, .. }) if var == "max_attempts"
        ));
    }

    // Both env scenarios live in one test so they never race each other.
    #[test]
    fn test_from_env() {
        env::set_var("GENERATOR_MAX_ATTEMPTS", "250");
        env::set_var("GENERATOR_SEED", "42");
        let config = GeneratorConfig::from_env().unwrap();
        assert_eq!(config.max_attempts, 250);
        assert_eq!(config.seed, Some(42));

        env::set_var("GENERATOR_SEED", "not-a-seed");
        let err = GeneratorConfig::from_env().unwrap_err();
        assert!(err.to_string().contains("GENERATOR_SEED"));

        env::remove_var("GENERATOR_MAX_ATTEMPTS");
        env::remove_var("GENERATOR_SEED");
        assert_eq!(GeneratorConfig::from_env().unwrap(), GeneratorConfig::default());
    }
}
