//! Error types for example-number generation.
//!
//! Rejected candidates and missing examples are not errors; they are normal
//! outcomes of the search. Only the attempt cap and bad configuration are.

use thiserror::Error;

use crate::types::{NumberType, Region};

/// Errors that can occur while searching for a valid number.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    /// No accepted candidate within the configured attempt cap
    #[error("search exhausted for {number_type} in {region} after {attempts} attempts")]
    SearchExhausted {
        region: Region,
        number_type: NumberType,
        attempts: u32,
    },
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Setting has an invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// A number type tag outside the oracle's vocabulary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown number type: {0}")]
pub struct ParseNumberTypeError(pub String);

/// Convenience type alias for Results with GenerateError
pub type GenerateResult<T> = Result<T, GenerateError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GenerateError::SearchExhausted {
            region: Region::new("US"),
            number_type: NumberType::Mobile,
            attempts: 10,
        };
        assert_eq!(
            err.to_string(),
            "search exhausted for MOBILE in US after 10 attempts"
        );

        let err = ConfigError::InvalidValue {
            var: "GENERATOR_MAX_ATTEMPTS".to_string(),
            reason: "Must be at least 1".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for GENERATOR_MAX_ATTEMPTS: Must be at least 1"
        );

        let err = ParseNumberTypeError("CELL".to_string());
        assert_eq!(err.to_string(), "unknown number type: CELL");
    }
}
