//! Rating domain errors
//!
//! This module defines all error types that can occur within the
//! telematics rating domain.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur in the rating domain
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RatingError {
    /// A numeric input field is negative
    #[error("Field '{field}' must be non-negative, got {value}")]
    NegativeValue {
        field: &'static str,
        value: Decimal,
    },

    /// A numeric input could not be represented as a finite decimal
    #[error("Field '{field}' is not a finite number")]
    NotFinite {
        field: &'static str,
    },

    /// Night-driving percentage outside the 0-100 scale
    #[error("Night driving percentage must be between 0 and 100, got {value}")]
    PercentageOutOfRange {
        value: Decimal,
    },

    /// Required field is missing or empty
    #[error("Missing required field: {0}")]
    MissingRequiredField(String),

    /// Invalid tariff configuration; raised at startup, never per request
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl RatingError {
    /// Creates a negative-value validation error
    pub fn negative(field: &'static str, value: Decimal) -> Self {
        RatingError::NegativeValue { field, value }
    }

    /// Creates a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        RatingError::Configuration(message.into())
    }

    /// Returns true for per-request input problems (as opposed to tariff
    /// configuration problems)
    pub fn is_validation(&self) -> bool {
        !matches!(self, RatingError::Configuration(_))
    }
}
