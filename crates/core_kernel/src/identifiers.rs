//! Strongly-typed identifiers for domain entities
//!
//! Driver identifiers arrive from external telematics providers as opaque
//! strings. Wrapping them in a newtype prevents accidental mixing with other
//! string data and gives a single place for the non-empty check.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors from identifier parsing
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IdError {
    #[error("Identifier must not be empty")]
    Empty,
}

/// Opaque driver identifier supplied by the telematics provider
///
/// No format is imposed beyond being non-empty; the provider's own scheme
/// (VIN-derived, account number, device serial) is passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DriverId(String);

impl DriverId {
    /// Creates a driver identifier, rejecting empty or whitespace-only input
    pub fn new(id: impl Into<String>) -> Result<Self, IdError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(IdError::Empty);
        }
        Ok(Self(id))
    }

    /// Returns the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DriverId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DriverId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for DriverId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
