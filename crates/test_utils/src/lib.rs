//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! telematics rating test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built tariffs and driving records for common scenarios
//! - `builders`: Builder patterns for test data construction
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use generators::*;
