//! Core Kernel - Foundational types and utilities for the telematics rating system
//!
//! This crate provides the fundamental building blocks used across the rating
//! domain and its transport adapters:
//! - Money types with precise decimal arithmetic
//! - Common identifiers and value objects

pub mod money;
pub mod identifiers;

pub use money::{Money, Currency, MoneyError};
pub use identifiers::{DriverId, IdError};
