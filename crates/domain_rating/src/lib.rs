//! Telematics Rating Domain
//!
//! This crate implements the premium/risk-scoring engine for usage-based
//! insurance. It maps a period of telematics-derived driving statistics
//! (distance, speeding / hard-braking / rapid-acceleration event counts,
//! night-driving percentage) to a premium quote and a companion driver
//! safety score.
//!
//! # Architecture
//!
//! The domain layer is transport-agnostic and contains only rating logic:
//! - **Value Objects**: `DrivingRecord`, `RiskFactors`, `PremiumQuote`, `SafetyScore`
//! - **Domain Service**: `RatingEngine`, the single entry point consumed by
//!   thin adapters (HTTP today, other transports tomorrow)
//!
//! The engine is deterministic and side-effect free: identical inputs and
//! tariff always produce identical decimal results, so it is safe to call
//! concurrently without synchronization.
//!
//! # Units
//!
//! `night_driving_percentage` is accepted on the 0-100 scale at the boundary
//! and normalized to a 0-1 fraction inside the engine. Out-of-range values
//! are rejected, never clamped.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_rating::{DrivingRecord, RatingEngine, RiskFactors};
//!
//! let engine = RatingEngine::new(RiskFactors::standard());
//! let record = DrivingRecord::new(driver_id, distance, 5, 10, 8, night_pct)?;
//! let quote = engine.quote_premium(&record);
//! let score = engine.safety_score(&record);
//! ```

pub mod record;
pub mod factors;
pub mod premium;
pub mod safety;
pub mod engine;
pub mod error;

pub use record::DrivingRecord;
pub use factors::RiskFactors;
pub use premium::{PremiumQuote, RiskSummary};
pub use safety::{SafetyScore, ScoreDeductions};
pub use engine::RatingEngine;
pub use error::RatingError;
