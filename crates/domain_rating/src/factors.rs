//! Risk factor tariff configuration
//!
//! `RiskFactors` holds the fixed per-unit costs and multiplier constants
//! that parameterize the pricing formula. The tariff is loaded once at
//! process start, validated here, and never mutated afterwards, which is
//! what makes the engine freely shareable across request handlers.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use core_kernel::{Currency, Money};

use crate::error::RatingError;

/// Per-unit costs and multipliers for premium calculation
///
/// Invariants, enforced at construction:
/// - every monetary field is non-negative and shares one currency
/// - `night_driving_multiplier` is at least 1
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RiskFactors {
    base_premium: Money,
    distance_cost_per_km: Money,
    speeding_incident_cost: Money,
    hard_braking_cost: Money,
    rapid_acceleration_cost: Money,
    night_driving_multiplier: Decimal,
}

impl RiskFactors {
    /// Creates a validated tariff
    ///
    /// # Errors
    ///
    /// Returns a configuration error if any cost is negative, the costs mix
    /// currencies, or the night-driving multiplier is below 1. A tariff that
    /// fails here must abort startup; it can never be attached to an engine.
    pub fn new(
        base_premium: Money,
        distance_cost_per_km: Money,
        speeding_incident_cost: Money,
        hard_braking_cost: Money,
        rapid_acceleration_cost: Money,
        night_driving_multiplier: Decimal,
    ) -> Result<Self, RatingError> {
        let monetary = [
            ("base_premium", &base_premium),
            ("distance_cost_per_km", &distance_cost_per_km),
            ("speeding_incident_cost", &speeding_incident_cost),
            ("hard_braking_cost", &hard_braking_cost),
            ("rapid_acceleration_cost", &rapid_acceleration_cost),
        ];

        for (name, value) in &monetary {
            if value.is_negative() {
                return Err(RatingError::configuration(format!(
                    "Tariff field '{}' must be non-negative, got {}",
                    name, value
                )));
            }
            if value.currency() != base_premium.currency() {
                return Err(RatingError::configuration(format!(
                    "Tariff field '{}' is in {}, expected {}",
                    name,
                    value.currency(),
                    base_premium.currency()
                )));
            }
        }

        if night_driving_multiplier < dec!(1) {
            return Err(RatingError::configuration(format!(
                "night_driving_multiplier must be >= 1, got {}",
                night_driving_multiplier
            )));
        }

        Ok(Self {
            base_premium,
            distance_cost_per_km,
            speeding_incident_cost,
            hard_braking_cost,
            rapid_acceleration_cost,
            night_driving_multiplier,
        })
    }

    /// Returns the standard reference tariff in USD
    ///
    /// Base 2500.00, 0.05 per km, 50.00 per speeding incident, 30.00 per
    /// hard-braking event, 25.00 per rapid acceleration, 1.5x night uplift.
    pub fn standard() -> Self {
        Self {
            base_premium: Money::new(dec!(2500.00), Currency::USD),
            distance_cost_per_km: Money::new(dec!(0.05), Currency::USD),
            speeding_incident_cost: Money::new(dec!(50.00), Currency::USD),
            hard_braking_cost: Money::new(dec!(30.00), Currency::USD),
            rapid_acceleration_cost: Money::new(dec!(25.00), Currency::USD),
            night_driving_multiplier: dec!(1.5),
        }
    }

    /// Returns the fixed starting premium
    pub fn base_premium(&self) -> Money {
        self.base_premium
    }

    /// Returns the cost per kilometre driven
    pub fn distance_cost_per_km(&self) -> Money {
        self.distance_cost_per_km
    }

    /// Returns the cost per speeding incident
    pub fn speeding_incident_cost(&self) -> Money {
        self.speeding_incident_cost
    }

    /// Returns the cost per hard-braking event
    pub fn hard_braking_cost(&self) -> Money {
        self.hard_braking_cost
    }

    /// Returns the cost per rapid-acceleration event
    pub fn rapid_acceleration_cost(&self) -> Money {
        self.rapid_acceleration_cost
    }

    /// Returns the night-driving multiplier (>= 1)
    pub fn night_driving_multiplier(&self) -> Decimal {
        self.night_driving_multiplier
    }

    /// Returns the tariff currency
    pub fn currency(&self) -> Currency {
        self.base_premium.currency()
    }
}
