//! Rating engine domain service
//!
//! `RatingEngine` is the single entry point for premium quoting and safety
//! scoring. It holds a validated, immutable tariff, so the whole service is
//! `Clone` + `Send` + `Sync` and callable from any number of request
//! handlers without synchronization.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::Money;

use crate::factors::RiskFactors;
use crate::premium::{PremiumQuote, RiskSummary};
use crate::record::DrivingRecord;
use crate::safety::SafetyScore;

/// Service computing premium quotes and safety scores
///
/// Both operations are pure functions of the record and the tariff:
/// no I/O, no hidden state, identical inputs always give identical results.
#[derive(Debug, Clone)]
pub struct RatingEngine {
    factors: RiskFactors,
}

impl RatingEngine {
    /// Creates an engine over a validated tariff
    ///
    /// Tariff invariants are enforced by [`RiskFactors::new`]; an invalid
    /// tariff cannot reach this constructor.
    pub fn new(factors: RiskFactors) -> Self {
        Self { factors }
    }

    /// Returns the tariff this engine quotes with
    pub fn factors(&self) -> &RiskFactors {
        &self.factors
    }

    /// Computes a premium quote for a driving record
    ///
    /// The premium is built in two stages:
    ///
    /// 1. A linear stage: base premium plus per-kilometre and per-event
    ///    costs. Everything above the base is the *behavioral cost*.
    /// 2. A night-driving uplift: `behavioral * f * (multiplier - 1)` where
    ///    `f` is the 0-1 night-driving fraction. The uplift is a single
    ///    linear interpolation computed once from the pre-uplift behavioral
    ///    cost; it never touches the base premium and never compounds.
    ///
    /// The final premium is rounded to 2 decimal places with banker's
    /// rounding (round half to even). For non-negative inputs and a
    /// multiplier >= 1 every term is non-negative, so the result can
    /// never fall below the base premium.
    pub fn quote_premium(&self, record: &DrivingRecord) -> PremiumQuote {
        let factors = &self.factors;

        let distance_cost = factors.distance_cost_per_km() * record.distance_km();
        let speeding_cost =
            factors.speeding_incident_cost() * Decimal::from(record.speeding_incidents());
        let braking_cost =
            factors.hard_braking_cost() * Decimal::from(record.hard_braking_events());
        let acceleration_cost =
            factors.rapid_acceleration_cost() * Decimal::from(record.rapid_acceleration_events());

        let behavioral_cost = distance_cost + speeding_cost + braking_cost + acceleration_cost;

        let fraction = record.night_driving_fraction();
        let night_driving_uplift = if fraction > dec!(0) {
            behavioral_cost * (fraction * (factors.night_driving_multiplier() - dec!(1)))
        } else {
            Money::zero(factors.currency())
        };

        let calculated_premium = (factors.base_premium() + behavioral_cost + night_driving_uplift)
            .round_bankers(2);

        tracing::debug!(
            driver_id = %record.driver_id(),
            premium = %calculated_premium,
            "Premium quoted"
        );

        PremiumQuote {
            driver_id: record.driver_id().clone(),
            base_premium: factors.base_premium(),
            behavioral_cost: behavioral_cost.round_bankers(2),
            night_driving_uplift: night_driving_uplift.round_bankers(2),
            calculated_premium,
            risk_summary: RiskSummary {
                distance_km: record.distance_km(),
                speeding_incidents: record.speeding_incidents(),
                hard_braking_events: record.hard_braking_events(),
                rapid_acceleration_events: record.rapid_acceleration_events(),
                night_driving_fraction: fraction,
            },
        }
    }

    /// Computes the driver safety score for a driving record
    ///
    /// The score does not depend on the tariff; it is exposed on the engine
    /// so adapters have one handle for both operations.
    pub fn safety_score(&self, record: &DrivingRecord) -> SafetyScore {
        SafetyScore::from_record(record)
    }
}
