//! Premium quote output value objects
//!
//! A `PremiumQuote` is derived per request and never persisted. Alongside
//! the final premium it carries the intermediate cost components and an echo
//! of the normalized inputs, so a quote can be audited or displayed without
//! re-running the calculation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{DriverId, Money};

/// Echo of the normalized inputs a quote was computed from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskSummary {
    /// Distance driven in the rating period, kilometres
    pub distance_km: Decimal,
    /// Speeding incident count
    pub speeding_incidents: u32,
    /// Hard-braking event count
    pub hard_braking_events: u32,
    /// Rapid-acceleration event count
    pub rapid_acceleration_events: u32,
    /// Night-driving share as the 0-1 fraction the uplift actually used
    pub night_driving_fraction: Decimal,
}

/// A computed premium quote for one driver and rating period
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PremiumQuote {
    /// Driver the quote applies to
    pub driver_id: DriverId,
    /// Fixed starting premium from the tariff
    pub base_premium: Money,
    /// Event and distance costs before the night-driving uplift
    pub behavioral_cost: Money,
    /// Uplift applied to the behavioral portion only
    pub night_driving_uplift: Money,
    /// Final premium, rounded to 2 decimal places (banker's rounding)
    pub calculated_premium: Money,
    /// Normalized inputs used in the computation
    pub risk_summary: RiskSummary,
}
