//! Driver safety scoring
//!
//! The safety score is a deterministic heuristic on a 0-100 scale, computed
//! from the same driving record as the premium but independent of the tariff.
//! It starts at 100 and subtracts a fixed weight per risk signal; the result
//! is rounded to the nearest integer (banker's rounding, half to even, the
//! same convention as the premium) and floor-clamped at 0. No ceiling clamp
//! is needed since every term subtracts.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::record::DrivingRecord;

/// Points deducted per speeding incident
pub const SPEEDING_WEIGHT: Decimal = dec!(2.0);
/// Points deducted per hard-braking event
pub const HARD_BRAKING_WEIGHT: Decimal = dec!(1.0);
/// Points deducted per rapid-acceleration event
pub const RAPID_ACCELERATION_WEIGHT: Decimal = dec!(1.0);
/// Points deducted per 1000 km driven
pub const DISTANCE_WEIGHT_PER_1000_KM: Decimal = dec!(0.5);
/// Night-driving percentage points per safety point deducted
pub const NIGHT_DRIVING_DIVISOR: Decimal = dec!(10);

/// Per-component deductions behind a safety score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreDeductions {
    pub speeding: Decimal,
    pub hard_braking: Decimal,
    pub rapid_acceleration: Decimal,
    pub distance: Decimal,
    pub night_driving: Decimal,
}

impl ScoreDeductions {
    /// Returns the sum of all deductions
    pub fn total(&self) -> Decimal {
        self.speeding
            + self.hard_braking
            + self.rapid_acceleration
            + self.distance
            + self.night_driving
    }
}

/// A driver safety score on the 0-100 scale
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetyScore {
    value: u8,
    deductions: ScoreDeductions,
}

impl SafetyScore {
    /// Computes the safety score for a driving record
    pub fn from_record(record: &DrivingRecord) -> Self {
        let deductions = ScoreDeductions {
            speeding: SPEEDING_WEIGHT * Decimal::from(record.speeding_incidents()),
            hard_braking: HARD_BRAKING_WEIGHT * Decimal::from(record.hard_braking_events()),
            rapid_acceleration: RAPID_ACCELERATION_WEIGHT
                * Decimal::from(record.rapid_acceleration_events()),
            distance: DISTANCE_WEIGHT_PER_1000_KM * (record.distance_km() / dec!(1000)),
            night_driving: record.night_driving_percentage() / NIGHT_DRIVING_DIVISOR,
        };

        let raw = dec!(100) - deductions.total();
        let rounded = raw.round_dp_with_strategy(
            0,
            rust_decimal::RoundingStrategy::MidpointNearestEven,
        );
        // Floor clamp; valid records cannot push the score above 100
        let value = rounded.max(dec!(0)).to_u8().unwrap_or(0);

        Self { value, deductions }
    }

    /// Returns the score value in [0, 100]
    pub fn value(&self) -> u8 {
        self.value
    }

    /// Returns the per-component deductions
    pub fn deductions(&self) -> &ScoreDeductions {
        &self.deductions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::DriverId;

    fn record(
        distance_km: Decimal,
        speeding: u32,
        braking: u32,
        accel: u32,
        night_pct: Decimal,
    ) -> DrivingRecord {
        DrivingRecord::new(
            DriverId::new("driver-1").unwrap(),
            distance_km,
            speeding,
            braking,
            accel,
            night_pct,
        )
        .unwrap()
    }

    #[test]
    fn test_clean_record_scores_100() {
        let score = SafetyScore::from_record(&record(dec!(0), 0, 0, 0, dec!(0)));
        assert_eq!(score.value(), 100);
        assert!(score.deductions().total().is_zero());
    }

    #[test]
    fn test_reference_scenario_scores_66() {
        // 100 - 5*2 - 10*1 - 8*1 - (10000/1000)*0.5 - 10/10 = 66
        let score = SafetyScore::from_record(&record(dec!(10000), 5, 10, 8, dec!(10)));
        assert_eq!(score.value(), 66);
    }

    #[test]
    fn test_score_floors_at_zero() {
        let score = SafetyScore::from_record(&record(dec!(0), 1000, 0, 0, dec!(0)));
        assert_eq!(score.value(), 0);
    }

    #[test]
    fn test_fractional_score_rounds_to_nearest() {
        // 100 - 0.5*(900/1000) = 99.55 -> 100
        let up = SafetyScore::from_record(&record(dec!(900), 0, 0, 0, dec!(0)));
        assert_eq!(up.value(), 100);

        // 100 - 0.5*(2800/1000) = 98.6 -> 99
        let near = SafetyScore::from_record(&record(dec!(2800), 0, 0, 0, dec!(0)));
        assert_eq!(near.value(), 99);
    }

    #[test]
    fn test_midpoint_score_rounds_half_to_even() {
        // 100 - 0.5*(3000/1000) = 98.5 -> 98 (even neighbour below)
        let down = SafetyScore::from_record(&record(dec!(3000), 0, 0, 0, dec!(0)));
        assert_eq!(down.value(), 98);

        // 100 - 0.5*(5000/1000) = 97.5 -> 98 (even neighbour above)
        let up = SafetyScore::from_record(&record(dec!(5000), 0, 0, 0, dec!(0)));
        assert_eq!(up.value(), 98);
    }

    #[test]
    fn test_deduction_breakdown() {
        let score = SafetyScore::from_record(&record(dec!(2000), 3, 2, 1, dec!(40)));
        let deductions = score.deductions();

        assert_eq!(deductions.speeding, dec!(6.0));
        assert_eq!(deductions.hard_braking, dec!(2.0));
        assert_eq!(deductions.rapid_acceleration, dec!(1.0));
        assert_eq!(deductions.distance, dec!(1.0));
        assert_eq!(deductions.night_driving, dec!(4));
        assert_eq!(score.value(), 86);
    }
}
