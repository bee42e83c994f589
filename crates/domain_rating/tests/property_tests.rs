//! Property-Based Tests for the Rating Engine
//!
//! Verifies the algebraic contract of the premium formula and safety score
//! over the full validated input domain:
//! - monotonicity in every input
//! - purity (bit-identical repeated results)
//! - premium never below the base premium
//! - safety score always within [0, 100]

use domain_rating::{DrivingRecord, RatingEngine, RiskFactors};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use test_utils::generators::{
    arb_distance_km, arb_driving_record, arb_event_count, arb_night_percentage,
};
use test_utils::RecordFixtures;

fn engine() -> RatingEngine {
    RatingEngine::new(RiskFactors::standard())
}

fn record(
    distance: Decimal,
    speeding: u32,
    braking: u32,
    accel: u32,
    night: Decimal,
) -> DrivingRecord {
    DrivingRecord::new(
        RecordFixtures::driver_id(),
        distance,
        speeding,
        braking,
        accel,
        night,
    )
    .unwrap()
}

proptest! {
    #[test]
    fn premium_never_below_base(r in arb_driving_record()) {
        let quote = engine().quote_premium(&r);
        prop_assert!(quote.calculated_premium.amount() >= quote.base_premium.amount());
    }

    #[test]
    fn premium_is_pure(r in arb_driving_record()) {
        let e = engine();
        prop_assert_eq!(e.quote_premium(&r), e.quote_premium(&r));
    }

    #[test]
    fn safety_score_stays_within_bounds(r in arb_driving_record()) {
        let score = engine().safety_score(&r);
        prop_assert!(score.value() <= 100);
    }

    #[test]
    fn premium_monotone_in_speeding(
        distance in arb_distance_km(),
        speeding in 0u32..=499,
        night in arb_night_percentage(),
    ) {
        let e = engine();
        let lower = e.quote_premium(&record(distance, speeding, 0, 0, night));
        let higher = e.quote_premium(&record(distance, speeding + 1, 0, 0, night));
        prop_assert!(
            higher.calculated_premium.amount() >= lower.calculated_premium.amount()
        );
    }

    #[test]
    fn premium_monotone_in_distance(
        distance in arb_distance_km(),
        extra in 1i64..=1_000_000,
        braking in arb_event_count(),
    ) {
        let e = engine();
        let farther = distance + Decimal::new(extra, 2);
        let lower = e.quote_premium(&record(distance, 0, braking, 0, dec!(20)));
        let higher = e.quote_premium(&record(farther, 0, braking, 0, dec!(20)));
        prop_assert!(
            higher.calculated_premium.amount() >= lower.calculated_premium.amount()
        );
    }

    #[test]
    fn premium_monotone_in_night_fraction(
        distance in arb_distance_km(),
        speeding in arb_event_count(),
        night in 0i64..=9_999,
    ) {
        let e = engine();
        let lower_pct = Decimal::new(night, 2);
        let higher_pct = Decimal::new(night + 1, 2);
        let lower = e.quote_premium(&record(distance, speeding, 0, 0, lower_pct));
        let higher = e.quote_premium(&record(distance, speeding, 0, 0, higher_pct));
        prop_assert!(
            higher.calculated_premium.amount() >= lower.calculated_premium.amount()
        );
    }

    #[test]
    fn safety_score_monotone_in_events(
        braking in 0u32..=499,
        accel in arb_event_count(),
        night in arb_night_percentage(),
    ) {
        let e = engine();
        let lower = e.safety_score(&record(dec!(1000), 0, braking + 1, accel, night));
        let higher = e.safety_score(&record(dec!(1000), 0, braking, accel, night));
        prop_assert!(lower.value() <= higher.value());
    }

    #[test]
    fn zero_night_premium_is_exactly_linear(
        distance in arb_distance_km(),
        speeding in arb_event_count(),
        braking in arb_event_count(),
        accel in arb_event_count(),
    ) {
        let e = engine();
        let quote = e.quote_premium(&record(distance, speeding, braking, accel, dec!(0)));

        let expected = (dec!(2500)
            + distance * dec!(0.05)
            + Decimal::from(speeding) * dec!(50)
            + Decimal::from(braking) * dec!(30)
            + Decimal::from(accel) * dec!(25))
        .round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointNearestEven);

        prop_assert_eq!(quote.calculated_premium.amount(), expected);
    }
}
