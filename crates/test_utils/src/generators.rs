//! Property-Based Test Data Generators
//!
//! Proptest strategies for valid rating inputs. All strategies stay inside
//! the validated input domain so properties exercise the engine, not the
//! validation layer.

use core_kernel::DriverId;
use domain_rating::DrivingRecord;
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Distance in kilometres with centimetre precision, up to 100,000 km
pub fn arb_distance_km() -> impl Strategy<Value = Decimal> {
    (0i64..=10_000_000).prop_map(|minor| Decimal::new(minor, 2))
}

/// Event counts in a realistic range
pub fn arb_event_count() -> impl Strategy<Value = u32> {
    0u32..=500
}

/// Night-driving percentage on the 0-100 scale with 0.01 precision
pub fn arb_night_percentage() -> impl Strategy<Value = Decimal> {
    (0i64..=10_000).prop_map(|hundredths| Decimal::new(hundredths, 2))
}

/// Alphanumeric driver identifiers
pub fn arb_driver_id() -> impl Strategy<Value = DriverId> {
    "[a-zA-Z0-9-]{1,24}".prop_map(|s| DriverId::new(s).expect("generated id is non-empty"))
}

/// Complete valid driving records
pub fn arb_driving_record() -> impl Strategy<Value = DrivingRecord> {
    (
        arb_driver_id(),
        arb_distance_km(),
        arb_event_count(),
        arb_event_count(),
        arb_event_count(),
        arb_night_percentage(),
    )
        .prop_map(|(id, distance, speeding, braking, accel, night)| {
            DrivingRecord::new(id, distance, speeding, braking, accel, night)
                .expect("generated record is valid")
        })
}
