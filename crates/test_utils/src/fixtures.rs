//! Test Fixtures
//!
//! Pre-built tariffs and driving records for common test scenarios.

use core_kernel::{Currency, DriverId, Money};
use domain_rating::{DrivingRecord, RiskFactors};
use rust_decimal_macros::dec;

/// Tariff fixtures
pub struct TariffFixtures;

impl TariffFixtures {
    /// The standard reference tariff (USD)
    pub fn standard() -> RiskFactors {
        RiskFactors::standard()
    }

    /// A tariff whose night multiplier is exactly 1, i.e. no night surcharge
    pub fn no_night_surcharge() -> RiskFactors {
        RiskFactors::new(
            Money::new(dec!(2500.00), Currency::USD),
            Money::new(dec!(0.05), Currency::USD),
            Money::new(dec!(50.00), Currency::USD),
            Money::new(dec!(30.00), Currency::USD),
            Money::new(dec!(25.00), Currency::USD),
            dec!(1.0),
        )
        .expect("fixture tariff is valid")
    }

    /// A small EUR tariff for currency-propagation tests
    pub fn eur_tariff() -> RiskFactors {
        RiskFactors::new(
            Money::new(dec!(1000.00), Currency::EUR),
            Money::new(dec!(0.02), Currency::EUR),
            Money::new(dec!(20.00), Currency::EUR),
            Money::new(dec!(10.00), Currency::EUR),
            Money::new(dec!(10.00), Currency::EUR),
            dec!(2.0),
        )
        .expect("fixture tariff is valid")
    }
}

/// Driving record fixtures
pub struct RecordFixtures;

impl RecordFixtures {
    /// Default driver identifier used across fixtures
    pub fn driver_id() -> DriverId {
        DriverId::new("DRIVER-TEST-001").expect("fixture id is non-empty")
    }

    /// A record with no distance and no events
    pub fn clean(driver_id: DriverId) -> DrivingRecord {
        DrivingRecord::new(driver_id, dec!(0), 0, 0, 0, dec!(0))
            .expect("fixture record is valid")
    }

    /// The reference scenario: 10000 km, 5 speeding, 10 braking, 8 accel,
    /// 10% night driving. Standard tariff quotes this at 3812.50 with a
    /// safety score of 66.
    pub fn reference_scenario(driver_id: DriverId) -> DrivingRecord {
        DrivingRecord::new(driver_id, dec!(10000), 5, 10, 8, dec!(10))
            .expect("fixture record is valid")
    }

    /// An aggressive driver with heavy event counts
    pub fn aggressive(driver_id: DriverId) -> DrivingRecord {
        DrivingRecord::new(driver_id, dec!(25000), 40, 55, 30, dec!(60))
            .expect("fixture record is valid")
    }
}
