//! Test Data Builders
//!
//! Builder patterns for constructing test data with sensible defaults.
//! Tests specify only the fields under test and take defaults for the rest.

use core_kernel::DriverId;
use domain_rating::DrivingRecord;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::fixtures::RecordFixtures;

/// Builder for driving records
pub struct DrivingRecordBuilder {
    driver_id: DriverId,
    distance_km: Decimal,
    speeding_incidents: u32,
    hard_braking_events: u32,
    rapid_acceleration_events: u32,
    night_driving_percentage: Decimal,
}

impl Default for DrivingRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DrivingRecordBuilder {
    /// Creates a builder with a clean default record
    pub fn new() -> Self {
        Self {
            driver_id: RecordFixtures::driver_id(),
            distance_km: dec!(1000),
            speeding_incidents: 0,
            hard_braking_events: 0,
            rapid_acceleration_events: 0,
            night_driving_percentage: dec!(0),
        }
    }

    /// Sets the driver identifier
    pub fn with_driver_id(mut self, id: DriverId) -> Self {
        self.driver_id = id;
        self
    }

    /// Sets the distance driven
    pub fn with_distance_km(mut self, distance_km: Decimal) -> Self {
        self.distance_km = distance_km;
        self
    }

    /// Sets the speeding incident count
    pub fn with_speeding_incidents(mut self, count: u32) -> Self {
        self.speeding_incidents = count;
        self
    }

    /// Sets the hard-braking event count
    pub fn with_hard_braking_events(mut self, count: u32) -> Self {
        self.hard_braking_events = count;
        self
    }

    /// Sets the rapid-acceleration event count
    pub fn with_rapid_acceleration_events(mut self, count: u32) -> Self {
        self.rapid_acceleration_events = count;
        self
    }

    /// Sets the night-driving percentage (0-100 scale)
    pub fn with_night_driving_percentage(mut self, percentage: Decimal) -> Self {
        self.night_driving_percentage = percentage;
        self
    }

    /// Builds the record, panicking on invalid test data
    pub fn build(self) -> DrivingRecord {
        DrivingRecord::new(
            self.driver_id,
            self.distance_km,
            self.speeding_incidents,
            self.hard_braking_events,
            self.rapid_acceleration_events,
            self.night_driving_percentage,
        )
        .expect("builder produced an invalid record")
    }
}
