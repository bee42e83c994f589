//! Driving record input value object
//!
//! A `DrivingRecord` carries one rating period of telematics statistics for
//! a single driver. Records are validated at construction and immutable
//! afterwards; the engine can therefore assume every field is in range.
//!
//! Non-finite floating-point inputs (NaN, infinity) cannot reach this type:
//! `rust_decimal` has no representation for them, so the transport layer's
//! float-to-decimal conversion rejects them before a record is built.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use core_kernel::DriverId;

use crate::error::RatingError;

/// One rating period of driving statistics for a single driver
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrivingRecord {
    driver_id: DriverId,
    distance_km: Decimal,
    speeding_incidents: u32,
    hard_braking_events: u32,
    rapid_acceleration_events: u32,
    night_driving_percentage: Decimal,
}

impl DrivingRecord {
    /// Creates a validated driving record
    ///
    /// # Arguments
    ///
    /// * `driver_id` - Opaque driver identifier
    /// * `distance_km` - Total distance driven in the rating period
    /// * `speeding_incidents` - Count of speeding events
    /// * `hard_braking_events` - Count of hard-braking events
    /// * `rapid_acceleration_events` - Count of rapid-acceleration events
    /// * `night_driving_percentage` - Share of night driving on the 0-100 scale
    ///
    /// # Errors
    ///
    /// Returns a validation error if `distance_km` is negative or
    /// `night_driving_percentage` falls outside [0, 100]. Values are
    /// rejected, never clamped.
    pub fn new(
        driver_id: DriverId,
        distance_km: Decimal,
        speeding_incidents: u32,
        hard_braking_events: u32,
        rapid_acceleration_events: u32,
        night_driving_percentage: Decimal,
    ) -> Result<Self, RatingError> {
        if distance_km.is_sign_negative() && !distance_km.is_zero() {
            return Err(RatingError::negative("distance_km", distance_km));
        }
        if night_driving_percentage < dec!(0) || night_driving_percentage > dec!(100) {
            return Err(RatingError::PercentageOutOfRange {
                value: night_driving_percentage,
            });
        }

        Ok(Self {
            driver_id,
            distance_km,
            speeding_incidents,
            hard_braking_events,
            rapid_acceleration_events,
            night_driving_percentage,
        })
    }

    /// Returns the driver identifier
    pub fn driver_id(&self) -> &DriverId {
        &self.driver_id
    }

    /// Returns the distance driven in kilometres
    pub fn distance_km(&self) -> Decimal {
        self.distance_km
    }

    /// Returns the speeding incident count
    pub fn speeding_incidents(&self) -> u32 {
        self.speeding_incidents
    }

    /// Returns the hard-braking event count
    pub fn hard_braking_events(&self) -> u32 {
        self.hard_braking_events
    }

    /// Returns the rapid-acceleration event count
    pub fn rapid_acceleration_events(&self) -> u32 {
        self.rapid_acceleration_events
    }

    /// Returns the night-driving share on the 0-100 scale
    pub fn night_driving_percentage(&self) -> Decimal {
        self.night_driving_percentage
    }

    /// Returns the night-driving share normalized to a 0-1 fraction
    ///
    /// This is the weight applied to the behavioral-cost uplift.
    pub fn night_driving_fraction(&self) -> Decimal {
        self.night_driving_percentage / dec!(100)
    }
}
