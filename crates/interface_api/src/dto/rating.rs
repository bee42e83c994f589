//! Rating DTOs
//!
//! Inbound telematics numbers arrive as JSON floats. They are converted to
//! `Decimal` before touching the domain; the conversion rejects anything
//! that is not a finite number, so NaN and infinity can never reach the
//! engine. The `validator` ranges catch obvious out-of-domain values at the
//! HTTP boundary, while `DrivingRecord::new` stays the authoritative check.

use core_kernel::DriverId;
use domain_rating::{DrivingRecord, PremiumQuote, RatingError, SafetyScore};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body for quote and score endpoints
#[derive(Debug, Deserialize, Validate)]
pub struct RatingRequest {
    #[validate(length(min = 1, message = "driver_id must not be empty"))]
    pub driver_id: String,
    #[validate(range(min = 0.0, message = "distance_km must be non-negative"))]
    pub distance_km: f64,
    pub speeding_incidents: u32,
    pub hard_braking_events: u32,
    pub rapid_acceleration_events: u32,
    #[validate(range(
        min = 0.0,
        max = 100.0,
        message = "night_driving_percentage must be between 0 and 100"
    ))]
    pub night_driving_percentage: f64,
}

impl RatingRequest {
    /// Converts the raw request into a validated domain record
    pub fn into_record(self) -> Result<DrivingRecord, RatingError> {
        let driver_id = DriverId::new(self.driver_id)
            .map_err(|_| RatingError::MissingRequiredField("driver_id".to_string()))?;

        DrivingRecord::new(
            driver_id,
            decimal_field(self.distance_km, "distance_km")?,
            self.speeding_incidents,
            self.hard_braking_events,
            self.rapid_acceleration_events,
            decimal_field(self.night_driving_percentage, "night_driving_percentage")?,
        )
    }
}

/// Converts a JSON float to a decimal, rejecting non-finite values
fn decimal_field(value: f64, field: &'static str) -> Result<Decimal, RatingError> {
    Decimal::try_from(value).map_err(|_| RatingError::NotFinite { field })
}

/// Echo of the normalized inputs used in a quote
#[derive(Debug, Serialize)]
pub struct RiskSummaryDto {
    pub distance_km: Decimal,
    pub speeding_incidents: u32,
    pub hard_braking_events: u32,
    pub rapid_acceleration_events: u32,
    pub night_driving_fraction: Decimal,
}

/// Response body for the quote endpoint
#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub driver_id: String,
    pub currency: String,
    pub base_premium: Decimal,
    pub behavioral_cost: Decimal,
    pub night_driving_uplift: Decimal,
    pub calculated_premium: Decimal,
    pub safety_score: u8,
    pub risk_summary: RiskSummaryDto,
}

impl QuoteResponse {
    /// Builds the response from the engine outputs
    pub fn from_outputs(quote: PremiumQuote, score: SafetyScore) -> Self {
        Self {
            driver_id: quote.driver_id.to_string(),
            currency: quote.calculated_premium.currency().to_string(),
            base_premium: quote.base_premium.amount(),
            behavioral_cost: quote.behavioral_cost.amount(),
            night_driving_uplift: quote.night_driving_uplift.amount(),
            calculated_premium: quote.calculated_premium.amount(),
            safety_score: score.value(),
            risk_summary: RiskSummaryDto {
                distance_km: quote.risk_summary.distance_km,
                speeding_incidents: quote.risk_summary.speeding_incidents,
                hard_braking_events: quote.risk_summary.hard_braking_events,
                rapid_acceleration_events: quote.risk_summary.rapid_acceleration_events,
                night_driving_fraction: quote.risk_summary.night_driving_fraction,
            },
        }
    }
}

/// Response body for the score endpoint
#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    pub driver_id: String,
    pub score: u8,
    pub deductions: ScoreDeductionsDto,
}

/// Per-component deductions behind a score
#[derive(Debug, Serialize)]
pub struct ScoreDeductionsDto {
    pub speeding: Decimal,
    pub hard_braking: Decimal,
    pub rapid_acceleration: Decimal,
    pub distance: Decimal,
    pub night_driving: Decimal,
}

impl ScoreResponse {
    /// Builds the response from the engine output
    pub fn from_output(driver_id: &DriverId, score: SafetyScore) -> Self {
        let deductions = score.deductions();
        Self {
            driver_id: driver_id.to_string(),
            score: score.value(),
            deductions: ScoreDeductionsDto {
                speeding: deductions.speeding,
                hard_braking: deductions.hard_braking,
                rapid_acceleration: deductions.rapid_acceleration,
                distance: deductions.distance,
                night_driving: deductions.night_driving,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn request() -> RatingRequest {
        RatingRequest {
            driver_id: "driver-9".to_string(),
            distance_km: 1500.25,
            speeding_incidents: 2,
            hard_braking_events: 1,
            rapid_acceleration_events: 0,
            night_driving_percentage: 12.5,
        }
    }

    #[test]
    fn test_conversion_to_record() {
        let record = request().into_record().unwrap();

        assert_eq!(record.distance_km(), dec!(1500.25));
        assert_eq!(record.night_driving_percentage(), dec!(12.5));
    }

    #[test]
    fn test_nan_distance_rejected() {
        let mut req = request();
        req.distance_km = f64::NAN;

        assert_eq!(
            req.into_record(),
            Err(RatingError::NotFinite { field: "distance_km" })
        );
    }

    #[test]
    fn test_infinite_percentage_rejected() {
        let mut req = request();
        req.night_driving_percentage = f64::INFINITY;

        assert_eq!(
            req.into_record(),
            Err(RatingError::NotFinite {
                field: "night_driving_percentage"
            })
        );
    }

    #[test]
    fn test_blank_driver_id_rejected() {
        let mut req = request();
        req.driver_id = "  ".to_string();

        assert!(matches!(
            req.into_record(),
            Err(RatingError::MissingRequiredField(_))
        ));
    }

    #[test]
    fn test_validator_flags_out_of_range_percentage() {
        let mut req = request();
        req.night_driving_percentage = 140.0;

        assert!(validator::Validate::validate(&req).is_err());
    }
}
