//! API configuration
//!
//! Server settings and the rating tariff both load from the environment at
//! startup. The tariff is converted into validated `RiskFactors` exactly
//! once; a bad tariff aborts the process before the server binds.

use core_kernel::{Currency, Money};
use domain_rating::{RatingError, RiskFactors};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;

/// API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Log level
    pub log_level: String,
    /// Rating tariff
    #[serde(default)]
    pub rating: RatingConfig,
}

/// Rating tariff as raw configuration values
///
/// Kept separate from `RiskFactors` so the config layer can deserialize
/// freely; invariants are enforced when `risk_factors()` converts it.
#[derive(Debug, Clone, Deserialize)]
pub struct RatingConfig {
    #[serde(default = "defaults::currency")]
    pub currency: Currency,
    #[serde(default = "defaults::base_premium")]
    pub base_premium: Decimal,
    #[serde(default = "defaults::distance_cost_per_km")]
    pub distance_cost_per_km: Decimal,
    #[serde(default = "defaults::speeding_incident_cost")]
    pub speeding_incident_cost: Decimal,
    #[serde(default = "defaults::hard_braking_cost")]
    pub hard_braking_cost: Decimal,
    #[serde(default = "defaults::rapid_acceleration_cost")]
    pub rapid_acceleration_cost: Decimal,
    #[serde(default = "defaults::night_driving_multiplier")]
    pub night_driving_multiplier: Decimal,
}

/// Standard reference tariff values, applied field by field so a deployment
/// can override just the knob it cares about
mod defaults {
    use super::*;

    pub fn currency() -> Currency {
        Currency::USD
    }
    pub fn base_premium() -> Decimal {
        dec!(2500.00)
    }
    pub fn distance_cost_per_km() -> Decimal {
        dec!(0.05)
    }
    pub fn speeding_incident_cost() -> Decimal {
        dec!(50.00)
    }
    pub fn hard_braking_cost() -> Decimal {
        dec!(30.00)
    }
    pub fn rapid_acceleration_cost() -> Decimal {
        dec!(25.00)
    }
    pub fn night_driving_multiplier() -> Decimal {
        dec!(1.5)
    }
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self {
            currency: defaults::currency(),
            base_premium: defaults::base_premium(),
            distance_cost_per_km: defaults::distance_cost_per_km(),
            speeding_incident_cost: defaults::speeding_incident_cost(),
            hard_braking_cost: defaults::hard_braking_cost(),
            rapid_acceleration_cost: defaults::rapid_acceleration_cost(),
            night_driving_multiplier: defaults::night_driving_multiplier(),
        }
    }
}

impl RatingConfig {
    /// Converts the raw values into a validated tariff
    ///
    /// # Errors
    ///
    /// Returns a configuration error for negative costs or a multiplier
    /// below 1; callers must treat this as fatal at startup.
    pub fn risk_factors(&self) -> Result<RiskFactors, RatingError> {
        RiskFactors::new(
            Money::new(self.base_premium, self.currency),
            Money::new(self.distance_cost_per_km, self.currency),
            Money::new(self.speeding_incident_cost, self.currency),
            Money::new(self.hard_braking_cost, self.currency),
            Money::new(self.rapid_acceleration_cost, self.currency),
            self.night_driving_multiplier,
        )
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            log_level: "info".to_string(),
            rating: RatingConfig::default(),
        }
    }
}

impl ApiConfig {
    /// Loads configuration from environment
    ///
    /// Variables use the `API_` prefix with `__` as the nesting separator,
    /// e.g. `API_PORT=8080` or `API_RATING__NIGHT_DRIVING_MULTIPLIER=1.5`.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .set_default("host", "0.0.0.0")?
            .set_default("port", 8080)?
            .set_default("log_level", "info")?
            .add_source(
                config::Environment::with_prefix("API")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
