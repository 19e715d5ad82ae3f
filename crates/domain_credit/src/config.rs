//! Rule configuration
//!
//! All policy parameters are injected once, when the approval service is
//! assembled. Rules never consult configuration during evaluation.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::CreditError;

pub const DEFAULT_MIN_AGE: u32 = 18;
pub const DEFAULT_MAX_AGE: u32 = 60;
pub const DEFAULT_MIN_SCORE: u32 = 500;
pub const DEFAULT_MIN_INCOME: u64 = 1000;
pub const DEFAULT_ALLOWED_REGIONS: [&str; 3] = ["PR", "BR", "OS"];

/// Parameters for the six standard rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleConfig {
    /// Youngest eligible age, inclusive
    pub min_age: u32,
    /// Oldest eligible age, inclusive
    pub max_age: u32,
    /// Scores must be strictly greater than this
    pub min_score: u32,
    /// Minimum monthly income, inclusive
    pub min_income: u64,
    /// Region codes where credit is offered
    pub allowed_regions: Vec<String>,
    pub random_rejection: RandomRejectionConfig,
    pub rate_surcharge: RateSurchargeConfig,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            min_age: DEFAULT_MIN_AGE,
            max_age: DEFAULT_MAX_AGE,
            min_score: DEFAULT_MIN_SCORE,
            min_income: DEFAULT_MIN_INCOME,
            allowed_regions: DEFAULT_ALLOWED_REGIONS.iter().map(|r| r.to_string()).collect(),
            random_rejection: RandomRejectionConfig::default(),
            rate_surcharge: RateSurchargeConfig::default(),
        }
    }
}

impl RuleConfig {
    /// Checks that the parameters describe a usable policy
    pub fn validate(&self) -> Result<(), CreditError> {
        if self.min_age > self.max_age {
            return Err(CreditError::configuration(format!(
                "min_age ({}) must not exceed max_age ({})",
                self.min_age, self.max_age
            )));
        }

        if self.allowed_regions.iter().all(|r| r.trim().is_empty()) {
            return Err(CreditError::configuration(
                "at least one allowed region is required",
            ));
        }

        if self.random_rejection.region_code.trim().is_empty() {
            return Err(CreditError::configuration(
                "random rejection region code cannot be empty",
            ));
        }

        if self.rate_surcharge.region_code.trim().is_empty() {
            return Err(CreditError::configuration(
                "rate surcharge region code cannot be empty",
            ));
        }

        Ok(())
    }
}

/// Randomized rejection in the high-risk region
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RandomRejectionConfig {
    pub enabled: bool,
    pub region_code: String,
    /// Name used in reasons, e.g. "Prague"
    pub region_name: String,
}

impl Default for RandomRejectionConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            region_code: "PR".to_string(),
            region_name: "Prague".to_string(),
        }
    }
}

/// Rate surcharge in the surcharge region
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RateSurchargeConfig {
    pub region_code: String,
    /// Name used in reasons, e.g. "Ostrava"
    pub region_name: String,
    /// Percentage points added to the offer rate
    pub rate_increase: Decimal,
}

impl Default for RateSurchargeConfig {
    fn default() -> Self {
        Self {
            region_code: "OS".to_string(),
            region_name: "Ostrava".to_string(),
            rate_increase: dec!(5.0),
        }
    }
}
