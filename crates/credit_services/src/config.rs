//! Application configuration

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;

use domain_credit::config::{
    DEFAULT_ALLOWED_REGIONS, DEFAULT_MAX_AGE, DEFAULT_MIN_AGE, DEFAULT_MIN_INCOME, DEFAULT_MIN_SCORE,
};
use domain_credit::RuleConfig;

use crate::error::ServiceError;

/// Environment variable prefix, e.g. `CREDIT_MIN_AGE`
pub const ENV_PREFIX: &str = "CREDIT";

/// Engine configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Youngest eligible age, inclusive
    pub min_age: u32,
    /// Oldest eligible age, inclusive
    pub max_age: u32,
    /// Score the client must strictly exceed
    pub min_score: u32,
    /// Minimum monthly income
    pub min_income: u64,
    /// Comma-separated region codes
    pub allowed_regions: String,
    /// Enables the randomized rejection in the high-risk region
    #[serde(alias = "prague_random_rejection")]
    pub random_rejection: bool,
    /// Enables approval and rejection notifications
    pub notifications_enabled: bool,
    /// Percentage points added in the surcharge region
    #[serde(alias = "ostrava_rate_increase")]
    pub surcharge_rate: Decimal,
    /// Log level: trace, debug, info, warn, error
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            min_age: DEFAULT_MIN_AGE,
            max_age: DEFAULT_MAX_AGE,
            min_score: DEFAULT_MIN_SCORE,
            min_income: DEFAULT_MIN_INCOME,
            allowed_regions: DEFAULT_ALLOWED_REGIONS.join(","),
            random_rejection: true,
            notifications_enabled: true,
            surcharge_rate: dec!(5.0),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from `CREDIT_*` environment variables
    ///
    /// Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, ServiceError> {
        Self::from_environment(config::Environment::with_prefix(ENV_PREFIX))
    }

    /// Loads configuration from an explicit environment source
    pub fn from_environment(environment: config::Environment) -> Result<Self, ServiceError> {
        let config: Self = config::Config::builder()
            .add_source(environment)
            .build()?
            .try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Allowed region codes, trimmed, blanks dropped
    pub fn region_list(&self) -> Vec<String> {
        self.allowed_regions
            .split(',')
            .map(str::trim)
            .filter(|code| !code.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Builds the rule configuration for the approval service
    pub fn rule_config(&self) -> RuleConfig {
        let mut rules = RuleConfig {
            min_age: self.min_age,
            max_age: self.max_age,
            min_score: self.min_score,
            min_income: self.min_income,
            allowed_regions: self.region_list(),
            ..RuleConfig::default()
        };
        rules.random_rejection.enabled = self.random_rejection;
        rules.rate_surcharge.rate_increase = self.surcharge_rate;
        rules
    }

    /// Checks that the values describe a usable policy
    pub fn validate(&self) -> Result<(), ServiceError> {
        self.rule_config()
            .validate()
            .map_err(|err| ServiceError::configuration(err.to_string()))
    }
}
