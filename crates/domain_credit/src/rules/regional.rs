//! Region-specific soft rules
//!
//! Neither rule here is a deterministic gate: one rejects at random in a
//! designated high-risk region, the other only reprices offers.

use rust_decimal::Decimal;
use std::sync::Arc;

use domain_client::Client;
use crate::config::{RandomRejectionConfig, RateSurchargeConfig};
use crate::credit::Credit;
use super::random::RandomSource;
use super::{CreditRule, RuleResult};

/// Rejects half of the applications from one region
#[derive(Debug, Clone)]
pub struct RegionalRandomRejectionRule {
    enabled: bool,
    region_code: String,
    region_name: String,
    random: Arc<dyn RandomSource>,
}

impl RegionalRandomRejectionRule {
    pub const PRIORITY: i32 = 60;

    pub fn new(
        enabled: bool,
        region_code: impl Into<String>,
        region_name: impl Into<String>,
        random: Arc<dyn RandomSource>,
    ) -> Self {
        Self {
            enabled,
            region_code: region_code.into(),
            region_name: region_name.into(),
            random,
        }
    }

    pub fn from_config(config: &RandomRejectionConfig, random: Arc<dyn RandomSource>) -> Self {
        Self::new(
            config.enabled,
            config.region_code.clone(),
            config.region_name.clone(),
            random,
        )
    }
}

impl CreditRule for RegionalRandomRejectionRule {
    fn name(&self) -> &'static str {
        "regional_random_rejection"
    }

    fn priority(&self) -> i32 {
        Self::PRIORITY
    }

    fn evaluate(&self, client: &Client, _credit: &Credit) -> RuleResult {
        if !self.enabled {
            return RuleResult::pass(format!("{} random rejection disabled", self.region_name));
        }

        // Only clients from the designated region consume a draw
        if client.is_from_region(&self.region_code) && self.random.coin_flip() {
            return RuleResult::fail(format!("Random rejection for {} region", self.region_name));
        }

        RuleResult::pass(format!("{} random check passed", self.region_name))
    }
}

/// Adds a fixed number of percentage points to the rate in one region
///
/// Always passes. If the surcharge would push the rate out of the valid
/// range, the offer is left untouched.
#[derive(Debug, Clone)]
pub struct RegionalRateSurchargeRule {
    region_code: String,
    region_name: String,
    rate_increase: Decimal,
}

impl RegionalRateSurchargeRule {
    pub const PRIORITY: i32 = 50;

    pub fn new(
        region_code: impl Into<String>,
        region_name: impl Into<String>,
        rate_increase: Decimal,
    ) -> Self {
        Self {
            region_code: region_code.into(),
            region_name: region_name.into(),
            rate_increase,
        }
    }

    pub fn from_config(config: &RateSurchargeConfig) -> Self {
        Self::new(
            config.region_code.clone(),
            config.region_name.clone(),
            config.rate_increase,
        )
    }
}

impl Default for RegionalRateSurchargeRule {
    fn default() -> Self {
        Self::from_config(&RateSurchargeConfig::default())
    }
}

impl CreditRule for RegionalRateSurchargeRule {
    fn name(&self) -> &'static str {
        "regional_rate_surcharge"
    }

    fn priority(&self) -> i32 {
        Self::PRIORITY
    }

    fn evaluate(&self, client: &Client, credit: &Credit) -> RuleResult {
        if !client.is_from_region(&self.region_code) {
            return RuleResult::pass("No rate adjustment needed");
        }

        match credit.with_adjusted_rate(self.rate_increase) {
            Ok(adjusted) => RuleResult::pass_with_credit(
                format!(
                    "Rate increased by {}% for {} region",
                    self.rate_increase.normalize(),
                    self.region_name
                ),
                adjusted,
            ),
            Err(err) => {
                tracing::warn!(
                    credit_id = %credit.id(),
                    rate = %credit.rate(),
                    increase = %self.rate_increase,
                    error = %err,
                    "Rate surcharge skipped"
                );
                RuleResult::pass("Rate adjustment skipped: adjusted rate out of range")
            }
        }
    }
}
