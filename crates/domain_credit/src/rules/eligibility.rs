//! Hard eligibility gates
//!
//! These rules can reject outright and never touch the offer.

use std::collections::BTreeSet;

use domain_client::Client;
use crate::config::{
    DEFAULT_ALLOWED_REGIONS, DEFAULT_MAX_AGE, DEFAULT_MIN_AGE, DEFAULT_MIN_INCOME,
    DEFAULT_MIN_SCORE,
};
use crate::credit::Credit;
use super::{CreditRule, RuleResult};

/// Client age must fall within an inclusive range
#[derive(Debug, Clone)]
pub struct AgeRule {
    min_age: u32,
    max_age: u32,
}

impl AgeRule {
    pub const PRIORITY: i32 = 100;

    pub fn new(min_age: u32, max_age: u32) -> Self {
        Self { min_age, max_age }
    }
}

impl Default for AgeRule {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_AGE, DEFAULT_MAX_AGE)
    }
}

impl CreditRule for AgeRule {
    fn name(&self) -> &'static str {
        "age"
    }

    fn priority(&self) -> i32 {
        Self::PRIORITY
    }

    fn evaluate(&self, client: &Client, _credit: &Credit) -> RuleResult {
        if !client.is_age_in_range(self.min_age, self.max_age) {
            return RuleResult::fail(format!(
                "Age must be between {} and {}",
                self.min_age, self.max_age
            ));
        }
        RuleResult::pass("Age requirement met")
    }
}

/// Credit score must be strictly above a minimum
#[derive(Debug, Clone)]
pub struct CreditScoreRule {
    minimum: u32,
}

impl CreditScoreRule {
    pub const PRIORITY: i32 = 90;

    pub fn new(minimum: u32) -> Self {
        Self { minimum }
    }
}

impl Default for CreditScoreRule {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_SCORE)
    }
}

impl CreditRule for CreditScoreRule {
    fn name(&self) -> &'static str {
        "credit_score"
    }

    fn priority(&self) -> i32 {
        Self::PRIORITY
    }

    fn evaluate(&self, client: &Client, _credit: &Credit) -> RuleResult {
        if !client.has_minimum_score(self.minimum) {
            return RuleResult::fail(format!(
                "Credit score must be greater than {}",
                self.minimum
            ));
        }
        RuleResult::pass("Credit score requirement met")
    }
}

/// Monthly income must reach a minimum
#[derive(Debug, Clone)]
pub struct IncomeRule {
    minimum: u64,
}

impl IncomeRule {
    pub const PRIORITY: i32 = 80;

    pub fn new(minimum: u64) -> Self {
        Self { minimum }
    }
}

impl Default for IncomeRule {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_INCOME)
    }
}

impl CreditRule for IncomeRule {
    fn name(&self) -> &'static str {
        "income"
    }

    fn priority(&self) -> i32 {
        Self::PRIORITY
    }

    fn evaluate(&self, client: &Client, _credit: &Credit) -> RuleResult {
        if !client.has_minimum_income(self.minimum) {
            return RuleResult::fail(format!(
                "Monthly income must be at least ${}",
                self.minimum
            ));
        }
        RuleResult::pass("Income requirement met")
    }
}

/// Client region must be on the allow-list
#[derive(Debug, Clone)]
pub struct RegionRule {
    allowed: BTreeSet<String>,
}

impl RegionRule {
    pub const PRIORITY: i32 = 70;

    pub fn new<I, S>(allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed: allowed.into_iter().map(Into::into).collect(),
        }
    }

    pub fn allowed_regions(&self) -> impl Iterator<Item = &str> {
        self.allowed.iter().map(String::as_str)
    }
}

impl Default for RegionRule {
    fn default() -> Self {
        Self::new(DEFAULT_ALLOWED_REGIONS.iter().copied())
    }
}

impl CreditRule for RegionRule {
    fn name(&self) -> &'static str {
        "region"
    }

    fn priority(&self) -> i32 {
        Self::PRIORITY
    }

    fn evaluate(&self, client: &Client, _credit: &Credit) -> RuleResult {
        if !self.allowed.contains(client.region().code()) {
            return RuleResult::fail("Credit not available in your region");
        }
        RuleResult::pass("Region requirement met")
    }
}
