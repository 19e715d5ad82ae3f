//! Credit approval rules
//!
//! A rule answers one question about a (client, offer) pair. Rules never
//! raise errors for a negative answer: rejection is an ordinary
//! [`RuleResult`] carrying the reason shown to the client.
//!
//! # Standard rules
//!
//! | Rule | Priority | Can reject | Can reprice |
//! |------|----------|------------|-------------|
//! | [`AgeRule`] | 100 | yes | no |
//! | [`CreditScoreRule`] | 90 | yes | no |
//! | [`IncomeRule`] | 80 | yes | no |
//! | [`RegionRule`] | 70 | yes | no |
//! | [`RegionalRandomRejectionRule`] | 60 | randomly | no |
//! | [`RegionalRateSurchargeRule`] | 50 | no | yes |

use std::fmt::Debug;

use domain_client::Client;
use crate::credit::Credit;

mod eligibility;
mod regional;
mod random;

pub use eligibility::{AgeRule, CreditScoreRule, IncomeRule, RegionRule};
pub use regional::{RegionalRandomRejectionRule, RegionalRateSurchargeRule};
pub use random::{RandomSource, ThreadRandom, FixedRandom, SeededRandom};

/// One eligibility or pricing check
///
/// Implementations must not depend on anything but their own configuration
/// and the two arguments (the randomized rule additionally draws from its
/// injected [`RandomSource`]), and must always return a non-empty reason.
pub trait CreditRule: Send + Sync + Debug {
    /// Stable identifier used in logs
    fn name(&self) -> &'static str;

    /// Higher priorities run first
    fn priority(&self) -> i32;

    /// Evaluates the rule against the current offer
    fn evaluate(&self, client: &Client, credit: &Credit) -> RuleResult;
}

/// Outcome of a single rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleResult {
    /// Whether the rule let the application through
    pub passed: bool,
    /// Human-readable explanation, recorded for passes as well as failures
    pub reason: String,
    /// Replacement offer for the rest of the pipeline; ignored on failure
    pub modified_credit: Option<Credit>,
}

impl RuleResult {
    /// A pass that leaves the offer unchanged
    pub fn pass(reason: impl Into<String>) -> Self {
        Self {
            passed: true,
            reason: reason.into(),
            modified_credit: None,
        }
    }

    /// A pass that replaces the offer seen by later rules
    pub fn pass_with_credit(reason: impl Into<String>, credit: Credit) -> Self {
        Self {
            passed: true,
            reason: reason.into(),
            modified_credit: Some(credit),
        }
    }

    pub fn fail(reason: impl Into<String>) -> Self {
        Self {
            passed: false,
            reason: reason.into(),
            modified_credit: None,
        }
    }
}
