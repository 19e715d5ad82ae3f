//! Credit approval orchestration
//!
//! [`CreditApprovalService`] owns an ordered list of rules and turns a
//! (client, offer) pair into an [`ApprovalResult`]:
//!
//! 1. Rules run in descending priority; equal priorities keep insertion order.
//! 2. Every evaluated rule contributes exactly one reason.
//! 3. The first failing rule ends the run; nothing after it executes.
//! 4. A passing rule may replace the offer; later rules see the replacement.
//!
//! The service is assembled once and then shared immutably (typically
//! behind an `Arc`). Registering rules needs `&mut self`, so the rule set
//! cannot change while an evaluation holds a shared reference.

use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::sync::Arc;
use tracing::{debug, info, instrument};

use domain_client::Client;
use crate::config::RuleConfig;
use crate::credit::Credit;
use crate::rules::{
    AgeRule, CreditRule, CreditScoreRule, IncomeRule, RandomSource, RegionRule,
    RegionalRandomRejectionRule, RegionalRateSurchargeRule,
};

/// Final decision for one (client, offer) evaluation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApprovalResult {
    pub approved: bool,
    /// One reason per evaluated rule, in evaluation order
    pub reasons: Vec<String>,
    /// The offer after all repricing; present only when approved
    pub final_credit: Option<Credit>,
}

impl ApprovalResult {
    pub fn approved(reasons: Vec<String>, final_credit: Credit) -> Self {
        Self {
            approved: true,
            reasons,
            final_credit: Some(final_credit),
        }
    }

    pub fn rejected(reasons: Vec<String>) -> Self {
        Self {
            approved: false,
            reasons,
            final_credit: None,
        }
    }
}

/// Sequences credit rules and aggregates their outcomes
#[derive(Debug, Default)]
pub struct CreditApprovalService {
    rules: Vec<Box<dyn CreditRule>>,
}

impl CreditApprovalService {
    /// Creates a service with no rules; it approves everything unchanged
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Assembles the six standard rules from `config`
    pub fn with_default_rules(config: &RuleConfig, random: Arc<dyn RandomSource>) -> Self {
        Self::new()
            .with_rule(AgeRule::new(config.min_age, config.max_age))
            .with_rule(CreditScoreRule::new(config.min_score))
            .with_rule(IncomeRule::new(config.min_income))
            .with_rule(RegionRule::new(config.allowed_regions.iter().cloned()))
            .with_rule(RegionalRandomRejectionRule::from_config(
                &config.random_rejection,
                random,
            ))
            .with_rule(RegionalRateSurchargeRule::from_config(&config.rate_surcharge))
    }

    /// Adds a rule and restores priority order
    pub fn add_rule<R: CreditRule + 'static>(&mut self, rule: R) {
        self.add_boxed_rule(Box::new(rule));
    }

    pub fn add_boxed_rule(&mut self, rule: Box<dyn CreditRule>) {
        self.rules.push(rule);
        // sort_by_key is stable: equal priorities keep insertion order
        self.rules.sort_by_key(|r| Reverse(r.priority()));
    }

    /// Builder-style variant of [`add_rule`](Self::add_rule)
    pub fn with_rule<R: CreditRule + 'static>(mut self, rule: R) -> Self {
        self.add_rule(rule);
        self
    }

    /// Rule names in evaluation order
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Runs the rule pipeline for one client and offer
    #[instrument(skip_all, fields(client_id = %client.id(), credit_id = %credit.id()))]
    pub fn evaluate(&self, client: &Client, credit: &Credit) -> ApprovalResult {
        let mut current = credit.clone();
        let mut reasons = Vec::with_capacity(self.rules.len());

        for rule in &self.rules {
            let result = rule.evaluate(client, &current);
            debug!(
                rule = rule.name(),
                priority = rule.priority(),
                passed = result.passed,
                reason = %result.reason,
                "Rule evaluated"
            );
            reasons.push(result.reason);

            if !result.passed {
                info!(rule = rule.name(), evaluated = reasons.len(), "Credit rejected");
                return ApprovalResult::rejected(reasons);
            }

            if let Some(modified) = result.modified_credit {
                current = modified;
            }
        }

        info!(evaluated = reasons.len(), final_rate = %current.rate(), "Credit approved");
        ApprovalResult::approved(reasons, current)
    }
}
