//! Scriptable Rules
//!
//! Rules with a fixed outcome for exercising the orchestrator without
//! depending on the standard rule set.

use rust_decimal::Decimal;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use domain_client::Client;
use domain_credit::{Credit, CreditRule, RuleResult};

#[derive(Debug, Clone)]
enum Outcome {
    Pass,
    Fail,
    Reprice(Decimal),
    RepriceThenFail(Decimal),
}

/// A rule that returns a preset outcome and counts its invocations
#[derive(Debug, Clone)]
pub struct StubRule {
    name: &'static str,
    priority: i32,
    outcome: Outcome,
    calls: Arc<AtomicUsize>,
    seen_rates: Arc<Mutex<Vec<Decimal>>>,
}

impl StubRule {
    fn with_outcome(name: &'static str, priority: i32, outcome: Outcome) -> Self {
        Self {
            name,
            priority,
            outcome,
            calls: Arc::new(AtomicUsize::new(0)),
            seen_rates: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Always passes with reason `"<name> passed"`
    pub fn passing(name: &'static str, priority: i32) -> Self {
        Self::with_outcome(name, priority, Outcome::Pass)
    }

    /// Always fails with reason `"<name> failed"`
    pub fn failing(name: &'static str, priority: i32) -> Self {
        Self::with_outcome(name, priority, Outcome::Fail)
    }

    /// Passes and adds `adjustment` points to the incoming rate
    pub fn repricing(name: &'static str, priority: i32, adjustment: Decimal) -> Self {
        Self::with_outcome(name, priority, Outcome::Reprice(adjustment))
    }

    /// Fails with reason `"<name> failed"` while still returning a repriced offer
    pub fn failing_with_offer(name: &'static str, priority: i32, adjustment: Decimal) -> Self {
        Self::with_outcome(name, priority, Outcome::RepriceThenFail(adjustment))
    }

    /// Number of times `evaluate` ran, shared across clones
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Rates of the offers this rule was handed, in call order
    pub fn seen_rates(&self) -> Vec<Decimal> {
        self.seen_rates
            .lock()
            .map(|rates| rates.clone())
            .unwrap_or_default()
    }
}

impl CreditRule for StubRule {
    fn name(&self) -> &'static str {
        self.name
    }

    fn priority(&self) -> i32 {
        self.priority
    }

    fn evaluate(&self, _client: &Client, credit: &Credit) -> RuleResult {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut rates) = self.seen_rates.lock() {
            rates.push(credit.rate().value());
        }

        match &self.outcome {
            Outcome::Pass => RuleResult::pass(format!("{} passed", self.name)),
            Outcome::Fail => RuleResult::fail(format!("{} failed", self.name)),
            Outcome::Reprice(adjustment) => match credit.with_adjusted_rate(*adjustment) {
                Ok(adjusted) => {
                    RuleResult::pass_with_credit(format!("{} repriced", self.name), adjusted)
                }
                Err(_) => RuleResult::pass(format!("{} skipped", self.name)),
            },
            Outcome::RepriceThenFail(adjustment) => RuleResult {
                passed: false,
                reason: format!("{} failed", self.name),
                modified_credit: credit.with_adjusted_rate(*adjustment).ok(),
            },
        }
    }
}
