//! Credit Approval Service Tests
//!
//! Exercises the orchestrator with scripted rules (ordering, short-circuit,
//! offer propagation) and with the standard rule set (end-to-end decisions).

use proptest::prelude::*;
use rust_decimal_macros::dec;
use std::sync::Arc;

use domain_credit::{
    ApprovalResult, CreditApprovalService, FixedRandom, RuleConfig, SeededRandom,
};
use test_utils::{
    assert_approved_at_rate, assert_rejected_with, client_strategy, priorities_strategy,
    ClientFixtures, CreditFixtures, ServiceFixtures, StubRule, TestClientBuilder,
};

// ============================================================================
// RULE ORDERING
// ============================================================================

mod ordering {
    use super::*;

    #[test]
    fn test_rules_sorted_by_descending_priority() {
        let service = CreditApprovalService::new()
            .with_rule(StubRule::passing("low", 10))
            .with_rule(StubRule::passing("high", 90))
            .with_rule(StubRule::passing("mid", 50));

        assert_eq!(service.rule_names(), vec!["high", "mid", "low"]);
    }

    #[test]
    fn test_equal_priorities_keep_insertion_order() {
        let service = CreditApprovalService::new()
            .with_rule(StubRule::passing("first", 5))
            .with_rule(StubRule::passing("other", 7))
            .with_rule(StubRule::passing("second", 5))
            .with_rule(StubRule::passing("third", 5));

        assert_eq!(service.rule_names(), vec!["other", "first", "second", "third"]);
    }

    #[test]
    fn test_reasons_follow_evaluation_order() {
        let service = CreditApprovalService::new()
            .with_rule(StubRule::passing("b", 1))
            .with_rule(StubRule::passing("a", 2));

        let result = service.evaluate(&ClientFixtures::eligible(), &CreditFixtures::personal_loan());
        assert_eq!(result.reasons, vec!["a passed", "b passed"]);
    }

    #[test]
    fn test_default_rules_order() {
        let service = ServiceFixtures::lenient();
        assert_eq!(
            service.rule_names(),
            vec![
                "age",
                "credit_score",
                "income",
                "region",
                "regional_random_rejection",
                "regional_rate_surcharge",
            ]
        );
        assert_eq!(service.len(), 6);
    }

    const NAMES: [&str; 12] = [
        "r0", "r1", "r2", "r3", "r4", "r5", "r6", "r7", "r8", "r9", "r10", "r11",
    ];

    proptest! {
        #[test]
        fn prop_order_is_stable_descending(priorities in priorities_strategy()) {
            let mut service = CreditApprovalService::new();
            let mut expected: Vec<(i32, usize)> = Vec::new();
            for (index, priority) in priorities.iter().enumerate() {
                service.add_rule(StubRule::passing(NAMES[index], *priority));
                expected.push((*priority, index));
            }
            expected.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));
            let expected: Vec<&str> = expected.iter().map(|(_, i)| NAMES[*i]).collect();

            prop_assert_eq!(service.rule_names(), expected);

            let result = service.evaluate(&ClientFixtures::eligible(), &CreditFixtures::personal_loan());
            prop_assert!(result.approved);
            prop_assert_eq!(result.reasons.len(), priorities.len());
        }
    }
}

// ============================================================================
// SHORT-CIRCUIT
// ============================================================================

mod short_circuit {
    use super::*;

    #[test]
    fn test_failure_stops_pipeline() {
        let before = StubRule::passing("before", 30);
        let failing = StubRule::failing("gate", 20);
        let after = StubRule::passing("after", 10);

        let service = CreditApprovalService::new()
            .with_rule(before.clone())
            .with_rule(failing.clone())
            .with_rule(after.clone());

        let result = service.evaluate(&ClientFixtures::eligible(), &CreditFixtures::personal_loan());

        assert!(!result.approved);
        assert_eq!(result.reasons, vec!["before passed", "gate failed"]);
        assert_eq!(before.calls(), 1);
        assert_eq!(failing.calls(), 1);
        assert_eq!(after.calls(), 0);
    }

    #[test]
    fn test_rejection_carries_no_offer() {
        let service = CreditApprovalService::new()
            .with_rule(StubRule::repricing("reprice", 20, dec!(1)))
            .with_rule(StubRule::failing("gate", 10));

        let result = service.evaluate(&ClientFixtures::eligible(), &CreditFixtures::personal_loan());
        assert_rejected_with(&result, "gate failed");
    }

    #[test]
    fn test_offer_from_failing_rule_is_discarded() {
        let after = StubRule::passing("after", 1);
        let service = CreditApprovalService::new()
            .with_rule(StubRule::failing_with_offer("gate", 10, dec!(5)))
            .with_rule(after.clone());

        let result = service.evaluate(&ClientFixtures::eligible(), &CreditFixtures::personal_loan());

        assert!(!result.approved);
        assert_eq!(result.final_credit, None);
        assert_eq!(result.reasons, vec!["gate failed"]);
        assert_eq!(after.calls(), 0);
    }

    #[test]
    fn test_each_evaluated_rule_adds_one_reason() {
        let service = CreditApprovalService::new()
            .with_rule(StubRule::passing("a", 3))
            .with_rule(StubRule::passing("b", 2))
            .with_rule(StubRule::passing("c", 1));

        let result = service.evaluate(&ClientFixtures::eligible(), &CreditFixtures::personal_loan());
        assert_eq!(result.reasons.len(), service.len());
        assert!(result.reasons.iter().all(|r| !r.is_empty()));
    }
}

// ============================================================================
// OFFER PROPAGATION
// ============================================================================

mod offer_propagation {
    use super::*;

    #[test]
    fn test_later_rules_see_repriced_offer() {
        let observer = StubRule::passing("observer", 10);
        let service = CreditApprovalService::new()
            .with_rule(StubRule::repricing("reprice", 20, dec!(2)))
            .with_rule(observer.clone());

        let result = service.evaluate(&ClientFixtures::eligible(), &CreditFixtures::personal_loan());

        assert_eq!(observer.seen_rates(), vec![dec!(12.0)]);
        assert_approved_at_rate(&result, dec!(12.0));
    }

    #[test]
    fn test_repricing_accumulates() {
        let service = CreditApprovalService::new()
            .with_rule(StubRule::repricing("first", 20, dec!(2)))
            .with_rule(StubRule::repricing("second", 10, dec!(3)));

        let result = service.evaluate(&ClientFixtures::eligible(), &CreditFixtures::personal_loan());
        assert_approved_at_rate(&result, dec!(15.0));
    }

    #[test]
    fn test_input_offer_is_not_mutated() {
        let credit = CreditFixtures::personal_loan();
        let service = CreditApprovalService::new()
            .with_rule(StubRule::repricing("reprice", 10, dec!(5)));

        let _ = service.evaluate(&ClientFixtures::eligible(), &credit);
        assert_eq!(credit.rate().value(), dec!(10.0));
    }

    #[test]
    fn test_empty_service_approves_unchanged() {
        let credit = CreditFixtures::personal_loan();
        let result = CreditApprovalService::new().evaluate(&ClientFixtures::eligible(), &credit);

        assert_eq!(result, ApprovalResult::approved(vec![], credit));
    }
}

// ============================================================================
// STANDARD RULE SET
// ============================================================================

mod standard_rules {
    use super::*;

    #[test]
    fn test_eligible_client_approved_at_original_rate() {
        let result = ServiceFixtures::lenient()
            .evaluate(&ClientFixtures::eligible(), &CreditFixtures::personal_loan());

        assert_approved_at_rate(&result, dec!(10.0));
        assert_eq!(
            result.reasons,
            vec![
                "Age requirement met",
                "Credit score requirement met",
                "Income requirement met",
                "Region requirement met",
                "Prague random check passed",
                "No rate adjustment needed",
            ]
        );
    }

    #[test]
    fn test_underage_client_rejected_first() {
        let result = ServiceFixtures::lenient()
            .evaluate(&ClientFixtures::underage(), &CreditFixtures::personal_loan());

        assert_rejected_with(&result, "Age must be between 18 and 60");
        assert_eq!(result.reasons.len(), 1);
    }

    #[test]
    fn test_boundary_score_rejected_after_age() {
        let result = ServiceFixtures::lenient()
            .evaluate(&ClientFixtures::boundary_score(), &CreditFixtures::personal_loan());

        assert_rejected_with(&result, "Credit score must be greater than 500");
        assert_eq!(result.reasons, vec!["Age requirement met", "Credit score must be greater than 500"]);
    }

    #[test]
    fn test_ostrava_client_approved_with_surcharge() {
        let result = ServiceFixtures::lenient()
            .evaluate(&ClientFixtures::ostrava(), &CreditFixtures::personal_loan());

        assert_approved_at_rate(&result, dec!(15.0));
        assert_eq!(
            result.reasons.last().map(String::as_str),
            Some("Rate increased by 5% for Ostrava region")
        );
    }

    #[test]
    fn test_prague_client_rejected_on_unlucky_draw() {
        let result = ServiceFixtures::unlucky()
            .evaluate(&ClientFixtures::prague(), &CreditFixtures::personal_loan());

        assert_rejected_with(&result, "Random rejection for Prague region");
        assert_eq!(result.reasons.len(), 5);
    }

    #[test]
    fn test_prague_client_approved_when_rejection_disabled() {
        let mut config = RuleConfig::default();
        config.random_rejection.enabled = false;
        let service = CreditApprovalService::with_default_rules(&config, Arc::new(FixedRandom(true)));

        let result = service.evaluate(&ClientFixtures::prague(), &CreditFixtures::personal_loan());
        assert_approved_at_rate(&result, dec!(10.0));
        assert!(result.reasons.contains(&"Prague random rejection disabled".to_string()));
    }

    #[test]
    fn test_prague_client_low_income_stops_at_income() {
        let mut config = RuleConfig::default();
        config.random_rejection.enabled = false;
        let service = CreditApprovalService::with_default_rules(&config, Arc::new(FixedRandom(true)));
        let client = TestClientBuilder::new().with_region("PR").with_income(999).build();

        let result = service.evaluate(&client, &CreditFixtures::personal_loan());
        assert!(!result.approved);
        assert_eq!(
            result.reasons,
            vec![
                "Age requirement met",
                "Credit score requirement met",
                "Monthly income must be at least $1000",
            ]
        );
    }

    #[test]
    fn test_seeded_source_reproduces_decisions() {
        let decide = || {
            let service = CreditApprovalService::with_default_rules(
                &RuleConfig::default(),
                Arc::new(SeededRandom::new(7)),
            );
            (0..20)
                .map(|_| service.evaluate(&ClientFixtures::prague(), &CreditFixtures::personal_loan()).approved)
                .collect::<Vec<_>>()
        };
        assert_eq!(decide(), decide());
    }

    #[test]
    fn test_custom_thresholds_applied() {
        let config = RuleConfig {
            min_income: 2000,
            ..RuleConfig::default()
        };
        let service = CreditApprovalService::with_default_rules(&config, Arc::new(FixedRandom(false)));
        let client = TestClientBuilder::new().with_income(1500).build();

        let result = service.evaluate(&client, &CreditFixtures::personal_loan());
        assert_rejected_with(&result, "Monthly income must be at least $2000");
    }

    proptest! {
        #[test]
        fn prop_decision_shape_is_consistent(client in client_strategy()) {
            let result = ServiceFixtures::unlucky().evaluate(&client, &CreditFixtures::personal_loan());

            prop_assert!(!result.reasons.is_empty());
            prop_assert!(result.reasons.len() <= 6);
            prop_assert_eq!(result.approved, result.final_credit.is_some());
            if result.approved {
                prop_assert_eq!(result.reasons.len(), 6);
            }
        }
    }
}
