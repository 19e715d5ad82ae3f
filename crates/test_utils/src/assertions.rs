//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for approval decisions that give
//! more meaningful error messages than standard assertions.

use rust_decimal::Decimal;

use domain_credit::ApprovalResult;

/// Asserts that a decision approved the offer at the expected rate
///
/// # Panics
///
/// Panics if the decision is a rejection, carries no final offer, or the
/// final rate differs from `expected_rate`
pub fn assert_approved_at_rate(result: &ApprovalResult, expected_rate: Decimal) {
    assert!(
        result.approved,
        "Expected approval, got rejection with reasons: {:?}",
        result.reasons
    );

    let credit = result
        .final_credit
        .as_ref()
        .expect("approved decision must carry a final offer");
    assert_eq!(
        credit.rate().value(),
        expected_rate,
        "Final rate mismatch: actual={}, expected={}",
        credit.rate(),
        expected_rate
    );
}

/// Asserts that a decision was a rejection whose last reason matches
///
/// # Panics
///
/// Panics if the decision approved or the last reason differs
pub fn assert_rejected_with(result: &ApprovalResult, expected_reason: &str) {
    assert!(
        !result.approved,
        "Expected rejection, got approval with reasons: {:?}",
        result.reasons
    );
    assert!(result.final_credit.is_none(), "Rejection must not carry an offer");
    assert_eq!(
        result.reasons.last().map(String::as_str),
        Some(expected_reason),
        "Unexpected rejection reason in {:?}",
        result.reasons
    );
}
