//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data
//! that maintains domain invariants.

use proptest::prelude::*;
use rust_decimal::Decimal;

use domain_client::Client;

use crate::builders::TestClientBuilder;

/// Strategy for generating ages around the default 18..=60 window
pub fn age_strategy() -> impl Strategy<Value = u32> {
    0u32..120u32
}

/// Strategy for generating valid credit scores
pub fn credit_score_strategy() -> impl Strategy<Value = i64> {
    0i64..=1000i64
}

/// Strategy for generating valid monthly incomes
pub fn income_strategy() -> impl Strategy<Value = i64> {
    0i64..10_000i64
}

/// Strategy for generating region codes, allowed and otherwise
pub fn region_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("PR"), Just("BR"), Just("OS"), Just("XX"), Just("ZL")]
}

/// Strategy for generating valid interest rates with one decimal place
pub fn interest_rate_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..=1000i64).prop_map(|n| Decimal::new(n, 1))
}

/// Strategy for generating rule priorities, duplicates included
pub fn priorities_strategy() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-5i32..5i32, 0..12)
}

/// Strategy for generating valid clients of any eligibility
pub fn client_strategy() -> impl Strategy<Value = Client> {
    (
        age_strategy(),
        credit_score_strategy(),
        income_strategy(),
        region_strategy(),
    )
        .prop_map(|(age, score, income, region)| {
            TestClientBuilder::new()
                .with_age(age)
                .with_score(score)
                .with_income(income)
                .with_region(region)
                .build()
        })
}
