//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for common entities across the credit
//! approval system. These fixtures are designed to be consistent and
//! predictable for unit tests.

use chrono::NaiveDate;
use rust_decimal_macros::dec;
use std::sync::Arc;

use domain_client::Client;
use domain_credit::{CreditApprovalService, Credit, FixedRandom, RuleConfig};

use crate::builders::{TestClientBuilder, TestCreditBuilder};

/// Fixture for client test data
pub struct ClientFixtures;

impl ClientFixtures {
    /// A client who passes every standard rule (region BR)
    pub fn eligible() -> Client {
        TestClientBuilder::new().build()
    }

    /// Eligible on every deterministic rule, resident in Prague (PR)
    pub fn prague() -> Client {
        TestClientBuilder::new()
            .with_name("Petr Novak")
            .with_region("PR")
            .with_pin("850101/1234")
            .with_email("petr.novak@example.com")
            .build()
    }

    /// Eligible on every deterministic rule, resident in Ostrava (OS)
    pub fn ostrava() -> Client {
        TestClientBuilder::new()
            .with_name("Eva Svobodova")
            .with_region("OS")
            .with_pin("925630/5678")
            .with_email("eva.svobodova@example.com")
            .build()
    }

    /// Below the minimum age
    pub fn underage() -> Client {
        TestClientBuilder::new().with_age(17).build()
    }

    /// Score exactly at the minimum, which the strict rule rejects
    pub fn boundary_score() -> Client {
        TestClientBuilder::new().with_score(500).build()
    }

    /// Income one unit below the minimum
    pub fn low_income() -> Client {
        TestClientBuilder::new().with_income(999).build()
    }

    /// From a region outside the allow-list
    pub fn unsupported_region() -> Client {
        TestClientBuilder::new().with_region("XX").build()
    }
}

/// Fixture for credit offer test data
pub struct CreditFixtures;

impl CreditFixtures {
    /// Personal loan: 1000.0 at 10.0%, calendar year 2024
    pub fn personal_loan() -> Credit {
        TestCreditBuilder::new().build()
    }

    /// Business loan: 5000.0 at 12.5%, 2024 through 2025
    pub fn business_loan() -> Credit {
        TestCreditBuilder::new()
            .with_id("business-loan")
            .with_name("Business Loan")
            .with_amount(dec!(5000.0))
            .with_rate(dec!(12.5))
            .with_dates(
                NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date"),
                NaiveDate::from_ymd_opt(2025, 12, 31).expect("valid date"),
            )
            .build()
    }

    /// Rate high enough that the Ostrava surcharge would exceed 100%
    pub fn near_max_rate() -> Credit {
        TestCreditBuilder::new()
            .with_id("premium-loan")
            .with_name("Premium Loan")
            .with_rate(dec!(98))
            .build()
    }
}

/// Fixture for assembled approval services
pub struct ServiceFixtures;

impl ServiceFixtures {
    /// Standard rules where the random draw never rejects
    pub fn lenient() -> CreditApprovalService {
        CreditApprovalService::with_default_rules(
            &RuleConfig::default(),
            Arc::new(FixedRandom(false)),
        )
    }

    /// Standard rules where every Prague draw rejects
    pub fn unlucky() -> CreditApprovalService {
        CreditApprovalService::with_default_rules(
            &RuleConfig::default(),
            Arc::new(FixedRandom(true)),
        )
    }
}
