//! Credit Approval Domain
//!
//! This crate implements the rule-based approval engine: credit offers and
//! their value objects, the eligibility rules, the orchestrator that runs
//! them, and the application record that captures one decision.
//!
//! # Architecture
//!
//! The domain layer is infrastructure-agnostic:
//! - **Value Objects**: CreditAmount, InterestRate
//! - **Entities**: Credit (offer), CreditApplication
//! - **Rules**: one [`CreditRule`] implementation per eligibility or pricing check
//! - **Domain Service**: [`CreditApprovalService`] sequences the rules
//! - **Ports**: repositories and notification, implemented by outer crates
//!
//! # Evaluation
//!
//! ```text
//! Age(100) -> CreditScore(90) -> Income(80) -> Region(70)
//!          -> RegionalRandomRejection(60) -> RegionalRateSurcharge(50)
//! ```
//!
//! Rules run in descending priority. The first failure stops the pipeline;
//! a passing rule may hand back a replacement offer that later rules see.
//!
//! # Application Lifecycle
//!
//! ```text
//! Pending -> Approved
//!         \-> Rejected
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use domain_credit::{CreditApprovalService, RuleConfig, ThreadRandom};
//!
//! let service = CreditApprovalService::with_default_rules(
//!     &RuleConfig::default(),
//!     Arc::new(ThreadRandom),
//! );
//! let result = service.evaluate(&client, &credit);
//! application.record_decision(result)?;
//! ```

pub mod value_objects;
pub mod credit;
pub mod rules;
pub mod config;
pub mod approval;
pub mod application;
pub mod error;
pub mod ports;

pub use value_objects::{CreditAmount, InterestRate};
pub use credit::Credit;
pub use rules::{
    CreditRule, RuleResult,
    AgeRule, CreditScoreRule, IncomeRule, RegionRule,
    RegionalRandomRejectionRule, RegionalRateSurchargeRule,
    RandomSource, ThreadRandom, FixedRandom, SeededRandom,
};
pub use config::{RuleConfig, RandomRejectionConfig, RateSurchargeConfig};
pub use approval::{CreditApprovalService, ApprovalResult};
pub use application::{CreditApplication, ApplicationStatus};
pub use error::CreditError;
pub use ports::{CreditRepository, ApplicationRepository, NotificationPort};
