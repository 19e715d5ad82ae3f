//! Client entity

use serde::{Deserialize, Serialize};

use core_kernel::ClientId;
use crate::value_objects::{ClientPin, CreditScore, Email, Income, Phone, Region};

/// A client applying for credit
///
/// Immutable once constructed; all fields are exposed through accessors
/// only. The predicates below are the questions the approval rules ask.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    id: ClientId,
    name: String,
    age: u32,
    region: Region,
    income: Income,
    score: CreditScore,
    pin: ClientPin,
    email: Email,
    phone: Phone,
}

impl Client {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: ClientId,
        name: impl Into<String>,
        age: u32,
        region: Region,
        income: Income,
        score: CreditScore,
        pin: ClientPin,
        email: Email,
        phone: Phone,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            age,
            region,
            income,
            score,
            pin,
            email,
            phone,
        }
    }

    pub fn id(&self) -> ClientId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn region(&self) -> &Region {
        &self.region
    }

    pub fn income(&self) -> Income {
        self.income
    }

    pub fn score(&self) -> CreditScore {
        self.score
    }

    pub fn pin(&self) -> &ClientPin {
        &self.pin
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    /// Inclusive on both ends
    pub fn is_age_in_range(&self, min_age: u32, max_age: u32) -> bool {
        self.age >= min_age && self.age <= max_age
    }

    pub fn has_minimum_income(&self, minimum: u64) -> bool {
        self.income.amount() >= minimum
    }

    /// Strictly greater than `minimum`; a score equal to the minimum does not qualify
    pub fn has_minimum_score(&self, minimum: u32) -> bool {
        self.score.value() > minimum
    }

    pub fn is_from_region(&self, region_code: &str) -> bool {
        self.region.code() == region_code
    }
}
