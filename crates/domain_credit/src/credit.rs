//! Credit offer entity

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{CreditId, ValidationError};
use crate::value_objects::{CreditAmount, InterestRate};

/// A credit product offered to clients
///
/// Offers are values: pricing changes never mutate an existing `Credit`,
/// they produce a new one through [`Credit::with_adjusted_rate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credit {
    id: CreditId,
    name: String,
    amount: CreditAmount,
    rate: InterestRate,
    start_date: NaiveDate,
    end_date: NaiveDate,
}

impl Credit {
    pub fn new(
        id: CreditId,
        name: impl Into<String>,
        amount: CreditAmount,
        rate: InterestRate,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            amount,
            rate,
            start_date,
            end_date,
        }
    }

    pub fn id(&self) -> &CreditId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn amount(&self) -> CreditAmount {
        self.amount
    }

    pub fn rate(&self) -> InterestRate {
        self.rate
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    /// Returns a copy of this offer with `adjustment` added to the rate
    ///
    /// Identity, name, amount and validity window are carried over
    /// unchanged. Fails if the resulting rate leaves the 0..=100 range.
    pub fn with_adjusted_rate(&self, adjustment: Decimal) -> Result<Self, ValidationError> {
        let rate = InterestRate::new(self.rate.value() + adjustment)?;
        Ok(Self {
            rate,
            ..self.clone()
        })
    }
}
