//! Credit offer value objects

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::ValidationError;

/// Upper bound of an annual interest rate, in percent
pub const MAX_INTEREST_RATE: Decimal = Decimal::ONE_HUNDRED;

/// Principal of a credit offer; strictly positive
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct CreditAmount(Decimal);

impl CreditAmount {
    pub fn new(amount: Decimal) -> Result<Self, ValidationError> {
        if amount <= Decimal::ZERO {
            return Err(ValidationError::new("amount", "Credit amount must be positive"));
        }
        Ok(Self(amount))
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for CreditAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<Decimal> for CreditAmount {
    type Error = ValidationError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CreditAmount> for Decimal {
    fn from(amount: CreditAmount) -> Decimal {
        amount.0
    }
}

/// Annual interest rate in percent, within the inclusive 0..=100 range
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct InterestRate(Decimal);

impl InterestRate {
    pub fn new(value: Decimal) -> Result<Self, ValidationError> {
        if value < Decimal::ZERO || value > MAX_INTEREST_RATE {
            return Err(ValidationError::new(
                "rate",
                format!("Interest rate must be between 0 and {}", MAX_INTEREST_RATE),
            ));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for InterestRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0.normalize())
    }
}

impl TryFrom<Decimal> for InterestRate {
    type Error = ValidationError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<InterestRate> for Decimal {
    fn from(rate: InterestRate) -> Decimal {
        rate.0
    }
}
