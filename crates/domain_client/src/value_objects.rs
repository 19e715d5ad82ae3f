//! Client value objects
//!
//! Each type wraps a single scalar and refuses to exist in an invalid
//! state. Deserialization goes through the same constructor, so a stored
//! document cannot smuggle in a value that the constructor would reject.

use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

use core_kernel::ValidationError;

/// Maximum credit score accepted by the bureau scale
pub const MAX_CREDIT_SCORE: u32 = 1000;

/// Region code of the client's residence (e.g. `PR`, `BR`, `OS`)
///
/// Whether a region is eligible is decided by the region rule, not here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Region(String);

impl Region {
    /// Stores the code as given; only a blank code is rejected
    pub fn new(code: impl Into<String>) -> Result<Self, ValidationError> {
        let code = code.into();
        if code.trim().is_empty() {
            return Err(ValidationError::new("region", "Region code cannot be empty"));
        }
        Ok(Self(code))
    }

    pub fn code(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Region {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Region> for String {
    fn from(region: Region) -> String {
        region.0
    }
}

/// Monthly income in whole currency units
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u64")]
pub struct Income(u64);

impl Income {
    pub fn new(amount: i64) -> Result<Self, ValidationError> {
        u64::try_from(amount)
            .map(Self)
            .map_err(|_| ValidationError::new("income", "Income cannot be negative"))
    }

    pub fn amount(&self) -> u64 {
        self.0
    }
}

impl TryFrom<i64> for Income {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Income> for u64 {
    fn from(income: Income) -> u64 {
        income.0
    }
}

/// Credit bureau score on the inclusive 0..=1000 scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub struct CreditScore(u32);

impl CreditScore {
    pub fn new(value: i64) -> Result<Self, ValidationError> {
        match u32::try_from(value) {
            Ok(score) if score <= MAX_CREDIT_SCORE => Ok(Self(score)),
            _ => Err(ValidationError::new(
                "score",
                format!("Credit score must be between 0 and {}", MAX_CREDIT_SCORE),
            )),
        }
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl TryFrom<i64> for CreditScore {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CreditScore> for u32 {
    fn from(score: CreditScore) -> u32 {
        score.0
    }
}

/// Personal identification number; unique per client across the system
///
/// Uniqueness is enforced by the client repository, not by this type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClientPin(String);

impl ClientPin {
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::new("pin", "Client PIN cannot be empty"));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ClientPin {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ClientPin> for String {
    fn from(pin: ClientPin) -> String {
        pin.0
    }
}

#[derive(Validate)]
struct EmailCandidate {
    #[validate(email)]
    value: String,
}

/// Contact email address
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let candidate = EmailCandidate { value: value.into() };
        candidate
            .validate()
            .map_err(|_| ValidationError::new("email", "Invalid email format"))?;
        Ok(Self(candidate.value))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Email {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> String {
        email.0
    }
}

/// Contact phone number, stored as entered
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::new("phone", "Phone number cannot be empty"));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Phone {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Phone> for String {
    fn from(phone: Phone) -> String {
        phone.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_keeps_code_as_given() {
        assert_eq!(Region::new(" BR ").unwrap().code(), " BR ");
    }

    #[test]
    fn test_score_bounds_are_inclusive() {
        assert!(CreditScore::new(0).is_ok());
        assert!(CreditScore::new(1000).is_ok());
        assert!(CreditScore::new(1001).is_err());
        assert!(CreditScore::new(-1).is_err());
    }

    #[test]
    fn test_email_grammar() {
        assert!(Email::new("client@example.com").is_ok());
        assert!(Email::new("not-an-email").is_err());
        assert!(Email::new("").is_err());
    }
}
