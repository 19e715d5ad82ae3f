//! Credit offer DTOs

use rust_decimal::Decimal;
use serde::Serialize;

use domain_credit::Credit;

use super::DATE_FORMAT;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreditResponse {
    pub id: String,
    pub name: String,
    pub amount: Decimal,
    pub rate: Decimal,
    pub start_date: String,
    pub end_date: String,
}

impl From<&Credit> for CreditResponse {
    fn from(credit: &Credit) -> Self {
        Self {
            id: credit.id().as_str().to_string(),
            name: credit.name().to_string(),
            amount: credit.amount().amount(),
            rate: credit.rate().value(),
            start_date: credit.start_date().format(DATE_FORMAT).to_string(),
            end_date: credit.end_date().format(DATE_FORMAT).to_string(),
        }
    }
}

/// Outcome of a dry-run evaluation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EligibilityResponse {
    pub eligible: bool,
    pub reasons: Vec<String>,
    pub final_credit: Option<CreditResponse>,
}
