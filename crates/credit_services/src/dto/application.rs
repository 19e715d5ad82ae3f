//! Credit application DTOs

use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use domain_credit::{Credit, CreditApplication};

use super::credit::CreditResponse;
use super::TIMESTAMP_FORMAT;

/// Outcome of a processed application
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessApplicationResponse {
    pub application_id: Uuid,
    pub approved: bool,
    pub reasons: Vec<String>,
    pub final_credit: Option<CreditResponse>,
}

impl From<&CreditApplication> for ProcessApplicationResponse {
    fn from(application: &CreditApplication) -> Self {
        Self {
            application_id: *application.id().as_uuid(),
            approved: application.is_approved(),
            reasons: application.reasons().to_vec(),
            final_credit: application.final_credit().map(CreditResponse::from),
        }
    }
}

/// Approved offer as shown in application listings
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreditSummary {
    pub id: String,
    pub name: String,
    pub amount: Decimal,
    pub rate: Decimal,
}

impl From<&Credit> for CreditSummary {
    fn from(credit: &Credit) -> Self {
        Self {
            id: credit.id().as_str().to_string(),
            name: credit.name().to_string(),
            amount: credit.amount().amount(),
            rate: credit.rate().value(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApplicationResponse {
    pub id: Uuid,
    pub client_id: Uuid,
    pub credit_id: String,
    pub status: String,
    pub applied_at: String,
    pub processed_at: Option<String>,
    pub reasons: Vec<String>,
    pub final_credit: Option<CreditSummary>,
}

impl From<&CreditApplication> for ApplicationResponse {
    fn from(application: &CreditApplication) -> Self {
        Self {
            id: *application.id().as_uuid(),
            client_id: *application.client_id().as_uuid(),
            credit_id: application.credit_id().as_str().to_string(),
            status: application.status().as_str().to_string(),
            applied_at: application.applied_at().format(TIMESTAMP_FORMAT).to_string(),
            processed_at: application
                .processed_at()
                .map(|at| at.format(TIMESTAMP_FORMAT).to_string()),
            reasons: application.reasons().to_vec(),
            final_credit: application.final_credit().map(CreditSummary::from),
        }
    }
}
