//! Credit application aggregate
//!
//! Records one approval decision for one client against one requested
//! offer. An application is created `Pending` and is decided exactly once.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::{ApplicationId, ClientId, CreditId, ValidationError};
use crate::approval::ApprovalResult;
use crate::credit::Credit;
use crate::error::CreditError;

/// Application status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    /// Submitted, not yet evaluated
    Pending,
    /// All rules passed
    Approved,
    /// A rule rejected the application
    Rejected,
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::Approved => "approved",
            ApplicationStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A client's application for a credit product
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditApplication {
    id: ApplicationId,
    client_id: ClientId,
    /// The requested product; the approved offer may differ in rate
    credit_id: CreditId,
    status: ApplicationStatus,
    applied_at: DateTime<Utc>,
    processed_at: Option<DateTime<Utc>>,
    reasons: Vec<String>,
    final_credit: Option<Credit>,
}

impl CreditApplication {
    /// Creates a pending application stamped with the current time
    pub fn new(id: ApplicationId, client_id: ClientId, credit_id: CreditId) -> Self {
        Self {
            id,
            client_id,
            credit_id,
            status: ApplicationStatus::Pending,
            applied_at: Utc::now(),
            processed_at: None,
            reasons: Vec::new(),
            final_credit: None,
        }
    }

    pub fn id(&self) -> ApplicationId {
        self.id
    }

    pub fn client_id(&self) -> ClientId {
        self.client_id
    }

    pub fn credit_id(&self) -> &CreditId {
        &self.credit_id
    }

    pub fn status(&self) -> ApplicationStatus {
        self.status
    }

    pub fn applied_at(&self) -> DateTime<Utc> {
        self.applied_at
    }

    pub fn processed_at(&self) -> Option<DateTime<Utc>> {
        self.processed_at
    }

    pub fn reasons(&self) -> &[String] {
        &self.reasons
    }

    pub fn final_credit(&self) -> Option<&Credit> {
        self.final_credit.as_ref()
    }

    pub fn is_pending(&self) -> bool {
        self.status == ApplicationStatus::Pending
    }

    pub fn is_approved(&self) -> bool {
        self.status == ApplicationStatus::Approved
    }

    pub fn is_rejected(&self) -> bool {
        self.status == ApplicationStatus::Rejected
    }

    /// Marks the application approved with the (possibly repriced) offer
    pub fn approve(&mut self, reasons: Vec<String>, final_credit: Credit) -> Result<(), CreditError> {
        self.ensure_pending(ApplicationStatus::Approved)?;
        self.status = ApplicationStatus::Approved;
        self.processed_at = Some(Utc::now());
        self.reasons = reasons;
        self.final_credit = Some(final_credit);
        Ok(())
    }

    /// Marks the application rejected
    pub fn reject(&mut self, reasons: Vec<String>) -> Result<(), CreditError> {
        self.ensure_pending(ApplicationStatus::Rejected)?;
        self.status = ApplicationStatus::Rejected;
        self.processed_at = Some(Utc::now());
        self.reasons = reasons;
        Ok(())
    }

    /// Applies an orchestrator decision
    pub fn record_decision(&mut self, result: ApprovalResult) -> Result<(), CreditError> {
        match (result.approved, result.final_credit) {
            (true, Some(credit)) => self.approve(result.reasons, credit),
            (true, None) => Err(ValidationError::new(
                "final_credit",
                "An approved decision must carry the final offer",
            )
            .into()),
            (false, _) => self.reject(result.reasons),
        }
    }

    fn ensure_pending(&self, to: ApplicationStatus) -> Result<(), CreditError> {
        if !self.is_pending() {
            return Err(CreditError::InvalidStateTransition {
                from: self.status,
                to,
            });
        }
        Ok(())
    }
}
