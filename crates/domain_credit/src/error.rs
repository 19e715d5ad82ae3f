//! Credit domain errors

use thiserror::Error;

use core_kernel::ValidationError;
use crate::application::ApplicationStatus;

/// Errors that can occur in the credit domain
///
/// A rule rejecting an application is not an error; see `RuleResult`.
#[derive(Debug, Error)]
pub enum CreditError {
    /// A value object invariant was violated
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The application has already been decided
    #[error("Invalid state transition from {from} to {to}")]
    InvalidStateTransition {
        from: ApplicationStatus,
        to: ApplicationStatus,
    },

    /// Rule configuration is inconsistent
    #[error("Invalid rule configuration: {0}")]
    Configuration(String),
}

impl CreditError {
    pub fn configuration(message: impl Into<String>) -> Self {
        CreditError::Configuration(message.into())
    }
}
