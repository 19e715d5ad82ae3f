//! Application-layer errors

use thiserror::Error;

use core_kernel::{PortError, ValidationError};
use domain_credit::CreditError;

/// Errors returned by the credit use cases
///
/// A rejected application is not an error; it is reported in the
/// use-case response.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// A referenced entity does not exist
    #[error("{0}")]
    NotFound(String),

    #[error("Client with this PIN already exists")]
    DuplicatePin,

    /// Command input failed a value-object invariant
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Credit(#[from] CreditError),

    /// A repository or other collaborator failed
    #[error("Collaborator failure: {0}")]
    Port(#[from] PortError),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ServiceError {
    pub fn not_found(message: impl Into<String>) -> Self {
        ServiceError::NotFound(message.into())
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        ServiceError::Configuration(message.into())
    }
}

impl From<config::ConfigError> for ServiceError {
    fn from(err: config::ConfigError) -> Self {
        ServiceError::Configuration(err.to_string())
    }
}

/// Result alias for use-case operations
pub type ServiceResult<T> = Result<T, ServiceError>;
