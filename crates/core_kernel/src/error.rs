//! Core error types used across the system

use thiserror::Error;

/// A value failed its construction invariant
///
/// Raised eagerly by every value object constructor. `field` names the
/// offending attribute so outer layers can map it back to their input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid {field}: {message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}
