//! Core Kernel - Foundational types shared by the credit approval domains
//!
//! This crate provides the building blocks used across all domain modules:
//! - Strongly-typed identifiers for clients, credit products and applications
//! - The validation error raised by value objects
//! - Port abstractions for collaborator adapters

pub mod identifiers;
pub mod error;
pub mod ports;

pub use identifiers::{ClientId, CreditId, ApplicationId};
pub use error::ValidationError;
pub use ports::{PortError, DomainPort};
