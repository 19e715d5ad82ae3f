//! Credit use cases
//!
//! Each service loads entities through the domain ports, delegates the
//! decision to the domain, and returns flat response DTOs.

pub mod client;
pub mod catalog;
pub mod application;

pub use client::ClientService;
pub use catalog::CreditCatalogService;
pub use application::ApplicationService;
