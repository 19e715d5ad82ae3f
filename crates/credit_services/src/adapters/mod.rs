//! Collaborator adapters
//!
//! In-memory storage and log-based notification. Both are complete
//! implementations of the domain ports, not test doubles.

pub mod memory;
pub mod notification;

pub use memory::{InMemoryApplicationRepository, InMemoryClientRepository, InMemoryCreditRepository};
pub use notification::LogNotifier;
