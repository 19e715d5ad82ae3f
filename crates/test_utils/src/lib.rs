//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! credit approval test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built clients, offers and rule sets
//! - `builders`: Builder patterns for clients and offers
//! - `stubs`: Scriptable rules for orchestrator tests
//! - `assertions`: Assertion helpers for decisions and rates
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod stubs;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use stubs::*;
pub use assertions::*;
pub use generators::*;
