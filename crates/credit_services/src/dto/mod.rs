//! Use-case commands and responses
//!
//! Responses are flat, serializable views; domain types never cross the
//! application boundary.

pub mod client;
pub mod credit;
pub mod application;

/// Date format for offer validity windows
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Timestamp format for application events
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
