//! Client Domain
//!
//! This crate holds the client profile consumed by the credit approval
//! rules. Everything here is immutable once constructed: the value objects
//! validate their invariant eagerly and a [`Client`] can only be built from
//! already-valid values, so downstream code never re-checks local
//! invariants.
//!
//! # Examples
//!
//! ```rust
//! use core_kernel::ClientId;
//! use domain_client::{Client, ClientPin, CreditScore, Email, Income, Phone, Region};
//!
//! let client = Client::new(
//!     ClientId::new(),
//!     "Jan Novak",
//!     30,
//!     Region::new("PR").unwrap(),
//!     Income::new(1500).unwrap(),
//!     CreditScore::new(600).unwrap(),
//!     ClientPin::new("900101/1234").unwrap(),
//!     Email::new("jan.novak@example.com").unwrap(),
//!     Phone::new("+420 777 123 456").unwrap(),
//! );
//!
//! assert!(client.is_age_in_range(18, 60));
//! assert!(client.is_from_region("PR"));
//! ```

pub mod value_objects;
pub mod client;
pub mod ports;

pub use value_objects::{Region, Income, CreditScore, ClientPin, Email, Phone};
pub use client::Client;
pub use ports::ClientRepository;
