//! Core types for the rolodex customer registry.
//!
//! This crate provides the foundational types used throughout the platform:
//!
//! - **Identifiers**: `CustomerId`, `AddressId`
//! - **Customers**: `Customer`, `CustomerInput`, `NewCustomer`
//! - **Addresses**: `Address`, `AddressInput`, `NewAddress`, `AddressUpdate`
//! - **Aggregates**: `CustomerSummary`, `CustomerDetail`
//! - **Search**: the in-memory substring filter over the aggregated view
//!
//! Identifiers are store-generated integers. Creation payloads carry optional
//! fields so presence validation can name every missing field at once, and
//! validation happens before any store access.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod address;
pub mod customer;
pub mod error;
pub mod ids;
pub mod search;
pub mod summary;

pub use address::{Address, AddressInput, AddressUpdate, NewAddress};
pub use customer::{Customer, CustomerInput, NewCustomer};
pub use error::ValidationError;
pub use ids::{AddressId, CustomerId, IdError};
pub use summary::{CustomerDetail, CustomerSummary};
