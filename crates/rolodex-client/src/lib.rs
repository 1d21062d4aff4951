//! Rolodex Client SDK.
//!
//! This crate provides a client library for front ends and services to
//! interact with the rolodex API.
//!
//! # Example
//!
//! ```no_run
//! use rolodex_client::RolodexClient;
//! use rolodex_core::CustomerInput;
//!
//! # async fn example() -> Result<(), rolodex_client::ClientError> {
//! let client = RolodexClient::new("http://localhost:8080");
//!
//! client
//!     .create_customer(CustomerInput {
//!         first_name: Some("Ann".into()),
//!         last_name: Some("Lee".into()),
//!         phone_number: Some("555-0100".into()),
//!     })
//!     .await?;
//!
//! // Search the aggregated list
//! let customers = client.list_customers(Some("pune")).await?;
//! println!("{} match(es)", customers.len());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod client;
mod error;
mod types;

pub use client::{ClientOptions, RolodexClient};
pub use error::ClientError;
pub use types::{Acknowledgment, ApiErrorResponse, ErrorBody};
