//! Storage layer for rolodex.
//!
//! This crate is the persistence gateway: every statement runs with bound
//! parameters, each write commits or rolls back as its own implicit
//! transaction, and connections are scoped acquisitions released on every
//! path (success, error, or early return).
//!
//! Two implementations of the [`Store`] trait are provided:
//!
//! - [`PgStore`]: PostgreSQL via `sqlx`, with embedded startup migrations
//! - [`MemoryStore`]: in-process maps, for exercising handlers in tests
//!
//! # Example
//!
//! ```no_run
//! use rolodex_core::CustomerInput;
//! use rolodex_store::{MemoryStore, Store};
//!
//! # async fn example() -> rolodex_store::Result<()> {
//! let store = MemoryStore::new();
//!
//! let customer = CustomerInput {
//!     first_name: Some("Ann".into()),
//!     last_name: Some("Lee".into()),
//!     phone_number: Some("555-0100".into()),
//! }
//! .validate()
//! .unwrap();
//!
//! let id = store.insert_customer(&customer).await?;
//! let retrieved = store.get_customer(id).await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod memory;
pub mod postgres;

pub use error::{Result, StoreError};
pub use memory::MemoryStore;
pub use postgres::PgStore;

use async_trait::async_trait;

use rolodex_core::{
    Address, AddressId, AddressUpdate, Customer, CustomerId, CustomerSummary, NewAddress,
    NewCustomer,
};

/// The storage trait defining all database operations.
///
/// Handlers receive this trait as an injected dependency so they can be
/// exercised without a live database.
#[async_trait]
pub trait Store: Send + Sync {
    // =========================================================================
    // Customer Operations
    // =========================================================================

    /// Insert a customer and return its generated id.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    async fn insert_customer(&self, customer: &NewCustomer) -> Result<CustomerId>;

    /// Produce the aggregated customer view: every customer with its address
    /// count and comma-joined city/state/pin-code lists.
    ///
    /// Customers without addresses appear with a count of zero and `None`
    /// concatenations. The full result set is materialized; ordering is
    /// store-default.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    async fn list_customer_summaries(&self) -> Result<Vec<CustomerSummary>>;

    /// Get a customer by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    async fn get_customer(&self, id: CustomerId) -> Result<Option<Customer>>;

    /// Replace a customer's fields wholesale.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` when the write affected zero rows.
    async fn update_customer(&self, id: CustomerId, customer: &NewCustomer) -> Result<()>;

    /// Delete a customer by id. Addresses are not touched; any cascade is
    /// the schema's business.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` when the write affected zero rows.
    async fn delete_customer(&self, id: CustomerId) -> Result<()>;

    // =========================================================================
    // Address Operations
    // =========================================================================

    /// Insert an address and return its generated id.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails, including foreign
    /// key violations for unknown customers.
    async fn insert_address(&self, address: &NewAddress) -> Result<AddressId>;

    /// Get an address by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    async fn get_address(&self, id: AddressId) -> Result<Option<Address>>;

    /// List every address belonging to a customer.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    async fn list_addresses_for_customer(&self, id: CustomerId) -> Result<Vec<Address>>;

    /// Replace an address's mutable fields wholesale.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` when the write affected zero rows.
    async fn update_address(&self, id: AddressId, address: &AddressUpdate) -> Result<()>;

    /// Delete an address by id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` when the write affected zero rows.
    async fn delete_address(&self, id: AddressId) -> Result<()>;
}
