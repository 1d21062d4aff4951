//! PostgreSQL storage implementation.
//!
//! Every query binds its parameters; nothing is interpolated into SQL text.
//! Each statement checks a connection out of the pool and returns it on every
//! exit path, and writes commit or roll back as single-statement
//! transactions.

use sqlx::postgres::{PgPool, PgPoolOptions};

use rolodex_core::{
    Address, AddressId, AddressUpdate, Customer, CustomerId, CustomerSummary, NewAddress,
    NewCustomer,
};

use crate::error::{Result, StoreError};
use crate::Store;

use async_trait::async_trait;

/// Embedded schema migrations, applied at connect time.
static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

/// PostgreSQL-backed storage implementation.
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Connect to PostgreSQL and apply pending migrations.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection or a migration fails.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;

        tracing::debug!("Applying pending schema migrations");
        MIGRATOR
            .run(&pool)
            .await
            .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(Self { pool })
    }

    /// Wrap an existing pool. Migrations are not applied.
    #[must_use]
    pub const fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }
}

// =============================================================================
// Internal Row Types
// =============================================================================

#[derive(Debug, sqlx::FromRow)]
struct CustomerRow {
    customer_id: i64,
    first_name: String,
    last_name: String,
    phone_number: String,
}

impl From<CustomerRow> for Customer {
    fn from(row: CustomerRow) -> Self {
        Self {
            customer_id: CustomerId::new(row.customer_id),
            first_name: row.first_name,
            last_name: row.last_name,
            phone_number: row.phone_number,
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct CustomerSummaryRow {
    customer_id: i64,
    first_name: String,
    last_name: String,
    phone_number: String,
    address_count: i64,
    cities: Option<String>,
    states: Option<String>,
    pin_codes: Option<String>,
}

impl From<CustomerSummaryRow> for CustomerSummary {
    fn from(row: CustomerSummaryRow) -> Self {
        Self {
            customer_id: CustomerId::new(row.customer_id),
            first_name: row.first_name,
            last_name: row.last_name,
            phone_number: row.phone_number,
            address_count: row.address_count,
            cities: row.cities,
            states: row.states,
            pin_codes: row.pin_codes,
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct AddressRow {
    address_id: i64,
    customer_id: i64,
    street_address: String,
    city: String,
    state: String,
    pin_code: String,
}

impl From<AddressRow> for Address {
    fn from(row: AddressRow) -> Self {
        Self {
            address_id: AddressId::new(row.address_id),
            customer_id: CustomerId::new(row.customer_id),
            street_address: row.street_address,
            city: row.city,
            state: row.state,
            pin_code: row.pin_code,
        }
    }
}

#[async_trait]
impl Store for PgStore {
    // =========================================================================
    // Customer Operations
    // =========================================================================

    async fn insert_customer(&self, customer: &NewCustomer) -> Result<CustomerId> {
        let (customer_id,): (i64,) = sqlx::query_as(
            "INSERT INTO customers (first_name, last_name, phone_number)
             VALUES ($1, $2, $3)
             RETURNING customer_id",
        )
        .bind(&customer.first_name)
        .bind(&customer.last_name)
        .bind(&customer.phone_number)
        .fetch_one(&self.pool)
        .await?;

        Ok(CustomerId::new(customer_id))
    }

    async fn list_customer_summaries(&self) -> Result<Vec<CustomerSummary>> {
        let rows: Vec<CustomerSummaryRow> = sqlx::query_as(
            "SELECT
                 c.customer_id,
                 c.first_name,
                 c.last_name,
                 c.phone_number,
                 COUNT(a.address_id) AS address_count,
                 string_agg(a.city, ',') AS cities,
                 string_agg(a.state, ',') AS states,
                 string_agg(a.pin_code, ',') AS pin_codes
             FROM customers c
             LEFT JOIN addresses a ON a.customer_id = c.customer_id
             GROUP BY c.customer_id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn get_customer(&self, id: CustomerId) -> Result<Option<Customer>> {
        let row: Option<CustomerRow> = sqlx::query_as(
            "SELECT customer_id, first_name, last_name, phone_number
             FROM customers
             WHERE customer_id = $1",
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Into::into))
    }

    async fn update_customer(&self, id: CustomerId, customer: &NewCustomer) -> Result<()> {
        let result = sqlx::query(
            "UPDATE customers
             SET first_name = $2, last_name = $3, phone_number = $4
             WHERE customer_id = $1",
        )
        .bind(id.as_i64())
        .bind(&customer.first_name)
        .bind(&customer.last_name)
        .bind(&customer.phone_number)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound {
                entity: "customer",
                id: id.as_i64(),
            });
        }

        Ok(())
    }

    async fn delete_customer(&self, id: CustomerId) -> Result<()> {
        let result = sqlx::query("DELETE FROM customers WHERE customer_id = $1")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound {
                entity: "customer",
                id: id.as_i64(),
            });
        }

        Ok(())
    }

    // =========================================================================
    // Address Operations
    // =========================================================================

    async fn insert_address(&self, address: &NewAddress) -> Result<AddressId> {
        let (address_id,): (i64,) = sqlx::query_as(
            "INSERT INTO addresses (customer_id, street_address, city, state, pin_code)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING address_id",
        )
        .bind(address.customer_id.as_i64())
        .bind(&address.street_address)
        .bind(&address.city)
        .bind(&address.state)
        .bind(&address.pin_code)
        .fetch_one(&self.pool)
        .await?;

        Ok(AddressId::new(address_id))
    }

    async fn get_address(&self, id: AddressId) -> Result<Option<Address>> {
        let row: Option<AddressRow> = sqlx::query_as(
            "SELECT address_id, customer_id, street_address, city, state, pin_code
             FROM addresses
             WHERE address_id = $1",
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Into::into))
    }

    async fn list_addresses_for_customer(&self, id: CustomerId) -> Result<Vec<Address>> {
        let rows: Vec<AddressRow> = sqlx::query_as(
            "SELECT address_id, customer_id, street_address, city, state, pin_code
             FROM addresses
             WHERE customer_id = $1",
        )
        .bind(id.as_i64())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn update_address(&self, id: AddressId, address: &AddressUpdate) -> Result<()> {
        let result = sqlx::query(
            "UPDATE addresses
             SET street_address = $2, city = $3, state = $4, pin_code = $5
             WHERE address_id = $1",
        )
        .bind(id.as_i64())
        .bind(&address.street_address)
        .bind(&address.city)
        .bind(&address.state)
        .bind(&address.pin_code)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound {
                entity: "address",
                id: id.as_i64(),
            });
        }

        Ok(())
    }

    async fn delete_address(&self, id: AddressId) -> Result<()> {
        let result = sqlx::query("DELETE FROM addresses WHERE address_id = $1")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound {
                entity: "address",
                id: id.as_i64(),
            });
        }

        Ok(())
    }
}
