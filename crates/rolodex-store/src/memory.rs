//! In-memory storage implementation.
//!
//! Backs handler and integration tests; no database required. Ids are
//! assigned sequentially starting at 1, in insertion order. Deleting a
//! customer leaves its addresses in place: cascade behavior belongs to the
//! relational schema, not this layer.

use std::collections::BTreeMap;
use std::sync::Mutex;

use rolodex_core::{
    Address, AddressId, AddressUpdate, Customer, CustomerId, CustomerSummary, NewAddress,
    NewCustomer,
};

use crate::error::{Result, StoreError};
use crate::Store;

use async_trait::async_trait;

/// Map-backed storage implementation.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    customers: BTreeMap<i64, Customer>,
    addresses: BTreeMap<i64, Address>,
    next_customer_id: i64,
    next_address_id: i64,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().expect("store mutex poisoned")
    }
}

/// Comma-join aggregated values, `None` when the customer has no addresses.
fn concat(values: &[String]) -> Option<String> {
    if values.is_empty() {
        None
    } else {
        Some(values.join(","))
    }
}

#[async_trait]
impl Store for MemoryStore {
    // =========================================================================
    // Customer Operations
    // =========================================================================

    async fn insert_customer(&self, customer: &NewCustomer) -> Result<CustomerId> {
        let mut inner = self.lock();
        inner.next_customer_id += 1;
        let id = inner.next_customer_id;

        inner.customers.insert(
            id,
            Customer {
                customer_id: CustomerId::new(id),
                first_name: customer.first_name.clone(),
                last_name: customer.last_name.clone(),
                phone_number: customer.phone_number.clone(),
            },
        );

        Ok(CustomerId::new(id))
    }

    async fn list_customer_summaries(&self) -> Result<Vec<CustomerSummary>> {
        let inner = self.lock();

        let summaries = inner
            .customers
            .values()
            .map(|customer| {
                let mut cities = Vec::new();
                let mut states = Vec::new();
                let mut pin_codes = Vec::new();

                for address in inner
                    .addresses
                    .values()
                    .filter(|a| a.customer_id == customer.customer_id)
                {
                    cities.push(address.city.clone());
                    states.push(address.state.clone());
                    pin_codes.push(address.pin_code.clone());
                }

                CustomerSummary {
                    customer_id: customer.customer_id,
                    first_name: customer.first_name.clone(),
                    last_name: customer.last_name.clone(),
                    phone_number: customer.phone_number.clone(),
                    address_count: i64::try_from(cities.len()).unwrap_or(i64::MAX),
                    cities: concat(&cities),
                    states: concat(&states),
                    pin_codes: concat(&pin_codes),
                }
            })
            .collect();

        Ok(summaries)
    }

    async fn get_customer(&self, id: CustomerId) -> Result<Option<Customer>> {
        Ok(self.lock().customers.get(&id.as_i64()).cloned())
    }

    async fn update_customer(&self, id: CustomerId, customer: &NewCustomer) -> Result<()> {
        let mut inner = self.lock();

        let Some(existing) = inner.customers.get_mut(&id.as_i64()) else {
            return Err(StoreError::NotFound {
                entity: "customer",
                id: id.as_i64(),
            });
        };

        existing.first_name = customer.first_name.clone();
        existing.last_name = customer.last_name.clone();
        existing.phone_number = customer.phone_number.clone();

        Ok(())
    }

    async fn delete_customer(&self, id: CustomerId) -> Result<()> {
        let mut inner = self.lock();

        if inner.customers.remove(&id.as_i64()).is_none() {
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
        let mut inner = self.lock();

        if !inner.customers.contains_key(&address.customer_id.as_i64()) {
            return Err(StoreError::Database(format!(
                "foreign key violation: customer {} does not exist",
                address.customer_id
            )));
        }

        inner.next_address_id += 1;
        let id = inner.next_address_id;

        inner.addresses.insert(
            id,
            Address {
                address_id: AddressId::new(id),
                customer_id: address.customer_id,
                street_address: address.street_address.clone(),
                city: address.city.clone(),
                state: address.state.clone(),
                pin_code: address.pin_code.clone(),
            },
        );

        Ok(AddressId::new(id))
    }

    async fn get_address(&self, id: AddressId) -> Result<Option<Address>> {
        Ok(self.lock().addresses.get(&id.as_i64()).cloned())
    }

    async fn list_addresses_for_customer(&self, id: CustomerId) -> Result<Vec<Address>> {
        Ok(self
            .lock()
            .addresses
            .values()
            .filter(|a| a.customer_id == id)
            .cloned()
            .collect())
    }

    async fn update_address(&self, id: AddressId, address: &AddressUpdate) -> Result<()> {
        let mut inner = self.lock();

        let Some(existing) = inner.addresses.get_mut(&id.as_i64()) else {
            return Err(StoreError::NotFound {
                entity: "address",
                id: id.as_i64(),
            });
        };

        existing.street_address = address.street_address.clone();
        existing.city = address.city.clone();
        existing.state = address.state.clone();
        existing.pin_code = address.pin_code.clone();

        Ok(())
    }

    async fn delete_address(&self, id: AddressId) -> Result<()> {
        let mut inner = self.lock();

        if inner.addresses.remove(&id.as_i64()).is_none() {
            return Err(StoreError::NotFound {
                entity: "address",
                id: id.as_i64(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer(first_name: &str) -> NewCustomer {
        NewCustomer {
            first_name: first_name.into(),
            last_name: "Lee".into(),
            phone_number: "555-0100".into(),
        }
    }

    fn address(customer_id: CustomerId, city: &str, pin_code: &str) -> NewAddress {
        NewAddress {
            customer_id,
            street_address: "12 MG Road".into(),
            city: city.into(),
            state: "Maharashtra".into(),
            pin_code: pin_code.into(),
        }
    }

    #[tokio::test]
    async fn summaries_aggregate_addresses() {
        let store = MemoryStore::new();
        let id = store.insert_customer(&customer("Ann")).await.unwrap();
        store
            .insert_address(&address(id, "Pune", "411001"))
            .await
            .unwrap();
        store
            .insert_address(&address(id, "Delhi", "110001"))
            .await
            .unwrap();

        let summaries = store.list_customer_summaries().await.unwrap();
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].address_count, 2);
        assert_eq!(summaries[0].cities.as_deref(), Some("Pune,Delhi"));
        assert_eq!(summaries[0].pin_codes.as_deref(), Some("411001,110001"));
    }

    #[tokio::test]
    async fn summaries_include_customers_without_addresses() {
        let store = MemoryStore::new();
        store.insert_customer(&customer("Ann")).await.unwrap();

        let summaries = store.list_customer_summaries().await.unwrap();
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].address_count, 0);
        assert_eq!(summaries[0].cities, None);
    }

    #[tokio::test]
    async fn update_missing_customer_is_not_found() {
        let store = MemoryStore::new();

        let err = store
            .update_customer(CustomerId::new(99), &customer("Ann"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            StoreError::NotFound {
                entity: "customer",
                id: 99
            }
        ));
    }

    #[tokio::test]
    async fn delete_customer_keeps_addresses() {
        let store = MemoryStore::new();
        let id = store.insert_customer(&customer("Ann")).await.unwrap();
        let address_id = store
            .insert_address(&address(id, "Pune", "411001"))
            .await
            .unwrap();

        store.delete_customer(id).await.unwrap();

        let orphan = store.get_address(address_id).await.unwrap();
        assert!(orphan.is_some());
    }

    #[tokio::test]
    async fn insert_address_requires_existing_customer() {
        let store = MemoryStore::new();

        let err = store
            .insert_address(&address(CustomerId::new(7), "Pune", "411001"))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Database(_)));
    }

    #[tokio::test]
    async fn repeated_delete_is_not_found() {
        let store = MemoryStore::new();
        let id = store.insert_customer(&customer("Ann")).await.unwrap();

        store.delete_customer(id).await.unwrap();
        let err = store.delete_customer(id).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }
}
