//! Common test utilities for rolodex integration tests.

#![allow(dead_code)] // Some utilities are used by different test files

use std::sync::Arc;

use axum::http::StatusCode;
use axum::Router;
use axum_test::TestServer;
use serde_json::json;

use rolodex_service::{create_router, AppState, ServiceConfig};
use rolodex_store::MemoryStore;

/// Test harness containing everything needed for integration tests.
///
/// Runs the full router over a fresh [`MemoryStore`], which assigns
/// sequential ids starting at 1.
pub struct TestHarness {
    /// The test server for making HTTP requests.
    pub server: TestServer,
}

impl TestHarness {
    /// Create a new test harness with a fresh store.
    pub fn new() -> Self {
        let store = Arc::new(MemoryStore::new());
        let state = AppState::new(store, ServiceConfig::default());
        let router: Router = create_router(state);

        let server = TestServer::new(router).expect("Failed to create test server");

        Self { server }
    }

    /// Create a customer and return its id.
    ///
    /// Creates do not echo the generated id, so it is recovered from the
    /// list endpoint by phone number.
    pub async fn create_customer(
        &self,
        first_name: &str,
        last_name: &str,
        phone_number: &str,
    ) -> i64 {
        self.server
            .post("/customers")
            .json(&json!({
                "first_name": first_name,
                "last_name": last_name,
                "phone_number": phone_number,
            }))
            .await
            .assert_status(StatusCode::CREATED);

        let rows: Vec<serde_json::Value> = self.server.get("/customers").await.json();
        rows.iter()
            .filter(|row| row["phone_number"] == phone_number)
            .last()
            .and_then(|row| row["customer_id"].as_i64())
            .expect("created customer missing from list")
    }

    /// Create an address and return its id, recovered from the owning
    /// customer's embedded address list.
    pub async fn create_address(
        &self,
        customer_id: i64,
        street_address: &str,
        city: &str,
        state: &str,
        pin_code: &str,
    ) -> i64 {
        self.server
            .post("/addresses")
            .json(&json!({
                "customer_id": customer_id,
                "street_address": street_address,
                "city": city,
                "state": state,
                "pin_code": pin_code,
            }))
            .await
            .assert_status(StatusCode::CREATED);

        let detail: serde_json::Value = self
            .server
            .get(&format!("/customers/{customer_id}"))
            .await
            .json();
        detail["addresses"]
            .as_array()
            .and_then(|addresses| addresses.last())
            .and_then(|address| address["address_id"].as_i64())
            .expect("created address missing from customer detail")
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}
