//! Rolodex HTTP client implementation.

use reqwest::Client;
use std::time::Duration;

use rolodex_core::{
    Address, AddressId, AddressInput, AddressUpdate, CustomerDetail, CustomerId, CustomerInput,
    CustomerSummary, NewCustomer,
};

use crate::error::ClientError;
use crate::types::{Acknowledgment, ApiErrorResponse};

/// Options for constructing a [`RolodexClient`].
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Request timeout in seconds.
    pub timeout_seconds: u64,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            timeout_seconds: 30,
        }
    }
}

/// Rolodex API client.
///
/// Provides typed methods for the customer and address surfaces.
#[derive(Debug, Clone)]
pub struct RolodexClient {
    client: Client,
    base_url: String,
}

impl RolodexClient {
    /// Create a new rolodex client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Base URL of the rolodex service (e.g., `"http://localhost:8080"`)
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_options(base_url, ClientOptions::default())
    }

    /// Create a new rolodex client with custom options.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client cannot be built (should not happen with
    /// default settings).
    #[must_use]
    pub fn with_options(base_url: impl Into<String>, options: ClientOptions) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(options.timeout_seconds))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    // =========================================================================
    // Customers
    // =========================================================================

    /// Create a customer.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn create_customer(
        &self,
        customer: CustomerInput,
    ) -> Result<Acknowledgment, ClientError> {
        let url = format!("{}/customers", self.base_url);
        let response = self.client.post(&url).json(&customer).send().await?;
        Self::handle_response(response).await
    }

    /// List every customer with address aggregates, optionally filtered by a
    /// case-insensitive search query.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn list_customers(
        &self,
        search: Option<&str>,
    ) -> Result<Vec<CustomerSummary>, ClientError> {
        let url = format!("{}/customers", self.base_url);
        let mut request = self.client.get(&url);
        if let Some(search) = search {
            request = request.query(&[("search", search)]);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Get a customer with its full address list embedded.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn get_customer(&self, id: CustomerId) -> Result<CustomerDetail, ClientError> {
        let url = format!("{}/customers/{id}", self.base_url);
        let response = self.client.get(&url).send().await?;
        Self::handle_response(response).await
    }

    /// Replace a customer's fields wholesale.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn update_customer(
        &self,
        id: CustomerId,
        customer: &NewCustomer,
    ) -> Result<Acknowledgment, ClientError> {
        let url = format!("{}/customers/{id}", self.base_url);
        let response = self.client.put(&url).json(customer).send().await?;
        Self::handle_response(response).await
    }

    /// Delete a customer.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn delete_customer(&self, id: CustomerId) -> Result<Acknowledgment, ClientError> {
        let url = format!("{}/customers/{id}", self.base_url);
        let response = self.client.delete(&url).send().await?;
        Self::handle_response(response).await
    }

    // =========================================================================
    // Addresses
    // =========================================================================

    /// Create an address for an existing customer.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn create_address(
        &self,
        address: AddressInput,
    ) -> Result<Acknowledgment, ClientError> {
        let url = format!("{}/addresses", self.base_url);
        let response = self.client.post(&url).json(&address).send().await?;
        Self::handle_response(response).await
    }

    /// Get an address by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn get_address(&self, id: AddressId) -> Result<Address, ClientError> {
        let url = format!("{}/addresses/{id}", self.base_url);
        let response = self.client.get(&url).send().await?;
        Self::handle_response(response).await
    }

    /// Replace an address's mutable fields wholesale.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn update_address(
        &self,
        id: AddressId,
        address: &AddressUpdate,
    ) -> Result<Acknowledgment, ClientError> {
        let url = format!("{}/addresses/{id}", self.base_url);
        let response = self.client.put(&url).json(address).send().await?;
        Self::handle_response(response).await
    }

    /// Delete an address.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn delete_address(&self, id: AddressId) -> Result<Acknowledgment, ClientError> {
        let url = format!("{}/addresses/{id}", self.base_url);
        let response = self.client.delete(&url).send().await?;
        Self::handle_response(response).await
    }

    /// Handle API response and convert errors.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response.json().await?);
        }

        // Try to parse the error envelope
        let error_body: Result<ApiErrorResponse, _> = response.json().await;

        match error_body {
            Ok(api_error) => {
                let code = api_error.error.code;
                let message = api_error.error.message;

                // Map specific error codes to typed errors
                match code.as_str() {
                    "validation_error" => Err(ClientError::Validation { message }),
                    "not_found" => Err(ClientError::NotFound { message }),
                    _ => Err(ClientError::Api {
                        code,
                        message,
                        status: status.as_u16(),
                    }),
                }
            }
            Err(_) => Err(ClientError::Api {
                code: "unknown".to_string(),
                message: format!("HTTP {status}"),
                status: status.as_u16(),
            }),
        }
    }
}
