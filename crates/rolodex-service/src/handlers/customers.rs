//! Customer CRUD handlers.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use rolodex_core::{search, CustomerDetail, CustomerId, CustomerInput, CustomerSummary, NewCustomer};

use crate::error::ApiError;
use crate::handlers::MessageResponse;
use crate::state::AppState;

/// Query parameters for the customer list.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    /// Case-insensitive substring to filter the aggregated rows by.
    #[serde(default)]
    pub search: String,
}

/// Create a new customer.
pub async fn create_customer(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CustomerInput>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let customer = body.validate()?;
    let id = state.store.insert_customer(&customer).await?;

    tracing::info!(customer_id = %id, "Customer created");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Customer created successfully")),
    ))
}

/// List every customer with address aggregates, filtered by the optional
/// search query. The filter runs in memory, after the aggregation query
/// returns.
pub async fn list_customers(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<CustomerSummary>>, ApiError> {
    let summaries = state.store.list_customer_summaries().await?;
    Ok(Json(search::filter(summaries, &query.search)))
}

/// Get a customer with its full address list embedded.
pub async fn get_customer(
    State(state): State<Arc<AppState>>,
    Path(id): Path<CustomerId>,
) -> Result<Json<CustomerDetail>, ApiError> {
    let customer = state
        .store
        .get_customer(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("customer not found: {id}")))?;

    let addresses = state.store.list_addresses_for_customer(id).await?;

    Ok(Json(CustomerDetail {
        customer,
        addresses,
    }))
}

/// Replace a customer's fields wholesale. Not-found is detected by the
/// affected-row count after the write, never a pre-read.
pub async fn update_customer(
    State(state): State<Arc<AppState>>,
    Path(id): Path<CustomerId>,
    Json(body): Json<NewCustomer>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.store.update_customer(id, &body).await?;

    tracing::info!(customer_id = %id, "Customer updated");

    Ok(Json(MessageResponse::new("Customer updated successfully")))
}

/// Delete a customer. Addresses are left to the schema's foreign-key action.
pub async fn delete_customer(
    State(state): State<Arc<AppState>>,
    Path(id): Path<CustomerId>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.store.delete_customer(id).await?;

    tracing::info!(customer_id = %id, "Customer deleted");

    Ok(Json(MessageResponse::new("Customer deleted successfully")))
}
